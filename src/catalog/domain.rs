pub mod service;

use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::core::library::{LibraryResult, PaginatedResult, Role};

pub trait CatalogService {
    fn add_book(&mut self, book: BookEntity) -> LibraryResult<BookDto>;
    fn find_book_by_isbn(&self, isbn: &str) -> LibraryResult<BookDto>;
    fn book_mut(&mut self, isbn: &str) -> LibraryResult<&mut BookEntity>;
    fn search_books(&self, keyword: &str, page: Option<&str>, page_size: usize) -> LibraryResult<PaginatedResult<BookDto>>;
    fn reservation_line(&self, isbn: &str) -> LibraryResult<Vec<(String, Role)>>;
}

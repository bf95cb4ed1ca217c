use std::collections::HashMap;
use tracing::info;
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::core::domain::Configuration;
use crate::core::events::DomainEvent;
use crate::core::library::{LibraryError, LibraryResult, PaginatedResult, Role};
use crate::gateway::events::EventPublisher;

pub(crate) struct CatalogServiceImpl {
    branch_id: String,
    book_repository: Box<dyn BookRepository>,
    events_publisher: Box<dyn EventPublisher>,
}

impl CatalogServiceImpl {
    pub(crate) fn new(config: &Configuration, book_repository: Box<dyn BookRepository>,
                      events_publisher: Box<dyn EventPublisher>) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            book_repository,
            events_publisher,
        }
    }
}

fn parse_offset(page: Option<&str>) -> LibraryResult<usize> {
    match page {
        None => Ok(0),
        Some(token) => token.parse::<usize>().map_err(|_| LibraryError::validation(
            format!("invalid page token {}", token).as_str(), Some("400".to_string()))),
    }
}

impl CatalogService for CatalogServiceImpl {
    fn add_book(&mut self, book: BookEntity) -> LibraryResult<BookDto> {
        let dto = BookDto::from(&book);
        self.book_repository.create(book)?;
        self.events_publisher.publish_applied(DomainEvent::added(
            "books", "books", dto.isbn.as_str(),
            &HashMap::from([("branch_id".to_string(), self.branch_id.to_string())]), &dto));
        info!(isbn = dto.isbn.as_str(), title = dto.title.as_str(), "book added");
        Ok(dto)
    }

    fn find_book_by_isbn(&self, isbn: &str) -> LibraryResult<BookDto> {
        self.book_repository.get(isbn).map(BookDto::from)
    }

    fn book_mut(&mut self, isbn: &str) -> LibraryResult<&mut BookEntity> {
        self.book_repository.get_mut(isbn)
    }

    fn search_books(&self, keyword: &str, page: Option<&str>, page_size: usize) -> LibraryResult<PaginatedResult<BookDto>> {
        if page_size == 0 {
            return Err(LibraryError::validation("page size must be positive", Some("400".to_string())));
        }
        let offset = parse_offset(page)?;
        let matched = self.book_repository.find_by_keyword(keyword);
        let records: Vec<BookDto> = matched.iter().skip(offset).take(page_size).map(|b| BookDto::from(*b)).collect();
        let next_page = if offset + records.len() < matched.len() {
            Some((offset + records.len()).to_string())
        } else {
            None
        };
        Ok(PaginatedResult::new(page, page_size, next_page, records))
    }

    fn reservation_line(&self, isbn: &str) -> LibraryResult<Vec<(String, Role)>> {
        let book = self.book_repository.get(isbn)?;
        Ok(book.reservations().ordered_view().map(|(name, role)| (name.to_string(), role)).collect())
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::model::BookEntity;
    use crate::catalog::domain::CatalogService;
    use crate::catalog::factory;
    use crate::core::domain::Configuration;
    use crate::core::library::{LibraryError, Role};
    use crate::gateway::GatewayPublisherVia;
    use crate::patrons::dto::PatronDto;

    fn sut() -> Box<dyn CatalogService> {
        let mut svc = factory::create_catalog_service(
            &Configuration::new("test").with_publisher(GatewayPublisherVia::Memory));
        svc.add_book(BookEntity::new("001", "The Great Gatsby", "F. Scott Fitzgerald", "Fiction")).expect("should add book");
        svc.add_book(BookEntity::new("002", "1984", "George Orwell", "Dystopian")).expect("should add book");
        svc.add_book(BookEntity::new("003", "The Art of Computer Programming", "Donald Knuth", "Computer Science")).expect("should add book");
        svc
    }

    #[test]
    fn test_should_add_and_find_book() {
        let svc = sut();
        let book = svc.find_book_by_isbn("003").expect("should find book");
        assert_eq!("Donald Knuth", book.author.as_str());
        assert!(svc.find_book_by_isbn("999").expect_err("should not find").is_not_found());
    }

    #[test]
    fn test_should_reject_duplicate_isbn() {
        let mut svc = sut();
        let res = svc.add_book(BookEntity::new("001", "Other", "Other", "Other"));
        assert!(matches!(res, Err(LibraryError::DuplicateKey { .. })));
        assert_eq!("The Great Gatsby", svc.find_book_by_isbn("001").expect("should find book").title.as_str());
    }

    #[test]
    fn test_should_search_books() {
        let svc = sut();
        let res = svc.search_books("Fiction", None, 10).expect("should search");
        assert_eq!(1, res.records.len());
        assert_eq!("001", res.records[0].isbn.as_str());
        assert!(res.next_page.is_none());
        let res = svc.search_books("harry potter", None, 10).expect("should search");
        assert!(res.records.is_empty());
    }

    #[test]
    fn test_should_paginate_search() {
        let svc = sut();
        let first = svc.search_books("the", None, 1).expect("should search");
        assert_eq!(vec!["001"], first.records.iter().map(|b| b.isbn.as_str()).collect::<Vec<_>>());
        let token = first.next_page.expect("should have next page");
        let second = svc.search_books("the", Some(token.as_str()), 1).expect("should search");
        assert_eq!(vec!["003"], second.records.iter().map(|b| b.isbn.as_str()).collect::<Vec<_>>());
        assert!(second.next_page.is_none());
        assert!(matches!(svc.search_books("the", Some("abc"), 1), Err(LibraryError::Validation { .. })));
        assert!(matches!(svc.search_books("the", None, 0), Err(LibraryError::Validation { .. })));
    }

    #[test]
    fn test_should_show_reservation_line() {
        let mut svc = sut();
        assert!(svc.reservation_line("001").expect("should show line").is_empty());
        let book = svc.book_mut("001").expect("should find book");
        book.checkout(&PatronDto::new("U1", "Alice", Role::Undergraduate), false);
        book.checkout(&PatronDto::new("U3", "Charlie", Role::Graduate), false);
        book.checkout(&PatronDto::new("U2", "Bob", Role::Professor), false);
        let line = svc.reservation_line("001").expect("should show line");
        assert_eq!(vec![("Bob".to_string(), Role::Professor), ("Charlie".to_string(), Role::Graduate)], line);
        assert!(svc.reservation_line("999").is_err());
    }
}

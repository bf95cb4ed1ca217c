pub mod history;
pub mod model;
pub mod service;

use crate::checkout::dto::CheckoutDto;
use crate::core::library::LibraryResult;
use crate::patrons::domain::history::BorrowHistory;
use crate::patrons::domain::model::PatronEntity;
use crate::patrons::dto::PatronDto;

pub trait PatronService {
    fn add_patron(&mut self, patron: PatronEntity) -> LibraryResult<PatronDto>;
    fn find_patron_by_id(&self, id: &str) -> LibraryResult<PatronDto>;
    fn find_patrons_by_name(&self, name: &str) -> Vec<PatronDto>;
    fn history(&self, id: &str) -> LibraryResult<&BorrowHistory>;
    fn record_checkout(&mut self, id: &str, record: CheckoutDto) -> LibraryResult<()>;
    fn record_return(&mut self, id: &str, book_id: &str) -> LibraryResult<bool>;
}

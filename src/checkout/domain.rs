use crate::books::domain::{CheckoutOutcome, ReturnOutcome};
use crate::catalog::domain::CatalogService;
use crate::core::library::LibraryResult;
use crate::patrons::domain::PatronService;

pub mod service;

// CheckoutService is the single entry point for moving books between patrons. It owns the
// catalog and patron registries for the lifetime of the library.
pub trait CheckoutService {
    fn checkout(&mut self, patron_id: &str, isbn: &str) -> LibraryResult<CheckoutOutcome>;
    fn return_book(&mut self, isbn: &str) -> LibraryResult<ReturnOutcome>;
    fn catalog(&self) -> &dyn CatalogService;
    fn catalog_mut(&mut self) -> &mut dyn CatalogService;
    fn patrons(&self) -> &dyn PatronService;
    fn patrons_mut(&mut self) -> &mut dyn PatronService;
}

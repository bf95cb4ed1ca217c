use std::collections::HashMap;
use tracing::{info, warn};
use crate::books::domain::{CheckoutOutcome, ReturnOutcome};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::checkout::domain::CheckoutService;
use crate::checkout::dto::CheckoutDto;
use crate::core::domain::Configuration;
use crate::core::events::DomainEvent;
use crate::core::library::{LibraryError, LibraryResult};
use crate::gateway::events::EventPublisher;
use crate::patrons::domain::PatronService;

pub(crate) struct CheckoutServiceImpl {
    config: Configuration,
    patron_service: Box<dyn PatronService>,
    catalog_service: Box<dyn CatalogService>,
    events_publisher: Box<dyn EventPublisher>,
}

impl CheckoutServiceImpl {
    pub(crate) fn new(config: &Configuration, patron_service: Box<dyn PatronService>,
                      catalog_service: Box<dyn CatalogService>,
                      events_publisher: Box<dyn EventPublisher>) -> Self {
        Self {
            config: config.clone(),
            patron_service,
            catalog_service,
            events_publisher,
        }
    }

    fn metadata(&self) -> HashMap<String, String> {
        HashMap::from([("branch_id".to_string(), self.config.branch_id.to_string())])
    }
}

fn log_not_found(err: LibraryError) -> LibraryError {
    if err.is_not_found() {
        warn!(error = %err, "lookup failed");
    }
    err
}

impl CheckoutService for CheckoutServiceImpl {
    fn checkout(&mut self, patron_id: &str, isbn: &str) -> LibraryResult<CheckoutOutcome> {
        let patron = self.patron_service.find_patron_by_id(patron_id).map_err(log_not_found)?;
        let book = self.catalog_service.book_mut(isbn).map_err(log_not_found)?;
        match book.checkout(&patron, false) {
            CheckoutOutcome::Success => {
                let record = CheckoutDto::from_patron_book(&self.config, &patron, &*book);
                self.patron_service.record_checkout(patron_id, record.clone())?;
                info!(isbn, patron_id, due_at = %record.due_at, "book checked out");
                self.events_publisher.publish_applied(DomainEvent::added(
                    "book_checkout", "checkout", record.checkout_id.as_str(), &self.metadata(), &record));
                Ok(CheckoutOutcome::Success)
            }
            CheckoutOutcome::Queued => {
                let snapshot = BookDto::from(&*book);
                self.events_publisher.publish_applied(DomainEvent::updated(
                    "book_reserved", "reservation", isbn,
                    &HashMap::from([("patron_id".to_string(), patron_id.to_string())]), &snapshot));
                Ok(CheckoutOutcome::Queued)
            }
        }
    }

    fn return_book(&mut self, isbn: &str) -> LibraryResult<ReturnOutcome> {
        let book = self.catalog_service.book_mut(isbn).map_err(log_not_found)?;
        let previous = book.borrower_id().map(str::to_string);
        let outcome = book.return_item();
        let reassigned = match &outcome {
            ReturnOutcome::ReassignedTo(next) => Some(CheckoutDto::from_patron_book(&self.config, next, &*book)),
            _ => None,
        };
        let snapshot = BookDto::from(&*book);

        if outcome == ReturnOutcome::AlreadyAvailable {
            info!(isbn, "book is already available");
            return Ok(outcome);
        }
        if let Some(previous) = previous {
            self.patron_service.record_return(previous.as_str(), isbn)?;
        }
        match reassigned {
            Some(record) => {
                info!(isbn, patron_id = record.patron_id.as_str(), "book returned and reassigned to next reservation");
                self.patron_service.record_checkout(record.patron_id.as_str(), record.clone())?;
                self.events_publisher.publish_applied(DomainEvent::added(
                    "book_reassigned", "checkout", record.checkout_id.as_str(), &self.metadata(), &record));
            }
            None => {
                info!(isbn, "book returned and now available");
                self.events_publisher.publish_applied(DomainEvent::deleted(
                    "book_returned", "checkout", isbn, &self.metadata(), &snapshot));
            }
        }
        Ok(outcome)
    }

    fn catalog(&self) -> &dyn CatalogService {
        self.catalog_service.as_ref()
    }

    fn catalog_mut(&mut self) -> &mut dyn CatalogService {
        self.catalog_service.as_mut()
    }

    fn patrons(&self) -> &dyn PatronService {
        self.patron_service.as_ref()
    }

    fn patrons_mut(&mut self) -> &mut dyn PatronService {
        self.patron_service.as_mut()
    }
}

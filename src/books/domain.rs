use serde::Serialize;
use crate::core::domain::Identifiable;
use crate::core::library::BookStatus;
use crate::patrons::dto::PatronDto;

pub mod model;

pub trait Book: Identifiable {
    fn title(&self) -> &str;
    fn author(&self) -> &str;
    fn category(&self) -> &str;
    fn status(&self) -> BookStatus;
    fn is_available(&self) -> bool {
        self.status() == BookStatus::Available
    }
}

// CheckoutOutcome tells a requester whether they got the book or joined its queue.
#[derive(Debug, PartialEq, Clone, Copy, Serialize)]
pub enum CheckoutOutcome {
    Success,
    Queued,
}

// ReturnOutcome tells what happened to a book handed back to the library.
#[derive(Debug, PartialEq, Clone, Serialize)]
pub enum ReturnOutcome {
    NowAvailable,
    ReassignedTo(PatronDto),
    AlreadyAvailable,
}

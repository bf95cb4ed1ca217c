use chrono::{NaiveDateTime, Utc};
use tracing::{debug, info};
use crate::books::domain::{Book, CheckoutOutcome, ReturnOutcome};
use crate::core::domain::Identifiable;
use crate::core::library::BookStatus;
use crate::patrons::dto::PatronDto;
use crate::patrons::Patron;
use crate::reservations::queue::ReservationQueue;

// BookEntity abstracts a physical book in the library along with the patrons waiting for it.
// It is available exactly when no patron holds it.
#[derive(Debug, Clone)]
pub struct BookEntity {
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub category: String,
    book_status: BookStatus,
    borrower_id: Option<String>,
    reservations: ReservationQueue,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl BookEntity {
    pub fn new(isbn: &str, title: &str, author: &str, category: &str) -> Self {
        Self {
            isbn: isbn.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            category: category.to_string(),
            book_status: BookStatus::Available,
            borrower_id: None,
            reservations: ReservationQueue::new(),
            created_at: Utc::now().naive_utc(),
            updated_at: Utc::now().naive_utc(),
        }
    }

    pub fn borrower_id(&self) -> Option<&str> {
        self.borrower_id.as_deref()
    }

    pub fn reservations(&self) -> &ReservationQueue {
        &self.reservations
    }

    /// Hands the book to the patron when it is free, otherwise queues them for it.
    ///
    /// `is_auto` marks a checkout made by the library itself while reassigning a returned
    /// book. That path runs on a freshly released book and always yields `Success`. Called
    /// with `is_auto` on a held book, the patron is still queued and `Queued` is returned,
    /// but only a `debug!` record is written.
    pub fn checkout(&mut self, patron: &dyn Patron, is_auto: bool) -> CheckoutOutcome {
        match self.book_status {
            BookStatus::Available => {
                self.assign(patron.id());
                CheckoutOutcome::Success
            }
            BookStatus::CheckedOut => {
                self.reservations.insert(patron);
                if is_auto {
                    debug!(isbn = self.isbn.as_str(), patron_id = patron.id().as_str(), "auto checkout queued");
                } else {
                    info!(isbn = self.isbn.as_str(), patron_id = patron.id().as_str(),
                        waiting = self.reservations.len(), "book is checked out, patron added to reservation queue");
                }
                CheckoutOutcome::Queued
            }
        }
    }

    /// Frees the book and, within the same call, gives it to the highest priority waiter.
    pub fn return_item(&mut self) -> ReturnOutcome {
        if self.book_status == BookStatus::Available {
            return ReturnOutcome::AlreadyAvailable;
        }
        self.release();
        match self.reservations.extract_min() {
            Some(next) => {
                let outcome = self.checkout(&next, true);
                debug_assert_eq!(CheckoutOutcome::Success, outcome, "freed book must go to the next patron");
                ReturnOutcome::ReassignedTo(next)
            }
            None => ReturnOutcome::NowAvailable,
        }
    }

    pub fn next_in_queue(&self) -> Option<&PatronDto> {
        self.reservations.peek()
    }

    fn assign(&mut self, patron_id: String) {
        self.book_status = BookStatus::CheckedOut;
        self.borrower_id = Some(patron_id);
        self.updated_at = Utc::now().naive_utc();
    }

    fn release(&mut self) {
        self.book_status = BookStatus::Available;
        self.borrower_id = None;
        self.updated_at = Utc::now().naive_utc();
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> String {
        self.isbn.to_string()
    }
}

impl Book for BookEntity {
    fn title(&self) -> &str {
        self.title.as_str()
    }

    fn author(&self) -> &str {
        self.author.as_str()
    }

    fn category(&self) -> &str {
        self.category.as_str()
    }

    fn status(&self) -> BookStatus {
        self.book_status
    }
}

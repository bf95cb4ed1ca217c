use chrono::{Duration, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::books::domain::Book;
use crate::core::domain::{Configuration, Identifiable};
use crate::core::library::CheckoutStatus;
use crate::patrons::Patron;
use crate::utils::date::serializer;


// CheckoutDto records one borrowing of a book by a patron.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct CheckoutDto {
    pub checkout_id: String,
    pub branch_id: String,
    pub book_id: String,
    pub title: String,
    pub author: String,
    pub patron_id: String,
    pub checkout_status: CheckoutStatus,
    #[serde(with = "serializer")]
    pub checkout_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub due_at: NaiveDateTime,
    pub returned_at: Option<NaiveDateTime>,
}

impl CheckoutDto {
    pub fn from_patron_book(config: &Configuration, patron: &dyn Patron, book: &dyn Book) -> Self {
        let now = Utc::now().naive_utc();
        CheckoutDto {
            checkout_id: Uuid::new_v4().to_string(),
            branch_id: config.branch_id.to_string(),
            book_id: book.id(),
            title: book.title().to_string(),
            author: book.author().to_string(),
            patron_id: patron.id(),
            checkout_status: CheckoutStatus::CheckedOut,
            checkout_at: now,
            due_at: now + Duration::days(config.book_loan_days),
            returned_at: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.checkout_status == CheckoutStatus::CheckedOut
    }

    pub(crate) fn mark_returned(&mut self) {
        self.checkout_status = CheckoutStatus::Returned;
        self.returned_at = Some(Utc::now().naive_utc());
    }
}

impl Identifiable for CheckoutDto {
    fn id(&self) -> String {
        self.checkout_id.to_string()
    }
}

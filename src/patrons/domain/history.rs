use serde::Serialize;
use crate::checkout::dto::CheckoutDto;

// BorrowHistory is the append-only log of every book a patron has checked out.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BorrowHistory {
    records: Vec<CheckoutDto>,
}

impl BorrowHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, record: CheckoutDto) {
        self.records.push(record);
    }

    // closes the most recent open record for the book, false if there was none
    pub(crate) fn mark_returned(&mut self, book_id: &str) -> bool {
        match self.records.iter_mut().rev().find(|r| r.book_id == book_id && r.is_open()) {
            Some(record) => {
                record.mark_returned();
                true
            }
            None => false,
        }
    }

    pub fn records(&self) -> &[CheckoutDto] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::model::BookEntity;
    use crate::checkout::dto::CheckoutDto;
    use crate::core::domain::Configuration;
    use crate::core::library::{CheckoutStatus, Role};
    use crate::patrons::domain::history::BorrowHistory;
    use crate::patrons::dto::PatronDto;

    fn record(isbn: &str) -> CheckoutDto {
        let book = BookEntity::new(isbn, "title", "author", "category");
        CheckoutDto::from_patron_book(&Configuration::new("test"), &PatronDto::new("U1", "Alice", Role::Undergraduate), &book)
    }

    #[test]
    fn test_should_append_in_order() {
        let mut history = BorrowHistory::new();
        assert!(history.is_empty());
        history.add(record("001"));
        history.add(record("002"));
        let isbns: Vec<&str> = history.records().iter().map(|r| r.book_id.as_str()).collect();
        assert_eq!(vec!["001", "002"], isbns);
    }

    #[test]
    fn test_should_mark_latest_open_record_returned() {
        let mut history = BorrowHistory::new();
        history.add(record("001"));
        history.add(record("002"));
        assert!(history.mark_returned("001"));
        assert!(!history.mark_returned("001"));
        assert!(!history.mark_returned("999"));
        assert_eq!(CheckoutStatus::Returned, history.records()[0].checkout_status);
        assert_eq!(CheckoutStatus::CheckedOut, history.records()[1].checkout_status);
        assert_eq!(2, history.len());
    }
}

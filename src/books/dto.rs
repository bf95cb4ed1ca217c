use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::core::domain::Identifiable;
use crate::core::library::BookStatus;
use crate::utils::date::serializer;

// BookDto is a data transfer object for Catalog service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDto {
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub category: String,
    pub book_status: BookStatus,
    pub borrower_id: Option<String>,
    pub waiting: usize,
    #[serde(with = "serializer")]
    pub updated_at: NaiveDateTime,
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            isbn: other.isbn.to_string(),
            title: other.title.to_string(),
            author: other.author.to_string(),
            category: other.category.to_string(),
            book_status: other.status(),
            borrower_id: other.borrower_id().map(str::to_string),
            waiting: other.reservations().len(),
            updated_at: other.updated_at,
        }
    }
}

impl Identifiable for BookDto {
    fn id(&self) -> String {
        self.isbn.to_string()
    }
}

impl Book for BookDto {
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

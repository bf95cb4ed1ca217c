use chrono::{NaiveDateTime, Utc};
use serde::Serialize;
use crate::core::domain::Identifiable;
use crate::core::library::Role;
use crate::patrons::domain::history::BorrowHistory;
use crate::patrons::Patron;
use crate::utils::date::serializer;

// PatronEntity abstracts a registered library member together with the books they borrowed.
#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct PatronEntity {
    pub patron_id: String,
    pub name: String,
    pub role: Role,
    pub history: BorrowHistory,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
}

impl PatronEntity {
    pub fn new(patron_id: &str, name: &str, role: Role) -> Self {
        Self {
            patron_id: patron_id.to_string(),
            name: name.to_string(),
            role,
            history: BorrowHistory::new(),
            created_at: Utc::now().naive_utc(),
        }
    }
}

impl Identifiable for PatronEntity {
    fn id(&self) -> String {
        self.patron_id.to_string()
    }
}

impl Patron for PatronEntity {
    fn name(&self) -> &str {
        self.name.as_str()
    }

    fn role(&self) -> Role {
        self.role
    }
}

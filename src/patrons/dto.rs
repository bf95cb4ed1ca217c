use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::core::library::Role;
use crate::patrons::Patron;


// PatronDto is the snapshot of a library member handed to other bounded contexts.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct PatronDto {
    pub patron_id: String,
    pub name: String,
    pub role: Role,
}

impl PatronDto {
    pub fn new(patron_id: &str, name: &str, role: Role) -> Self {
        Self {
            patron_id: patron_id.to_string(),
            name: name.to_string(),
            role,
        }
    }

    pub fn from_patron(patron: &dyn Patron) -> Self {
        Self {
            patron_id: patron.id(),
            name: patron.name().to_string(),
            role: patron.role(),
        }
    }
}

impl Identifiable for PatronDto {
    fn id(&self) -> String {
        self.patron_id.to_string()
    }
}

impl Patron for PatronDto {
    fn name(&self) -> &str {
        self.name.as_str()
    }

    fn role(&self) -> Role {
        self.role
    }
}

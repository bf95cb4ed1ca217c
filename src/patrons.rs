use crate::core::domain::Identifiable;
use crate::core::library::Role;

pub mod command;
pub mod domain;
pub mod dto;
pub mod factory;
pub mod repository;

pub trait Patron: Identifiable {
    fn name(&self) -> &str;
    fn role(&self) -> Role;
    fn is_role(&self, match_role: Role) -> bool {
        self.role() == match_role
    }
    fn priority_tier(&self) -> u8 {
        self.role().tier()
    }
}

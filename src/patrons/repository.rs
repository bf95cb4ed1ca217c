pub mod memory_patron_repository;

use crate::core::repository::Repository;
use crate::patrons::domain::model::PatronEntity;

pub trait PatronRepository: Repository<PatronEntity> {
    fn find_by_name(&self, name: &str) -> Vec<&PatronEntity>;
}

use crate::core::library::LibraryResult;
use crate::core::repository::Repository;
use crate::patrons::domain::model::PatronEntity;
use crate::patrons::repository::PatronRepository;
use crate::utils::memory::MemoryStore;

#[derive(Debug)]
pub struct MemoryPatronRepository {
    store: MemoryStore<PatronEntity>,
}

impl MemoryPatronRepository {
    pub(crate) fn new() -> Self {
        Self {
            store: MemoryStore::new("patron"),
        }
    }
}

impl Repository<PatronEntity> for MemoryPatronRepository {
    fn create(&mut self, entity: PatronEntity) -> LibraryResult<usize> {
        self.store.create(entity)
    }

    fn get(&self, id: &str) -> LibraryResult<&PatronEntity> {
        self.store.get(id)
    }

    fn get_mut(&mut self, id: &str) -> LibraryResult<&mut PatronEntity> {
        self.store.get_mut(id)
    }

    fn len(&self) -> usize {
        self.store.len()
    }
}

impl PatronRepository for MemoryPatronRepository {
    fn find_by_name(&self, name: &str) -> Vec<&PatronEntity> {
        let name = name.to_lowercase();
        self.store.values().filter(|p| p.name.to_lowercase() == name).collect()
    }
}

use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;
use crate::utils::memory::MemoryStore;

#[derive(Debug)]
pub struct MemoryBookRepository {
    store: MemoryStore<BookEntity>,
}

impl MemoryBookRepository {
    pub(crate) fn new() -> Self {
        Self {
            store: MemoryStore::new("book"),
        }
    }
}

impl Repository<BookEntity> for MemoryBookRepository {
    fn create(&mut self, entity: BookEntity) -> LibraryResult<usize> {
        self.store.create(entity)
    }

    fn get(&self, id: &str) -> LibraryResult<&BookEntity> {
        self.store.get(id)
    }

    fn get_mut(&mut self, id: &str) -> LibraryResult<&mut BookEntity> {
        self.store.get_mut(id)
    }

    fn len(&self) -> usize {
        self.store.len()
    }
}

impl BookRepository for MemoryBookRepository {
    fn find_by_keyword(&self, keyword: &str) -> Vec<&BookEntity> {
        let keyword = keyword.trim().to_lowercase();
        if keyword.is_empty() {
            return vec![];
        }
        self.store.values().filter(|b| {
            b.title.to_lowercase().contains(&keyword) ||
                b.author.to_lowercase().contains(&keyword) ||
                b.category.to_lowercase().contains(&keyword) ||
                b.isbn.to_lowercase() == keyword
        }).collect()
    }
}

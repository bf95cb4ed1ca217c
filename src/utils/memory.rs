use std::collections::BTreeMap;
use crate::core::domain::Identifiable;
use crate::core::library::{LibraryError, LibraryResult};

// MemoryStore keeps entities of one kind keyed by their id
#[derive(Debug, Clone)]
pub(crate) struct MemoryStore<Entity: Identifiable> {
    kind: String,
    entities: BTreeMap<String, Entity>,
}

impl<Entity: Identifiable> MemoryStore<Entity> {
    pub(crate) fn new(kind: &str) -> Self {
        Self {
            kind: kind.to_string(),
            entities: BTreeMap::new(),
        }
    }

    pub(crate) fn create(&mut self, entity: Entity) -> LibraryResult<usize> {
        let id = entity.id();
        if id.trim().is_empty() {
            return Err(LibraryError::validation(
                format!("{} id must not be blank", self.kind).as_str(), Some("400".to_string())));
        }
        if self.entities.contains_key(&id) {
            return Err(LibraryError::duplicate_key(
                format!("{} with id {} already exists", self.kind, id).as_str()));
        }
        self.entities.insert(id, entity);
        Ok(1)
    }

    pub(crate) fn get(&self, id: &str) -> LibraryResult<&Entity> {
        self.entities.get(id).ok_or_else(|| self.not_found(id))
    }

    pub(crate) fn get_mut(&mut self, id: &str) -> LibraryResult<&mut Entity> {
        let err = self.not_found(id);
        self.entities.get_mut(id).ok_or(err)
    }

    pub(crate) fn values(&self) -> impl Iterator<Item=&Entity> {
        self.entities.values()
    }

    pub(crate) fn len(&self) -> usize {
        self.entities.len()
    }

    fn not_found(&self, id: &str) -> LibraryError {
        LibraryError::not_found(format!("{} with id {} not found", self.kind, id).as_str())
    }
}

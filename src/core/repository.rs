use crate::core::domain::Identifiable;
use crate::core::library::LibraryResult;

pub trait Repository<Entity: Identifiable> {
    // create an entity
    fn create(&mut self, entity: Entity) -> LibraryResult<usize>;

    // get an entity
    fn get(&self, id: &str) -> LibraryResult<&Entity>;

    // get an entity for in-place state transitions
    fn get_mut(&mut self, id: &str) -> LibraryResult<&mut Entity>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

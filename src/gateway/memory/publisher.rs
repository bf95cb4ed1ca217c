use std::cell::RefCell;
use std::rc::Rc;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryResult;
use crate::gateway::events::EventPublisher;

// MemoryPublisher retains published events; clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct MemoryPublisher {
    events: Rc<RefCell<Vec<DomainEvent>>>,
}

impl MemoryPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<DomainEvent> {
        self.events.borrow().clone()
    }

    pub fn names(&self) -> Vec<String> {
        self.events.borrow().iter().map(|e| e.name.to_string()).collect()
    }
}

impl EventPublisher for MemoryPublisher {
    fn publish(&self, event: &DomainEvent) -> LibraryResult<()> {
        self.events.borrow_mut().push(event.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use crate::core::events::DomainEvent;
    use crate::gateway::events::EventPublisher;
    use crate::gateway::memory::publisher::MemoryPublisher;

    #[test]
    fn test_should_publish_to_memory() {
        let publisher = MemoryPublisher::new();
        let handle = publisher.clone();
        let event = DomainEvent::added("book_checkout", "checkout", "001", &HashMap::new(), &"U1").expect("build event");
        publisher.publish(&event).expect("should publish");
        assert_eq!(vec![event], handle.events());
        assert_eq!(vec!["book_checkout".to_string()], handle.names());
    }
}

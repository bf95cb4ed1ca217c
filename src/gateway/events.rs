use tracing::warn;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryResult;

pub trait EventPublisher {
    fn publish(&self, event: &DomainEvent) -> LibraryResult<()>;

    /// Publishes an event describing a change that is already applied. Failures to build or
    /// deliver the event are logged and never reach the caller.
    fn publish_applied(&self, event: serde_json::Result<DomainEvent>) {
        match event {
            Ok(event) => {
                if let Err(err) = self.publish(&event) {
                    warn!(event_id = event.event_id.as_str(), name = event.name.as_str(), error = %err, "event not published");
                }
            }
            Err(err) => warn!(error = %err, "event not built"),
        }
    }
}

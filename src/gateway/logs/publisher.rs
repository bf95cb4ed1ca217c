use tracing::info;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryResult;
use crate::gateway::events::EventPublisher;

// LogPublisher writes domain events into the structured log stream
#[derive(Debug)]
pub struct LogPublisher {
    channel: String,
}

impl LogPublisher {
    pub(crate) fn new(channel: &str) -> Self {
        Self {
            channel: channel.to_string(),
        }
    }
}

impl EventPublisher for LogPublisher {
    fn publish(&self, event: &DomainEvent) -> LibraryResult<()> {
        let payload = serde_json::to_string(event)?;
        info!(channel = self.channel.as_str(), event_id = event.event_id.as_str(),
            name = event.name.as_str(), key = event.key.as_str(), payload = payload.as_str(), "domain event");
        Ok(())
    }
}

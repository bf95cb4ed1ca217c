use serde::{Deserialize, Serialize};

pub mod events;
pub mod logs;
pub mod memory;
pub mod factory;

#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum GatewayPublisherVia {
    Logs,
    Memory,
}

#[cfg(test)]
mod tests {
    use crate::gateway::GatewayPublisherVia;

    #[test]
    fn test_should_serialize_via() {
        let json = serde_json::to_string(&GatewayPublisherVia::Memory).expect("should serialize");
        assert_eq!("\"Memory\"", json.as_str());
        let via: GatewayPublisherVia = serde_json::from_str("\"Logs\"").expect("should parse");
        assert_eq!(GatewayPublisherVia::Logs, via);
    }
}

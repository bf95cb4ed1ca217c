use serde::{Deserialize, Serialize};
use crate::gateway::GatewayPublisherVia;

// Identifiable defines common traits that can be shared by catalog objects
pub trait Identifiable {
    fn id(&self) -> String;
}


// Configuration abstracts config options for library system
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub branch_id: String,
    pub book_loan_days: i64,
    pub publisher: GatewayPublisherVia,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            book_loan_days: 15,
            publisher: GatewayPublisherVia::Logs,
        }
    }

    pub fn with_publisher(mut self, publisher: GatewayPublisherVia) -> Self {
        self.publisher = publisher;
        self
    }
}

use std::cmp::Ordering;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use crate::core::library::Role;
use crate::utils::date::serializer;

/// Composite ordering key of a reservation: role tier first, then arrival time, then the
/// insertion sequence of the owning queue so that entries with equal tier and arrival are
/// served first-in, first-out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PriorityKey {
    pub tier: u8,
    #[serde(with = "serializer")]
    pub arrival: NaiveDateTime,
    pub sequence: u64,
}

impl PriorityKey {
    pub fn new(role: Role, arrival: NaiveDateTime, sequence: u64) -> Self {
        Self {
            tier: role.tier(),
            arrival,
            sequence,
        }
    }
}

impl Ord for PriorityKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.tier.cmp(&other.tier)
            .then_with(|| self.arrival.cmp(&other.arrival))
            .then_with(|| self.sequence.cmp(&other.sequence))
    }
}

impl PartialOrd for PriorityKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

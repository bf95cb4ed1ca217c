use std::collections::btree_map::Values;
use std::collections::BTreeMap;
use chrono::{NaiveDateTime, Utc};
use serde::Serialize;
use tracing::debug;
use crate::core::library::Role;
use crate::patrons::dto::PatronDto;
use crate::patrons::Patron;
use crate::reservations::priority::PriorityKey;

// ReservationEntry pairs a waiting patron with the key it was queued under.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReservationEntry {
    pub key: PriorityKey,
    pub patron: PatronDto,
}

/// Patrons waiting for a single book, served by ascending [`PriorityKey`].
///
/// Backed by an ordered map, so insert and `extract_min` are logarithmic regardless of
/// arrival pattern. The same patron may be queued more than once; de-duplication is
/// left to callers.
#[derive(Debug, Clone, Default)]
pub struct ReservationQueue {
    entries: BTreeMap<PriorityKey, ReservationEntry>,
    next_sequence: u64,
    last_arrival: Option<NaiveDateTime>,
}

impl ReservationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues the patron as of now. Arrival never moves backwards within a queue even if
    /// the wall clock does.
    pub fn insert(&mut self, patron: &dyn Patron) -> PriorityKey {
        let now = Utc::now().naive_utc();
        let arrival = match self.last_arrival {
            Some(last) if last > now => last,
            _ => now,
        };
        self.insert_at(patron, arrival)
    }

    /// Queues the patron with an explicit arrival timestamp.
    pub fn insert_at(&mut self, patron: &dyn Patron, arrival: NaiveDateTime) -> PriorityKey {
        let key = PriorityKey::new(patron.role(), arrival, self.next_sequence);
        self.next_sequence += 1;
        self.last_arrival = Some(self.last_arrival.map_or(arrival, |last| last.max(arrival)));
        debug!(patron_id = patron.id().as_str(), tier = key.tier, sequence = key.sequence, "reservation queued");
        self.entries.insert(key, ReservationEntry {
            key,
            patron: PatronDto::from_patron(patron),
        });
        key
    }

    /// Removes and returns the highest priority patron, `None` when nobody is waiting.
    pub fn extract_min(&mut self) -> Option<PatronDto> {
        let (key, entry) = self.entries.pop_first()?;
        debug!(patron_id = entry.patron.patron_id.as_str(), tier = key.tier, sequence = key.sequence, "reservation extracted");
        Some(entry.patron)
    }

    pub fn peek(&self) -> Option<&PatronDto> {
        self.entries.values().next().map(|e| &e.patron)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Waiting patrons as (name, role) in the order they will be served.
    pub fn ordered_view(&self) -> ReservationView<'_> {
        ReservationView {
            inner: self.entries.values(),
        }
    }
}

// ReservationView is a read-only walk over a queue; clone it to restart from the same point.
#[derive(Debug, Clone)]
pub struct ReservationView<'a> {
    inner: Values<'a, PriorityKey, ReservationEntry>,
}

impl<'a> Iterator for ReservationView<'a> {
    type Item = (&'a str, Role);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|e| (e.patron.name.as_str(), e.patron.role))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for ReservationView<'_> {}

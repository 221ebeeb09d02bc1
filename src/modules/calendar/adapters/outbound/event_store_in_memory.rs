// In memory implementation of the EventStore port.
//
// Purpose
// - Hold the calendar for the lifetime of the process. Nothing is persisted.
//
// Responsibilities
// - Enforce name uniqueness with an atomic check-and-insert.
// - Answer scans in insertion order from behind a read lock, handing out clones only.

use crate::modules::calendar::core::event::Event;
use crate::modules::calendar::core::filter::EventFilter;
use crate::modules::calendar::core::ports::EventStore;
use std::collections::{BTreeMap, HashMap};
use tokio::sync::RwLock;

#[derive(Default)]
struct Entries {
    by_sequence: BTreeMap<u64, Event>,
    sequence_by_name: HashMap<String, u64>,
    next_sequence: u64,
}

#[derive(Default)]
pub struct InMemoryEventStore {
    entries: RwLock<Entries>,
}

impl InMemoryEventStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
impl InMemoryEventStore {
    pub async fn len(&self) -> usize {
        self.entries.read().await.by_sequence.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait::async_trait]
impl EventStore for InMemoryEventStore {
    async fn add(&self, event: Event) -> bool {
        let mut guard = self.entries.write().await;
        let entries = &mut *guard;
        if entries.sequence_by_name.contains_key(&event.name) {
            return false;
        }
        let sequence = entries.next_sequence;
        entries.next_sequence += 1;
        entries.sequence_by_name.insert(event.name.clone(), sequence);
        entries.by_sequence.insert(sequence, event);
        true
    }

    async fn remove(&self, name: &str) -> bool {
        let mut guard = self.entries.write().await;
        let entries = &mut *guard;
        match entries.sequence_by_name.remove(name) {
            Some(sequence) => {
                entries.by_sequence.remove(&sequence);
                true
            }
            None => false,
        }
    }

    async fn all(&self) -> BTreeMap<String, Event> {
        let guard = self.entries.read().await;
        guard
            .by_sequence
            .values()
            .map(|event| (event.name.clone(), event.clone()))
            .collect()
    }

    async fn filter(&self, filter: &EventFilter) -> Vec<Event> {
        let guard = self.entries.read().await;
        guard
            .by_sequence
            .values()
            .filter(|event| filter.matches(event))
            .cloned()
            .collect()
    }
}

use crate::modules::calendar::adapters::outbound::event_store_in_memory::InMemoryEventStore;
use crate::modules::calendar::core::event::Event;
use crate::modules::calendar::core::ports::EventStore;
use crate::shell::state::AppState;
use std::sync::Arc;

/// App state over an in memory store, with a handle to the store for seeding and assertions.
pub fn make_test_state() -> (AppState, Arc<InMemoryEventStore>) {
    let store = Arc::new(InMemoryEventStore::new());
    (AppState::from_store(store.clone()), store)
}

pub async fn seed(store: &InMemoryEventStore, events: impl IntoIterator<Item = Event>) {
    for event in events {
        store.add(event).await;
    }
}

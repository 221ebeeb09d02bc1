use crate::modules::calendar::adapters::outbound::event_store_in_memory::InMemoryEventStore;
use crate::modules::calendar::application::event_service::{CalendarService, EventService};
use crate::modules::calendar::core::ports::EventStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub calendar: Arc<dyn CalendarService>,
}

impl AppState {
    pub fn from_store<TEventStore>(store: Arc<TEventStore>) -> Self
    where
        TEventStore: EventStore + 'static,
    {
        Self {
            calendar: Arc::new(EventService::new(store)),
        }
    }

    pub fn in_memory() -> Self {
        Self::from_store(Arc::new(InMemoryEventStore::new()))
    }
}

use crate::modules::calendar::core::event::Event;
use crate::modules::calendar::core::ports::EventStore;
use async_trait::async_trait;
use chrono::NaiveDateTime;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Remote-callable calendar surface. Transports bind to `Arc<dyn CalendarService>`.
///
/// Duplicate names and unknown names are reported through the boolean
/// results; they never fail the call.
#[async_trait]
pub trait CalendarService: Send + Sync {
    async fn add_event(&self, event: Event) -> bool;
    async fn remove_event(&self, name: &str) -> bool;
    async fn get_events_by_name(&self, name: Option<&str>) -> Vec<Event>;
    async fn get_events_by_type(&self, event_type: Option<&str>) -> Vec<Event>;
    async fn get_events_by_date(&self, start: Option<NaiveDateTime>) -> Vec<Event>;
    async fn get_events_by_location(&self, location: Option<&str>) -> Vec<Event>;
    async fn get_events_for_month(&self, year: i32, month: u32) -> Vec<Event>;
    async fn get_all_events(&self) -> BTreeMap<String, Event>;
}

pub struct EventService<TEventStore>
where
    TEventStore: EventStore + 'static,
{
    store: Arc<TEventStore>,
}

impl<TEventStore> EventService<TEventStore>
where
    TEventStore: EventStore + 'static,
{
    pub fn new(store: Arc<TEventStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<TEventStore> CalendarService for EventService<TEventStore>
where
    TEventStore: EventStore + 'static,
{
    async fn add_event(&self, event: Event) -> bool {
        let name = event.name.clone();
        let summary = event.to_string();
        let added = self.store.add(event).await;
        if added {
            tracing::info!(event = %summary, "event added");
        } else {
            tracing::info!(name = %name, "event with the same name already exists, not added");
        }
        added
    }

    async fn remove_event(&self, name: &str) -> bool {
        let removed = self.store.remove(name).await;
        if removed {
            tracing::info!(name = %name, "event removed");
        } else {
            tracing::info!(name = %name, "event not found, nothing removed");
        }
        removed
    }

    async fn get_events_by_name(&self, name: Option<&str>) -> Vec<Event> {
        let events = self.store.filter_by_name(name).await;
        tracing::debug!(?name, count = events.len(), "events by name");
        events
    }

    async fn get_events_by_type(&self, event_type: Option<&str>) -> Vec<Event> {
        let events = self.store.filter_by_type(event_type).await;
        tracing::debug!(?event_type, count = events.len(), "events by type");
        events
    }

    async fn get_events_by_date(&self, start: Option<NaiveDateTime>) -> Vec<Event> {
        let events = self.store.filter_by_date(start).await;
        tracing::debug!(?start, count = events.len(), "events by date");
        events
    }

    async fn get_events_by_location(&self, location: Option<&str>) -> Vec<Event> {
        let events = self.store.filter_by_location(location).await;
        tracing::debug!(?location, count = events.len(), "events by location");
        events
    }

    async fn get_events_for_month(&self, year: i32, month: u32) -> Vec<Event> {
        let events = self.store.filter_by_month(year, month).await;
        tracing::debug!(year, month, count = events.len(), "events for month");
        events
    }

    async fn get_all_events(&self) -> BTreeMap<String, Event> {
        let events = self.store.all().await;
        tracing::debug!(count = events.len(), "all events");
        events
    }
}

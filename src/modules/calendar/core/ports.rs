// Ports define what the calendar core needs from a backing store, without implementing it.
//
// Responsibilities
// - Keep the service independent of the storage choice by coding against the EventStore trait.
// - "Already exists" and "not found" are plain boolean outcomes, never errors.
//
// Testing guidance
// - The in memory adapter is the reference implementation and is used in all tests.

use crate::modules::calendar::core::event::Event;
use crate::modules::calendar::core::filter::EventFilter;
use async_trait::async_trait;
use chrono::NaiveDateTime;
use std::collections::BTreeMap;

#[async_trait]
pub trait EventStore: Send + Sync {
    /// Inserts the event unless its name is already taken. Check and insert are atomic.
    async fn add(&self, event: Event) -> bool;

    async fn remove(&self, name: &str) -> bool;

    /// Point-in-time copy of every stored event, keyed by name.
    async fn all(&self) -> BTreeMap<String, Event>;

    /// Events matching `filter`, in insertion order.
    async fn filter(&self, filter: &EventFilter) -> Vec<Event>;

    async fn filter_by_name(&self, name: Option<&str>) -> Vec<Event> {
        self.filter(&EventFilter::Name(name.map(str::to_owned))).await
    }

    async fn filter_by_type(&self, event_type: Option<&str>) -> Vec<Event> {
        self.filter(&EventFilter::Type(event_type.map(str::to_owned)))
            .await
    }

    async fn filter_by_date(&self, start: Option<NaiveDateTime>) -> Vec<Event> {
        self.filter(&EventFilter::Date(start)).await
    }

    async fn filter_by_location(&self, location: Option<&str>) -> Vec<Event> {
        self.filter(&EventFilter::Location(location.map(str::to_owned)))
            .await
    }

    async fn filter_by_month(&self, year: i32, month: u32) -> Vec<Event> {
        self.filter(&EventFilter::Month { year, month }).await
    }
}

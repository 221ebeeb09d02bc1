use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidEvent {
    #[error("event name must not be empty")]
    BlankName,
}

/// A single calendar entry. The name is the identity within a store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub name: String,
    pub start: NaiveDateTime,
    pub duration_minutes: u32,
    #[serde(rename = "type")]
    pub event_type: String,
    pub description: String,
    pub location: String,
}

impl Event {
    pub fn new(
        name: impl Into<String>,
        start: NaiveDateTime,
        duration_minutes: u32,
        event_type: impl Into<String>,
        description: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            start,
            duration_minutes,
            event_type: event_type.into(),
            description: description.into(),
            location: location.into(),
        }
    }

    /// `None` when the end falls outside the representable date range.
    pub fn ends_at(&self) -> Option<NaiveDateTime> {
        self.start
            .checked_add_signed(Duration::minutes(i64::from(self.duration_minutes)))
    }

    /// Rules every transport applies before an event reaches the service.
    pub fn validate(&self) -> Result<(), InvalidEvent> {
        if self.name.trim().is_empty() {
            return Err(InvalidEvent::BlankName);
        }
        Ok(())
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) at {} on {} for {} min",
            self.name, self.event_type, self.location, self.start, self.duration_minutes
        )
    }
}

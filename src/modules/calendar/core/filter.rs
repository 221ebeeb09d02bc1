use crate::modules::calendar::core::event::Event;
use chrono::{Datelike, NaiveDateTime};

/// Single-field predicate over events. A `None` argument is a wildcard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventFilter {
    Name(Option<String>),
    Type(Option<String>),
    Date(Option<NaiveDateTime>),
    Location(Option<String>),
    Month { year: i32, month: u32 },
}

impl EventFilter {
    pub fn matches(&self, event: &Event) -> bool {
        match self {
            Self::Name(name) => name.as_deref().is_none_or(|n| event.name == n),
            Self::Type(event_type) => event_type.as_deref().is_none_or(|t| event.event_type == t),
            Self::Date(start) => start.is_none_or(|s| event.start == s),
            Self::Location(location) => location.as_deref().is_none_or(|l| event.location == l),
            Self::Month { year, month } => {
                event.start.year() == *year && event.start.month() == *month
            }
        }
    }
}

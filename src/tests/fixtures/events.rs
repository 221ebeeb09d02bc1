// Shared test fixtures for calendar events.
// Compiled into the crate only during tests, exposed under `crate::tests::fixtures`.

use crate::modules::calendar::core::event::Event;
use chrono::{NaiveDate, NaiveDateTime};

pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, 0))
        .expect("valid fixture timestamp")
}

/// Builds events starting from the canonical "Meeting" on 2023-12-05 05:30.
pub struct EventBuilder {
    inner: Event,
}

impl Default for EventBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl EventBuilder {
    pub fn new() -> Self {
        Self {
            inner: Event::new(
                "Meeting",
                at(2023, 12, 5, 5, 30),
                60,
                "Business",
                "Discuss project",
                "Office",
            ),
        }
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.name = v.into();
        self
    }

    pub fn start(mut self, v: NaiveDateTime) -> Self {
        self.inner.start = v;
        self
    }

    pub fn duration_minutes(mut self, v: u32) -> Self {
        self.inner.duration_minutes = v;
        self
    }

    pub fn event_type(mut self, v: impl Into<String>) -> Self {
        self.inner.event_type = v.into();
        self
    }

    pub fn description(mut self, v: impl Into<String>) -> Self {
        self.inner.description = v.into();
        self
    }

    pub fn location(mut self, v: impl Into<String>) -> Self {
        self.inner.location = v.into();
        self
    }

    pub fn build(self) -> Event {
        self.inner
    }
}

#[cfg(test)]
mod calendar_event_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_build_the_canonical_meeting() {
        let event = EventBuilder::new().build();
        assert_eq!(event.name, "Meeting");
        assert_eq!(event.start, at(2023, 12, 5, 5, 30));
        assert_eq!(event.duration_minutes, 60);
        assert_eq!(event.event_type, "Business");
        assert_eq!(event.description, "Discuss project");
        assert_eq!(event.location, "Office");
    }

    #[rstest]
    fn it_should_override_individual_fields() {
        let event = EventBuilder::new()
            .name("Conference")
            .event_type("Tech")
            .location("Conference Hall")
            .build();
        assert_eq!(event.name, "Conference");
        assert_eq!(event.event_type, "Tech");
        assert_eq!(event.location, "Conference Hall");
        assert_eq!(event.duration_minutes, 60);
    }
}

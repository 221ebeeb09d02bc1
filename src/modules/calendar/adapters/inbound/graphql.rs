use async_graphql::{Context, InputObject, Object, Result as GqlResult, SimpleObject};
use chrono::NaiveDateTime;

use crate::modules::calendar::core::event::Event;
use crate::shell::state::AppState;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

fn format_timestamp(t: NaiveDateTime) -> String {
    t.format(TIMESTAMP_FORMAT).to_string()
}

fn parse_timestamp(s: &str) -> GqlResult<NaiveDateTime> {
    s.parse::<NaiveDateTime>()
        .map_err(|e| format!("invalid timestamp {s:?}: {e}").into())
}

#[derive(SimpleObject, Clone)]
pub struct GqlEvent {
    pub name: String,
    pub start: String,
    /// Null when the end lies beyond the representable date range.
    pub ends_at: Option<String>,
    pub duration_minutes: u32,
    #[graphql(name = "type")]
    pub event_type: String,
    pub description: String,
    pub location: String,
}

impl From<Event> for GqlEvent {
    fn from(e: Event) -> Self {
        Self {
            ends_at: e.ends_at().map(format_timestamp),
            start: format_timestamp(e.start),
            name: e.name,
            duration_minutes: e.duration_minutes,
            event_type: e.event_type,
            description: e.description,
            location: e.location,
        }
    }
}

#[derive(InputObject)]
pub struct EventInput {
    pub name: String,
    /// ISO-8601 local date-time, e.g. `2023-12-05T05:30:00`.
    pub start: String,
    pub duration_minutes: u32,
    #[graphql(name = "type")]
    pub event_type: String,
    pub description: String,
    pub location: String,
}

impl TryFrom<EventInput> for Event {
    type Error = async_graphql::Error;

    fn try_from(i: EventInput) -> GqlResult<Self> {
        let event = Event::new(
            i.name,
            parse_timestamp(&i.start)?,
            i.duration_minutes,
            i.event_type,
            i.description,
            i.location,
        );
        event.validate()?;
        Ok(event)
    }
}

fn to_gql(events: Vec<Event>) -> Vec<GqlEvent> {
    events.into_iter().map(Into::into).collect()
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn all_events(&self, context: &Context<'_>) -> Vec<GqlEvent> {
        let state = context.data_unchecked::<AppState>();
        to_gql(
            state
                .calendar
                .get_all_events()
                .await
                .into_values()
                .collect(),
        )
    }

    async fn events_by_name(
        &self,
        context: &Context<'_>,
        name: Option<String>,
    ) -> Vec<GqlEvent> {
        let state = context.data_unchecked::<AppState>();
        to_gql(state.calendar.get_events_by_name(name.as_deref()).await)
    }

    async fn events_by_type(
        &self,
        context: &Context<'_>,
        #[graphql(name = "type")] event_type: Option<String>,
    ) -> Vec<GqlEvent> {
        let state = context.data_unchecked::<AppState>();
        to_gql(
            state
                .calendar
                .get_events_by_type(event_type.as_deref())
                .await,
        )
    }

    async fn events_by_date(
        &self,
        context: &Context<'_>,
        date: Option<String>,
    ) -> GqlResult<Vec<GqlEvent>> {
        let state = context.data_unchecked::<AppState>();
        let date = date.as_deref().map(parse_timestamp).transpose()?;
        Ok(to_gql(state.calendar.get_events_by_date(date).await))
    }

    async fn events_by_location(
        &self,
        context: &Context<'_>,
        location: Option<String>,
    ) -> Vec<GqlEvent> {
        let state = context.data_unchecked::<AppState>();
        to_gql(
            state
                .calendar
                .get_events_by_location(location.as_deref())
                .await,
        )
    }

    async fn events_for_month(
        &self,
        context: &Context<'_>,
        year: i32,
        month: u32,
    ) -> Vec<GqlEvent> {
        let state = context.data_unchecked::<AppState>();
        to_gql(state.calendar.get_events_for_month(year, month).await)
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn add_event(&self, context: &Context<'_>, event: EventInput) -> GqlResult<bool> {
        let state = context.data_unchecked::<AppState>();
        Ok(state.calendar.add_event(event.try_into()?).await)
    }

    async fn remove_event(&self, context: &Context<'_>, name: String) -> bool {
        let state = context.data_unchecked::<AppState>();
        state.calendar.remove_event(&name).await
    }
}

use axum::{
    Json,
    extract::{Query, State},
};
use chrono::NaiveDateTime;
use serde::Deserialize;
use std::collections::BTreeMap;

use crate::modules::calendar::core::event::Event;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ByNameParams {
    pub name: Option<String>,
}

#[derive(Deserialize)]
pub struct ByTypeParams {
    #[serde(rename = "type")]
    pub event_type: Option<String>,
}

#[derive(Deserialize)]
pub struct ByDateParams {
    pub date: Option<NaiveDateTime>,
}

#[derive(Deserialize)]
pub struct ByLocationParams {
    pub location: Option<String>,
}

#[derive(Deserialize)]
pub struct ForMonthParams {
    pub year: i32,
    pub month: u32,
}

pub async fn all(State(state): State<AppState>) -> Json<BTreeMap<String, Event>> {
    Json(state.calendar.get_all_events().await)
}

pub async fn by_name(
    State(state): State<AppState>,
    Query(params): Query<ByNameParams>,
) -> Json<Vec<Event>> {
    Json(state.calendar.get_events_by_name(params.name.as_deref()).await)
}

pub async fn by_type(
    State(state): State<AppState>,
    Query(params): Query<ByTypeParams>,
) -> Json<Vec<Event>> {
    Json(
        state
            .calendar
            .get_events_by_type(params.event_type.as_deref())
            .await,
    )
}

pub async fn by_date(
    State(state): State<AppState>,
    Query(params): Query<ByDateParams>,
) -> Json<Vec<Event>> {
    Json(state.calendar.get_events_by_date(params.date).await)
}

pub async fn by_location(
    State(state): State<AppState>,
    Query(params): Query<ByLocationParams>,
) -> Json<Vec<Event>> {
    Json(
        state
            .calendar
            .get_events_by_location(params.location.as_deref())
            .await,
    )
}

pub async fn for_month(
    State(state): State<AppState>,
    Query(params): Query<ForMonthParams>,
) -> Json<Vec<Event>> {
    Json(
        state
            .calendar
            .get_events_for_month(params.year, params.month)
            .await,
    )
}

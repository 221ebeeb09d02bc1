use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::modules::calendar::core::event::{Event, InvalidEvent};
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct AddEventResponse {
    pub added: bool,
}

#[derive(Debug, Error)]
pub enum AddEventRejection {
    #[error("invalid event body: {0}")]
    InvalidBody(#[from] JsonRejection),

    #[error(transparent)]
    InvalidEvent(#[from] InvalidEvent),
}

impl IntoResponse for AddEventRejection {
    fn into_response(self) -> Response {
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(serde_json::json!({ "error": self.to_string() })),
        )
            .into_response()
    }
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<Event>, JsonRejection>,
) -> Result<Json<AddEventResponse>, AddEventRejection> {
    let Json(event) = body?;
    event.validate()?;
    let added = state.calendar.add_event(event).await;
    Ok(Json(AddEventResponse { added }))
}

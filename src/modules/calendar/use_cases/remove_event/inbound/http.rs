use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;

use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct RemoveEventResponse {
    pub removed: bool,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Json<RemoveEventResponse> {
    let removed = state.calendar.remove_event(&name).await;
    Json(RemoveEventResponse { removed })
}

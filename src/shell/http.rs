use axum::{
    Extension, Router,
    routing::{delete, get},
};

use crate::modules::calendar::use_cases::add_event::inbound::http as add_http;
use crate::modules::calendar::use_cases::list_events::inbound::http as list_http;
use crate::modules::calendar::use_cases::remove_event::inbound::http as remove_http;
use crate::shell::graphql::{self, GRAPHQL_PATH};
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    let schema = graphql::build_schema(state.clone());
    Router::new()
        .route("/events", get(list_http::all).post(add_http::handle))
        .route("/events/{name}", delete(remove_http::handle))
        .route("/events/by-name", get(list_http::by_name))
        .route("/events/by-type", get(list_http::by_type))
        .route("/events/by-date", get(list_http::by_date))
        .route("/events/by-location", get(list_http::by_location))
        .route("/events/for-month", get(list_http::for_month))
        .route(GRAPHQL_PATH, get(graphql::graphiql).post(graphql::graphql))
        .layer(Extension(schema))
        .with_state(state)
}

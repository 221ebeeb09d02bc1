use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::shell::http::router;
use crate::shell::state::AppState;

async fn call(app: &Router, request: Request<Body>) -> Value {
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn add(event: Value) -> Request<Body> {
    Request::post("/events")
        .header("content-type", "application/json")
        .body(Body::from(event.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

fn names(events: &Value) -> Vec<&str> {
    events
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["name"].as_str().unwrap())
        .collect()
}

#[tokio::test]
async fn it_should_add_query_and_remove_events_end_to_end() {
    let app = router(AppState::in_memory());

    let meeting = json!({
        "name": "Meeting",
        "start": "2023-12-05T05:30:00",
        "duration_minutes": 60,
        "type": "Business",
        "description": "Discuss project",
        "location": "Office"
    });
    assert_eq!(call(&app, add(meeting.clone())).await, json!({ "added": true }));

    let duplicate = json!({
        "name": "Meeting",
        "start": "2023-12-06T08:30:00",
        "duration_minutes": 90,
        "type": "Business",
        "description": "Another discussion",
        "location": "Coffee Shop"
    });
    assert_eq!(call(&app, add(duplicate)).await, json!({ "added": false }));
    assert_eq!(call(&app, get("/events/by-name?name=Meeting")).await, json!([meeting]));

    let conference = json!({
        "name": "Conference",
        "start": "2023-12-20T09:00:00",
        "duration_minutes": 120,
        "type": "Tech",
        "description": "Annual tech conference",
        "location": "Conference Hall"
    });
    assert_eq!(call(&app, add(conference)).await, json!({ "added": true }));

    let by_type = call(&app, get("/events/by-type?type=Tech")).await;
    assert_eq!(names(&by_type), vec!["Conference"]);

    let by_date = call(&app, get("/events/by-date?date=2023-12-05T05:30:00")).await;
    assert_eq!(names(&by_date), vec!["Meeting"]);

    let by_location = call(&app, get("/events/by-location?location=Conference%20Hall")).await;
    assert_eq!(names(&by_location), vec!["Conference"]);

    let for_month = call(&app, get("/events/for-month?year=2023&month=12")).await;
    assert_eq!(names(&for_month), vec!["Meeting", "Conference"]);

    let removed = call(&app, Request::delete("/events/Meeting").body(Body::empty()).unwrap()).await;
    assert_eq!(removed, json!({ "removed": true }));

    let all = call(&app, get("/events")).await;
    let all = all.as_object().unwrap();
    assert!(!all.contains_key("Meeting"));
    assert!(all.contains_key("Conference"));
    assert_eq!(all.len(), 1);
}

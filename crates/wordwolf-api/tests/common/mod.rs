//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::{TimeZone, Utc};
use http_body_util::BodyExt;
use tower::ServiceExt;
use wordwolf_api::routes;
use wordwolf_api::state::AppState;
use wordwolf_core::clock::Clock;
use wordwolf_core::rng::GameRng;
use wordwolf_session::store::SessionStore;
use wordwolf_test_support::{FixedClock, MockRng};

/// Fixed timestamp used across all integration tests.
fn fixed_clock() -> Arc<dyn Clock> {
    Arc::new(FixedClock(
        Utc.with_ymd_and_hms(2026, 3, 1, 19, 0, 0).unwrap(),
    ))
}

/// Build the full app router with a fixed clock and a constant-zero random
/// source. Uses the same route structure as `main.rs`. State lives inside the
/// router, so one built app carries session state across requests.
pub fn build_test_app() -> Router {
    build_test_app_with_rng(MockRng)
}

/// Build the full app router with a custom random source for tests that pin
/// specific draws.
pub fn build_test_app_with_rng(rng: impl GameRng + 'static) -> Router {
    let store = Arc::new(SessionStore::new(fixed_clock()));
    let rng: Arc<Mutex<dyn GameRng>> = Arc::new(Mutex::new(rng));
    let app_state = AppState::new(store, rng, wordwolf_topics::topic_ids());

    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1/session", routes::session::router())
        .nest("/api/v1/players", routes::players::router())
        .nest("/api/v1/game", routes::game::router())
        .nest("/api/v1/votes", routes::votes::router())
        .nest("/api/v1/topics", routes::topics::router())
        .with_state(app_state)
}

/// Send a POST request with a JSON body and return the response.
pub async fn post_json(
    app: &Router,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

/// Send a bodyless POST request and return the response.
pub async fn post_empty(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

/// Send a GET request and return the response.
pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

/// Send a DELETE request and return the response. Empty bodies map to
/// `Value::Null`.
pub async fn delete(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&body_bytes).unwrap_or(serde_json::Value::Null);

    (status, json)
}

/// Create a session and join `names` in order. Returns the joined players'
/// ids, in join order.
pub async fn seed_session(app: &Router, names: &[&str]) -> Vec<uuid::Uuid> {
    let (status, _) = post_empty(app, "/api/v1/session").await;
    assert_eq!(status, StatusCode::CREATED);

    let mut ids = Vec::with_capacity(names.len());
    for name in names {
        let (status, json) = post_json(
            app,
            "/api/v1/players",
            &serde_json::json!({ "name": name }),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        ids.push(json["id"].as_str().unwrap().parse().unwrap());
    }
    ids
}

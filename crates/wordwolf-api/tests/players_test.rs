//! Integration tests for roster management.

mod common;

use axum::http::StatusCode;
use uuid::Uuid;

#[tokio::test]
async fn test_join_returns_201_with_player() {
    let app = common::build_test_app();
    common::seed_session(&app, &[]).await;

    let (status, json) = common::post_json(
        &app,
        "/api/v1/players",
        &serde_json::json!({ "name": "Akira" }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["name"], "Akira");
    assert_eq!(json["role"], serde_json::Value::Null);
    assert_eq!(json["teamNumber"], serde_json::Value::Null);
    assert_eq!(json["topicId"], serde_json::Value::Null);
    assert_eq!(json["online"], true);
    assert!(json["id"].is_string());
}

#[tokio::test]
async fn test_join_without_session_returns_404() {
    let app = common::build_test_app();

    let (status, json) = common::post_json(
        &app,
        "/api/v1/players",
        &serde_json::json!({ "name": "Akira" }),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "no_active_session");
}

#[tokio::test]
async fn test_join_with_blank_name_returns_400() {
    let app = common::build_test_app();
    common::seed_session(&app, &[]).await;

    let (status, json) = common::post_json(
        &app,
        "/api/v1/players",
        &serde_json::json!({ "name": "   " }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "validation_error");
}

#[tokio::test]
async fn test_leave_removes_player_from_roster() {
    let app = common::build_test_app();
    let ids = common::seed_session(&app, &["Akira", "Botan"]).await;

    let (status, json) = common::delete(&app, &format!("/api/v1/players/{}", ids[0])).await;

    assert_eq!(status, StatusCode::OK);
    let players = json["players"].as_array().unwrap();
    assert_eq!(players.len(), 1);
    assert_eq!(players[0]["name"], "Botan");
}

#[tokio::test]
async fn test_leave_unknown_player_returns_404() {
    let app = common::build_test_app();
    common::seed_session(&app, &["Akira"]).await;

    let (status, json) =
        common::delete(&app, &format!("/api/v1/players/{}", Uuid::new_v4())).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "player_not_found");
}

#[tokio::test]
async fn test_join_during_round_returns_409() {
    let app = common::build_test_app();
    common::seed_session(&app, &["Akira", "Botan", "Chie", "Daiki"]).await;
    let (status, _) = common::post_empty(&app, "/api/v1/game/start").await;
    assert_eq!(status, StatusCode::OK);

    let (status, json) = common::post_json(
        &app,
        "/api/v1/players",
        &serde_json::json!({ "name": "Emi" }),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["error"], "invalid_state");
}

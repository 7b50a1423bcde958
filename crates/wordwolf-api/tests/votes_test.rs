//! Integration tests for ballot casting.

mod common;

use axum::http::StatusCode;
use uuid::Uuid;

const NAMES: [&str; 4] = ["Akira", "Botan", "Chie", "Daiki"];

#[tokio::test]
async fn test_vote_during_voting_phase_records_ballot() {
    let app = common::build_test_app();
    let ids = common::seed_session(&app, &NAMES).await;
    common::post_empty(&app, "/api/v1/game/start").await;
    common::post_empty(&app, "/api/v1/game/start-voting").await;

    let (status, json) = common::post_json(
        &app,
        "/api/v1/votes",
        &serde_json::json!({ "voterId": ids[0], "votedId": ids[1] }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let voter_key = ids[0].to_string();
    assert_eq!(json["votes"][voter_key.as_str()], ids[1].to_string());

    // The ballot is also stamped on the voter's roster entry.
    let voter = json["players"]
        .as_array()
        .unwrap()
        .iter()
        .find(|p| p["id"] == voter_key)
        .unwrap();
    assert_eq!(voter["vote"], ids[1].to_string());
}

#[tokio::test]
async fn test_revote_replaces_previous_ballot() {
    let app = common::build_test_app();
    let ids = common::seed_session(&app, &NAMES).await;
    common::post_empty(&app, "/api/v1/game/start").await;
    common::post_empty(&app, "/api/v1/game/start-voting").await;

    common::post_json(
        &app,
        "/api/v1/votes",
        &serde_json::json!({ "voterId": ids[0], "votedId": ids[1] }),
    )
    .await;
    let (status, json) = common::post_json(
        &app,
        "/api/v1/votes",
        &serde_json::json!({ "voterId": ids[0], "votedId": ids[2] }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let votes = json["votes"].as_object().unwrap();
    assert_eq!(votes.len(), 1);
    assert_eq!(votes[&ids[0].to_string()], ids[2].to_string());
}

#[tokio::test]
async fn test_vote_during_discussion_is_accepted() {
    let app = common::build_test_app();
    let ids = common::seed_session(&app, &NAMES).await;
    common::post_empty(&app, "/api/v1/game/start").await;

    // Ballots are open from the moment the round starts.
    let (status, _) = common::post_json(
        &app,
        "/api/v1/votes",
        &serde_json::json!({ "voterId": ids[0], "votedId": ids[1] }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_vote_during_waiting_returns_409() {
    let app = common::build_test_app();
    let ids = common::seed_session(&app, &NAMES).await;

    let (status, json) = common::post_json(
        &app,
        "/api/v1/votes",
        &serde_json::json!({ "voterId": ids[0], "votedId": ids[1] }),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["error"], "invalid_state");
}

#[tokio::test]
async fn test_vote_for_unknown_target_returns_404() {
    let app = common::build_test_app();
    let ids = common::seed_session(&app, &NAMES).await;
    common::post_empty(&app, "/api/v1/game/start").await;
    common::post_empty(&app, "/api/v1/game/start-voting").await;

    let (status, json) = common::post_json(
        &app,
        "/api/v1/votes",
        &serde_json::json!({ "voterId": ids[0], "votedId": Uuid::new_v4() }),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "player_not_found");
}

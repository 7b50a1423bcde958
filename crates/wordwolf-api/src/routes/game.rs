//! Round flow routes: phase transitions, the discussion timer, and results.

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use tracing::instrument;

use wordwolf_session::application::query_handlers::RoundResultView;
use wordwolf_session::application::{command_handlers, query_handlers};
use wordwolf_session::domain::GameSession;

use crate::error::ApiError;
use crate::state::AppState;

/// POST /start
#[instrument(skip(state))]
async fn start_game(State(state): State<AppState>) -> Result<Json<GameSession>, ApiError> {
    let session =
        command_handlers::handle_start_game(&state.store, &state.topic_ids, &state.rng)?;
    Ok(Json(session))
}

/// POST /start-voting
#[instrument(skip(state))]
async fn start_voting(State(state): State<AppState>) -> Result<Json<GameSession>, ApiError> {
    let session = command_handlers::handle_start_voting(&state.store)?;
    Ok(Json(session))
}

/// POST /end-voting
#[instrument(skip(state))]
async fn end_voting(State(state): State<AppState>) -> Result<Json<GameSession>, ApiError> {
    let session = command_handlers::handle_end_voting(&state.store)?;
    Ok(Json(session))
}

/// POST /next-round
#[instrument(skip(state))]
async fn next_round(State(state): State<AppState>) -> Result<Json<GameSession>, ApiError> {
    let session = command_handlers::handle_next_round(&state.store)?;
    Ok(Json(session))
}

/// POST /timer/toggle
#[instrument(skip(state))]
async fn toggle_timer(State(state): State<AppState>) -> Result<Json<GameSession>, ApiError> {
    let session = command_handlers::handle_toggle_timer(&state.store)?;
    Ok(Json(session))
}

/// POST /timer/reset
#[instrument(skip(state))]
async fn reset_timer(State(state): State<AppState>) -> Result<Json<GameSession>, ApiError> {
    let session = command_handlers::handle_reset_timer(&state.store)?;
    Ok(Json(session))
}

/// GET /result
#[instrument(skip(state))]
async fn round_result(State(state): State<AppState>) -> Result<Json<RoundResultView>, ApiError> {
    let view = query_handlers::get_round_result(&state.store)?;
    Ok(Json(view))
}

/// Returns the router for round flow.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/start", post(start_game))
        .route("/start-voting", post(start_voting))
        .route("/end-voting", post(end_voting))
        .route("/next-round", post(next_round))
        .route("/timer/toggle", post(toggle_timer))
        .route("/timer/reset", post(reset_timer))
        .route("/result", get(round_result))
}

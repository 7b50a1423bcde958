//! Roster routes: joining and leaving the waiting session.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{delete, post};
use axum::{Json, Router};
use serde::Deserialize;
use tracing::instrument;
use uuid::Uuid;

use wordwolf_session::application::command_handlers;
use wordwolf_session::domain::{GameSession, Player};

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for POST /api/v1/players.
#[derive(Debug, Deserialize)]
pub struct JoinRequest {
    /// Display name for the new player.
    pub name: String,
}

/// POST /
#[instrument(skip(state, request), fields(player_name = %request.name))]
async fn join_session(
    State(state): State<AppState>,
    Json(request): Json<JoinRequest>,
) -> Result<(StatusCode, Json<Player>), ApiError> {
    let player = command_handlers::handle_add_player(&state.store, &request.name)?;
    Ok((StatusCode::CREATED, Json(player)))
}

/// DELETE /{player_id}
#[instrument(skip(state))]
async fn leave_session(
    State(state): State<AppState>,
    Path(player_id): Path<Uuid>,
) -> Result<Json<GameSession>, ApiError> {
    let session = command_handlers::handle_remove_player(&state.store, player_id)?;
    Ok(Json(session))
}

/// Returns the router for roster management.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(join_session))
        .route("/{player_id}", delete(leave_session))
}

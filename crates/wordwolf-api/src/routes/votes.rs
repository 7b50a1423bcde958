//! Voting route.

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde::Deserialize;
use tracing::instrument;
use uuid::Uuid;

use wordwolf_session::application::command_handlers;
use wordwolf_session::domain::GameSession;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for POST /api/v1/votes.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteRequest {
    /// Player casting the ballot.
    pub voter_id: Uuid,
    /// Player the ballot names.
    pub voted_id: Uuid,
}

/// POST /
///
/// Recasting overwrites the voter's previous ballot.
#[instrument(skip(state, request), fields(voter_id = %request.voter_id))]
async fn cast_vote(
    State(state): State<AppState>,
    Json(request): Json<VoteRequest>,
) -> Result<Json<GameSession>, ApiError> {
    let session =
        command_handlers::handle_cast_vote(&state.store, request.voter_id, request.voted_id)?;
    Ok(Json(session))
}

/// Returns the router for voting.
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(cast_vote))
}

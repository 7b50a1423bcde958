//! Topic catalog route.

use axum::routing::get;
use axum::{Json, Router};
use tracing::instrument;

use wordwolf_topics::Topic;

use crate::state::AppState;

/// GET /
#[instrument]
async fn list_topics() -> Json<&'static [Topic]> {
    Json(wordwolf_topics::catalog())
}

/// Returns the router for the topic catalog.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(list_topics))
}

//! Session lifecycle routes and the snapshot event stream.

use std::convert::Infallible;
use std::time::Duration;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::sse::{Event, KeepAlive, Sse};
use axum::routing::get;
use axum::{Json, Router};
use futures::stream::Stream;
use tokio_stream::StreamExt;
use tokio_stream::wrappers::WatchStream;
use tracing::{info, instrument};

use wordwolf_session::application::{command_handlers, query_handlers};
use wordwolf_session::domain::GameSession;

use crate::error::ApiError;
use crate::state::AppState;

/// POST /
///
/// Idempotent: returns 201 with a fresh waiting session, or 200 with the
/// existing one.
#[instrument(skip(state))]
async fn create_session(State(state): State<AppState>) -> (StatusCode, Json<GameSession>) {
    let (session, created) = command_handlers::handle_create_session(&state.store);
    let status = if created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    (status, Json(session))
}

/// GET /
#[instrument(skip(state))]
async fn get_session(State(state): State<AppState>) -> Result<Json<GameSession>, ApiError> {
    let session = query_handlers::get_session(&state.store)?;
    Ok(Json(session))
}

/// DELETE /
#[instrument(skip(state))]
async fn close_session(State(state): State<AppState>) -> StatusCode {
    command_handlers::handle_close_session(&state.store);
    StatusCode::NO_CONTENT
}

/// GET /events
///
/// Streams whole session snapshots: the current value immediately on
/// connect, then one event per store write. Subscribers see `null` while no
/// session exists.
#[instrument(skip(state))]
async fn session_events(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    info!("snapshot stream opened");

    let updates = WatchStream::new(state.store.subscribe()).map(|snapshot| {
        let payload = serde_json::to_string(&snapshot)
            .expect("session snapshot serialization is infallible");
        Ok(Event::default().event("session").data(payload))
    });

    Sse::new(updates).keep_alive(
        KeepAlive::new()
            .interval(Duration::from_secs(15))
            .text("ping"),
    )
}

/// Returns the router for session lifecycle and streaming.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(get_session).post(create_session).delete(close_session),
        )
        .route("/events", get(session_events))
}

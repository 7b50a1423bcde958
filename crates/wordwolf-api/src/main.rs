//! Word Wolf session coordinator server entry point.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use wordwolf_api::error::AppError;
use wordwolf_api::state::AppState;
use wordwolf_api::{routes, ticker};
use wordwolf_core::clock::SystemClock;
use wordwolf_core::rng::{GameRng, SeededRng};
use wordwolf_session::store::SessionStore;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting Word Wolf session coordinator");

    // Read configuration from environment.
    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".to_string())
        .parse()
        .map_err(|e| AppError::Config(format!("PORT must be a valid u16: {e}")))?;

    // Build application state.
    let store = Arc::new(SessionStore::new(Arc::new(SystemClock)));
    let rng: Arc<Mutex<dyn GameRng>> = Arc::new(Mutex::new(SeededRng::from_entropy()));
    let app_state = AppState::new(store, rng, wordwolf_topics::topic_ids());

    // Single authoritative countdown; clients render what the stream reports.
    let _ticker = ticker::spawn(app_state.clone());

    // Build router.
    // TODO: Replace CorsLayer::permissive() with restricted origins for production.
    let app = Router::new()
        .merge(routes::health::router())
        .nest("/api/v1/session", routes::session::router())
        .nest("/api/v1/players", routes::players::router())
        .nest("/api/v1/game", routes::game::router())
        .nest("/api/v1/votes", routes::votes::router())
        .nest("/api/v1/topics", routes::topics::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // Start server.
    let addr: SocketAddr = format!("{host}:{port}")
        .parse()
        .map_err(|e| AppError::Config(format!("invalid HOST:PORT combination: {e}")))?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;

    Ok(())
}

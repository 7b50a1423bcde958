//! Shared application state.

use std::sync::{Arc, Mutex};

use wordwolf_core::rng::GameRng;
use wordwolf_session::store::SessionStore;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Store holding the single live session.
    pub store: Arc<SessionStore>,
    /// Random source for round setup, shared behind a lock.
    pub rng: Arc<Mutex<dyn GameRng>>,
    /// Topic ids eligible for round assignment, in catalog order.
    pub topic_ids: Arc<Vec<u32>>,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(
        store: Arc<SessionStore>,
        rng: Arc<Mutex<dyn GameRng>>,
        topic_ids: Vec<u32>,
    ) -> Self {
        Self {
            store,
            rng,
            topic_ids: Arc::new(topic_ids),
        }
    }
}

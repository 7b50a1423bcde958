//! Server-side countdown for the discussion timer.
//!
//! A single task owns the clock for every connected client. Snapshots carry
//! the authoritative remaining seconds, so clients only render what the
//! stream tells them.

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};

use wordwolf_session::application::command_handlers;

use crate::state::AppState;

/// Cadence of the countdown.
const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Spawns the countdown task. Ticks are skipped rather than bursted when the
/// runtime falls behind.
pub fn spawn(state: AppState) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = time::interval(TICK_INTERVAL);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            interval.tick().await;
            command_handlers::handle_tick(&state.store);
        }
    })
}

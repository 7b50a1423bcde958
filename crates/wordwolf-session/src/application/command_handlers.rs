//! Command handlers for the session context.
//!
//! Each handler performs one read-modify-write: read a copy of the current
//! session, apply a domain transition to it, and save the whole record back.
//! No lock spans the three steps; the store module documents the
//! last-write-wins contract this relies on.

use std::sync::Mutex;

use tracing::info;
use uuid::Uuid;
use wordwolf_core::error::GameError;
use wordwolf_core::rng::GameRng;

use crate::domain::{GamePhase, GameSession, Player};
use crate::store::SessionStore;

/// Ensures a session exists, creating one in the waiting phase if needed.
/// Returns the live session and whether this call created it.
#[must_use]
pub fn handle_create_session(store: &SessionStore) -> (GameSession, bool) {
    let (session, created) = store.create();
    if created {
        info!(session_id = %session.id, "session created");
    }
    (session, created)
}

/// Drops the live session entirely. A no-op when no session exists.
pub fn handle_close_session(store: &SessionStore) {
    if let Some(session) = store.get() {
        info!(session_id = %session.id, "session closed");
        store.clear();
    }
}

/// Adds a player to the roster and returns the new entry.
///
/// # Errors
///
/// Returns `GameError::NoActiveSession` without a session, plus any roster
/// validation error from the domain.
pub fn handle_add_player(store: &SessionStore, name: &str) -> Result<Player, GameError> {
    let mut session = store.get().ok_or(GameError::NoActiveSession)?;
    let player = session.add_player(Uuid::new_v4(), name)?.clone();
    let _ = store.save(session);
    info!(player_id = %player.id, name = %player.name, "player joined");
    Ok(player)
}

/// Removes a player from the roster and returns the updated session.
///
/// # Errors
///
/// Returns `GameError::NoActiveSession` without a session,
/// `GameError::InvalidState` outside the waiting phase, and
/// `GameError::PlayerNotFound` for an unknown id.
pub fn handle_remove_player(
    store: &SessionStore,
    player_id: Uuid,
) -> Result<GameSession, GameError> {
    let mut session = store.get().ok_or(GameError::NoActiveSession)?;
    session.remove_player(player_id)?;
    info!(player_id = %player_id, "player left");
    Ok(store.save(session))
}

/// Starts a round: teams, roles, topics, and the discussion timer.
///
/// # Errors
///
/// Returns `GameError::NoActiveSession` without a session, any round setup
/// error from the domain, and `GameError::Infrastructure` if the RNG lock is
/// poisoned.
pub fn handle_start_game(
    store: &SessionStore,
    topic_ids: &[u32],
    rng: &Mutex<dyn GameRng>,
) -> Result<GameSession, GameError> {
    let mut session = store.get().ok_or(GameError::NoActiveSession)?;

    // Lock the RNG only around the domain call.
    {
        let mut rng_guard = rng
            .lock()
            .map_err(|e| GameError::Infrastructure(format!("RNG mutex poisoned: {e}")))?;
        session.start_game(topic_ids, &mut *rng_guard)?;
    }

    info!(
        session_id = %session.id,
        players = session.players.len(),
        teams = session.teams.len(),
        "round started"
    );
    Ok(store.save(session))
}

/// Moves the round from discussion to voting.
///
/// # Errors
///
/// Returns `GameError::NoActiveSession` without a session and
/// `GameError::InvalidState` outside the playing phase.
pub fn handle_start_voting(store: &SessionStore) -> Result<GameSession, GameError> {
    let mut session = store.get().ok_or(GameError::NoActiveSession)?;
    session.start_voting()?;
    info!(session_id = %session.id, "voting started");
    Ok(store.save(session))
}

/// Closes the ballot box and moves the round to the result phase.
///
/// # Errors
///
/// Returns `GameError::NoActiveSession` without a session and
/// `GameError::InvalidState` outside the voting phase.
pub fn handle_end_voting(store: &SessionStore) -> Result<GameSession, GameError> {
    let mut session = store.get().ok_or(GameError::NoActiveSession)?;
    session.end_voting()?;
    info!(session_id = %session.id, "voting ended");
    Ok(store.save(session))
}

/// Returns the session to the waiting phase for another round.
///
/// # Errors
///
/// Returns `GameError::NoActiveSession` without a session and
/// `GameError::InvalidState` outside the result phase.
pub fn handle_next_round(store: &SessionStore) -> Result<GameSession, GameError> {
    let mut session = store.get().ok_or(GameError::NoActiveSession)?;
    session.reset_round()?;
    info!(session_id = %session.id, "round reset");
    Ok(store.save(session))
}

/// Pauses or resumes the discussion timer.
///
/// # Errors
///
/// Returns `GameError::NoActiveSession` without a session and
/// `GameError::InvalidState` outside the playing phase.
pub fn handle_toggle_timer(store: &SessionStore) -> Result<GameSession, GameError> {
    let mut session = store.get().ok_or(GameError::NoActiveSession)?;
    session.toggle_timer()?;
    info!(
        session_id = %session.id,
        running = session.timer_running,
        "timer toggled"
    );
    Ok(store.save(session))
}

/// Rewinds the discussion timer to its full length.
///
/// # Errors
///
/// Returns `GameError::NoActiveSession` without a session and
/// `GameError::InvalidState` outside the playing phase.
pub fn handle_reset_timer(store: &SessionStore) -> Result<GameSession, GameError> {
    let mut session = store.get().ok_or(GameError::NoActiveSession)?;
    session.reset_timer()?;
    info!(session_id = %session.id, "timer reset");
    Ok(store.save(session))
}

/// Records one ballot and returns the updated session.
///
/// # Errors
///
/// Returns `GameError::NoActiveSession` without a session, plus any ballot
/// validation error from the domain.
pub fn handle_cast_vote(
    store: &SessionStore,
    voter_id: Uuid,
    target_id: Uuid,
) -> Result<GameSession, GameError> {
    let mut session = store.get().ok_or(GameError::NoActiveSession)?;
    session.cast_vote(voter_id, target_id)?;
    info!(voter_id = %voter_id, target_id = %target_id, "ballot cast");
    Ok(store.save(session))
}

/// Advances the discussion timer by one second, saving only when the tick
/// changed the session. Called from the authoritative ticker task; a missing
/// session or an idle timer is a silent no-op.
pub fn handle_tick(store: &SessionStore) {
    let Some(mut session) = store.get() else {
        return;
    };
    if !session.tick() {
        return;
    }
    let expired = session.phase == GamePhase::Voting;
    let saved = store.save(session);
    if expired {
        info!(session_id = %saved.id, "discussion timer expired, voting begins");
    }
}

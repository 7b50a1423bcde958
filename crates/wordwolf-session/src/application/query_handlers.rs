//! Query handlers for the session context.
//!
//! Queries read a snapshot from the store and derive read-only views; they
//! never write anything back.

use serde::Serialize;
use wordwolf_core::error::GameError;

use crate::domain::{
    decide_winner, tally_votes, Faction, GamePhase, GameSession, Player, Role, VoteLine,
};
use crate::store::SessionStore;

/// Read-only view of a concluded round.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundResultView {
    /// Which faction won the round.
    pub winner: Faction,
    /// Tally rows sorted by descending vote count.
    pub tally: Vec<VoteLine>,
    /// The wolves, revealed with their prompts and assignments.
    pub wolves: Vec<Player>,
}

/// Returns the current session snapshot.
///
/// # Errors
///
/// Returns `GameError::NoActiveSession` if no session exists.
pub fn get_session(store: &SessionStore) -> Result<GameSession, GameError> {
    store.get().ok_or(GameError::NoActiveSession)
}

/// Computes the result view for a concluded round.
///
/// # Errors
///
/// Returns `GameError::NoActiveSession` if no session exists and
/// `GameError::InvalidState` outside the result phase.
pub fn get_round_result(store: &SessionStore) -> Result<RoundResultView, GameError> {
    let session = store.get().ok_or(GameError::NoActiveSession)?;
    if session.phase != GamePhase::Result {
        return Err(GameError::InvalidState(
            "results are only available in the result phase".to_owned(),
        ));
    }

    let tally = tally_votes(&session.players, &session.votes);
    let winner = decide_winner(&session.players, &tally);
    let wolves = session
        .players
        .iter()
        .filter(|p| p.role == Some(Role::Wolf))
        .cloned()
        .collect();

    Ok(RoundResultView {
        winner,
        tally,
        wolves,
    })
}

//! Domain error types.

use thiserror::Error;
use uuid::Uuid;

/// Top-level domain error type.
///
/// Every variant is a local, recoverable condition surfaced to the caller;
/// nothing in the core aborts the process. Operations apply fully or not at
/// all, so an error never leaves a half-written session behind.
#[derive(Debug, Error)]
pub enum GameError {
    /// A mutating operation was invoked before any session was created.
    #[error("no active session")]
    NoActiveSession,

    /// The game cannot start below the minimum player count.
    #[error("insufficient players: need at least {required}, have {actual}")]
    InsufficientPlayers {
        /// Minimum players required to start a round.
        required: usize,
        /// Players currently in the session.
        actual: usize,
    },

    /// An operation is not legal in the session's current state.
    #[error("invalid state: {0}")]
    InvalidState(String),

    /// An operation referenced a player id that does not exist.
    #[error("player not found: {0}")]
    PlayerNotFound(Uuid),

    /// A validation error in caller-supplied input.
    #[error("validation error: {0}")]
    Validation(String),

    /// An internal failure outside the game rules (e.g., a poisoned lock).
    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}

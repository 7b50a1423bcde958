//! Domain model for the session context.

pub mod partition;
pub mod player;
pub mod session;
pub mod tally;

pub use partition::{partition_teams, PlayerPair, RoundPlan};
pub use player::{Player, Role};
pub use session::{GamePhase, GameSession, MIN_PLAYERS, ROUND_SECONDS};
pub use tally::{decide_winner, tally_votes, Faction, VoteLine};

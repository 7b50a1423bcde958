//! Team partitioning with pairing-history repeat minimization.
//!
//! Round setup shuffles the roster and slices it into teams of roughly
//! three. Over consecutive rounds the same people tend to land together, so
//! the search runs a bounded number of shuffle attempts and adopts the
//! arrangement that repeats the fewest pairs already seen in earlier rounds.
//! The search is exhaustive neither in arrangements nor in attempts; it is a
//! cheap randomized minimizer, not an optimal solver.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use wordwolf_core::error::GameError;
use wordwolf_core::rng::GameRng;

use super::player::Player;

/// Shuffle attempts per partition before settling on the best arrangement.
const PARTITION_ATTEMPTS: usize = 100;

/// Preferred team size; rosters that do not divide evenly produce larger
/// teams first.
const TEAM_TARGET_SIZE: usize = 3;

/// An unordered pair of player ids, normalized so the smaller id comes
/// first. Two pairs over the same players compare equal regardless of
/// argument order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerPair(Uuid, Uuid);

impl PlayerPair {
    /// Creates a normalized pair.
    #[must_use]
    pub fn new(a: Uuid, b: Uuid) -> Self {
        if a <= b { Self(a, b) } else { Self(b, a) }
    }
}

/// The outcome of a partition search.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundPlan {
    /// Adopted teams, in slicing order. Players carry no round assignments
    /// yet; role and topic assignment happens after adoption.
    pub teams: Vec<Vec<Player>>,
    /// Every unordered pair seated together under this plan.
    pub new_pairs: BTreeSet<PlayerPair>,
    /// How many of `new_pairs` were already present in the history.
    pub repeat_count: usize,
}

/// Splits `players` into teams, preferring arrangements that repeat as few
/// pairs from `history` as possible.
///
/// Runs up to [`PARTITION_ATTEMPTS`] shuffles. A candidate replaces the
/// incumbent only when it has strictly fewer repeated pairs, so among equally
/// good arrangements the earliest one seen wins; a repeat-free arrangement
/// ends the search immediately. Under a seeded random source the whole search
/// is deterministic.
///
/// # Errors
///
/// Returns `GameError::InvalidState` if `players` is empty; the phase
/// controller never starts a round without players, so an empty roster here
/// means a transition guard was bypassed.
pub fn partition_teams(
    players: &[Player],
    history: &BTreeSet<PlayerPair>,
    rng: &mut dyn GameRng,
) -> Result<RoundPlan, GameError> {
    if players.is_empty() {
        return Err(GameError::InvalidState(
            "cannot partition an empty roster".to_owned(),
        ));
    }

    let num_teams = (players.len() / TEAM_TARGET_SIZE).max(1);
    let base_size = players.len() / num_teams;
    let remainder = players.len() % num_teams;

    let mut best_teams: Option<Vec<Vec<Player>>> = None;
    let mut best_repeats = usize::MAX;

    for _ in 0..PARTITION_ATTEMPTS {
        let mut pool = players.to_vec();
        shuffle(&mut pool, rng);

        // Slice the shuffled pool; the first `remainder` teams absorb the
        // leftover players.
        let mut teams = Vec::with_capacity(num_teams);
        let mut start = 0;
        for team_index in 0..num_teams {
            let size = base_size + usize::from(team_index < remainder);
            teams.push(pool[start..start + size].to_vec());
            start += size;
        }

        let repeats = pairs_within(&teams).intersection(history).count();
        if repeats < best_repeats {
            best_repeats = repeats;
            best_teams = Some(teams);
        }
        if best_repeats == 0 {
            break;
        }
    }

    // The attempt loop always ran at least once, but fall back to a single
    // table rather than panic if the budget is ever configured to zero.
    let teams = best_teams.unwrap_or_else(|| vec![players.to_vec()]);
    let new_pairs = pairs_within(&teams);
    let repeat_count = new_pairs.intersection(history).count();

    Ok(RoundPlan {
        teams,
        new_pairs,
        repeat_count,
    })
}

/// Fisher–Yates shuffle driven by the injected random source.
fn shuffle(pool: &mut [Player], rng: &mut dyn GameRng) {
    for i in (1..pool.len()).rev() {
        let j = rng.next_index(i + 1);
        pool.swap(i, j);
    }
}

/// Collects every unordered pair seated together across `teams`.
fn pairs_within(teams: &[Vec<Player>]) -> BTreeSet<PlayerPair> {
    let mut pairs = BTreeSet::new();
    for team in teams {
        for (i, a) in team.iter().enumerate() {
            for b in &team[i + 1..] {
                pairs.insert(PlayerPair::new(a.id, b.id));
            }
        }
    }
    pairs
}

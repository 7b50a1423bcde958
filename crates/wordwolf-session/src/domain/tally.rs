//! Vote tallying and winner determination.
//!
//! Both functions are pure: they read the roster and the ballot box and
//! never touch session state, so the result view can be recomputed from any
//! snapshot.

use indexmap::IndexMap;
use serde::Serialize;
use uuid::Uuid;

use super::player::{Player, Role};

/// Placeholder shown when a ballot references an id no longer on the roster.
const UNKNOWN_NAME: &str = "unknown";

/// Which faction won the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Faction {
    /// The table identified a wolf.
    Citizens,
    /// The wolves escaped the vote.
    Wolves,
}

/// One row of the tally: a vote target with its count and supporters.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteLine {
    /// The player the votes were cast against.
    pub voted_id: Uuid,
    /// Display name of the target, or `"unknown"` if off the roster.
    pub name: String,
    /// Number of ballots against this target.
    pub count: usize,
    /// Names of the voters, in ballot order.
    pub voters: Vec<String>,
}

/// Groups ballots by target and sorts the rows by descending count.
///
/// Rows are created in the order each target first appeared in the ballot
/// box, and the sort is stable, so equal counts resolve in favor of the
/// target voted for first. Voters and targets that have left the roster show
/// up under the `"unknown"` placeholder instead of being dropped.
#[must_use]
pub fn tally_votes(players: &[Player], votes: &IndexMap<Uuid, Uuid>) -> Vec<VoteLine> {
    let name_of = |id: Uuid| {
        players
            .iter()
            .find(|p| p.id == id)
            .map_or_else(|| UNKNOWN_NAME.to_owned(), |p| p.name.clone())
    };

    let mut rows: IndexMap<Uuid, VoteLine> = IndexMap::new();
    for (voter_id, target_id) in votes {
        let row = rows.entry(*target_id).or_insert_with(|| VoteLine {
            voted_id: *target_id,
            name: name_of(*target_id),
            count: 0,
            voters: Vec::new(),
        });
        row.count += 1;
        row.voters.push(name_of(*voter_id));
    }

    let mut lines: Vec<VoteLine> = rows.into_values().collect();
    // Stable sort: ties keep first-ballot order.
    lines.sort_by(|a, b| b.count.cmp(&a.count));
    lines
}

/// Decides the round from a sorted tally.
///
/// Citizens win when the top-voted player is a wolf. An empty tally means
/// nobody was accused, so the wolves win by default.
#[must_use]
pub fn decide_winner(players: &[Player], lines: &[VoteLine]) -> Faction {
    let Some(top) = lines.first() else {
        return Faction::Wolves;
    };
    let caught = players
        .iter()
        .any(|p| p.role == Some(Role::Wolf) && p.id == top.voted_id);
    if caught { Faction::Citizens } else { Faction::Wolves }
}

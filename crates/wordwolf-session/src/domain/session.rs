//! The game session record and its phase transitions.
//!
//! A session is a single plain record: the roster, the current teams, the
//! discussion timer, accumulated pairing history, and the ballot box. Every
//! transition validates the current phase and then mutates the record in
//! place; persistence and timestamping belong to the store.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::Serialize;
use uuid::Uuid;
use wordwolf_core::clock::Clock;
use wordwolf_core::error::GameError;
use wordwolf_core::rng::GameRng;

use super::partition::{partition_teams, PlayerPair};
use super::player::{Player, Role};

/// Minimum roster size for a round.
pub const MIN_PLAYERS: usize = 4;

/// Discussion timer length in seconds.
pub const ROUND_SECONDS: u32 = 600;

/// The four phases of a round, cycled strictly in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GamePhase {
    /// Roster assembly; players may join and leave.
    Waiting,
    /// Teams are formed and the discussion timer runs.
    Playing,
    /// Discussion is over; ballots are collected.
    Voting,
    /// Ballots are tallied and the wolves revealed.
    Result,
}

impl GamePhase {
    /// Lowercase phase name for log fields.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Waiting => "waiting",
            Self::Playing => "playing",
            Self::Voting => "voting",
            Self::Result => "result",
        }
    }
}

/// The whole game session as one record.
///
/// This is both the authoritative state and the wire snapshot pushed to
/// facilitator views; it serializes with camelCase keys. `teams` holds copies
/// of roster entries, and mutations keep the two collections consistent.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSession {
    /// Session identifier.
    pub id: Uuid,
    /// Current phase of the round cycle.
    pub phase: GamePhase,
    /// Everyone in the session, with their current round assignments.
    pub players: Vec<Player>,
    /// Teams formed for the current round; empty while waiting.
    pub teams: Vec<Vec<Player>>,
    /// Seconds left on the discussion timer.
    pub timer_seconds: u32,
    /// Whether the discussion timer is counting down.
    pub timer_running: bool,
    /// Every pair that has shared a team in any round of this session.
    pub pairing_history: BTreeSet<PlayerPair>,
    /// Ballots for the current round, voter id to target id, in the order
    /// each voter first voted.
    pub votes: IndexMap<Uuid, Uuid>,
    /// When the session was created.
    pub created_at: DateTime<Utc>,
    /// When the session was last written; stamped by the store.
    pub updated_at: DateTime<Utc>,
}

impl GameSession {
    /// Creates an empty session in the waiting phase.
    #[must_use]
    pub fn new(id: Uuid, clock: &dyn Clock) -> Self {
        let now = clock.now();
        Self {
            id,
            phase: GamePhase::Waiting,
            players: Vec::new(),
            teams: Vec::new(),
            timer_seconds: ROUND_SECONDS,
            timer_running: false,
            pairing_history: BTreeSet::new(),
            votes: IndexMap::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Adds a player to the roster and returns the new entry.
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidState` outside the waiting phase and
    /// `GameError::Validation` if the trimmed name is empty.
    pub fn add_player(&mut self, id: Uuid, name: &str) -> Result<&Player, GameError> {
        if self.phase != GamePhase::Waiting {
            return Err(GameError::InvalidState(
                "players can only join during the waiting phase".to_owned(),
            ));
        }
        let name = name.trim();
        if name.is_empty() {
            return Err(GameError::Validation(
                "player name must not be empty".to_owned(),
            ));
        }

        self.players.push(Player::new(id, name.to_owned()));
        Ok(self
            .players
            .last()
            .expect("roster is non-empty after push"))
    }

    /// Removes a player from the roster. Pairing history entries that
    /// mention the player are kept; they are harmless and preserve repeat
    /// avoidance if the player rejoins under the same id.
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidState` outside the waiting phase and
    /// `GameError::PlayerNotFound` for an unknown id.
    pub fn remove_player(&mut self, player_id: Uuid) -> Result<(), GameError> {
        if self.phase != GamePhase::Waiting {
            return Err(GameError::InvalidState(
                "players can only leave during the waiting phase".to_owned(),
            ));
        }
        let index = self
            .players
            .iter()
            .position(|p| p.id == player_id)
            .ok_or(GameError::PlayerNotFound(player_id))?;
        self.players.remove(index);
        Ok(())
    }

    /// Starts a round: partitions the roster into teams, assigns one wolf
    /// and a topic per team, and begins the discussion timer.
    ///
    /// Role and topic draws happen after an arrangement is adopted, so the
    /// number of random draws per attempt is fixed and a seeded source
    /// reproduces the entire round setup.
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidState` outside the waiting phase,
    /// `GameError::InsufficientPlayers` below [`MIN_PLAYERS`], and
    /// `GameError::Validation` if `topic_ids` is empty.
    #[allow(clippy::cast_possible_truncation)]
    pub fn start_game(
        &mut self,
        topic_ids: &[u32],
        rng: &mut dyn GameRng,
    ) -> Result<(), GameError> {
        if self.phase != GamePhase::Waiting {
            return Err(GameError::InvalidState(
                "a round can only start from the waiting phase".to_owned(),
            ));
        }
        if self.players.len() < MIN_PLAYERS {
            return Err(GameError::InsufficientPlayers {
                required: MIN_PLAYERS,
                actual: self.players.len(),
            });
        }
        if topic_ids.is_empty() {
            return Err(GameError::Validation(
                "no topics available for assignment".to_owned(),
            ));
        }

        let plan = partition_teams(&self.players, &self.pairing_history, rng)?;

        let mut teams = plan.teams;
        for (team_index, team) in teams.iter_mut().enumerate() {
            let team_number = team_index as u32 + 1;
            let wolf_index = rng.next_index(team.len());
            let topic_id = topic_ids[rng.next_index(topic_ids.len())];
            for (member_index, member) in team.iter_mut().enumerate() {
                member.team_number = Some(team_number);
                member.topic_id = Some(topic_id);
                member.role = Some(if member_index == wolf_index {
                    Role::Wolf
                } else {
                    Role::Citizen
                });
                member.vote = None;
            }
        }

        self.pairing_history.extend(plan.new_pairs);
        self.players = teams.concat();
        self.teams = teams;
        self.votes.clear();
        self.phase = GamePhase::Playing;
        self.timer_seconds = ROUND_SECONDS;
        self.timer_running = true;
        Ok(())
    }

    /// Moves the round from discussion to voting and stops the timer.
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidState` outside the playing phase.
    pub fn start_voting(&mut self) -> Result<(), GameError> {
        if self.phase != GamePhase::Playing {
            return Err(GameError::InvalidState(
                "voting can only start from the playing phase".to_owned(),
            ));
        }
        self.phase = GamePhase::Voting;
        self.timer_running = false;
        Ok(())
    }

    /// Closes the ballot box and moves the round to the result phase.
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidState` outside the voting phase.
    pub fn end_voting(&mut self) -> Result<(), GameError> {
        if self.phase != GamePhase::Voting {
            return Err(GameError::InvalidState(
                "the round can only conclude from the voting phase".to_owned(),
            ));
        }
        self.phase = GamePhase::Result;
        self.timer_running = false;
        Ok(())
    }

    /// Returns the session to the waiting phase for another round. The
    /// roster and pairing history survive; teams, ballots, per-player
    /// assignments, and the timer are reset.
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidState` outside the result phase.
    pub fn reset_round(&mut self) -> Result<(), GameError> {
        if self.phase != GamePhase::Result {
            return Err(GameError::InvalidState(
                "a new round can only be prepared from the result phase".to_owned(),
            ));
        }
        self.phase = GamePhase::Waiting;
        self.teams.clear();
        self.votes.clear();
        for player in &mut self.players {
            player.clear_round_state();
        }
        self.timer_seconds = ROUND_SECONDS;
        self.timer_running = false;
        Ok(())
    }

    /// Pauses or resumes the discussion timer.
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidState` outside the playing phase.
    pub fn toggle_timer(&mut self) -> Result<(), GameError> {
        if self.phase != GamePhase::Playing {
            return Err(GameError::InvalidState(
                "the discussion timer only runs during the playing phase".to_owned(),
            ));
        }
        self.timer_running = !self.timer_running;
        Ok(())
    }

    /// Rewinds the discussion timer to its full length. The running flag is
    /// left alone; pausing stays a `toggle_timer` concern.
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidState` outside the playing phase.
    pub fn reset_timer(&mut self) -> Result<(), GameError> {
        if self.phase != GamePhase::Playing {
            return Err(GameError::InvalidState(
                "the discussion timer only runs during the playing phase".to_owned(),
            ));
        }
        self.timer_seconds = ROUND_SECONDS;
        Ok(())
    }

    /// Advances the discussion timer by one second. When the timer reaches
    /// zero the session moves to the voting phase on its own.
    ///
    /// Returns `true` if the session changed; a paused timer or a
    /// non-playing phase makes this a no-op.
    pub fn tick(&mut self) -> bool {
        if self.phase != GamePhase::Playing || !self.timer_running || self.timer_seconds == 0 {
            return false;
        }
        self.timer_seconds -= 1;
        if self.timer_seconds == 0 {
            self.phase = GamePhase::Voting;
            self.timer_running = false;
        }
        true
    }

    /// Records a ballot. Revoting replaces the voter's target but keeps the
    /// voter's original ballot position, which later breaks tallying ties.
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidState` during the waiting phase and
    /// `GameError::PlayerNotFound` if either id is not on the roster.
    pub fn cast_vote(&mut self, voter_id: Uuid, target_id: Uuid) -> Result<(), GameError> {
        if self.phase == GamePhase::Waiting {
            return Err(GameError::InvalidState(
                "votes cannot be cast before a round starts".to_owned(),
            ));
        }
        if !self.players.iter().any(|p| p.id == voter_id) {
            return Err(GameError::PlayerNotFound(voter_id));
        }
        if !self.players.iter().any(|p| p.id == target_id) {
            return Err(GameError::PlayerNotFound(target_id));
        }

        self.votes.insert(voter_id, target_id);

        // Teams hold copies of the roster entries; stamp the ballot on both.
        for player in &mut self.players {
            if player.id == voter_id {
                player.vote = Some(target_id);
            }
        }
        for team in &mut self.teams {
            for player in team {
                if player.id == voter_id {
                    player.vote = Some(target_id);
                }
            }
        }
        Ok(())
    }
}

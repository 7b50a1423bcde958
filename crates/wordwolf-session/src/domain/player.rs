//! Players and their per-round assignments.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Faction role a player holds during a round.
///
/// Unassigned players (waiting phase, or a fresh round) carry no role at all;
/// the snapshot serializes the absence as `null` rather than a sentinel value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Receives the team's shared prompt.
    Citizen,
    /// Receives the odd prompt and must avoid discovery.
    Wolf,
}

/// A participant in the session.
///
/// `role`, `team_number`, and `topic_id` are populated by round setup and
/// cleared again when the session returns to the waiting phase. `vote` mirrors
/// the session-level ballot map for display purposes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    /// Stable identifier, assigned at join time.
    pub id: Uuid,
    /// Display name shown at the table.
    pub name: String,
    /// Round role, `None` until a round starts.
    pub role: Option<Role>,
    /// 1-based team number, `None` until a round starts.
    pub team_number: Option<u32>,
    /// Topic handed to this player, `None` until a round starts.
    pub topic_id: Option<u32>,
    /// Who this player voted for in the current round.
    pub vote: Option<Uuid>,
    /// Presence flag; joining sets it, the coordinator never unsets it.
    pub online: bool,
}

impl Player {
    /// Creates a player with no round assignments.
    #[must_use]
    pub fn new(id: Uuid, name: String) -> Self {
        Self {
            id,
            name,
            role: None,
            team_number: None,
            topic_id: None,
            vote: None,
            online: true,
        }
    }

    /// Clears every per-round assignment, keeping identity and presence.
    pub fn clear_round_state(&mut self) {
        self.role = None;
        self.team_number = None;
        self.topic_id = None;
        self.vote = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_player_has_no_assignments() {
        let player = Player::new(Uuid::new_v4(), "Akira".to_owned());

        assert!(player.role.is_none());
        assert!(player.team_number.is_none());
        assert!(player.topic_id.is_none());
        assert!(player.vote.is_none());
        assert!(player.online);
    }

    #[test]
    fn test_clear_round_state_keeps_identity() {
        let id = Uuid::new_v4();
        let mut player = Player::new(id, "Akira".to_owned());
        player.role = Some(Role::Wolf);
        player.team_number = Some(2);
        player.topic_id = Some(7);
        player.vote = Some(Uuid::new_v4());

        player.clear_round_state();

        assert_eq!(player.id, id);
        assert_eq!(player.name, "Akira");
        assert!(player.online);
        assert!(player.role.is_none());
        assert!(player.team_number.is_none());
        assert!(player.topic_id.is_none());
        assert!(player.vote.is_none());
    }

    #[test]
    fn test_player_serializes_with_camel_case_keys() {
        let player = Player::new(Uuid::new_v4(), "Akira".to_owned());

        let json = serde_json::to_value(&player).unwrap();

        assert!(json.get("teamNumber").is_some());
        assert!(json.get("topicId").is_some());
        assert_eq!(json["role"], serde_json::Value::Null);
        assert_eq!(json["online"], serde_json::Value::Bool(true));
    }

    #[test]
    fn test_role_serializes_lowercase() {
        assert_eq!(
            serde_json::to_value(Role::Citizen).unwrap(),
            serde_json::Value::String("citizen".to_owned())
        );
        assert_eq!(
            serde_json::to_value(Role::Wolf).unwrap(),
            serde_json::Value::String("wolf".to_owned())
        );
    }
}

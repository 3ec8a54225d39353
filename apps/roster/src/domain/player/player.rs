use serde::{Deserialize, Serialize};

use super::value_objects::{PlayerName, Team};
use crate::domain::errors::RosterResult;

/// A player record: one name on one team
///
/// The owning group is not part of the record; it is implied by the
/// storage key the record lives under.
///
/// # Example
/// ```
/// use teams_roster::domain::player::{Player, Team};
///
/// let player = Player::new("Ana", Team::A).expect("valid player");
/// assert_eq!(player.name().as_str(), "Ana");
/// assert_eq!(player.team(), Team::A);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: PlayerName,
    team: Team,
}

impl Player {
    /// Creates a player, validating the name
    pub fn new(name: impl Into<String>, team: Team) -> RosterResult<Self> {
        Ok(Self {
            name: PlayerName::new(name)?,
            team,
        })
    }

    /// Creates a player from an already validated name
    pub fn with_name(name: PlayerName, team: Team) -> Self {
        Self { name, team }
    }

    pub fn name(&self) -> &PlayerName {
        &self.name
    }

    pub fn team(&self) -> Team {
        self.team
    }

    /// True when both records hold the same name on the same team
    pub fn same_slot(&self, other: &Player) -> bool {
        self.team == other.team && self.name == other.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_player_with_valid_name() {
        let player = Player::new("Bruno", Team::B).unwrap();

        assert_eq!(player.name().as_str(), "Bruno");
        assert_eq!(player.team(), Team::B);
    }

    #[test]
    fn create_player_with_empty_name_fails() {
        assert!(Player::new("", Team::A).is_err());
    }

    #[test]
    fn same_slot_requires_name_and_team() {
        let a = Player::new("Ana", Team::A).unwrap();

        assert!(a.same_slot(&Player::new("Ana", Team::A).unwrap()));
        assert!(!a.same_slot(&Player::new("Ana", Team::B).unwrap()));
        assert!(!a.same_slot(&Player::new("Bia", Team::A).unwrap()));
    }

    #[test]
    fn persisted_shape() {
        let player = Player::new("Ana", Team::A).unwrap();
        let json = serde_json::to_value(&player).unwrap();

        assert_eq!(json, serde_json::json!({ "name": "Ana", "team": "Team A" }));
    }

    #[test]
    fn record_with_unknown_team_fails_to_decode() {
        let result: Result<Player, _> =
            serde_json::from_str(r#"{ "name": "Ana", "team": "Time A" }"#);
        assert!(result.is_err());
    }
}

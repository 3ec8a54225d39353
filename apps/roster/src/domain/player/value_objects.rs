use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::errors::{RosterError, RosterResult};

/// Name of a player within a group
///
/// # Invariants
/// - Must contain at least one non-whitespace character
/// - Is stored verbatim
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PlayerName(String);

impl PlayerName {
    /// Creates a new PlayerName value object
    ///
    /// # Example
    /// ```
    /// use teams_roster::domain::player::PlayerName;
    ///
    /// let name = PlayerName::new("Ana").expect("valid name");
    /// assert_eq!(name.as_str(), "Ana");
    /// ```
    pub fn new(name: impl Into<String>) -> RosterResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(RosterError::InvalidName(
                "player name cannot be empty".to_string(),
            ));
        }
        Ok(PlayerName(name))
    }

    /// Returns the name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PlayerName {
    type Error = RosterError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        PlayerName::new(value)
    }
}

impl From<PlayerName> for String {
    fn from(name: PlayerName) -> Self {
        name.0
    }
}

impl fmt::Display for PlayerName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One of the two sides a group is split into
///
/// Persisted by its label, so a stored record always carries one of
/// `"Team A"` or `"Team B"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    #[serde(rename = "Team A")]
    A,
    #[serde(rename = "Team B")]
    B,
}

impl Team {
    /// Every team, in the order they are offered to the user
    pub const ALL: [Team; 2] = [Team::A, Team::B];

    /// Returns the label used for display and persistence
    pub fn label(&self) -> &'static str {
        match self {
            Team::A => "Team A",
            Team::B => "Team B",
        }
    }
}

impl FromStr for Team {
    type Err = RosterError;

    /// Parses a team label
    ///
    /// # Example
    /// ```
    /// use teams_roster::domain::player::Team;
    ///
    /// assert_eq!("Team B".parse::<Team>().unwrap(), Team::B);
    /// assert!("Team C".parse::<Team>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Team::ALL
            .into_iter()
            .find(|team| team.label() == s)
            .ok_or_else(|| RosterError::InvalidTeam(s.to_string()))
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

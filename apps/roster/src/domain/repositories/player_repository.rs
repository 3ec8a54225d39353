use async_trait::async_trait;

use crate::domain::errors::RosterResult;
use crate::domain::group::GroupName;
use crate::domain::player::{Player, PlayerName, Team};

/// Repository trait for the players of each group
#[async_trait]
pub trait PlayerRepository: Send + Sync {
    /// Add a player to a group
    ///
    /// Fails with `DuplicatePlayer` if the same name is already on the same
    /// team of that group. The same name on the other team is allowed.
    async fn add_player(&self, player: &Player, group: &GroupName) -> RosterResult<()>;

    /// List a group's players on one team, in insertion order
    async fn list_players_by_group_and_team(
        &self,
        group: &GroupName,
        team: Team,
    ) -> RosterResult<Vec<Player>>;

    /// List every player of a group, in insertion order
    async fn list_players_by_group(&self, group: &GroupName) -> RosterResult<Vec<Player>>;

    /// Remove every player with this name from the group, on either team
    ///
    /// Succeeds without writing when no player matches.
    async fn remove_player(&self, name: &PlayerName, group: &GroupName) -> RosterResult<()>;

    /// Remove the player with this name from one team only
    async fn remove_player_from_team(
        &self,
        name: &PlayerName,
        team: Team,
        group: &GroupName,
    ) -> RosterResult<()>;

    /// Delete all player data for a group
    async fn remove_players_by_group(&self, group: &GroupName) -> RosterResult<()>;
}

use async_trait::async_trait;

use crate::domain::errors::{RosterError, RosterResult};
use crate::domain::group::GroupName;
use crate::domain::player::{Player, PlayerName, Team};
use crate::domain::repositories::PlayerRepository;
use crate::infrastructure::store::keys::player_collection;
use crate::infrastructure::store::{JsonStore, KeyValueStore};

/// Key-value implementation of PlayerRepository
///
/// Each group's players are one JSON array under `groups.<name>.players`.
/// Writes hold that key's lock across the read-modify-write.
pub struct KvPlayerRepository<S: ?Sized> {
    store: JsonStore<S>,
}

impl<S: ?Sized> Clone for KvPlayerRepository<S> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
        }
    }
}

impl<S> KvPlayerRepository<S>
where
    S: KeyValueStore + ?Sized,
{
    /// Creates a new KvPlayerRepository
    ///
    /// # Arguments
    /// * `store` - Typed store shared with the group repository
    pub fn new(store: JsonStore<S>) -> Self {
        Self { store }
    }

    async fn load(&self, key: &str) -> RosterResult<Vec<Player>> {
        Ok(self.store.read_or_default(key).await?)
    }

    /// Drop every record matching `predicate`, writing only if something changed
    async fn remove_where<F>(&self, group: &GroupName, predicate: F) -> RosterResult<usize>
    where
        F: Fn(&Player) -> bool + Send,
    {
        let key = player_collection(group);
        let _guard = self.store.lock(&key).await;

        let mut players = self.load(&key).await?;
        let before = players.len();
        players.retain(|p| !predicate(p));
        let removed = before - players.len();

        if removed > 0 {
            self.store.write(&key, &players).await?;
        }
        Ok(removed)
    }
}

#[async_trait]
impl<S> PlayerRepository for KvPlayerRepository<S>
where
    S: KeyValueStore + ?Sized,
{
    async fn add_player(&self, player: &Player, group: &GroupName) -> RosterResult<()> {
        let key = player_collection(group);
        let _guard = self.store.lock(&key).await;

        let mut players = self.load(&key).await?;
        if players.iter().any(|p| p.same_slot(player)) {
            tracing::warn!(
                group = %group,
                player = %player.name(),
                team = %player.team(),
                "rejected duplicate player"
            );
            return Err(RosterError::DuplicatePlayer);
        }

        players.push(player.clone());
        self.store.write(&key, &players).await?;

        tracing::info!(group = %group, player = %player.name(), team = %player.team(), "player added");
        Ok(())
    }

    async fn list_players_by_group_and_team(
        &self,
        group: &GroupName,
        team: Team,
    ) -> RosterResult<Vec<Player>> {
        let players = self.list_players_by_group(group).await?;
        Ok(players.into_iter().filter(|p| p.team() == team).collect())
    }

    async fn list_players_by_group(&self, group: &GroupName) -> RosterResult<Vec<Player>> {
        let players = self.load(&player_collection(group)).await?;
        tracing::debug!(group = %group, count = players.len(), "loaded players");
        Ok(players)
    }

    async fn remove_player(&self, name: &PlayerName, group: &GroupName) -> RosterResult<()> {
        let removed = self.remove_where(group, |p| p.name() == name).await?;
        tracing::info!(group = %group, player = %name, removed, "player removed");
        Ok(())
    }

    async fn remove_player_from_team(
        &self,
        name: &PlayerName,
        team: Team,
        group: &GroupName,
    ) -> RosterResult<()> {
        let removed = self
            .remove_where(group, |p| p.team() == team && p.name() == name)
            .await?;
        tracing::info!(group = %group, player = %name, team = %team, removed, "player removed from team");
        Ok(())
    }

    async fn remove_players_by_group(&self, group: &GroupName) -> RosterResult<()> {
        let key = player_collection(group);
        let _guard = self.store.lock(&key).await;

        self.store.remove(&key).await?;
        tracing::debug!(group = %group, "player list deleted");
        Ok(())
    }
}

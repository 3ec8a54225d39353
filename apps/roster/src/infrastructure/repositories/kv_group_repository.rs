use async_trait::async_trait;

use super::KvPlayerRepository;
use crate::domain::errors::{RosterError, RosterResult};
use crate::domain::group::GroupName;
use crate::domain::repositories::{GroupRepository, PlayerRepository};
use crate::infrastructure::store::keys::GROUP_COLLECTION;
use crate::infrastructure::store::{JsonStore, KeyValueStore};

/// Key-value implementation of GroupRepository
///
/// Group names are one JSON array under `groups`. Removing a group also
/// deletes its player list through the player repository. Lock order is
/// the group list first, then the player list.
pub struct KvGroupRepository<S: ?Sized> {
    store: JsonStore<S>,
    players: KvPlayerRepository<S>,
}

impl<S: ?Sized> Clone for KvGroupRepository<S> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            players: self.players.clone(),
        }
    }
}

impl<S> KvGroupRepository<S>
where
    S: KeyValueStore + ?Sized,
{
    /// Creates a new KvGroupRepository
    ///
    /// # Arguments
    /// * `store` - Typed store; the cascading player repository shares it
    pub fn new(store: JsonStore<S>) -> Self {
        let players = KvPlayerRepository::new(store.clone());
        Self { store, players }
    }

    async fn load(&self) -> RosterResult<Vec<GroupName>> {
        Ok(self.store.read_or_default(GROUP_COLLECTION).await?)
    }
}

#[async_trait]
impl<S> GroupRepository for KvGroupRepository<S>
where
    S: KeyValueStore + ?Sized,
{
    async fn list_groups(&self) -> RosterResult<Vec<GroupName>> {
        let groups = self.load().await?;
        tracing::debug!(count = groups.len(), "loaded groups");
        Ok(groups)
    }

    async fn create_group(&self, name: &GroupName) -> RosterResult<()> {
        let _guard = self.store.lock(GROUP_COLLECTION).await;

        let mut groups = self.load().await?;
        if groups.contains(name) {
            tracing::warn!(group = %name, "rejected duplicate group");
            return Err(RosterError::DuplicateGroup);
        }

        groups.push(name.clone());
        self.store.write(GROUP_COLLECTION, &groups).await?;

        tracing::info!(group = %name, "group created");
        Ok(())
    }

    async fn remove_group(&self, name: &GroupName) -> RosterResult<()> {
        let _guard = self.store.lock(GROUP_COLLECTION).await;

        let mut groups = self.load().await?;
        let before = groups.len();
        groups.retain(|g| g != name);
        if groups.len() != before {
            self.store.write(GROUP_COLLECTION, &groups).await?;
        }

        self.players
            .remove_players_by_group(name)
            .await
            .inspect_err(|e| {
                tracing::error!(group = %name, error = %e, "group removed but player data was left behind");
            })?;

        tracing::info!(group = %name, "group removed");
        Ok(())
    }

    async fn group_exists(&self, name: &GroupName) -> RosterResult<bool> {
        Ok(self.load().await?.contains(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::StoreError;
    use crate::infrastructure::store::InMemoryStore;
    use std::sync::Arc;

    fn repo_over(store: Arc<InMemoryStore>) -> KvGroupRepository<InMemoryStore> {
        KvGroupRepository::new(JsonStore::new(store))
    }

    #[tokio::test]
    async fn list_groups_empty_when_absent() {
        let repo = repo_over(Arc::new(InMemoryStore::new()));
        assert!(repo.list_groups().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn duplicate_group_is_not_written() {
        let store = Arc::new(InMemoryStore::new());
        let repo = repo_over(store.clone());
        let name = GroupName::new("A").unwrap();

        repo.create_group(&name).await.unwrap();
        let before = store.get(GROUP_COLLECTION).await.unwrap();

        assert!(matches!(
            repo.create_group(&name).await,
            Err(RosterError::DuplicateGroup)
        ));
        assert_eq!(store.get(GROUP_COLLECTION).await.unwrap(), before);
    }

    #[tokio::test]
    async fn group_exists_after_create() {
        let repo = repo_over(Arc::new(InMemoryStore::new()));
        let name = GroupName::new("A").unwrap();

        assert!(!repo.group_exists(&name).await.unwrap());
        repo.create_group(&name).await.unwrap();
        assert!(repo.group_exists(&name).await.unwrap());
    }

    #[tokio::test]
    async fn corrupt_group_list_surfaces_storage_error() {
        let store = Arc::new(InMemoryStore::with_entries([(GROUP_COLLECTION, "[1, 2]")]));
        let repo = repo_over(store);

        assert!(matches!(
            repo.list_groups().await,
            Err(RosterError::Storage(StoreError::Corrupt { .. }))
        ));
    }

    #[tokio::test]
    async fn removing_unknown_group_succeeds() {
        let repo = repo_over(Arc::new(InMemoryStore::new()));
        assert!(repo
            .remove_group(&GroupName::new("ghost").unwrap())
            .await
            .is_ok());
    }
}

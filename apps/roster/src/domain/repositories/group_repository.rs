use async_trait::async_trait;

use crate::domain::errors::RosterResult;
use crate::domain::group::GroupName;

/// Repository trait for the set of group names
///
/// Implementations re-read storage on every call; nothing is cached.
#[async_trait]
pub trait GroupRepository: Send + Sync {
    /// List all group names in creation order (empty if none were stored)
    async fn list_groups(&self) -> RosterResult<Vec<GroupName>>;

    /// Create a group, failing with `DuplicateGroup` if the name is taken
    async fn create_group(&self, name: &GroupName) -> RosterResult<()>;

    /// Remove a group together with all of its players
    ///
    /// The two deletions are not transactional: if the second one fails the
    /// group is gone but its player data may remain in storage.
    async fn remove_group(&self, name: &GroupName) -> RosterResult<()>;

    /// Check whether a group with this name exists
    async fn group_exists(&self, name: &GroupName) -> RosterResult<bool>;
}

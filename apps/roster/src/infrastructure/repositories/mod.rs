// Repository implementations (data access layer)
// Adapters that implement domain repository interfaces

pub mod kv_group_repository;
pub mod kv_player_repository;

use std::sync::Arc;

use crate::infrastructure::store::{JsonStore, KeyValueStore};

pub use kv_group_repository::KvGroupRepository;
pub use kv_player_repository::KvPlayerRepository;

/// Builds both repositories over one store, sharing its key locks
pub fn kv_repositories<S>(store: Arc<S>) -> (KvGroupRepository<S>, KvPlayerRepository<S>)
where
    S: KeyValueStore + ?Sized,
{
    let store = JsonStore::new(store);
    (
        KvGroupRepository::new(store.clone()),
        KvPlayerRepository::new(store),
    )
}

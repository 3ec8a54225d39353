use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};

use super::KeyValueStore;
use crate::domain::errors::StoreError;

/// Typed JSON view over a [`KeyValueStore`]
///
/// Decoding fails closed: a stored value that does not match the expected
/// schema is reported as [`StoreError::Corrupt`] naming the key.
///
/// Also owns one async mutex per key. Callers doing a read-modify-write
/// hold [`JsonStore::lock`] for the whole sequence so that two concurrent
/// writers to the same key cannot lose each other's update. Clones share
/// both the store and the lock table.
pub struct JsonStore<S: ?Sized> {
    store: Arc<S>,
    locks: Arc<Mutex<HashMap<String, Arc<Mutex<()>>>>>,
}

impl<S: ?Sized> Clone for JsonStore<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            locks: Arc::clone(&self.locks),
        }
    }
}

impl<S> JsonStore<S>
where
    S: KeyValueStore + ?Sized,
{
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            locks: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Acquire the write lock for `key`
    ///
    /// Slots nobody holds or waits on are dropped from the table here, so it
    /// only ever holds the keys currently in use.
    pub async fn lock(&self, key: &str) -> OwnedMutexGuard<()> {
        let slot = {
            let mut table = self.locks.lock().await;
            // A strong count of 1 means only the table references the slot
            table.retain(|k, slot| k == key || Arc::strong_count(slot) > 1);
            Arc::clone(table.entry(key.to_string()).or_default())
        };
        slot.lock_owned().await
    }

    /// Read and decode the value under `key`
    pub async fn read<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        let Some(raw) = self.store.get(key).await? else {
            return Ok(None);
        };

        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| StoreError::corrupt(key, e))
    }

    /// Read the value under `key`, falling back to `T::default()` when absent
    pub async fn read_or_default<T>(&self, key: &str) -> Result<T, StoreError>
    where
        T: DeserializeOwned + Default,
    {
        Ok(self.read(key).await?.unwrap_or_default())
    }

    /// Encode and store `value` under `key`
    pub async fn write<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let encoded = serde_json::to_string(value).map_err(StoreError::Encode)?;
        self.store.set(key, encoded).await
    }

    /// Delete `key`
    pub async fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.store.remove(key).await
    }
}

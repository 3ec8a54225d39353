// Key-value store port and its backends
//
// Values are opaque strings; typed JSON access lives in `json`.

pub mod file;
pub mod json;
pub mod keys;
pub mod memory;

use async_trait::async_trait;

use crate::domain::errors::StoreError;

pub use file::JsonFileStore;
pub use json::JsonStore;
pub use memory::InMemoryStore;

/// Asynchronous string-to-string store
///
/// Implementations must be safe to share between tasks. Removing a key that
/// does not exist is not an error.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Get the value stored under `key`, or `None` if absent
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, replacing any previous value
    async fn set(&self, key: &str, value: String) -> Result<(), StoreError>;

    /// Delete `key`
    async fn remove(&self, key: &str) -> Result<(), StoreError>;
}

//! Key-value storage port - Asynchronous persistence for worlds and characters

use anyhow::Result;
use async_trait::async_trait;

/// Asynchronous key-value persistence adapter
///
/// Mirrors the original client-side storage contract: string keys, string
/// values, no listing. Callers encode their records as JSON.
#[async_trait]
pub trait KeyValueStorePort: Send + Sync {
    /// Prepare the backing store (create tables, open files)
    async fn initialize(&self) -> Result<()>;

    /// Fetch a value; `None` when the key is absent
    async fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Insert or replace a value
    async fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Remove a key; removing an absent key is not an error
    async fn remove_item(&self, key: &str) -> Result<()>;
}

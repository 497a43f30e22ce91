//! Shared application state

use anyhow::Result;

use crate::application::ports::outbound::KeyValueStorePort;
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::persistence::SqliteKeyValueStore;

/// Shared application state
///
/// Generation routes deliberately construct a fresh Ollama client per request
/// instead of holding one here; only the config and the storage adapter are
/// shared.
pub struct AppState {
    pub config: AppConfig,
    pub storage: SqliteKeyValueStore,
}

impl AppState {
    pub async fn new(config: AppConfig) -> Result<Self> {
        let storage = SqliteKeyValueStore::connect(&config.database_url).await?;
        storage.initialize().await?;

        Ok(Self { config, storage })
    }
}

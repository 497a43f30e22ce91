//! Persistence - SQLite key-value adapter

mod kv_store;

pub use kv_store::SqliteKeyValueStore;

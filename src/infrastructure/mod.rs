//! Infrastructure layer - External adapters and implementations
//!
//! This layer contains:
//! - HTTP: REST API routes and error mapping
//! - Ollama: LLM integration for analysis and generation
//! - Persistence: SQLite key-value store for worlds and characters
//! - Config: Application configuration
//! - State: Shared application state

pub mod config;
pub mod http;
pub mod ollama;
pub mod persistence;
pub mod state;

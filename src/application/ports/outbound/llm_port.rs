//! LLM port - Interface to the generative AI provider

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Result of a single LLM completion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedContent {
    /// Raw text produced by the model
    pub content: String,
    /// Why generation stopped ("stop", "length", ...)
    pub finish_reason: String,
    /// Tokens consumed by the prompt
    pub prompt_tokens: u32,
    /// Tokens produced in the completion
    pub completion_tokens: u32,
}

/// Interface to an LLM provider
///
/// Implementations own their transport and timeout behavior; callers see a
/// single completion per call and surface failures immediately (no retries
/// at this layer).
#[async_trait]
pub trait LlmPort: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Generate a completion for a free-text prompt
    async fn generate_content(&self, prompt: &str) -> Result<GeneratedContent, Self::Error>;
}

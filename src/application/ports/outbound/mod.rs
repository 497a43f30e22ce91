//! Outbound ports - Interfaces that the application requires from external systems

mod llm_port;
mod storage_port;

pub use llm_port::{GeneratedContent, LlmPort};
pub use storage_port::KeyValueStorePort;

//! Application services - Use case implementations
//!
//! Each service is generic over the LLM port so tests can inject fixtures
//! instead of a live client.

pub mod analysis_service;
pub mod generation_service;

pub use analysis_service::{
    AnalysisError, AttributeSuggestion, SkillSuggestion, WorldAnalysis, WorldAnalysisService,
};
pub use generation_service::{
    CharacterGenerationService, GenerateCharacterRequest, GenerationError,
};

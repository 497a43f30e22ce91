//! Value objects - Immutable domain primitives

mod difficulty;
mod ids;

pub use difficulty::Difficulty;
pub use ids::{AttributeId, CharacterId, SkillId, WorldId};

//! Domain entities

mod character;
mod world;

pub use character::{Character, CharacterAttribute, CharacterSkill, DEFAULT_CHARACTER_TYPE};
pub use world::{AttributeDefinition, SkillDefinition, World};

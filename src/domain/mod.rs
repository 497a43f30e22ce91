//! Domain layer - Core business logic with no external dependencies
//!
//! This layer contains:
//! - Entities: World and Character with their attribute/skill collections
//! - Value Objects: Strongly-typed ids, skill difficulty
//! - Enrichment: Merging character entries with world templates for display

pub mod enrichment;
pub mod entities;
pub mod value_objects;

//! World entity - A setting with attribute and skill templates

use crate::domain::value_objects::{AttributeId, Difficulty, SkillId, WorldId};

/// A world (setting) that characters belong to
///
/// The world defines the attribute and skill templates that characters
/// reference. Template ids are unique within a world; collection order is
/// the display order chosen at creation time.
#[derive(Debug, Clone)]
pub struct World {
    pub id: WorldId,
    pub name: String,
    pub description: String,
    pub attributes: Vec<AttributeDefinition>,
    pub skills: Vec<SkillDefinition>,
}

impl World {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: WorldId::new(),
            name: name.into(),
            description: String::new(),
            attributes: Vec::new(),
            skills: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_attribute(mut self, attribute: AttributeDefinition) -> Self {
        self.attributes.push(attribute);
        self
    }

    pub fn with_skill(mut self, skill: SkillDefinition) -> Self {
        self.skills.push(skill);
        self
    }
}

/// Template for an attribute available in a world
#[derive(Debug, Clone)]
pub struct AttributeDefinition {
    pub id: AttributeId,
    pub name: String,
    pub category: String,
}

impl AttributeDefinition {
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id: AttributeId::new(),
            name: name.into(),
            category: category.into(),
        }
    }
}

/// Template for a skill available in a world
#[derive(Debug, Clone)]
pub struct SkillDefinition {
    pub id: SkillId,
    pub name: String,
    pub category: String,
    pub difficulty: Difficulty,
}

impl SkillDefinition {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        difficulty: Difficulty,
    ) -> Self {
        Self {
            id: SkillId::new(),
            name: name.into(),
            category: category.into(),
            difficulty,
        }
    }
}

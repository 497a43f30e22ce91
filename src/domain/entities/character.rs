//! Character entity - Player- or AI-generated entities within a world

use crate::domain::value_objects::{AttributeId, CharacterId, SkillId, WorldId};

/// Character type tag used when no explicit type is requested
pub const DEFAULT_CHARACTER_TYPE: &str = "original";

/// A character belonging to a world
///
/// Attribute and skill entries may override or extend the world's templates.
/// Each entry conceptually corresponds to zero-or-one world template, linked
/// by id when present, else by name.
#[derive(Debug, Clone)]
pub struct Character {
    pub id: CharacterId,
    pub world_id: WorldId,
    pub name: String,
    pub description: String,
    /// Free-form tag describing how the character was created
    pub character_type: String,
    pub attributes: Vec<CharacterAttribute>,
    pub skills: Vec<CharacterSkill>,
}

impl Character {
    pub fn new(world_id: WorldId, name: impl Into<String>) -> Self {
        Self {
            id: CharacterId::new(),
            world_id,
            name: name.into(),
            description: String::new(),
            character_type: DEFAULT_CHARACTER_TYPE.to_string(),
            attributes: Vec::new(),
            skills: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_character_type(mut self, character_type: impl Into<String>) -> Self {
        self.character_type = character_type.into();
        self
    }

    pub fn with_attribute(mut self, attribute: CharacterAttribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    pub fn with_skill(mut self, skill: CharacterSkill) -> Self {
        self.skills.push(skill);
        self
    }
}

/// A character's attribute entry
#[derive(Debug, Clone)]
pub struct CharacterAttribute {
    pub id: AttributeId,
    pub name: String,
    pub base_value: i32,
    pub modified_value: i32,
    /// Link to the world template this entry was created from, if any
    pub world_attribute_id: Option<AttributeId>,
    /// Category override carried by the character itself
    pub category: Option<String>,
}

impl CharacterAttribute {
    pub fn new(name: impl Into<String>, base_value: i32) -> Self {
        Self {
            id: AttributeId::new(),
            name: name.into(),
            base_value,
            modified_value: base_value,
            world_attribute_id: None,
            category: None,
        }
    }

    pub fn linked_to(mut self, world_attribute_id: AttributeId) -> Self {
        self.world_attribute_id = Some(world_attribute_id);
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_modified_value(mut self, modified_value: i32) -> Self {
        self.modified_value = modified_value;
        self
    }
}

/// A character's skill entry
#[derive(Debug, Clone)]
pub struct CharacterSkill {
    pub id: SkillId,
    pub name: String,
    pub level: i32,
    /// Link to the world template this entry was created from, if any
    pub world_skill_id: Option<SkillId>,
    /// Category override carried by the character itself
    pub category: Option<String>,
}

impl CharacterSkill {
    pub fn new(name: impl Into<String>, level: i32) -> Self {
        Self {
            id: SkillId::new(),
            name: name.into(),
            level,
            world_skill_id: None,
            category: None,
        }
    }

    pub fn linked_to(mut self, world_skill_id: SkillId) -> Self {
        self.world_skill_id = Some(world_skill_id);
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

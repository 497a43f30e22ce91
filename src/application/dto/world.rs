use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::{AttributeDefinition, SkillDefinition, World};
use crate::domain::value_objects::{AttributeId, Difficulty, SkillId, WorldId};

/// Wire form of an attribute template
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttributeDefinitionDto {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub name: String,
    pub category: String,
}

impl From<AttributeDefinition> for AttributeDefinitionDto {
    fn from(value: AttributeDefinition) -> Self {
        Self {
            id: (*value.id.as_uuid()),
            name: value.name,
            category: value.category,
        }
    }
}

impl From<AttributeDefinitionDto> for AttributeDefinition {
    fn from(value: AttributeDefinitionDto) -> Self {
        Self {
            id: AttributeId::from_uuid(value.id),
            name: value.name,
            category: value.category,
        }
    }
}

/// Wire form of a skill template
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillDefinitionDto {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub difficulty: Difficulty,
}

impl From<SkillDefinition> for SkillDefinitionDto {
    fn from(value: SkillDefinition) -> Self {
        Self {
            id: (*value.id.as_uuid()),
            name: value.name,
            category: value.category,
            difficulty: value.difficulty,
        }
    }
}

impl From<SkillDefinitionDto> for SkillDefinition {
    fn from(value: SkillDefinitionDto) -> Self {
        Self {
            id: SkillId::from_uuid(value.id),
            name: value.name,
            category: value.category,
            difficulty: value.difficulty,
        }
    }
}

/// Wire form of a world
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorldDto {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub attributes: Vec<AttributeDefinitionDto>,
    #[serde(default)]
    pub skills: Vec<SkillDefinitionDto>,
}

impl From<World> for WorldDto {
    fn from(value: World) -> Self {
        Self {
            id: (*value.id.as_uuid()),
            name: value.name,
            description: value.description,
            attributes: value.attributes.into_iter().map(Into::into).collect(),
            skills: value.skills.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<WorldDto> for World {
    fn from(value: WorldDto) -> Self {
        Self {
            id: WorldId::from_uuid(value.id),
            name: value.name,
            description: value.description,
            attributes: value.attributes.into_iter().map(Into::into).collect(),
            skills: value.skills.into_iter().map(Into::into).collect(),
        }
    }
}

/// Request to analyze a world description
#[derive(Debug, Deserialize)]
pub struct AnalyzeWorldRequestDto {
    #[serde(default)]
    pub description: Option<String>,
}

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::dto::WorldDto;
use crate::application::ports::outbound::GeneratedContent;
use crate::domain::entities::{Character, CharacterAttribute, CharacterSkill};
use crate::domain::enrichment::{EnrichedAttribute, EnrichedSkill};
use crate::domain::value_objects::{AttributeId, CharacterId, Difficulty, SkillId, WorldId};

/// Wire form of a character's attribute entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterAttributeDto {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub name: String,
    pub base_value: i32,
    pub modified_value: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub world_attribute_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl From<CharacterAttribute> for CharacterAttributeDto {
    fn from(value: CharacterAttribute) -> Self {
        Self {
            id: (*value.id.as_uuid()),
            name: value.name,
            base_value: value.base_value,
            modified_value: value.modified_value,
            world_attribute_id: value.world_attribute_id.map(|id| *id.as_uuid()),
            category: value.category,
        }
    }
}

impl From<CharacterAttributeDto> for CharacterAttribute {
    fn from(value: CharacterAttributeDto) -> Self {
        Self {
            id: AttributeId::from_uuid(value.id),
            name: value.name,
            base_value: value.base_value,
            modified_value: value.modified_value,
            world_attribute_id: value.world_attribute_id.map(AttributeId::from_uuid),
            category: value.category,
        }
    }
}

/// Wire form of a character's skill entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterSkillDto {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub name: String,
    pub level: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub world_skill_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl From<CharacterSkill> for CharacterSkillDto {
    fn from(value: CharacterSkill) -> Self {
        Self {
            id: (*value.id.as_uuid()),
            name: value.name,
            level: value.level,
            world_skill_id: value.world_skill_id.map(|id| *id.as_uuid()),
            category: value.category,
        }
    }
}

impl From<CharacterSkillDto> for CharacterSkill {
    fn from(value: CharacterSkillDto) -> Self {
        Self {
            id: SkillId::from_uuid(value.id),
            name: value.name,
            level: value.level,
            world_skill_id: value.world_skill_id.map(SkillId::from_uuid),
            category: value.category,
        }
    }
}

/// Wire form of a character
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterDto {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub world_id: Uuid,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_character_type")]
    pub character_type: String,
    #[serde(default)]
    pub attributes: Vec<CharacterAttributeDto>,
    #[serde(default)]
    pub skills: Vec<CharacterSkillDto>,
}

fn default_character_type() -> String {
    crate::domain::entities::DEFAULT_CHARACTER_TYPE.to_string()
}

impl From<Character> for CharacterDto {
    fn from(value: Character) -> Self {
        Self {
            id: (*value.id.as_uuid()),
            world_id: (*value.world_id.as_uuid()),
            name: value.name,
            description: value.description,
            character_type: value.character_type,
            attributes: value.attributes.into_iter().map(Into::into).collect(),
            skills: value.skills.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<CharacterDto> for Character {
    fn from(value: CharacterDto) -> Self {
        Self {
            id: CharacterId::from_uuid(value.id),
            world_id: WorldId::from_uuid(value.world_id),
            name: value.name,
            description: value.description,
            character_type: value.character_type,
            attributes: value.attributes.into_iter().map(Into::into).collect(),
            skills: value.skills.into_iter().map(Into::into).collect(),
        }
    }
}

/// Request for prompt-based generation
#[derive(Debug, Deserialize)]
pub struct GeneratePromptRequestDto {
    #[serde(default)]
    pub prompt: Option<String>,
}

/// Raw generation result with token metadata
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedContentResponseDto {
    pub content: String,
    pub finish_reason: String,
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
}

impl From<GeneratedContent> for GeneratedContentResponseDto {
    fn from(value: GeneratedContent) -> Self {
        Self {
            content: value.content,
            finish_reason: value.finish_reason,
            prompt_tokens: value.prompt_tokens,
            completion_tokens: value.completion_tokens,
        }
    }
}

/// Request for world-based character generation
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateCharacterRequestDto {
    #[serde(default)]
    pub world_id: Option<Uuid>,
    #[serde(default)]
    pub character_type: Option<String>,
    #[serde(default)]
    pub existing_names: Option<Vec<String>>,
    #[serde(default)]
    pub suggested_name: Option<String>,
    #[serde(default)]
    pub world: Option<WorldDto>,
}

/// Request to enrich a character sheet against its world
#[derive(Debug, Deserialize)]
pub struct EnrichCharacterRequestDto {
    pub character: CharacterDto,
    pub world: WorldDto,
}

/// Display-ready attribute record
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedAttributeDto {
    pub id: Uuid,
    pub name: String,
    pub base_value: i32,
    pub modified_value: i32,
    pub category: String,
}

impl From<EnrichedAttribute> for EnrichedAttributeDto {
    fn from(value: EnrichedAttribute) -> Self {
        Self {
            id: (*value.id.as_uuid()),
            name: value.name,
            base_value: value.base_value,
            modified_value: value.modified_value,
            category: value.category,
        }
    }
}

/// Display-ready skill record
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedSkillDto {
    pub id: Uuid,
    pub name: String,
    pub level: i32,
    pub category: String,
    pub difficulty: Difficulty,
}

impl From<EnrichedSkill> for EnrichedSkillDto {
    fn from(value: EnrichedSkill) -> Self {
        Self {
            id: (*value.id.as_uuid()),
            name: value.name,
            level: value.level,
            category: value.category,
            difficulty: value.difficulty,
        }
    }
}

/// Enriched character sheet
#[derive(Debug, Serialize)]
pub struct EnrichedCharacterResponseDto {
    pub attributes: Vec<EnrichedAttributeDto>,
    pub skills: Vec<EnrichedSkillDto>,
}

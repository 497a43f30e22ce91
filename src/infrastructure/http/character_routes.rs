//! Character API routes - AI generation, sheet enrichment, character storage

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::application::dto::{
    CharacterDto, EnrichCharacterRequestDto, EnrichedCharacterResponseDto,
    GenerateCharacterRequestDto, GeneratePromptRequestDto, GeneratedContentResponseDto,
};
use crate::application::ports::outbound::{KeyValueStorePort, LlmPort};
use crate::application::services::{CharacterGenerationService, GenerateCharacterRequest};
use crate::domain::entities::{Character, World};
use crate::domain::enrichment::{enrich_attributes, enrich_skills};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::ollama::OllamaClient;
use crate::infrastructure::state::AppState;

fn character_key(id: &Uuid) -> String {
    format!("character:{}", id)
}

/// Generate raw character content from a free-text prompt
pub async fn generate_from_prompt(
    State(state): State<Arc<AppState>>,
    Json(req): Json<GeneratePromptRequestDto>,
) -> Result<Json<GeneratedContentResponseDto>, ApiError> {
    let llm = OllamaClient::new(&state.config.ollama_base_url, &state.config.ollama_model);
    generate_from_prompt_with(llm, req).await
}

pub(crate) async fn generate_from_prompt_with<L: LlmPort>(
    llm: L,
    req: GeneratePromptRequestDto,
) -> Result<Json<GeneratedContentResponseDto>, ApiError> {
    let prompt = req.prompt.as_deref().unwrap_or("").trim().to_string();
    if prompt.is_empty() {
        return Err(ApiError::bad_request("Prompt is required"));
    }

    let service = CharacterGenerationService::new(llm);
    let content = service.generate_from_prompt(&prompt).await.map_err(|e| {
        tracing::error!(component = "character_generation", error = %e, "Prompt generation failed");
        ApiError::upstream("Failed to generate character content", &e)
    })?;

    Ok(Json(content.into()))
}

/// Generate a character that fits a world
pub async fn generate_from_world(
    State(state): State<Arc<AppState>>,
    Json(req): Json<GenerateCharacterRequestDto>,
) -> Result<Json<CharacterDto>, ApiError> {
    let llm = OllamaClient::new(&state.config.ollama_base_url, &state.config.ollama_model);
    generate_from_world_with(llm, req).await
}

pub(crate) async fn generate_from_world_with<L: LlmPort>(
    llm: L,
    req: GenerateCharacterRequestDto,
) -> Result<Json<CharacterDto>, ApiError> {
    let world_dto = req.world.ok_or_else(|| ApiError::bad_request("World is required"))?;
    let world: World = world_dto.into();

    let service = CharacterGenerationService::new(llm);
    let character = service
        .generate_character(GenerateCharacterRequest {
            world,
            existing_names: req.existing_names.unwrap_or_default(),
            suggested_name: req.suggested_name,
            character_type: req.character_type,
        })
        .await
        .map_err(|e| {
            tracing::error!(component = "character_generation", error = %e, "World-based generation failed");
            ApiError::upstream("Failed to generate character", &e)
        })?;

    Ok(Json(character.into()))
}

/// Enrich a character sheet against its world's templates
pub async fn enrich_character(
    Json(req): Json<EnrichCharacterRequestDto>,
) -> Result<Json<EnrichedCharacterResponseDto>, ApiError> {
    let character: Character = req.character.into();
    let world: World = req.world.into();

    if character.world_id != world.id {
        return Err(ApiError::bad_request(
            "Character does not belong to the provided world",
        ));
    }

    let attributes = enrich_attributes(&character, &world)
        .into_iter()
        .map(Into::into)
        .collect();
    let skills = enrich_skills(&character, &world)
        .into_iter()
        .map(Into::into)
        .collect();

    Ok(Json(EnrichedCharacterResponseDto { attributes, skills }))
}

/// Get a stored character
pub async fn get_character(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<CharacterDto>, ApiError> {
    let uuid = Uuid::parse_str(&id).map_err(|_| ApiError::bad_request("Invalid character ID"))?;

    let value = state
        .storage
        .get_item(&character_key(&uuid))
        .await
        .map_err(|e| storage_error("read", e))?
        .ok_or_else(|| ApiError::not_found("Character not found"))?;

    let dto: CharacterDto = serde_json::from_str(&value)
        .map_err(|_| ApiError::internal("Stored character is corrupt"))?;
    Ok(Json(dto))
}

/// Store (create or replace) a character
pub async fn put_character(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(mut dto): Json<CharacterDto>,
) -> Result<Json<CharacterDto>, ApiError> {
    let uuid = Uuid::parse_str(&id).map_err(|_| ApiError::bad_request("Invalid character ID"))?;
    // The path is authoritative for the id
    dto.id = uuid;

    let value = serde_json::to_string(&dto)
        .map_err(|_| ApiError::internal("Failed to encode character"))?;
    state
        .storage
        .set_item(&character_key(&uuid), &value)
        .await
        .map_err(|e| storage_error("write", e))?;

    Ok(Json(dto))
}

/// Delete a stored character
pub async fn delete_character(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let uuid = Uuid::parse_str(&id).map_err(|_| ApiError::bad_request("Invalid character ID"))?;

    state
        .storage
        .remove_item(&character_key(&uuid))
        .await
        .map_err(|e| storage_error("delete", e))?;

    Ok(StatusCode::NO_CONTENT)
}

fn storage_error(operation: &str, e: anyhow::Error) -> ApiError {
    tracing::error!(component = "storage", error = %e, "Storage {} failed", operation);
    ApiError::upstream("Storage failure", e)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dto::{
        AttributeDefinitionDto, CharacterAttributeDto, CharacterSkillDto, SkillDefinitionDto,
        WorldDto,
    };
    use crate::application::ports::outbound::GeneratedContent;
    use crate::domain::value_objects::Difficulty;

    struct MockLlm {
        content: String,
    }

    #[async_trait::async_trait]
    impl LlmPort for MockLlm {
        type Error = std::io::Error;

        async fn generate_content(
            &self,
            _prompt: &str,
        ) -> Result<GeneratedContent, Self::Error> {
            Ok(GeneratedContent {
                content: self.content.clone(),
                finish_reason: "stop".to_string(),
                prompt_tokens: 7,
                completion_tokens: 13,
            })
        }
    }

    struct FailingLlm;

    #[async_trait::async_trait]
    impl LlmPort for FailingLlm {
        type Error = std::io::Error;

        async fn generate_content(
            &self,
            _prompt: &str,
        ) -> Result<GeneratedContent, Self::Error> {
            Err(std::io::Error::other("ollama is down"))
        }
    }

    fn sample_world_dto() -> WorldDto {
        WorldDto {
            id: Uuid::new_v4(),
            name: "Ashfall".to_string(),
            description: "A volcanic wasteland".to_string(),
            attributes: vec![AttributeDefinitionDto {
                id: Uuid::new_v4(),
                name: "Strength".to_string(),
                category: "Physical".to_string(),
            }],
            skills: vec![SkillDefinitionDto {
                id: Uuid::new_v4(),
                name: "Swordplay".to_string(),
                category: "Combat".to_string(),
                difficulty: Difficulty::Hard,
            }],
        }
    }

    #[tokio::test]
    async fn missing_prompt_is_rejected() {
        let err = generate_from_prompt_with(
            MockLlm { content: String::new() },
            GeneratePromptRequestDto { prompt: None },
        )
        .await
        .unwrap_err();

        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.body.error, "Prompt is required");
    }

    #[tokio::test]
    async fn blank_prompt_is_rejected() {
        let err = generate_from_prompt_with(
            MockLlm { content: String::new() },
            GeneratePromptRequestDto {
                prompt: Some("   ".to_string()),
            },
        )
        .await
        .unwrap_err();

        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn prompt_generation_returns_metadata() {
        let Json(resp) = generate_from_prompt_with(
            MockLlm {
                content: "A one-eyed sellsword.".to_string(),
            },
            GeneratePromptRequestDto {
                prompt: Some("Describe a mercenary".to_string()),
            },
        )
        .await
        .unwrap();

        assert_eq!(resp.content, "A one-eyed sellsword.");
        assert_eq!(resp.finish_reason, "stop");
        assert_eq!(resp.prompt_tokens, 7);
        assert_eq!(resp.completion_tokens, 13);
    }

    #[tokio::test]
    async fn missing_world_is_rejected() {
        let err = generate_from_world_with(
            MockLlm { content: String::new() },
            GenerateCharacterRequestDto {
                world_id: None,
                character_type: None,
                existing_names: None,
                suggested_name: None,
                world: None,
            },
        )
        .await
        .unwrap_err();

        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.body.error, "World is required");
    }

    #[tokio::test]
    async fn world_generation_returns_a_character() {
        let world = sample_world_dto();
        let world_id = world.id;

        let Json(character) = generate_from_world_with(
            MockLlm {
                content: r#"{"name": "Kest", "description": "An ash-runner",
                    "attributes": [{"name": "Strength", "value": 14}],
                    "skills": [{"name": "Swordplay", "value": 3}]}"#
                    .to_string(),
            },
            GenerateCharacterRequestDto {
                world_id: Some(world_id),
                character_type: None,
                existing_names: Some(vec!["Mira".to_string()]),
                suggested_name: None,
                world: Some(world),
            },
        )
        .await
        .unwrap();

        assert_eq!(character.name, "Kest");
        assert_eq!(character.world_id, world_id);
        assert_eq!(character.character_type, "original");
        assert_eq!(character.attributes[0].base_value, 14);
    }

    #[tokio::test]
    async fn generation_failure_maps_to_500_with_details() {
        let err = generate_from_world_with(
            FailingLlm,
            GenerateCharacterRequestDto {
                world_id: None,
                character_type: None,
                existing_names: None,
                suggested_name: None,
                world: Some(sample_world_dto()),
            },
        )
        .await
        .unwrap_err();

        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.body.details.as_deref(), Some("LLM error: ollama is down"));
    }

    #[tokio::test]
    async fn enrichment_fills_categories_and_difficulties() {
        let world = sample_world_dto();
        let character = CharacterDto {
            id: Uuid::new_v4(),
            world_id: world.id,
            name: "Mira".to_string(),
            description: String::new(),
            character_type: "original".to_string(),
            attributes: vec![CharacterAttributeDto {
                id: Uuid::new_v4(),
                name: "Strength".to_string(),
                base_value: 9,
                modified_value: 12,
                world_attribute_id: None,
                category: None,
            }],
            skills: vec![CharacterSkillDto {
                id: Uuid::new_v4(),
                name: "Whittling".to_string(),
                level: 2,
                world_skill_id: None,
                category: None,
            }],
        };

        let Json(enriched) =
            enrich_character(Json(EnrichCharacterRequestDto { character, world }))
                .await
                .unwrap();

        assert_eq!(enriched.attributes[0].category, "Physical");
        assert_eq!(enriched.skills[0].category, "General");
        assert_eq!(enriched.skills[0].difficulty, Difficulty::Medium);
    }

    #[tokio::test]
    async fn enrichment_rejects_world_mismatch() {
        let world = sample_world_dto();
        let character = CharacterDto {
            id: Uuid::new_v4(),
            world_id: Uuid::new_v4(),
            name: "Mira".to_string(),
            description: String::new(),
            character_type: "original".to_string(),
            attributes: vec![],
            skills: vec![],
        };

        let err = enrich_character(Json(EnrichCharacterRequestDto { character, world }))
            .await
            .unwrap_err();

        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }
}

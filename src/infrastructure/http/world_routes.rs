//! World API routes - description analysis and world storage

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::application::dto::{AnalyzeWorldRequestDto, WorldDto};
use crate::application::ports::outbound::{KeyValueStorePort, LlmPort};
use crate::application::services::{WorldAnalysis, WorldAnalysisService};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::ollama::OllamaClient;
use crate::infrastructure::state::AppState;

fn world_key(id: &Uuid) -> String {
    format!("world:{}", id)
}

/// Analyze a world description into attribute/skill suggestions
pub async fn analyze_world(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AnalyzeWorldRequestDto>,
) -> Result<Json<WorldAnalysis>, ApiError> {
    // Fresh client per request; request volume is low, pooling would be noise
    let llm = OllamaClient::new(&state.config.ollama_base_url, &state.config.ollama_model);
    analyze_world_with(llm, req).await
}

/// Analysis handler body, generic over the LLM so tests can inject fixtures
pub(crate) async fn analyze_world_with<L: LlmPort>(
    llm: L,
    req: AnalyzeWorldRequestDto,
) -> Result<Json<WorldAnalysis>, ApiError> {
    let description = req.description.as_deref().unwrap_or("").trim().to_string();
    if description.is_empty() {
        return Err(ApiError::bad_request("Description is required"));
    }

    let service = WorldAnalysisService::new(llm);
    let analysis = service
        .analyze_world_description(&description)
        .await
        .map_err(|e| {
            tracing::error!(component = "world_analysis", error = %e, "World description analysis failed");
            ApiError::upstream("Failed to analyze world description", &e)
        })?;

    Ok(Json(analysis))
}

/// Get a stored world
pub async fn get_world(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<WorldDto>, ApiError> {
    let uuid = Uuid::parse_str(&id).map_err(|_| ApiError::bad_request("Invalid world ID"))?;

    let value = state
        .storage
        .get_item(&world_key(&uuid))
        .await
        .map_err(|e| storage_error("read", e))?
        .ok_or_else(|| ApiError::not_found("World not found"))?;

    let dto: WorldDto =
        serde_json::from_str(&value).map_err(|_| ApiError::internal("Stored world is corrupt"))?;
    Ok(Json(dto))
}

/// Store (create or replace) a world
pub async fn put_world(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(mut dto): Json<WorldDto>,
) -> Result<Json<WorldDto>, ApiError> {
    let uuid = Uuid::parse_str(&id).map_err(|_| ApiError::bad_request("Invalid world ID"))?;
    // The path is authoritative for the id
    dto.id = uuid;

    let value = serde_json::to_string(&dto)
        .map_err(|_| ApiError::internal("Failed to encode world"))?;
    state
        .storage
        .set_item(&world_key(&uuid), &value)
        .await
        .map_err(|e| storage_error("write", e))?;

    Ok(Json(dto))
}

/// Delete a stored world
pub async fn delete_world(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let uuid = Uuid::parse_str(&id).map_err(|_| ApiError::bad_request("Invalid world ID"))?;

    state
        .storage
        .remove_item(&world_key(&uuid))
        .await
        .map_err(|e| storage_error("delete", e))?;

    Ok(StatusCode::NO_CONTENT)
}

fn storage_error(operation: &str, e: anyhow::Error) -> ApiError {
    tracing::error!(component = "storage", error = %e, "Storage {} failed", operation);
    ApiError::upstream("Storage failure", e)
}

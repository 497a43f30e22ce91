//! HTTP REST API routes

mod character_routes;
mod error;
mod world_routes;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;

use crate::infrastructure::state::AppState;

pub use error::{ApiError, ErrorBody};

/// Create all API routes
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        // World routes
        .route("/api/worlds/analyze", post(world_routes::analyze_world))
        .route("/api/worlds/{id}", get(world_routes::get_world))
        .route("/api/worlds/{id}", put(world_routes::put_world))
        .route("/api/worlds/{id}", delete(world_routes::delete_world))
        // Character routes
        .route(
            "/api/characters/generate",
            post(character_routes::generate_from_prompt),
        )
        .route(
            "/api/characters/generate-from-world",
            post(character_routes::generate_from_world),
        )
        .route(
            "/api/characters/enriched",
            post(character_routes::enrich_character),
        )
        .route("/api/characters/{id}", get(character_routes::get_character))
        .route("/api/characters/{id}", put(character_routes::put_character))
        .route(
            "/api/characters/{id}",
            delete(character_routes::delete_character),
        )
}

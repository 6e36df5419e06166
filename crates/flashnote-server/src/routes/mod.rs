//! Route definitions for the REST API.

mod flashcards;
mod health;
mod notes;

use axum::{
    extract::{FromRequest, FromRequestParts},
    routing::{get, post, put},
    Router,
};
use serde::Deserialize;

use crate::error::ApiError;
use crate::state::AppState;

/// Create the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Note operations
        .route("/api/save-note", post(notes::save_note))
        .route("/api/notes", get(notes::get_notes))
        .route(
            "/api/notes/:id",
            put(notes::update_note).delete(notes::delete_note),
        )
        // Flashcards
        .route("/api/generate-flashcards", post(flashcards::generate_flashcards))
        .route("/api/notes/:id/flashcards", post(flashcards::generate_note_flashcards))
        // Attach state
        .with_state(state)
}

/// JSON body extractor whose rejections use the API error shape.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// Path extractor whose rejections use the API error shape.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct ApiPath<T>(pub T);

/// Request body carrying note content. A missing or null `content` reads as
/// the empty string.
#[derive(Debug, Deserialize)]
pub struct ContentRequest {
    #[serde(default)]
    pub content: Option<String>,
}

impl ContentRequest {
    pub fn content(&self) -> &str {
        self.content.as_deref().unwrap_or_default()
    }
}

pub use flashcards::*;
pub use health::*;
pub use notes::*;

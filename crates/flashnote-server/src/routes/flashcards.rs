//! Flashcard generation endpoints.

use axum::{extract::State, Json};
use serde::Serialize;

use flashnote_core::types::Flashcard;

use super::{ApiJson, ApiPath, ContentRequest};
use crate::error::ApiResult;
use crate::state::AppState;

/// Response for flashcard generation.
#[derive(Debug, Serialize)]
pub struct FlashcardsResponse {
    pub flashcards: Vec<Flashcard>,
}

/// Generate flashcards from arbitrary content.
/// POST /api/generate-flashcards
pub async fn generate_flashcards(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<ContentRequest>,
) -> ApiResult<Json<FlashcardsResponse>> {
    let flashcards = state.generator.generate(request.content()).await?;
    Ok(Json(FlashcardsResponse { flashcards }))
}

/// Generate flashcards from a stored note.
/// POST /api/notes/:id/flashcards
pub async fn generate_note_flashcards(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<u64>,
) -> ApiResult<Json<FlashcardsResponse>> {
    // Copy the content out so the store is free during the provider call.
    let note = state.notes.get(id)?;
    let flashcards = state.generator.generate(&note.content).await?;
    Ok(Json(FlashcardsResponse { flashcards }))
}

//! Note CRUD endpoints.

use axum::{extract::State, Json};
use serde::Serialize;

use flashnote_core::types::Note;

use super::{ApiJson, ApiPath, ContentRequest};
use crate::error::ApiResult;
use crate::state::AppState;

/// Response carrying a message and the affected note.
#[derive(Debug, Serialize)]
pub struct NoteResponse {
    pub message: String,
    pub note: Note,
}

/// Response for listing notes.
#[derive(Debug, Serialize)]
pub struct NotesResponse {
    pub notes: Vec<Note>,
}

/// Response carrying only a message.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Save a note.
/// POST /api/save-note
pub async fn save_note(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<ContentRequest>,
) -> ApiResult<Json<NoteResponse>> {
    let note = state.notes.save(request.content())?;

    Ok(Json(NoteResponse {
        message: "Note saved successfully!".to_string(),
        note,
    }))
}

/// List all notes in insertion order.
/// GET /api/notes
pub async fn get_notes(State(state): State<AppState>) -> Json<NotesResponse> {
    Json(NotesResponse {
        notes: state.notes.list(),
    })
}

/// Delete a note.
/// DELETE /api/notes/:id
pub async fn delete_note(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<u64>,
) -> ApiResult<Json<MessageResponse>> {
    state.notes.delete(id)?;

    Ok(Json(MessageResponse {
        message: "Note deleted successfully.".to_string(),
    }))
}

/// Update a note's content.
/// PUT /api/notes/:id
pub async fn update_note(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<u64>,
    ApiJson(request): ApiJson<ContentRequest>,
) -> ApiResult<Json<NoteResponse>> {
    let note = state.notes.update(id, request.content())?;

    Ok(Json(NoteResponse {
        message: "Note updated successfully.".to_string(),
        note,
    }))
}

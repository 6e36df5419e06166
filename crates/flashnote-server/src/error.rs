//! Error handling for the REST API server.

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::fmt;
use tracing::error;

use flashnote_core::error::FlashnoteError;

/// API error type.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: String,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status,
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, "NOT_FOUND", message)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.status, self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!(status = %self.status, code = %self.code, message = %self.message, "Request failed");
        }

        let body = ErrorResponse {
            error: self.message,
            code: self.code,
        };

        (self.status, Json(body)).into_response()
    }
}

// Convert from flashnote-core errors
impl From<FlashnoteError> for ApiError {
    fn from(err: FlashnoteError) -> Self {
        let code = err.code().as_str();
        let status = match err {
            FlashnoteError::EmptyContent { .. } => StatusCode::BAD_REQUEST,
            FlashnoteError::NotFound { .. } => StatusCode::NOT_FOUND,
            FlashnoteError::ProviderUnavailable { .. }
            | FlashnoteError::NoCompletion { .. }
            | FlashnoteError::Configuration(_)
            | FlashnoteError::Io(_)
            | FlashnoteError::Serialization(_)
            | FlashnoteError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        ApiError::new(status, code, err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::new(rejection.status(), "INVALID_BODY", rejection.body_text())
    }
}

// Ids that are not non-negative integers can never name a note.
impl From<PathRejection> for ApiError {
    fn from(_: PathRejection) -> Self {
        ApiError::not_found("Note not found.")
    }
}

/// Result type alias for API handlers.
pub type ApiResult<T> = Result<T, ApiError>;

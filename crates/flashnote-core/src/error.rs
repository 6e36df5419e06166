//! Error types for flashnote operations.
//!
//! Every failure a caller can observe is one of these variants, each carrying
//! a stable [`ErrorCode`] for programmatic handling.

use thiserror::Error;

/// Result type alias for flashnote operations.
pub type FlashnoteResult<T> = Result<T, FlashnoteError>;

/// Main error type for all flashnote operations.
#[derive(Error, Debug)]
pub enum FlashnoteError {
    /// Note content was empty after trimming.
    #[error("{message}")]
    EmptyContent { message: String, code: ErrorCode },

    /// No note with the given id exists.
    #[error("Note not found.")]
    NotFound { id: u64, code: ErrorCode },

    /// The completion provider could not be reached or answered with a failure.
    #[error("Completion provider unavailable: {message}")]
    ProviderUnavailable {
        message: String,
        code: ErrorCode,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The completion provider answered but produced no candidates.
    #[error("No response from the completion provider.")]
    NoCompletion { code: ErrorCode },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error codes for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // Validation (VAL_xxx)
    ValEmptyContent,

    // Notes (NOTE_xxx)
    NoteNotFound,

    // Completion provider (LLM_xxx)
    LlmConnectionFailed,
    LlmRequestFailed,
    LlmTimeout,
    LlmInvalidResponse,
    LlmNoCompletion,

    // Configuration (CFG_xxx)
    ConfigInvalid,

    // Internal
    Internal,
}

impl ErrorCode {
    /// Get the string representation of the error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ValEmptyContent => "VAL_001",
            ErrorCode::NoteNotFound => "NOTE_001",
            ErrorCode::LlmConnectionFailed => "LLM_001",
            ErrorCode::LlmRequestFailed => "LLM_002",
            ErrorCode::LlmTimeout => "LLM_003",
            ErrorCode::LlmInvalidResponse => "LLM_004",
            ErrorCode::LlmNoCompletion => "LLM_005",
            ErrorCode::ConfigInvalid => "CFG_001",
            ErrorCode::Internal => "INT_001",
        }
    }
}

impl FlashnoteError {
    /// Create an empty content error with a caller-facing message.
    pub fn empty_content(message: impl Into<String>) -> Self {
        Self::EmptyContent {
            message: message.into(),
            code: ErrorCode::ValEmptyContent,
        }
    }

    /// Create a not found error for a note id.
    pub fn not_found(id: u64) -> Self {
        Self::NotFound {
            id,
            code: ErrorCode::NoteNotFound,
        }
    }

    /// Create a provider error for a failed request.
    pub fn provider(message: impl Into<String>) -> Self {
        Self::ProviderUnavailable {
            message: message.into(),
            code: ErrorCode::LlmRequestFailed,
            source: None,
        }
    }

    /// Create a provider error for a transport-level failure, keeping the cause.
    pub fn provider_connection(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::ProviderUnavailable {
            message: message.into(),
            code: ErrorCode::LlmConnectionFailed,
            source: Some(Box::new(source)),
        }
    }

    /// Create a provider error for a response that could not be decoded.
    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::ProviderUnavailable {
            message: message.into(),
            code: ErrorCode::LlmInvalidResponse,
            source: None,
        }
    }

    /// Create a provider error for a call that exceeded its deadline.
    pub fn timeout(secs: u64) -> Self {
        Self::ProviderUnavailable {
            message: format!("request timed out after {}s", secs),
            code: ErrorCode::LlmTimeout,
            source: None,
        }
    }

    /// Create a no completion error.
    pub fn no_completion() -> Self {
        Self::NoCompletion {
            code: ErrorCode::LlmNoCompletion,
        }
    }

    /// Get the error code.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::EmptyContent { code, .. } => *code,
            Self::NotFound { code, .. } => *code,
            Self::ProviderUnavailable { code, .. } => *code,
            Self::NoCompletion { code } => *code,
            Self::Configuration(_) => ErrorCode::ConfigInvalid,
            _ => ErrorCode::Internal,
        }
    }

    /// Whether the failure came from the completion provider side.
    pub fn is_provider_error(&self) -> bool {
        matches!(
            self,
            Self::ProviderUnavailable { .. } | Self::NoCompletion { .. }
        )
    }
}

//! Completion provider trait and related types.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::FlashnoteResult;

/// Response from a completion provider.
#[derive(Debug, Clone, Default)]
pub struct Completion {
    /// Candidate texts, in the order the provider ranked them.
    pub candidates: Vec<String>,
    /// Token usage statistics.
    pub usage: Option<TokenUsage>,
}

impl Completion {
    /// Create a completion from candidate texts.
    pub fn new(candidates: Vec<String>) -> Self {
        Self {
            candidates,
            usage: None,
        }
    }

    /// The first candidate's text, if any candidate was returned.
    pub fn first_text(&self) -> Option<&str> {
        self.candidates.first().map(String::as_str)
    }
}

/// Token usage statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenUsage {
    /// Tokens in the prompt.
    pub prompt_tokens: u32,
    /// Tokens in the completion.
    pub completion_tokens: u32,
    /// Total tokens.
    pub total_tokens: u32,
}

/// Per-call generation options. Unset fields fall back to the provider config.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerationOptions {
    /// Sampling temperature (0.0 - 2.0).
    pub temperature: Option<f32>,
    /// Maximum tokens to generate.
    pub max_tokens: Option<u32>,
    /// Top-p nucleus sampling.
    pub top_p: Option<f32>,
    /// Top-k sampling.
    pub top_k: Option<u32>,
}

/// A text-completion service: prompt in, ranked candidate texts out.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Request a completion for a single prompt.
    async fn complete(
        &self,
        prompt: &str,
        options: Option<GenerationOptions>,
    ) -> FlashnoteResult<Completion>;

    /// Short provider name for logs and health output.
    fn provider_name(&self) -> &'static str;
}

/// Completion provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Model name/identifier. Empty means the provider default.
    #[serde(default)]
    pub model: String,
    /// Sampling temperature.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    /// Maximum tokens to generate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    /// Top-p nucleus sampling.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,
    /// API key (if not using environment variable).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Base URL for API.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Upper bound on a single provider call, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    60
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            model: String::new(),
            temperature: None,
            max_tokens: None,
            top_p: None,
            api_key: None,
            base_url: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ProviderConfig {
    /// Generation options derived from the configured sampling settings.
    pub fn generation_options(&self) -> GenerationOptions {
        GenerationOptions {
            temperature: self.temperature,
            max_tokens: self.max_tokens,
            top_p: self.top_p,
            top_k: None,
        }
    }
}

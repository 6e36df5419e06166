//! Google Gemini completion provider implementation.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use flashnote_core::error::{FlashnoteError, FlashnoteResult};
use flashnote_core::traits::{
    Completion, CompletionProvider, GenerationOptions, ProviderConfig, TokenUsage,
};

const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Gemini `generateContent` provider.
pub struct GeminiProvider {
    client: Client,
    config: ProviderConfig,
    base_url: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest<'a> {
    contents: Vec<GeminiContent<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GeminiGenerationConfig>,
}

#[derive(Debug, Serialize)]
struct GeminiContent<'a> {
    parts: Vec<GeminiPart<'a>>,
}

#[derive(Debug, Serialize)]
struct GeminiPart<'a> {
    text: &'a str,
}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiGenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_p: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_k: Option<u32>,
}

impl GeminiGenerationConfig {
    fn from_options(options: &GenerationOptions) -> Option<Self> {
        let config = Self {
            temperature: options.temperature,
            max_output_tokens: options.max_tokens,
            top_p: options.top_p,
            top_k: options.top_k,
        };
        let empty = config.temperature.is_none()
            && config.max_output_tokens.is_none()
            && config.top_p.is_none()
            && config.top_k.is_none();
        (!empty).then_some(config)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
    #[serde(default)]
    usage_metadata: Option<GeminiUsage>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    // Absent when the candidate was blocked (e.g. finishReason SAFETY).
    #[serde(default)]
    content: Option<GeminiCandidateContent>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidateContent {
    #[serde(default)]
    parts: Vec<GeminiResponsePart>,
}

#[derive(Debug, Deserialize)]
struct GeminiResponsePart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiUsage {
    #[serde(default)]
    prompt_token_count: u32,
    #[serde(default)]
    candidates_token_count: u32,
    #[serde(default)]
    total_token_count: u32,
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    error: GeminiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorDetail {
    message: String,
}

impl GeminiCandidate {
    /// All text parts joined. A candidate without content (blocked) has empty
    /// text and so yields no flashcards instead of a provider error.
    fn text(&self) -> String {
        self.content
            .iter()
            .flat_map(|c| c.parts.iter())
            .filter_map(|p| p.text.as_deref())
            .collect()
    }
}

impl From<GeminiResponse> for Completion {
    fn from(response: GeminiResponse) -> Self {
        Completion {
            candidates: response.candidates.iter().map(GeminiCandidate::text).collect(),
            usage: response.usage_metadata.map(|u| TokenUsage {
                prompt_tokens: u.prompt_token_count,
                completion_tokens: u.candidates_token_count,
                total_tokens: u.total_token_count,
            }),
        }
    }
}

impl GeminiProvider {
    /// Create a new Gemini provider.
    pub fn new(config: ProviderConfig) -> FlashnoteResult<Self> {
        let api_key = config
            .api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| {
                FlashnoteError::Configuration("Gemini API key not found. Set GEMINI_API_KEY environment variable or provide api_key in config.".to_string())
            })?;

        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            "x-goog-api-key",
            api_key
                .parse()
                .map_err(|_| FlashnoteError::Configuration("Invalid API key format".to_string()))?,
        );

        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                FlashnoteError::Configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| GEMINI_API_URL.to_string());
        url::Url::parse(&base_url)
            .map_err(|e| FlashnoteError::Configuration(format!("Invalid Gemini URL: {}", e)))?;
        let base_url = base_url.trim_end_matches('/').to_string();

        let mut config = config;
        if config.model.is_empty() {
            config.model = DEFAULT_MODEL.to_string();
        }

        Ok(Self {
            client,
            config,
            base_url,
        })
    }

    /// Model this provider calls.
    pub fn model(&self) -> &str {
        &self.config.model
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.config.model)
    }
}

#[async_trait]
impl CompletionProvider for GeminiProvider {
    async fn complete(
        &self,
        prompt: &str,
        options: Option<GenerationOptions>,
    ) -> FlashnoteResult<Completion> {
        let options = options.unwrap_or_else(|| self.config.generation_options());

        let request = GeminiRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart { text: prompt }],
            }],
            generation_config: GeminiGenerationConfig::from_options(&options),
        };

        debug!(model = %self.config.model, prompt_chars = prompt.len(), "Sending Gemini request");

        let response = self
            .client
            .post(self.endpoint())
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    FlashnoteError::timeout(self.config.timeout_secs)
                } else {
                    FlashnoteError::provider_connection(
                        format!("Gemini API request failed: {}", e),
                        e,
                    )
                }
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            FlashnoteError::provider_connection(format!("Failed to read response body: {}", e), e)
        })?;

        if !status.is_success() {
            let error: Result<GeminiError, _> = serde_json::from_str(&body);
            let message = error
                .map(|e| e.error.message)
                .unwrap_or_else(|_| body.clone());
            return Err(FlashnoteError::provider(format!(
                "Gemini API error ({}): {}",
                status, message
            )));
        }

        let response: GeminiResponse = serde_json::from_str(&body).map_err(|e| {
            FlashnoteError::invalid_response(format!("Failed to parse Gemini response: {}", e))
        })?;

        Ok(response.into())
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }
}

//! Configuration system for flashnote.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::{FlashnoteError, FlashnoteResult};
use crate::generator::DEFAULT_CARD_COUNT;
use crate::traits::ProviderConfig;

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "FLASHNOTE_CONFIG";

/// Completion provider type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    #[default]
    Gemini,
}

impl ProviderKind {
    /// Get the string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::Gemini => "gemini",
        }
    }
}

impl FromStr for ProviderKind {
    type Err = FlashnoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "gemini" | "google" => Ok(ProviderKind::Gemini),
            other => Err(FlashnoteError::Configuration(format!(
                "Unsupported completion provider: {}",
                other
            ))),
        }
    }
}

/// Provider configuration with type.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LlmProviderConfig {
    /// Provider type.
    #[serde(default)]
    pub provider: ProviderKind,
    /// Provider-specific configuration.
    #[serde(flatten)]
    pub config: ProviderConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

impl ServerConfig {
    /// `host:port` for binding.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Flashcard generation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Number of flashcards asked for in the prompt.
    pub card_count: usize,
    /// Replacement prompt template containing `{notes}` and optionally `{count}`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_prompt: Option<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            card_count: DEFAULT_CARD_COUNT,
            custom_prompt: None,
        }
    }
}

/// Main flashnote configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FlashnoteConfig {
    /// HTTP listener.
    pub server: ServerConfig,
    /// Completion provider.
    pub llm: LlmProviderConfig,
    /// Flashcard generation.
    pub generator: GeneratorConfig,
}

impl FlashnoteConfig {
    /// Load configuration from a file (TOML, JSON, or YAML).
    pub fn from_file(path: impl AsRef<Path>) -> FlashnoteResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let ext = path.as_ref().extension().and_then(|e| e.to_str());

        let config: Self = match ext {
            Some("toml") => {
                toml::from_str(&content).map_err(|e| FlashnoteError::Configuration(e.to_string()))?
            }
            Some("json") => serde_json::from_str(&content)
                .map_err(|e| FlashnoteError::Configuration(e.to_string()))?,
            Some("yaml" | "yml") => serde_yaml::from_str(&content)
                .map_err(|e| FlashnoteError::Configuration(e.to_string()))?,
            _ => {
                return Err(FlashnoteError::Configuration(
                    "Unsupported config file format. Use .toml, .json, or .yaml".to_string(),
                ))
            }
        };
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from environment variables on top of the defaults.
    pub fn from_env() -> FlashnoteResult<Self> {
        let mut config = Self::default();
        config.apply_env()?;
        Ok(config)
    }

    /// Resolve the full configuration: config file (explicit path from
    /// `FLASHNOTE_CONFIG`, else `<config dir>/flashnote/config.toml` if it
    /// exists, else defaults) with environment overrides applied on top.
    pub fn load() -> FlashnoteResult<Self> {
        let path = std::env::var(CONFIG_PATH_ENV)
            .ok()
            .map(PathBuf::from)
            .or_else(|| default_config_path().filter(|p| p.exists()));

        match path {
            Some(path) => {
                tracing::info!(path = %path.display(), "Loading configuration file");
                let mut config = Self::from_file(path)?;
                config.apply_env()?;
                Ok(config)
            }
            None => Self::from_env(),
        }
    }

    /// Apply overrides from the process environment.
    pub fn apply_env(&mut self) -> FlashnoteResult<()> {
        self.apply_env_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup.
    pub fn apply_env_from<F>(&mut self, lookup: F) -> FlashnoteResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Server
        if let Some(host) = lookup("FLASHNOTE_HOST") {
            self.server.host = host;
        }
        if let Some((name, port)) = ["FLASHNOTE_PORT", "PORT"]
            .into_iter()
            .find_map(|name| lookup(name).map(|value| (name, value)))
        {
            self.server.port = parse_var(name, &port)?;
        }

        // Completion provider
        if let Some(provider) = lookup("FLASHNOTE_PROVIDER") {
            self.llm.provider = provider.parse()?;
        }
        if let Some(api_key) = lookup("GEMINI_API_KEY") {
            self.llm.config.api_key = Some(api_key);
        }
        if let Some(model) = lookup("GEMINI_MODEL") {
            self.llm.config.model = model;
        }
        if let Some(base_url) = lookup("GEMINI_BASE_URL") {
            self.llm.config.base_url = Some(base_url);
        }
        if let Some(timeout) = lookup("FLASHNOTE_TIMEOUT_SECS") {
            self.llm.config.timeout_secs = parse_var("FLASHNOTE_TIMEOUT_SECS", &timeout)?;
        }

        // Generation
        if let Some(count) = lookup("FLASHNOTE_CARD_COUNT") {
            self.generator.card_count = parse_var("FLASHNOTE_CARD_COUNT", &count)?;
        }

        self.validate()
    }

    /// Reject values no request could succeed with.
    pub fn validate(&self) -> FlashnoteResult<()> {
        if self.generator.card_count == 0 {
            return Err(FlashnoteError::Configuration(
                "generator.card_count must be at least 1".to_string(),
            ));
        }
        if self.llm.config.timeout_secs == 0 {
            return Err(FlashnoteError::Configuration(
                "llm.timeout_secs must be at least 1".to_string(),
            ));
        }
        if let Some(template) = &self.generator.custom_prompt {
            if !template.contains(crate::generator::NOTES_PLACEHOLDER) {
                return Err(FlashnoteError::Configuration(
                    "generator.custom_prompt must contain {notes}".to_string(),
                ));
            }
        }
        Ok(())
    }

    /// Build configuration using builder pattern.
    pub fn builder() -> FlashnoteConfigBuilder {
        FlashnoteConfigBuilder::default()
    }
}

fn parse_var<T: FromStr>(name: &str, value: &str) -> FlashnoteResult<T> {
    value.trim().parse().map_err(|_| {
        FlashnoteError::Configuration(format!("{} has an invalid value: {}", name, value))
    })
}

/// `<config dir>/flashnote/config.toml`, when the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("flashnote").join("config.toml"))
}

/// Builder for FlashnoteConfig.
#[derive(Default)]
pub struct FlashnoteConfigBuilder {
    config: FlashnoteConfig,
}

impl FlashnoteConfigBuilder {
    /// Set server configuration.
    pub fn server(mut self, config: ServerConfig) -> Self {
        self.config.server = config;
        self
    }

    /// Set completion provider configuration.
    pub fn llm(mut self, config: LlmProviderConfig) -> Self {
        self.config.llm = config;
        self
    }

    /// Set the provider API key.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.config.llm.config.api_key = Some(api_key.into());
        self
    }

    /// Set the number of flashcards requested.
    pub fn card_count(mut self, count: usize) -> Self {
        self.config.generator.card_count = count;
        self
    }

    /// Set a custom prompt template.
    pub fn custom_prompt(mut self, template: impl Into<String>) -> Self {
        self.config.generator.custom_prompt = Some(template.into());
        self
    }

    /// Build the configuration.
    pub fn build(self) -> FlashnoteConfig {
        self.config
    }
}

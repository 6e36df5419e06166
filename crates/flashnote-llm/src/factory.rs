//! Factory for creating completion providers.

use std::sync::Arc;

use flashnote_core::config::{LlmProviderConfig, ProviderKind};
use flashnote_core::error::FlashnoteResult;
use flashnote_core::traits::{CompletionProvider, ProviderConfig};

use crate::gemini::GeminiProvider;

/// Factory for creating completion providers.
pub struct ProviderFactory;

impl ProviderFactory {
    /// Create a completion provider from the given configuration.
    pub fn create(
        provider: ProviderKind,
        config: ProviderConfig,
    ) -> FlashnoteResult<Arc<dyn CompletionProvider>> {
        match provider {
            ProviderKind::Gemini => {
                let provider = GeminiProvider::new(config)?;
                Ok(Arc::new(provider))
            }
        }
    }

    /// Create the provider described by a provider config section.
    pub fn from_config(config: &LlmProviderConfig) -> FlashnoteResult<Arc<dyn CompletionProvider>> {
        Self::create(config.provider, config.config.clone())
    }

    /// Create a Gemini provider with a specific model.
    pub fn gemini_with_model(
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> FlashnoteResult<Arc<dyn CompletionProvider>> {
        let config = ProviderConfig {
            model: model.into(),
            api_key: Some(api_key.into()),
            ..Default::default()
        };
        Self::create(ProviderKind::Gemini, config)
    }
}

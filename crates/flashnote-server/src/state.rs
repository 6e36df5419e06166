//! Server state management.

use std::sync::Arc;
use std::time::Duration;

use flashnote_core::config::FlashnoteConfig;
use flashnote_core::error::FlashnoteResult;
use flashnote_core::generator::FlashcardGenerator;
use flashnote_core::store::NoteStore;
use flashnote_core::traits::CompletionProvider;
use flashnote_llm::ProviderFactory;

/// Shared application state.
///
/// The note store and the generator are independent: handlers never hold the
/// store while a provider call is in flight.
#[derive(Clone)]
pub struct AppState {
    pub notes: Arc<NoteStore>,
    pub generator: Arc<FlashcardGenerator>,
}

impl AppState {
    /// Create state around an existing provider.
    pub fn new(provider: Arc<dyn CompletionProvider>, config: &FlashnoteConfig) -> Self {
        let generator = FlashcardGenerator::new(
            provider,
            config.generator.clone(),
            Duration::from_secs(config.llm.config.timeout_secs),
        )
        .with_options(config.llm.config.generation_options());

        Self {
            notes: Arc::new(NoteStore::new()),
            generator: Arc::new(generator),
        }
    }

    /// Create state with the provider described by the configuration.
    pub fn from_config(config: &FlashnoteConfig) -> FlashnoteResult<Self> {
        let provider = ProviderFactory::from_config(&config.llm)?;
        Ok(Self::new(provider, config))
    }
}

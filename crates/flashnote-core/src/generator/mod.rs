//! Flashcard generation: prompt, one provider call, extraction.

mod prompts;

pub use prompts::*;

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::config::GeneratorConfig;
use crate::error::{FlashnoteError, FlashnoteResult};
use crate::extract::extract_flashcards;
use crate::traits::{CompletionProvider, GenerationOptions};
use crate::types::Flashcard;

/// Turns note content into flashcards through a completion provider.
///
/// Holds no note state; callers pass the content in, so no store lock is held
/// while the provider call is in flight.
pub struct FlashcardGenerator {
    provider: Arc<dyn CompletionProvider>,
    config: GeneratorConfig,
    options: Option<GenerationOptions>,
    timeout: Duration,
}

impl FlashcardGenerator {
    /// Create a generator over a provider.
    pub fn new(
        provider: Arc<dyn CompletionProvider>,
        config: GeneratorConfig,
        timeout: Duration,
    ) -> Self {
        Self {
            provider,
            config,
            options: None,
            timeout,
        }
    }

    /// Set generation options passed on every provider call.
    pub fn with_options(mut self, options: GenerationOptions) -> Self {
        self.options = Some(options);
        self
    }

    /// Name of the underlying provider.
    pub fn provider_name(&self) -> &'static str {
        self.provider.provider_name()
    }

    /// Build the prompt sent for the given notes.
    pub fn prompt_for(&self, notes: &str) -> String {
        match self.config.custom_prompt.as_deref() {
            Some(template) => render_custom_prompt(template, notes, self.config.card_count),
            None => build_flashcard_prompt(notes, self.config.card_count),
        }
    }

    /// Generate flashcards for the given notes.
    ///
    /// Fails with `ProviderUnavailable` when the call errors or times out and
    /// with `NoCompletion` when the provider returns no candidates. An answer
    /// with no recognizable `Q:`/`A:` pairs is an empty success.
    pub async fn generate(&self, notes: &str) -> FlashnoteResult<Vec<Flashcard>> {
        let prompt = self.prompt_for(notes);

        let call = self.provider.complete(&prompt, self.options.clone());
        let completion = match tokio::time::timeout(self.timeout, call).await {
            Ok(Ok(completion)) => completion,
            Ok(Err(e)) => {
                warn!(provider = self.provider_name(), error = %e, "Completion request failed");
                return Err(if e.is_provider_error() {
                    e
                } else {
                    FlashnoteError::provider(e.to_string())
                });
            }
            Err(_) => {
                warn!(
                    provider = self.provider_name(),
                    timeout_secs = self.timeout.as_secs(),
                    "Completion request timed out"
                );
                return Err(FlashnoteError::timeout(self.timeout.as_secs()));
            }
        };

        let text = completion
            .first_text()
            .ok_or_else(FlashnoteError::no_completion)?;
        debug!(response = text, "Provider response");

        let cards = extract_flashcards(text);
        info!(
            provider = self.provider_name(),
            candidates = completion.candidates.len(),
            flashcards = cards.len(),
            "Generated flashcards"
        );
        Ok(cards)
    }
}

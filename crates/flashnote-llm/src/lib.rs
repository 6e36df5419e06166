//! flashnote-llm - Completion provider implementations for flashnote.
//!
//! # Supported Providers
//!
//! - **Gemini** - Google's `generateContent` API (`gemini-2.0-flash` by default)
//!
//! # Example
//!
//! ```ignore
//! use flashnote_llm::ProviderFactory;
//!
//! let provider = ProviderFactory::gemini_with_model(api_key, "gemini-2.0-flash")?;
//! let completion = provider.complete("Q: ...", None).await?;
//! ```

mod factory;
mod gemini;

pub use factory::ProviderFactory;
pub use gemini::GeminiProvider;

// Re-export core types for convenience
pub use flashnote_core::config::ProviderKind;
pub use flashnote_core::traits::{
    Completion, CompletionProvider, GenerationOptions, ProviderConfig, TokenUsage,
};

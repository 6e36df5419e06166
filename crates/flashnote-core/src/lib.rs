//! flashnote-core - Core library for flashnote.
//!
//! This crate provides the note store, the flashcard extractor, the
//! completion provider trait, and the generator that ties prompt, provider
//! and extraction together.
//!
//! # Example
//!
//! ```ignore
//! use flashnote_core::{FlashcardGenerator, GeneratorConfig, NoteStore};
//!
//! let store = NoteStore::new();
//! let note = store.save("The mitochondria is the powerhouse of the cell.")?;
//!
//! let generator = FlashcardGenerator::new(provider, GeneratorConfig::default(), timeout);
//! let cards = generator.generate(&note.content).await?;
//! ```

pub mod config;
pub mod error;
pub mod extract;
pub mod generator;
pub mod store;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use config::{FlashnoteConfig, GeneratorConfig, LlmProviderConfig, ProviderKind, ServerConfig};
pub use error::{ErrorCode, FlashnoteError, FlashnoteResult};
pub use extract::extract_flashcards;
pub use generator::FlashcardGenerator;
pub use store::NoteStore;
pub use traits::{Completion, CompletionProvider, GenerationOptions, ProviderConfig, TokenUsage};
pub use types::{Flashcard, Note};

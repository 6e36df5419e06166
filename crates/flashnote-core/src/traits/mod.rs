//! Core traits for flashnote providers.

mod llm;

pub use llm::*;

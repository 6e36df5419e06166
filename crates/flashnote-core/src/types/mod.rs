//! Core types for flashnote.

mod flashcard;
mod note;

pub use flashcard::*;
pub use note::*;

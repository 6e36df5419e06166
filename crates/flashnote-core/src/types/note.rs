//! Note types.

use serde::{Deserialize, Serialize};

/// A user-submitted note held by the [`NoteStore`](crate::store::NoteStore).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Store-assigned identifier, starting at 1 and never reused.
    pub id: u64,
    /// Trimmed, non-empty note text.
    pub content: String,
}

impl Note {
    /// Create a new note.
    pub fn new(id: u64, content: impl Into<String>) -> Self {
        Self {
            id,
            content: content.into(),
        }
    }

    /// The first `max_chars` characters of the content, for log lines.
    pub fn preview(&self, max_chars: usize) -> &str {
        match self.content.char_indices().nth(max_chars) {
            Some((idx, _)) => &self.content[..idx],
            None => &self.content,
        }
    }
}

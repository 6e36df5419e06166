//! In-memory note storage.

use std::sync::{Mutex, MutexGuard};

use tracing::info;

use crate::error::{FlashnoteError, FlashnoteResult};
use crate::types::Note;

/// Characters of note content echoed into log lines.
const LOG_PREVIEW_CHARS: usize = 100;

/// Insertion-ordered note collection with a monotonically increasing id counter.
///
/// Every operation holds the inner lock for exactly its own duration, so
/// concurrent callers never observe a half-applied mutation.
pub struct NoteStore {
    inner: Mutex<NoteStoreInner>,
}

struct NoteStoreInner {
    notes: Vec<Note>,
    next_id: u64,
}

impl NoteStore {
    /// Create an empty store. The first saved note gets id 1.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(NoteStoreInner {
                notes: Vec::new(),
                next_id: 1,
            }),
        }
    }

    // Every mutation is a single push, remove or assign, so a poisoned guard
    // still holds a consistent collection.
    fn lock(&self) -> MutexGuard<'_, NoteStoreInner> {
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Save a new note and return it with its assigned id.
    pub fn save(&self, content: &str) -> FlashnoteResult<Note> {
        let content = content.trim();
        if content.is_empty() {
            return Err(FlashnoteError::empty_content("Cannot save an empty note."));
        }

        let mut inner = self.lock();
        let note = Note::new(inner.next_id, content);
        inner.next_id += 1;
        inner.notes.push(note.clone());

        info!(id = note.id, preview = note.preview(LOG_PREVIEW_CHARS), "Saved note");
        Ok(note)
    }

    /// All notes in insertion order.
    pub fn list(&self) -> Vec<Note> {
        self.lock().notes.clone()
    }

    /// Fetch a single note.
    pub fn get(&self, id: u64) -> FlashnoteResult<Note> {
        self.lock()
            .notes
            .iter()
            .find(|n| n.id == id)
            .cloned()
            .ok_or_else(|| FlashnoteError::not_found(id))
    }

    /// Delete a note. Remaining notes keep their ids and order.
    pub fn delete(&self, id: u64) -> FlashnoteResult<()> {
        let mut inner = self.lock();
        let pos = inner
            .notes
            .iter()
            .position(|n| n.id == id)
            .ok_or_else(|| FlashnoteError::not_found(id))?;
        inner.notes.remove(pos);

        info!(id, "Deleted note");
        Ok(())
    }

    /// Replace a note's content in place.
    pub fn update(&self, id: u64, content: &str) -> FlashnoteResult<Note> {
        let content = content.trim();
        if content.is_empty() {
            return Err(FlashnoteError::empty_content(
                "Cannot update to an empty note.",
            ));
        }

        let mut inner = self.lock();
        let note = inner
            .notes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| FlashnoteError::not_found(id))?;
        note.content = content.to_string();

        info!(id, preview = note.preview(LOG_PREVIEW_CHARS), "Updated note");
        Ok(note.clone())
    }

    /// Number of stored notes.
    pub fn len(&self) -> usize {
        self.lock().notes.len()
    }

    /// Whether the store holds no notes.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The id the next saved note will receive.
    pub fn next_id(&self) -> u64 {
        self.lock().next_id
    }
}

impl Default for NoteStore {
    fn default() -> Self {
        Self::new()
    }
}

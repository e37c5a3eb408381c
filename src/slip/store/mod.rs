//! # Storage Layer
//!
//! The [`DataStore`] trait is the document store: it holds the list of committed notes
//! and nothing else. Commands and edit sessions only ever talk to this trait.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, one JSON file holding every note
//! - [`memory::InMemoryStore`]: no persistence, used by tests
//!
//! ## Storage Format
//!
//! ```text
//! $SLIP_HOME/
//! ├── notes.json     # JSON array of notes, newest first
//! └── config.json    # SlipConfig
//! ```
//!
//! Notes are small and always read whole, so there is no separate metadata index.
//! New notes are placed at the front of the list. Updating a note keeps its position.

use crate::error::Result;
use crate::model::Note;
use std::path::Path;
use uuid::Uuid;

pub mod fs;
pub mod memory;

pub trait DataStore {
    /// Save a note (create or update)
    fn save_note(&mut self, note: &Note) -> Result<()>;

    fn get_note(&self, id: &Uuid) -> Result<Note>;

    /// All notes in stored order
    fn list_notes(&self) -> Result<Vec<Note>>;

    /// Delete a note permanently
    fn delete_note(&mut self, id: &Uuid) -> Result<()>;

    /// Backing file, for stores that have one
    fn store_path(&self) -> Option<&Path>;
}

/// Inserts or replaces `note` in a newest-first list.
pub(crate) fn upsert(notes: &mut Vec<Note>, note: &Note) {
    match notes.iter_mut().find(|existing| existing.id == note.id) {
        Some(existing) => *existing = note.clone(),
        None => notes.insert(0, note.clone()),
    }
}

use super::{upsert, DataStore};
use crate::error::{Result, SlipError};
use crate::model::Note;
use std::path::Path;
use uuid::Uuid;

/// In-memory storage for testing and embedding.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    notes: Vec<Note>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DataStore for InMemoryStore {
    fn save_note(&mut self, note: &Note) -> Result<()> {
        upsert(&mut self.notes, note);
        Ok(())
    }

    fn get_note(&self, id: &Uuid) -> Result<Note> {
        self.notes
            .iter()
            .find(|note| note.id == *id)
            .cloned()
            .ok_or(SlipError::NoteNotFound(*id))
    }

    fn list_notes(&self) -> Result<Vec<Note>> {
        Ok(self.notes.clone())
    }

    fn delete_note(&mut self, id: &Uuid) -> Result<()> {
        let before = self.notes.len();
        self.notes.retain(|note| note.id != *id);
        if self.notes.len() == before {
            return Err(SlipError::NoteNotFound(*id));
        }
        Ok(())
    }

    fn store_path(&self) -> Option<&Path> {
        None
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::markdown::decode_markdown;
    use chrono::{Duration, Utc};

    pub struct StoreFixture {
        pub store: InMemoryStore,
        created: usize,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
                created: 0,
            }
        }

        /// Saves a note. Each fixture note is created one minute after the previous one
        /// so that creation order is stable.
        fn push(&mut self, mut note: Note) {
            let base = Utc::now() - Duration::days(1);
            note.created_at = base + Duration::minutes(self.created as i64);
            note.updated_at = note.created_at;
            self.created += 1;
            self.store.save_note(&note).unwrap();
        }

        pub fn with_notes(mut self, count: usize) -> Self {
            for i in 0..count {
                let body = format!("Content for slip {}", i + 1);
                self.push(Note::from_parts(
                    format!("Test Slip {}", i + 1),
                    decode_markdown(&body),
                ));
            }
            self
        }

        pub fn with_note(mut self, title: &str, markdown: &str) -> Self {
            self.push(Note::from_parts(title.to_string(), decode_markdown(markdown)));
            self
        }

        pub fn with_pinned_note(mut self, title: &str) -> Self {
            let mut note = Note::from_parts(title.to_string(), decode_markdown("Pinned content"));
            note.set_pinned(true);
            self.push(note);
            self
        }
    }
}

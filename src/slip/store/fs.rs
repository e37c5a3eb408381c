use super::{upsert, DataStore};
use crate::error::{Result, SlipError};
use crate::model::Note;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub const NOTES_FILE: &str = "notes.json";

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// A store backed by `notes.json` inside `root`.
    pub fn new(root: &Path) -> Self {
        Self::at(root.join(NOTES_FILE))
    }

    /// A store backed by an explicit file.
    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(SlipError::Io)?;
            }
        }
        Ok(())
    }

    fn load(&self) -> Result<Vec<Note>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path).map_err(SlipError::Io)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        let notes: Vec<Note> = serde_json::from_str(&content).map_err(SlipError::Serialization)?;
        tracing::debug!(path = %self.path.display(), count = notes.len(), "loaded notes");
        Ok(notes)
    }

    fn write(&self, notes: &[Note]) -> Result<()> {
        self.ensure_parent()?;
        let content = serde_json::to_string_pretty(notes).map_err(SlipError::Serialization)?;
        fs::write(&self.path, content).map_err(SlipError::Io)?;
        tracing::debug!(path = %self.path.display(), count = notes.len(), "wrote notes");
        Ok(())
    }
}

impl DataStore for FileStore {
    fn save_note(&mut self, note: &Note) -> Result<()> {
        let mut notes = self.load()?;
        upsert(&mut notes, note);
        self.write(&notes)
    }

    fn get_note(&self, id: &Uuid) -> Result<Note> {
        self.load()?
            .into_iter()
            .find(|note| note.id == *id)
            .ok_or(SlipError::NoteNotFound(*id))
    }

    fn list_notes(&self) -> Result<Vec<Note>> {
        self.load()
    }

    fn delete_note(&mut self, id: &Uuid) -> Result<()> {
        let mut notes = self.load()?;
        let before = notes.len();
        notes.retain(|note| note.id != *id);
        if notes.len() == before {
            return Err(SlipError::NoteNotFound(*id));
        }
        self.write(&notes)
    }

    fn store_path(&self) -> Option<&Path> {
        Some(&self.path)
    }
}

use super::NoteStore;
use crate::error::{NotezError, Result};
use crate::model::Note;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DEFAULT_STORAGE_KEY: &str = "notes";

/// File-backed slot: the whole collection in `<root>/<key>.json`.
pub struct FileStore {
    root: PathBuf,
    key: String,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }

    pub fn with_key(mut self, key: &str) -> Self {
        self.key = key.to_string();
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the slot file.
    pub fn slot_path(&self) -> PathBuf {
        self.root.join(format!("{}.json", self.key))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(NotezError::Io)?;
        }
        Ok(())
    }
}

impl NoteStore for FileStore {
    fn get_all(&self) -> Result<Vec<Note>> {
        let path = self.slot_path();
        if !path.exists() {
            debug!(path = %path.display(), "no notes slot yet");
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&path).map_err(NotezError::Io)?;
        let notes: Vec<Note> = serde_json::from_str(&content).map_err(NotezError::Serialization)?;
        debug!(path = %path.display(), count = notes.len(), "read notes slot");
        Ok(notes)
    }

    fn save_all(&mut self, notes: &[Note]) -> Result<()> {
        self.ensure_dir()?;
        let path = self.slot_path();
        let content = serde_json::to_string_pretty(notes).map_err(NotezError::Serialization)?;
        fs::write(&path, content).map_err(NotezError::Io)?;
        debug!(path = %path.display(), count = notes.len(), "wrote notes slot");
        Ok(())
    }
}

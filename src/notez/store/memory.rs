use super::NoteStore;
use crate::error::{NotezError, Result};
use crate::model::Note;
use std::cell::Cell;

/// In-memory slot for testing and development.
/// Does NOT persist data, but does serialize: the slot holds the same JSON blob
/// the file store would write.
#[derive(Default)]
pub struct InMemoryStore {
    blob: Option<String>,
    writes: Cell<usize>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose slot already holds `raw`, valid or not.
    pub fn with_raw(raw: &str) -> Self {
        Self {
            blob: Some(raw.to_string()),
            writes: Cell::new(0),
        }
    }

    /// The raw slot contents, if anything was ever written.
    pub fn raw(&self) -> Option<&str> {
        self.blob.as_deref()
    }

    /// Number of `save_all` calls so far.
    pub fn writes(&self) -> usize {
        self.writes.get()
    }
}

impl NoteStore for InMemoryStore {
    fn get_all(&self) -> Result<Vec<Note>> {
        match &self.blob {
            None => Ok(Vec::new()),
            Some(raw) => serde_json::from_str(raw).map_err(NotezError::Serialization),
        }
    }

    fn save_all(&mut self, notes: &[Note]) -> Result<()> {
        self.blob = Some(serde_json::to_string(notes).map_err(NotezError::Serialization)?);
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(test)]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
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
            }
        }

        pub fn with_notes(mut self, count: usize) -> Self {
            for i in 0..count {
                let note = Note::new(
                    format!("Test Note {}", i + 1),
                    format!("Content for note {}", i + 1),
                );
                self.store.add(note).unwrap();
            }
            self
        }

        pub fn with_note(mut self, title: &str, content: &str) -> Self {
            self.store
                .add(Note::new(title.to_string(), content.to_string()))
                .unwrap();
            self
        }

        pub fn with_titles(mut self, titles: &[&str]) -> Self {
            for title in titles {
                self.store
                    .add(Note::new(title.to_string(), "Some content".to_string()))
                    .unwrap();
            }
            self
        }

        pub fn notes(&self) -> Vec<Note> {
            self.store.get_all().unwrap()
        }
    }
}

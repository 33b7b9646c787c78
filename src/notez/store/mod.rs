//! # Storage Layer
//!
//! The whole notes collection lives in a single slot as one serialized blob.
//! The [`NoteStore`] trait exposes exactly two primitives, [`NoteStore::get_all`]
//! and [`NoteStore::save_all`]; everything else (`add`, `update`, `delete`) is a
//! provided method that reads the full collection, changes it in memory and
//! writes it back. There are no partial updates and no indexes.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, one JSON file per storage key
//!   (`<data_dir>/<key>.json`).
//! - [`memory::InMemoryStore`]: keeps the serialized blob in memory for tests.
//!
//! ## Storage Format
//!
//! ```text
//! <data_dir>/
//! ├── notes.json      # JSON array of notes, in manual order
//! └── config.json     # NotezConfig
//! ```
//!
//! Array order is significant: it is the user's manual ordering.
//!
//! ## Degraded reads
//!
//! A missing slot is an empty collection. A slot that cannot be read or parsed
//! is *also* treated as empty by [`NoteStore::load_or_empty`], which is what the
//! read-modify-write helpers and the API use. The failure is logged, not raised.

use crate::error::Result;
use crate::model::Note;
use tracing::warn;
use uuid::Uuid;

pub mod fs;
pub mod memory;

/// Abstract interface for the notes slot.
pub trait NoteStore {
    /// Read and deserialize the full collection. A missing slot is `Ok(vec![])`.
    fn get_all(&self) -> Result<Vec<Note>>;

    /// Serialize and write the full collection, replacing whatever was there.
    fn save_all(&mut self, notes: &[Note]) -> Result<()>;

    /// [`get_all`](NoteStore::get_all), but unreadable or malformed data
    /// degrades to an empty collection.
    fn load_or_empty(&self) -> Vec<Note> {
        match self.get_all() {
            Ok(notes) => notes,
            Err(e) => {
                warn!(error = %e, "unreadable notes slot, using an empty collection");
                Vec::new()
            }
        }
    }

    /// Append a note.
    fn add(&mut self, note: Note) -> Result<()> {
        let mut notes = self.load_or_empty();
        notes.push(note);
        self.save_all(&notes)
    }

    /// Replace the note with the same id. Returns `false` (and writes nothing)
    /// when no such note exists.
    fn update(&mut self, note: &Note) -> Result<bool> {
        let mut notes = self.load_or_empty();
        match notes.iter_mut().find(|n| n.id == note.id) {
            Some(slot) => *slot = note.clone(),
            None => return Ok(false),
        }
        self.save_all(&notes)?;
        Ok(true)
    }

    /// Remove the note with the given id. Returns `false` (and writes nothing)
    /// when no such note exists.
    fn delete(&mut self, id: &Uuid) -> Result<bool> {
        let mut notes = self.load_or_empty();
        let before = notes.len();
        notes.retain(|n| &n.id != id);
        if notes.len() == before {
            return Ok(false);
        }
        self.save_all(&notes)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::memory::InMemoryStore;
    use super::*;

    #[test]
    fn add_appends_in_order() {
        let mut store = InMemoryStore::new();
        store.add(Note::new("A".into(), "a".into())).unwrap();
        store.add(Note::new("B".into(), "b".into())).unwrap();

        let titles: Vec<_> = store.get_all().unwrap().into_iter().map(|n| n.title).collect();
        assert_eq!(titles, vec!["A", "B"]);
    }

    #[test]
    fn update_missing_note_writes_nothing() {
        let mut store = InMemoryStore::new();
        store.add(Note::new("A".into(), "a".into())).unwrap();
        let writes = store.writes();

        let stranger = Note::new("X".into(), "x".into());
        assert!(!store.update(&stranger).unwrap());
        assert_eq!(store.writes(), writes);
    }

    #[test]
    fn delete_removes_only_the_match() {
        let mut store = InMemoryStore::new();
        let a = Note::new("A".into(), "a".into());
        let b = Note::new("B".into(), "b".into());
        store.add(a.clone()).unwrap();
        store.add(b.clone()).unwrap();

        assert!(store.delete(&a.id).unwrap());
        assert_eq!(store.get_all().unwrap(), vec![b]);
        assert!(!store.delete(&a.id).unwrap());
    }

    #[test]
    fn malformed_slot_degrades_to_empty() {
        let store = InMemoryStore::with_raw("{not json");
        assert!(store.get_all().is_err());
        assert!(store.load_or_empty().is_empty());
    }
}

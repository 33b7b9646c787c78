//! # API Facade
//!
//! [`NotezApi`] is the list-view controller every UI talks to. It owns the
//! in-memory notes collection, loaded from the store at construction, and
//! dispatches mutations to the command layer.
//!
//! ## The refresh rule
//!
//! After every mutation the collection is re-read from the store. The store is
//! the source of truth and the in-memory copy is never patched by hand, so
//! what a UI renders is always what was persisted.
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs`
//! - **I/O operations**: No stdout, stderr, or prompts
//! - **Confirmation**: [`NotezApi::delete`] deletes. Asking the user first is
//!   the caller's job.
//!
//! ## Generic Over NoteStore
//!
//! `NotezApi<S: NoteStore>` runs on `FileStore` in production and
//! `InMemoryStore` in tests.

use crate::commands::{self, CmdResult, NoteUpdate, NotezPaths};
use crate::error::{NotezError, Result};
use crate::index::{DisplayIndex, DisplayNote};
use crate::model::Note;
use crate::store::NoteStore;
use uuid::Uuid;

pub use crate::commands::config::ConfigAction;
pub use crate::commands::list::SortOption;
pub use crate::commands::{CmdMessage, MessageLevel};

pub struct NotezApi<S: NoteStore> {
    store: S,
    paths: NotezPaths,
    notes: Vec<Note>,
}

impl<S: NoteStore> NotezApi<S> {
    pub fn new(store: S, paths: NotezPaths) -> Self {
        let notes = store.load_or_empty();
        Self {
            store,
            paths,
            notes,
        }
    }

    /// The canonical collection, in manual order.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn note(&self, id: &Uuid) -> Option<&Note> {
        self.notes.iter().find(|n| &n.id == id)
    }

    /// Re-read the collection from the store.
    pub fn refresh(&mut self) {
        self.notes = self.store.load_or_empty();
    }

    pub fn add(&mut self, title: String, content: String) -> Result<CmdResult> {
        let result = commands::create::run(&mut self.store, title, content)?;
        self.refresh();
        Ok(result)
    }

    pub fn update(&mut self, update: &NoteUpdate) -> Result<CmdResult> {
        let result = commands::update::run(&mut self.store, update)?;
        self.refresh();
        Ok(result)
    }

    pub fn delete(&mut self, id: &Uuid) -> Result<CmdResult> {
        let result = commands::delete::run(&mut self.store, id)?;
        self.refresh();
        Ok(result)
    }

    /// Replace the manual order with `sequence`, a permutation of [`notes`](Self::notes).
    pub fn reorder(&mut self, sequence: Vec<Note>) -> Result<CmdResult> {
        let result = commands::reorder::apply(&mut self.store, sequence)?;
        self.refresh();
        Ok(result)
    }

    /// Move the note at zero-based `source` to `destination` in manual order.
    pub fn move_note(&mut self, source: usize, destination: usize) -> Result<CmdResult> {
        let result = commands::reorder::run(&mut self.store, source, destination)?;
        self.refresh();
        Ok(result)
    }

    /// The filtered and sorted projection, recomputed from the current collection.
    pub fn derive(&self, query: &str, sort: Option<SortOption>) -> Vec<Note> {
        commands::list::derive(&self.notes, query, sort)
    }

    /// [`derive`](Self::derive) paired with canonical indexes, for rendering.
    pub fn list(&self, query: &str, sort: Option<SortOption>) -> Result<CmdResult> {
        commands::list::run(&self.notes, query, sort)
    }

    pub fn view(&self, indexes: &[DisplayIndex]) -> Result<CmdResult> {
        commands::view::run(&self.notes, indexes)
    }

    /// Resolve one display index to its note, against the current collection.
    pub fn resolve(&self, index: DisplayIndex) -> Result<DisplayNote> {
        let mut listed = self.view(&[index])?.listed_notes;
        listed
            .pop()
            .ok_or_else(|| NotezError::Api(format!("Index {} not found", index)))
    }

    /// Move between two display indexes, the way a drag or `notez mv` names them.
    pub fn move_display(&mut self, from: DisplayIndex, to: DisplayIndex) -> Result<CmdResult> {
        match (from.offset(), to.offset()) {
            (Some(source), Some(destination)) => self.move_note(source, destination),
            _ => Err(NotezError::Api("Indexes start at 1".to_string())),
        }
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn paths(&self) -> &NotezPaths {
        &self.paths
    }
}

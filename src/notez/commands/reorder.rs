//! Manual ordering.
//!
//! A drag gesture is just `(source, destination)` on the canonical sequence.
//! The result is always a permutation of the input; when the gesture cannot be
//! applied the sequence comes back unchanged.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Note;
use crate::store::NoteStore;
use std::collections::HashSet;
use tracing::info;
use uuid::Uuid;

/// Removes the element at `source` and reinserts it at `destination`.
pub fn move_within(notes: &[Note], source: usize, destination: usize) -> Vec<Note> {
    let mut moved = notes.to_vec();
    if source == destination || source >= notes.len() || destination >= notes.len() {
        return moved;
    }
    let note = moved.remove(source);
    moved.insert(destination, note);
    moved
}

/// Drag-end translation: `active` was dropped over `over`.
pub fn move_by_id(notes: &[Note], active: &Uuid, over: &Uuid) -> Vec<Note> {
    let source = notes.iter().position(|n| &n.id == active);
    let destination = notes.iter().position(|n| &n.id == over);
    match (source, destination) {
        (Some(source), Some(destination)) => move_within(notes, source, destination),
        _ => notes.to_vec(),
    }
}

/// True when `candidate` holds exactly the notes of `current`, each once.
pub fn is_permutation(current: &[Note], candidate: &[Note]) -> bool {
    if current.len() != candidate.len() {
        return false;
    }
    let expected: HashSet<Uuid> = current.iter().map(|n| n.id).collect();
    let mut seen = HashSet::with_capacity(candidate.len());
    candidate
        .iter()
        .all(|n| expected.contains(&n.id) && seen.insert(n.id))
}

/// Moves a note between zero-based positions of the stored order.
pub fn run<S: NoteStore>(store: &mut S, source: usize, destination: usize) -> Result<CmdResult> {
    let notes = store.load_or_empty();
    if source >= notes.len() || destination >= notes.len() {
        return Ok(CmdResult::default().with_message(CmdMessage::warning(format!(
            "Cannot move {} to {}: only {} notes",
            source + 1,
            destination + 1,
            notes.len()
        ))));
    }
    if source == destination {
        return Ok(CmdResult::default().with_message(CmdMessage::info("Nothing to move")));
    }

    let reordered = move_within(&notes, source, destination);
    store.save_all(&reordered)?;
    info!(from = source, to = destination, "note moved");

    let title = reordered[destination].title.clone();
    Ok(CmdResult::default()
        .with_affected_notes(reordered)
        .with_message(CmdMessage::success(format!(
            "Moved {} to position {}",
            title,
            destination + 1
        ))))
}

/// Replaces the stored order with `sequence`, which must be a permutation of
/// what is stored. Timestamps are left exactly as given.
pub fn apply<S: NoteStore>(store: &mut S, sequence: Vec<Note>) -> Result<CmdResult> {
    let current = store.load_or_empty();
    if !is_permutation(&current, &sequence) {
        return Ok(CmdResult::default().with_message(CmdMessage::warning(
            "Reorder rejected: sequence does not match the stored notes",
        )));
    }

    store.save_all(&sequence)?;
    info!(count = sequence.len(), "notes reordered");
    Ok(CmdResult::default().with_affected_notes(sequence))
}

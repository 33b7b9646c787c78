use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::NoteStore;
use tracing::info;
use uuid::Uuid;

/// Removes the note with `id`. Performs no confirmation of its own; callers
/// ask the user before getting here.
pub fn run<S: NoteStore>(store: &mut S, id: &Uuid) -> Result<CmdResult> {
    let notes = store.load_or_empty();
    let Some(note) = notes.into_iter().find(|n| &n.id == id) else {
        return Ok(
            CmdResult::default().with_message(CmdMessage::warning(format!("Note not found: {}", id)))
        );
    };

    store.delete(id)?;
    info!(id = %id, "note deleted");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Note deleted: {}", note.title)));
    result.affected_notes.push(note);
    Ok(result)
}

use crate::commands::{CmdMessage, CmdResult, NoteUpdate};
use crate::error::Result;
use crate::store::NoteStore;
use tracing::info;

use super::helpers::blank_field_message;

pub fn run<S: NoteStore>(store: &mut S, update: &NoteUpdate) -> Result<CmdResult> {
    if let Some(rejection) = blank_field_message(&update.title, &update.content) {
        return Ok(CmdResult::default().with_message(rejection));
    }

    let notes = store.load_or_empty();
    let Some(mut note) = notes.into_iter().find(|n| n.id == update.id) else {
        return Ok(CmdResult::default()
            .with_message(CmdMessage::warning(format!("Note not found: {}", update.id))));
    };

    note.edit(update.title.clone(), update.content.clone());
    store.update(&note)?;
    info!(id = %note.id, "note updated");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Note updated: {}", note.title)));
    result.affected_notes.push(note);
    Ok(result)
}

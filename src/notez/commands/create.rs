use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Note;
use crate::store::NoteStore;
use tracing::info;

use super::helpers::blank_field_message;

pub fn run<S: NoteStore>(store: &mut S, title: String, content: String) -> Result<CmdResult> {
    if let Some(rejection) = blank_field_message(&title, &content) {
        return Ok(CmdResult::default().with_message(rejection));
    }

    let note = Note::new(title, content);
    store.add(note.clone())?;
    info!(id = %note.id, "note created");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Note created: {}", note.title)));
    result.affected_notes.push(note);
    Ok(result)
}

use crate::commands::CmdMessage;
use crate::error::{NotezError, Result};
use crate::index::DisplayIndex;
use crate::model::{is_blank, Note};

/// Maps display indexes to notes of the given canonical collection.
pub fn resolve_indexes<'a>(
    notes: &'a [Note],
    indexes: &[DisplayIndex],
) -> Result<Vec<(DisplayIndex, &'a Note)>> {
    indexes
        .iter()
        .map(|idx| {
            idx.offset()
                .and_then(|offset| notes.get(offset))
                .map(|note| (*idx, note))
                .ok_or_else(|| NotezError::Api(format!("Index {} not found", idx)))
        })
        .collect()
}

/// Rejection message for a blank title or content, `None` when both are usable.
pub fn blank_field_message(title: &str, content: &str) -> Option<CmdMessage> {
    match (is_blank(title), is_blank(content)) {
        (false, false) => None,
        (true, true) => Some(CmdMessage::warning("Title and content cannot be empty")),
        (true, false) => Some(CmdMessage::warning("Title cannot be empty")),
        (false, true) => Some(CmdMessage::warning("Content cannot be empty")),
    }
}

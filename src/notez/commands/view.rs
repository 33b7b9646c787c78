use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::{DisplayIndex, DisplayNote};
use crate::model::Note;

use super::helpers::resolve_indexes;

pub fn run(notes: &[Note], indexes: &[DisplayIndex]) -> Result<CmdResult> {
    let listed = resolve_indexes(notes, indexes)?
        .into_iter()
        .map(|(index, note)| DisplayNote {
            note: note.clone(),
            index,
        })
        .collect();
    Ok(CmdResult::default().with_listed_notes(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn views_requested_notes_in_request_order() {
        let fixture = StoreFixture::new().with_titles(&["A", "B", "C"]);
        let result = run(&fixture.notes(), &[DisplayIndex(3), DisplayIndex(1)]).unwrap();
        let titles: Vec<_> = result
            .listed_notes
            .iter()
            .map(|dp| dp.note.title.as_str())
            .collect();
        assert_eq!(titles, vec!["C", "A"]);
        assert_eq!(result.listed_notes[0].index, DisplayIndex(3));
    }

    #[test]
    fn unknown_index_is_an_error() {
        let fixture = StoreFixture::new().with_notes(1);
        assert!(run(&fixture.notes(), &[DisplayIndex(2)]).is_err());
        assert!(run(&fixture.notes(), &[DisplayIndex(0)]).is_err());
    }
}

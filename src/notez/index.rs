//! Display indexes.
//!
//! Notes are referred to on the command line by their 1-based position in the
//! canonical (manual) order. A sorted or filtered listing keeps showing each
//! note's canonical index, so `notez view 3` means the same note regardless of
//! how the last listing was ordered.

use crate::model::Note;
use std::fmt;
use std::str::FromStr;

/// A 1-based canonical position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DisplayIndex(pub usize);

impl DisplayIndex {
    /// Zero-based offset into the canonical collection. `None` for index 0.
    pub fn offset(self) -> Option<usize> {
        self.0.checked_sub(1)
    }
}

impl fmt::Display for DisplayIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DisplayIndex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<usize>() {
            Ok(0) => Err("Indexes start at 1".to_string()),
            Ok(n) => Ok(DisplayIndex(n)),
            Err(_) => Err(format!("Invalid index: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayNote {
    pub note: Note,
    pub index: DisplayIndex,
}

/// Pairs every note with its canonical position.
pub fn index_notes(notes: &[Note]) -> Vec<DisplayNote> {
    notes
        .iter()
        .enumerate()
        .map(|(i, note)| DisplayNote {
            note: note.clone(),
            index: DisplayIndex(i + 1),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_positive_indexes() {
        assert_eq!("3".parse::<DisplayIndex>(), Ok(DisplayIndex(3)));
        assert_eq!(" 1 ".parse::<DisplayIndex>(), Ok(DisplayIndex(1)));
    }

    #[test]
    fn rejects_zero_and_garbage() {
        assert!("0".parse::<DisplayIndex>().is_err());
        assert!("p1".parse::<DisplayIndex>().is_err());
        assert!("-2".parse::<DisplayIndex>().is_err());
    }

    #[test]
    fn zero_has_no_offset() {
        assert_eq!(DisplayIndex(0).offset(), None);
        assert_eq!(DisplayIndex(1).offset(), Some(0));
    }

    #[test]
    fn indexes_follow_canonical_order() {
        let notes = vec![
            Note::new("A".into(), "a".into()),
            Note::new("B".into(), "b".into()),
        ];
        let indexed = index_notes(&notes);
        assert_eq!(indexed[0].index, DisplayIndex(1));
        assert_eq!(indexed[1].note.title, "B");
        assert_eq!(indexed[1].index.offset(), Some(1));
    }
}

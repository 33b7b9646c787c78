//! The display projection: filter by a search query, then order.
//!
//! Everything here is a pure function of `(notes, query, sort)`. The source
//! collection is never touched and nothing is cached; callers recompute the
//! projection whenever any input changes.

use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::{index_notes, DisplayNote};
use crate::model::Note;
use feruca::Collator;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOption {
    Newest,
    Oldest,
    TitleAsc,
    TitleDesc,
}

impl SortOption {
    pub const ALL: [SortOption; 4] = [
        SortOption::Newest,
        SortOption::Oldest,
        SortOption::TitleAsc,
        SortOption::TitleDesc,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::Newest => "newest",
            SortOption::Oldest => "oldest",
            SortOption::TitleAsc => "title-asc",
            SortOption::TitleDesc => "title-desc",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortOption::Newest => "Newest First",
            SortOption::Oldest => "Oldest First",
            SortOption::TitleAsc => "Title (A-Z)",
            SortOption::TitleDesc => "Title (Z-A)",
        }
    }

    fn compare(&self, collator: &mut Collator, a: &Note, b: &Note) -> Ordering {
        match self {
            SortOption::Newest => b.updated_at.cmp(&a.updated_at),
            SortOption::Oldest => a.updated_at.cmp(&b.updated_at),
            SortOption::TitleAsc => collate_titles(collator, &a.title, &b.title),
            SortOption::TitleDesc => collate_titles(collator, &b.title, &a.title),
        }
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOption {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        SortOption::ALL
            .into_iter()
            .find(|opt| opt.as_str() == s)
            .ok_or_else(|| {
                format!(
                    "Unknown sort option: {} (expected newest, oldest, title-asc or title-desc)",
                    s
                )
            })
    }
}

/// Dictionary-style title order under the Unicode root collation: accents and
/// case only break ties between otherwise equal letters, and lowercase comes
/// first when two titles differ by case alone.
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    collate_titles(&mut Collator::default(), a, b)
}

fn collate_titles(collator: &mut Collator, a: &str, b: &str) -> Ordering {
    collator.collate(a, b).then_with(|| b.cmp(a))
}

/// Filters by `query` (when non-empty) and orders by `sort`. With no sort the
/// canonical order is kept.
pub fn derive(notes: &[Note], query: &str, sort: Option<SortOption>) -> Vec<Note> {
    project(index_notes(notes), query, sort)
        .into_iter()
        .map(|dp| dp.note)
        .collect()
}

fn project(indexed: Vec<DisplayNote>, query: &str, sort: Option<SortOption>) -> Vec<DisplayNote> {
    let mut listed: Vec<DisplayNote> = if query.is_empty() {
        indexed
    } else {
        indexed.into_iter().filter(|dp| dp.note.matches(query)).collect()
    };

    if let Some(sort) = sort {
        let mut collator = Collator::default();
        listed.sort_by(|a, b| sort.compare(&mut collator, &a.note, &b.note));
    }
    listed
}

/// The projection over `notes`, each paired with its canonical index.
pub fn run(notes: &[Note], query: &str, sort: Option<SortOption>) -> Result<CmdResult> {
    let indexed = index_notes(notes);
    Ok(CmdResult::default().with_listed_notes(project(indexed, query, sort)))
}

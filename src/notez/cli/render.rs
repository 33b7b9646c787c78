//! # Rendering
//!
//! Turns command results into terminal text. Everything returns a `String` so
//! the output can be checked in tests; the handlers do the printing.
//!
//! Layout math (widths, truncation, padding) is Unicode aware through
//! `unicode-width`. Color comes from `colored`, which switches itself off when
//! stdout is not a terminal.

use chrono::{DateTime, Local, Utc};
use colored::Colorize;
use notez::api::{CmdMessage, MessageLevel};
use notez::config::{NotezConfig, CONFIG_KEYS};
use notez::index::DisplayNote;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const LINE_WIDTH: usize = 100;
pub const TIME_WIDTH: usize = 14;
const INDEX_WIDTH: usize = 6;
const PREVIEW_CHARS: usize = 50;
const EMPTY_LIST: &str = "No notes found.";

/// One line per note: canonical index, title with a content preview, and how
/// long ago it was last updated.
pub fn render_note_list(notes: &[DisplayNote]) -> String {
    if notes.is_empty() {
        return format!("{}\n", EMPTY_LIST);
    }

    let mut output = String::new();
    for dn in notes {
        let index = format!("{:>width$}. ", dn.index, width = INDEX_WIDTH - 2);

        let preview: String = dn
            .note
            .content
            .chars()
            .take(PREVIEW_CHARS)
            .map(|c| if c == '\n' { ' ' } else { c })
            .collect();
        let text = if preview.is_empty() {
            dn.note.title.clone()
        } else {
            format!("{} {}", dn.note.title, preview)
        };

        let available = LINE_WIDTH.saturating_sub(index.width() + TIME_WIDTH);
        let shown = truncate_to_width(&text, available);
        let padding = available.saturating_sub(shown.width());

        // keep the title and the preview visually apart
        let title_width = dn.note.title.width().min(shown.width());
        let (title_part, preview_part) = split_at_width(&shown, title_width);

        output.push_str(&format!(
            "{}{}{}{}{}\n",
            index.yellow(),
            title_part,
            preview_part.dimmed(),
            " ".repeat(padding),
            format_time_ago(dn.note.updated_at).dimmed().italic()
        ));
    }
    output
}

pub fn render_full_notes(notes: &[DisplayNote]) -> String {
    if notes.is_empty() {
        return format!("{}\n", EMPTY_LIST);
    }

    let mut output = String::new();
    for (i, dn) in notes.iter().enumerate() {
        if i > 0 {
            output.push_str("\n================================\n\n");
        }
        output.push_str(&format!(
            "{} {}\n",
            dn.index.to_string().yellow(),
            dn.note.title.bold()
        ));
        output.push_str(&format!(
            "{}\n",
            format!(
                "created {}  updated {}",
                format_local(dn.note.created_at),
                format_local(dn.note.updated_at)
            )
            .dimmed()
        ));
        output.push_str("--------------------------------\n");
        output.push_str(&dn.note.content);
        output.push('\n');
    }
    output
}

pub fn render_config(config: &NotezConfig) -> String {
    CONFIG_KEYS
        .iter()
        .filter_map(|key| config.get(key).map(|value| format!("{} = {}\n", key, value)))
        .collect()
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    messages
        .iter()
        .map(|message| {
            let styled = match message.level {
                MessageLevel::Info => message.content.dimmed(),
                MessageLevel::Success => message.content.green(),
                MessageLevel::Warning => message.content.yellow(),
                MessageLevel::Error => message.content.red(),
            };
            format!("{}\n", styled)
        })
        .collect()
}

pub fn print_messages(messages: &[CmdMessage]) {
    let output = render_messages(messages);
    if !output.is_empty() {
        print!("{}", output);
    }
}

pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

fn split_at_width(s: &str, width: usize) -> (&str, &str) {
    let mut current = 0;
    for (i, c) in s.char_indices() {
        if current >= width {
            return s.split_at(i);
        }
        current += c.width().unwrap_or(0);
    }
    (s, "")
}

fn format_local(timestamp: DateTime<Utc>) -> String {
    timestamp
        .with_timezone(&Local)
        .format("%Y-%m-%d %H:%M")
        .to_string()
}

pub fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);

    let formatter = timeago::Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());

    // units padded to the width of "seconds" so the column lines up
    let time_str = time_str
        .replace("hours ago", "  hours ago")
        .replace("hour ago", "   hour ago")
        .replace("days ago", "   days ago")
        .replace("day ago", "    day ago")
        .replace("weeks ago", "  weeks ago")
        .replace("week ago", "   week ago")
        .replace("months ago", " months ago")
        .replace("month ago", "  month ago")
        .replace("years ago", "  years ago")
        .replace("year ago", "   year ago");

    format!("{:>width$}", time_str, width = TIME_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use notez::index::{index_notes, DisplayIndex};
    use notez::model::Note;

    fn listed(titles: &[(&str, &str)]) -> Vec<DisplayNote> {
        let notes: Vec<Note> = titles
            .iter()
            .map(|(t, c)| Note::new(t.to_string(), c.to_string()))
            .collect();
        index_notes(&notes)
    }

    #[test]
    fn empty_list_says_so() {
        assert_eq!(render_note_list(&[]), "No notes found.\n");
        assert_eq!(render_full_notes(&[]), "No notes found.\n");
    }

    #[test]
    fn list_lines_carry_index_and_title() {
        colored::control::set_override(false);
        let output = render_note_list(&listed(&[("Groceries", "milk"), ("Ideas", "more")]));
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("   1. Groceries milk"));
        assert!(lines[1].starts_with("   2. Ideas more"));
        assert_eq!(lines[0].width(), LINE_WIDTH);
    }

    #[test]
    fn filtered_list_keeps_canonical_index() {
        colored::control::set_override(false);
        let mut notes = listed(&[("First", "a"), ("Second", "b")]);
        notes.remove(0);
        let output = render_note_list(&notes);
        assert!(output.contains("2. Second"));
    }

    #[test]
    fn long_titles_are_truncated_to_the_line() {
        colored::control::set_override(false);
        let long = "x".repeat(300);
        let output = render_note_list(&listed(&[(long.as_str(), "")]));
        let line = output.lines().next().unwrap();
        assert!(line.contains('…'));
        assert_eq!(line.width(), LINE_WIDTH);
    }

    #[test]
    fn truncation_respects_wide_chars() {
        assert_eq!(truncate_to_width("short", 10), "short");
        let cut = truncate_to_width("日本語のテキスト", 7);
        assert!(cut.width() <= 7);
        assert!(cut.ends_with('…'));
    }

    #[test]
    fn full_view_shows_content_and_separators() {
        colored::control::set_override(false);
        let mut notes = listed(&[("One", "first body"), ("Two", "second body")]);
        notes[1].index = DisplayIndex(5);
        let output = render_full_notes(&notes);

        assert!(output.contains("1 One"));
        assert!(output.contains("5 Two"));
        assert!(output.contains("first body"));
        assert!(output.contains("created "));
        assert_eq!(output.matches("================================").count(), 1);
    }

    #[test]
    fn config_lists_every_key() {
        let output = render_config(&NotezConfig::default());
        assert_eq!(output, "theme = auto\nsort = none\nstorage-key = notes\n");
    }

    #[test]
    fn messages_one_per_line() {
        colored::control::set_override(false);
        let output = render_messages(&[
            CmdMessage::success("Created note"),
            CmdMessage::warning("Title cannot be empty"),
        ]);
        assert_eq!(output, "Created note\nTitle cannot be empty\n");
    }

    #[test]
    fn time_ago_is_right_aligned() {
        use chrono::Duration;

        let cases = [
            (Duration::seconds(30), "seconds ago"),
            (Duration::hours(2), "  hours ago"),
            (Duration::days(3), "   days ago"),
        ];
        for (ago, expected) in cases {
            let formatted = format_time_ago(Utc::now() - ago);
            assert!(formatted.contains(expected), "{:?} -> {:?}", ago, formatted);
            assert_eq!(formatted.width(), TIME_WIDTH);
        }
    }
}

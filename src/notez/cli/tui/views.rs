use super::{App, Field, Focus, View};
use crate::cli::render::{format_time_ago, truncate_to_width};
use crate::cli::styles::{palette, Palette};
use notez::api::MessageLevel;
use notez::config::Theme;
use notez::store::NoteStore;
use notez::timer::Countdown;
use unicode_width::UnicodeWidthStr;

const MAX_WIDTH: usize = 100;
const BAR_WIDTH: usize = 40;
/// Header, rules, search line, footer.
const CHROME_LINES: usize = 8;
const CURSOR: &str = "▏";

pub(super) fn render<S: NoteStore>(app: &App<S>, width: usize, height: usize) -> Vec<String> {
    let width = width.clamp(20, MAX_WIDTH);
    let p = palette(app.theme);

    let mut lines = vec![header(app, p, width), rule(p, width)];
    match app.view {
        View::Notes => notes_view(app, p, width, height, &mut lines),
        View::Timer => timer_view(&app.countdown, p, &mut lines),
        View::Matrix => matrix_view(p, width, &mut lines),
    }
    lines.push(rule(p, width));
    lines.push(status_line(app, p));
    lines.push(p.muted.apply_to(help_line(app)).to_string());
    lines
}

fn header<S: NoteStore>(app: &App<S>, p: &Palette, width: usize) -> String {
    let mut tabs = String::new();
    let mut plain = 0;
    for (n, view) in [View::Notes, View::Timer, View::Matrix].iter().enumerate() {
        let tab = format!("[{}] {}", n + 1, view.label());
        plain += tab.width() + 2;
        let styled = if *view == app.view {
            p.accent.apply_to(tab).to_string()
        } else {
            p.muted.apply_to(tab).to_string()
        };
        tabs.push_str(&styled);
        tabs.push_str("  ");
    }

    let theme = match app.theme {
        Theme::Light => "light",
        Theme::Dark => "dark",
    };
    let left = format!("{}  ", p.title.apply_to("notez"));
    let gap = width.saturating_sub(plain + "notez  ".len() + theme.len());
    format!("{}{}{}{}", left, tabs, " ".repeat(gap), p.faint.apply_to(theme))
}

fn rule(p: &Palette, width: usize) -> String {
    p.faint.apply_to("─".repeat(width)).to_string()
}

fn notes_view<S: NoteStore>(
    app: &App<S>,
    p: &Palette,
    width: usize,
    height: usize,
    lines: &mut Vec<String>,
) {
    let cursor = if matches!(app.focus, Focus::Search) {
        CURSOR
    } else {
        ""
    };
    let sort = app.sort.map(|s| s.label()).unwrap_or("Manual order");
    lines.push(format!(
        "{} {}{}    {} {}",
        p.muted.apply_to("Search:"),
        p.regular.apply_to(&app.query),
        cursor,
        p.muted.apply_to("Sort:"),
        p.regular.apply_to(sort)
    ));
    lines.push(String::new());

    let visible = app.visible();
    if visible.is_empty() {
        let empty = if app.query.is_empty() {
            "No notes yet. Press Ctrl+N to write one.".to_string()
        } else {
            format!("No notes match \"{}\"", app.query)
        };
        lines.push(p.muted.apply_to(empty).to_string());
    }

    let room = height.saturating_sub(CHROME_LINES + form_lines(&app.focus)).max(1);
    let first = app.selected.saturating_sub(room - 1);
    for (offset, note) in visible.iter().enumerate().skip(first).take(room) {
        let canonical = app
            .api
            .notes()
            .iter()
            .position(|n| n.id == note.id)
            .map(|i| i + 1)
            .unwrap_or(0);
        let index = format!("{:>3}. ", canonical);
        let time = format_time_ago(note.updated_at);
        let available = width.saturating_sub(2 + index.width() + time.width());
        let title = truncate_to_width(&note.title, available);
        let padding = available.saturating_sub(title.width());

        if offset == app.selected {
            let line = format!("› {}{}{}{}", index, title, " ".repeat(padding), time);
            lines.push(p.highlight.apply_to(line).to_string());
        } else {
            lines.push(format!(
                "  {}{}{}{}",
                p.index.apply_to(index),
                p.regular.apply_to(title),
                " ".repeat(padding),
                p.muted.apply_to(time)
            ));
        }
    }

    match &app.focus {
        Focus::Form(form) => {
            let heading = if form.editing.is_some() {
                "Edit note"
            } else {
                "New note"
            };
            let (title_cursor, content_cursor) = match form.field {
                Field::Title => (CURSOR, ""),
                Field::Content => ("", CURSOR),
            };
            lines.push(String::new());
            lines.push(p.title.apply_to(heading).to_string());
            lines.push(format!(
                "{} {}{}",
                p.muted.apply_to("Title:  "),
                form.title,
                title_cursor
            ));
            lines.push(format!(
                "{} {}{}",
                p.muted.apply_to("Content:"),
                form.content,
                content_cursor
            ));
        }
        Focus::ConfirmDelete(id) => {
            let title = app
                .api
                .note(id)
                .map(|n| n.title.clone())
                .unwrap_or_default();
            lines.push(String::new());
            lines.push(
                p.warning
                    .apply_to(format!("Delete \"{}\"? (y/n)", title))
                    .to_string(),
            );
        }
        Focus::None | Focus::Search => {}
    }
}

fn form_lines(focus: &Focus) -> usize {
    match focus {
        Focus::Form(_) => 4,
        Focus::ConfirmDelete(_) => 2,
        Focus::None | Focus::Search => 0,
    }
}

fn progress_bar(progress: f64) -> String {
    let filled = ((progress * BAR_WIDTH as f64).round() as usize).min(BAR_WIDTH);
    format!(
        "{}{} {:>3}%",
        "█".repeat(filled),
        "░".repeat(BAR_WIDTH - filled),
        (progress * 100.0).round() as u32
    )
}

fn timer_view(countdown: &Countdown, p: &Palette, lines: &mut Vec<String>) {
    let phase = countdown.phase();
    let phase_style = if phase.is_break() {
        &p.break_phase
    } else {
        &p.focus_phase
    };
    let state = if countdown.is_running() {
        "running"
    } else {
        "paused"
    };

    lines.push(String::new());
    lines.push(format!(
        "  {}  {}",
        phase_style.apply_to(phase.label()),
        p.muted.apply_to(state)
    ));
    lines.push(String::new());
    lines.push(format!("        {}", p.clock.apply_to(countdown.clock())));
    lines.push(String::new());
    lines.push(format!("  {}", progress_bar(countdown.progress())));
    lines.push(String::new());
    lines.push(format!(
        "  {} {}    {} {} min",
        p.muted.apply_to("Sessions:"),
        countdown.sessions(),
        p.muted.apply_to("Focused:"),
        countdown.focus_minutes()
    ));
}

fn matrix_view(p: &Palette, width: usize, lines: &mut Vec<String>) {
    let cell = width.saturating_sub(3) / 2;
    let row = |left: &str, right: &str| {
        format!(
            " {:<cell$} {:<cell$}",
            truncate_to_width(left, cell),
            truncate_to_width(right, cell),
            cell = cell
        )
    };

    lines.push(String::new());
    lines.push(p.title.apply_to(row("Urgent & Important", "Important, Not Urgent")).to_string());
    lines.push(p.muted.apply_to(row("  do it now", "  schedule it")).to_string());
    lines.push(String::new());
    lines.push(p.title.apply_to(row("Urgent, Not Important", "Neither")).to_string());
    lines.push(p.muted.apply_to(row("  delegate it", "  drop it")).to_string());
    lines.push(String::new());
    lines.push(p.faint.apply_to("  Task matrix is coming soon.").to_string());
}

fn status_line<S: NoteStore>(app: &App<S>, p: &Palette) -> String {
    match &app.status {
        None => String::new(),
        Some(message) => {
            let style = match message.level {
                MessageLevel::Info => &p.muted,
                MessageLevel::Success => &p.success,
                MessageLevel::Warning => &p.warning,
                MessageLevel::Error => &p.error,
            };
            style.apply_to(&message.content).to_string()
        }
    }
}

fn help_line<S: NoteStore>(app: &App<S>) -> &'static str {
    match (&app.focus, app.view) {
        (Focus::Form(_), _) => "Tab switch field · Enter next/save · Esc cancel",
        (Focus::Search, _) => "type to filter · Enter done · Esc close",
        (Focus::ConfirmDelete(_), _) => "y delete · any other key cancels",
        (Focus::None, View::Notes) => {
            "↑/↓ select · e edit · d delete · K/J move · s sort · ^N new · ^F search · ^T theme · q quit"
        }
        (Focus::None, View::Timer) => "space start/pause · s skip · r reset · 1/2/3 views · q quit",
        (Focus::None, View::Matrix) => "1/2/3 views · q quit",
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests_support::app;
    use super::*;
    use notez::shortcuts::KeyEvent;

    fn screen(app: &App<notez::store::memory::InMemoryStore>) -> String {
        render(app, 80, 24).join("\n")
    }

    #[test]
    fn notes_view_lists_titles_with_canonical_indexes() {
        let (_dir, mut app) = app(&["Team Meeting", "Lunch"]);
        let out = screen(&app);
        assert!(out.contains("1. Team Meeting"));
        assert!(out.contains("2. Lunch"));
        assert!(out.contains("Manual order"));

        app.handle_key(KeyEvent::new("f").ctrl());
        app.handle_key(KeyEvent::new("l"));
        app.handle_key(KeyEvent::new("u"));
        let out = screen(&app);
        assert!(out.contains("2. Lunch"));
        assert!(!out.contains("Team Meeting"));
    }

    #[test]
    fn empty_states() {
        let (_dir, mut app) = app(&[]);
        assert!(screen(&app).contains("No notes yet"));

        app.handle_key(KeyEvent::new("f").ctrl());
        app.handle_key(KeyEvent::new("z"));
        assert!(screen(&app).contains("No notes match \"z\""));
    }

    #[test]
    fn confirm_modal_names_the_note() {
        let (_dir, mut app) = app(&["Old idea"]);
        app.handle_key(KeyEvent::new("d"));
        assert!(screen(&app).contains("Delete \"Old idea\"? (y/n)"));
    }

    #[test]
    fn timer_view_shows_clock_and_progress() {
        let (_dir, mut app) = app(&[]);
        app.handle_key(KeyEvent::new("2"));
        let out = screen(&app);
        assert!(out.contains("Focus Time"));
        assert!(out.contains("25:00"));
        assert!(out.contains("0%"));
        assert!(out.contains("paused"));
    }

    #[test]
    fn progress_bar_fills_proportionally() {
        let bar = progress_bar(0.5);
        assert_eq!(bar.matches('█').count(), 20);
        assert!(bar.ends_with(" 50%"));
        assert_eq!(progress_bar(1.0).matches('░').count(), 0);
    }

    #[test]
    fn matrix_is_a_placeholder() {
        let (_dir, mut app) = app(&[]);
        app.handle_key(KeyEvent::new("3"));
        let out = screen(&app);
        assert!(out.contains("Urgent & Important"));
        assert!(out.contains("coming soon"));
    }

    #[test]
    fn long_lists_keep_the_selection_on_screen() {
        let titles: Vec<String> = (1..=40).map(|i| format!("Note {}", i)).collect();
        let refs: Vec<&str> = titles.iter().map(|s| s.as_str()).collect();
        let (_dir, mut app) = app(&refs);
        for _ in 0..39 {
            app.handle_key(KeyEvent::new("ArrowDown"));
        }
        let out = render(&app, 80, 24);
        assert!(out.len() <= 24);
        assert!(out.iter().any(|l| l.contains("40. Note 40")));
    }
}

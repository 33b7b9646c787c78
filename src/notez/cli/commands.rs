use super::render::{print_messages, render_config, render_full_notes, render_note_list};
use super::setup::{Cli, Commands};
use super::tui::{self, View};
use notez::api::{CmdMessage, ConfigAction, NotezApi, SortOption};
use notez::commands::NoteUpdate;
use notez::config::NotezConfig;
use notez::editor::{edit_content, EditorContent};
use notez::error::Result;
use notez::index::DisplayIndex;
use notez::init::{initialize, resolve_data_dir};
use notez::store::fs::FileStore;
use std::io::{self, BufRead, Write};
use tracing::debug;

struct AppContext {
    api: NotezApi<FileStore>,
    config: NotezConfig,
}

pub fn run(cli: Cli) -> Result<()> {
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Create {
            no_editor,
            title,
            content,
        }) => {
            let content = if content.is_empty() {
                None
            } else {
                Some(content.join(" "))
            };
            handle_create(&mut ctx, title, content, no_editor)
        }
        Some(Commands::List { search, sort }) => handle_list(&mut ctx, search, sort),
        Some(Commands::Search { term, sort }) => handle_list(&mut ctx, Some(term), sort),
        Some(Commands::View { indexes }) => handle_view(&mut ctx, &indexes),
        Some(Commands::Edit {
            index,
            title,
            content,
        }) => handle_edit(&mut ctx, index, title, content),
        Some(Commands::Delete { indexes, yes }) => handle_delete(&mut ctx, &indexes, yes),
        Some(Commands::Move { from, to }) => handle_move(&mut ctx, from, to),
        Some(Commands::Timer) => handle_interactive(ctx, View::Timer),
        Some(Commands::Ui) => handle_interactive(ctx, View::Notes),
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
        None => handle_list(&mut ctx, None, None),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;
    debug!(data_dir = %data_dir.display(), "resolved data dir");

    let ctx = initialize(&data_dir);
    Ok(AppContext {
        api: ctx.api,
        config: ctx.config,
    })
}

fn handle_create(
    ctx: &mut AppContext,
    title: Option<String>,
    content: Option<String>,
    no_editor: bool,
) -> Result<()> {
    let (title, content) = match (title, content) {
        (Some(title), Some(content)) => (title, content),
        (title, content) if no_editor => (title.unwrap_or_default(), content.unwrap_or_default()),
        (title, content) => {
            let initial = EditorContent::new(title.unwrap_or_default(), content.unwrap_or_default());
            let edited = edit_content(&initial)?;
            (edited.title, edited.content)
        }
    };

    let result = ctx.api.add(title, content)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(
    ctx: &mut AppContext,
    search: Option<String>,
    sort: Option<SortOption>,
) -> Result<()> {
    let sort = sort.or(ctx.config.default_sort);
    let result = ctx.api.list(search.as_deref().unwrap_or(""), sort)?;
    print!("{}", render_note_list(&result.listed_notes));
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &mut AppContext, indexes: &[DisplayIndex]) -> Result<()> {
    let result = ctx.api.view(indexes)?;
    print!("{}", render_full_notes(&result.listed_notes));
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(
    ctx: &mut AppContext,
    index: DisplayIndex,
    title: Option<String>,
    content: Option<String>,
) -> Result<()> {
    let current = ctx.api.resolve(index)?.note;

    let (title, content) = if title.is_none() && content.is_none() {
        let initial = EditorContent::new(current.title.clone(), current.content.clone());
        let edited = edit_content(&initial)?;
        (edited.title, edited.content)
    } else {
        (
            title.unwrap_or_else(|| current.title.clone()),
            content.unwrap_or_else(|| current.content.clone()),
        )
    };

    if title == current.title && content == current.content {
        print_messages(&[CmdMessage::info("No changes")]);
        return Ok(());
    }

    let result = ctx
        .api
        .update(&NoteUpdate::new(current.id, title, content))?;
    print_messages(&result.messages);
    Ok(())
}

/// Asks on stdout, answers from stdin. Only `y` or `yes` counts.
fn confirm(question: &str) -> Result<bool> {
    print!("{} [y/N] ", question);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

fn handle_delete(ctx: &mut AppContext, indexes: &[DisplayIndex], yes: bool) -> Result<()> {
    let targets = ctx.api.view(indexes)?.listed_notes;

    if !yes {
        for dn in &targets {
            println!("  {}. {}", dn.index, dn.note.title);
        }
        let question = match targets.len() {
            1 => "Delete this note?".to_string(),
            n => format!("Delete these {} notes?", n),
        };
        if !confirm(&question)? {
            print_messages(&[CmdMessage::info("Nothing deleted")]);
            return Ok(());
        }
    }

    for dn in &targets {
        let result = ctx.api.delete(&dn.note.id)?;
        print_messages(&result.messages);
    }
    Ok(())
}

fn handle_move(ctx: &mut AppContext, from: DisplayIndex, to: DisplayIndex) -> Result<()> {
    let result = ctx.api.move_display(from, to)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_interactive(ctx: AppContext, view: View) -> Result<()> {
    let theme = ctx.config.theme.resolve();
    tui::run(ctx.api, theme, ctx.config.default_sort, view)
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        print!("{}", render_config(config));
    }
    print_messages(&result.messages);
    Ok(())
}

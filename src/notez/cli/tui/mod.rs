//! # Interactive Mode
//!
//! Three views share one screen: the notes list, the focus timer and a
//! placeholder task matrix. Input arrives on one channel fed by a key-reader
//! thread and, while the timer is running on screen, a [`Ticker`]. All state
//! changes happen on the UI thread in [`App`].
//!
//! Shortcuts come in two layers. The app-level dispatcher (new note, search,
//! blur, view switching, theme, quit) is registered for the whole session. Each
//! view registers its own dispatcher when shown and deregisters it when left;
//! it is only consulted while no text input has focus, so plain letters keep
//! typing into the search box or the note form.

mod keys;
mod views;

use console::{Key, Term};
use notez::api::{CmdMessage, ConfigAction, NotezApi, SortOption};
use notez::commands::{CmdResult, NoteUpdate};
use notez::config::{Theme, ThemePreference};
use notez::error::{NotezError, Result};
use notez::model::Note;
use notez::shortcuts::{KeyEvent, Shortcut, ShortcutDispatcher};
use notez::store::NoteStore;
use notez::timer::{Countdown, TickOutcome, Ticker};
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Duration;
use std::thread;
use tracing::{debug, warn};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Notes,
    Timer,
    Matrix,
}

impl View {
    fn label(self) -> &'static str {
        match self {
            View::Notes => "Notes",
            View::Timer => "Timer",
            View::Matrix => "Matrix",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Title,
    Content,
}

#[derive(Debug, Clone)]
struct Form {
    editing: Option<Uuid>,
    title: String,
    content: String,
    field: Field,
}

impl Form {
    fn blank() -> Self {
        Self {
            editing: None,
            title: String::new(),
            content: String::new(),
            field: Field::Title,
        }
    }

    fn for_note(note: &Note) -> Self {
        Self {
            editing: Some(note.id),
            title: note.title.clone(),
            content: note.content.clone(),
            field: Field::Title,
        }
    }

    fn active_text(&mut self) -> &mut String {
        match self.field {
            Field::Title => &mut self.title,
            Field::Content => &mut self.content,
        }
    }
}

#[derive(Debug, Clone)]
enum Focus {
    None,
    Search,
    Form(Form),
    ConfirmDelete(Uuid),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AppAction {
    NewNote,
    Search,
    Blur,
    Show(View),
    ToggleTheme,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ViewAction {
    Up,
    Down,
    Edit,
    Delete,
    MoveUp,
    MoveDown,
    CycleSort,
    ToggleTimer,
    SkipPhase,
    ResetTimer,
    Show(View),
    Quit,
}

fn app_shortcuts() -> Vec<Shortcut<AppAction>> {
    let mut shortcuts = Vec::new();
    // Cmd on macOS terminals that forward it, Ctrl everywhere else
    for (key, action) in [
        ("n", AppAction::NewNote),
        ("f", AppAction::Search),
        ("1", AppAction::Show(View::Notes)),
        ("2", AppAction::Show(View::Timer)),
        ("3", AppAction::Show(View::Matrix)),
    ] {
        shortcuts.push(Shortcut::new(key, action).ctrl());
        shortcuts.push(Shortcut::new(key, action).meta());
    }
    shortcuts.push(Shortcut::new("Escape", AppAction::Blur));
    shortcuts.push(Shortcut::new("t", AppAction::ToggleTheme).ctrl());
    shortcuts.push(Shortcut::new("q", AppAction::Quit).ctrl());
    shortcuts.push(Shortcut::new("c", AppAction::Quit).ctrl());
    shortcuts
}

fn view_shortcuts(view: View) -> Vec<Shortcut<ViewAction>> {
    let mut shortcuts = match view {
        View::Notes => vec![
            Shortcut::new("ArrowUp", ViewAction::Up),
            Shortcut::new("ArrowDown", ViewAction::Down),
            Shortcut::new("e", ViewAction::Edit),
            Shortcut::new("Enter", ViewAction::Edit),
            Shortcut::new("d", ViewAction::Delete),
            Shortcut::new("Delete", ViewAction::Delete),
            Shortcut::new("k", ViewAction::MoveUp).shift(),
            Shortcut::new("j", ViewAction::MoveDown).shift(),
            Shortcut::new("s", ViewAction::CycleSort),
        ],
        View::Timer => vec![
            Shortcut::new(" ", ViewAction::ToggleTimer),
            Shortcut::new("s", ViewAction::SkipPhase),
            Shortcut::new("r", ViewAction::ResetTimer),
        ],
        View::Matrix => Vec::new(),
    };
    // terminals cannot send Ctrl+digit, so plain digits switch views too
    shortcuts.push(Shortcut::new("1", ViewAction::Show(View::Notes)));
    shortcuts.push(Shortcut::new("2", ViewAction::Show(View::Timer)));
    shortcuts.push(Shortcut::new("3", ViewAction::Show(View::Matrix)));
    shortcuts.push(Shortcut::new("q", ViewAction::Quit));
    shortcuts
}

fn next_sort(sort: Option<SortOption>) -> Option<SortOption> {
    match sort {
        None => Some(SortOption::Newest),
        Some(SortOption::Newest) => Some(SortOption::Oldest),
        Some(SortOption::Oldest) => Some(SortOption::TitleAsc),
        Some(SortOption::TitleAsc) => Some(SortOption::TitleDesc),
        Some(SortOption::TitleDesc) => None,
    }
}

pub struct App<S: NoteStore> {
    api: NotezApi<S>,
    view: View,
    theme: Theme,
    focus: Focus,
    query: String,
    sort: Option<SortOption>,
    selected: usize,
    countdown: Countdown,
    status: Option<CmdMessage>,
    app_keys: ShortcutDispatcher<AppAction>,
    view_keys: ShortcutDispatcher<ViewAction>,
    bell: bool,
    quit: bool,
}

impl<S: NoteStore> App<S> {
    pub fn new(api: NotezApi<S>, theme: Theme, sort: Option<SortOption>, view: View) -> Self {
        let mut app_keys = ShortcutDispatcher::new();
        app_keys.register(app_shortcuts());
        let mut view_keys = ShortcutDispatcher::new();
        view_keys.register(view_shortcuts(view));

        Self {
            api,
            view,
            theme,
            focus: Focus::None,
            query: String::new(),
            sort,
            selected: 0,
            countdown: Countdown::new(),
            status: None,
            app_keys,
            view_keys,
            bell: false,
            quit: false,
        }
    }

    /// The notes list as currently shown.
    fn visible(&self) -> Vec<Note> {
        self.api.derive(&self.query, self.sort)
    }

    fn selected_note(&self) -> Option<Note> {
        self.visible().into_iter().nth(self.selected)
    }

    fn clamp_selection(&mut self) {
        let len = self.visible().len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    fn select_id(&mut self, id: &Uuid) {
        if let Some(pos) = self.visible().iter().position(|n| &n.id == id) {
            self.selected = pos;
        }
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// The ticker should run only while the countdown runs on screen.
    pub fn wants_ticks(&self) -> bool {
        self.view == View::Timer && self.countdown.is_running()
    }

    pub fn take_bell(&mut self) -> bool {
        std::mem::take(&mut self.bell)
    }

    fn report(&mut self, result: &CmdResult) {
        self.status = result.messages.last().cloned();
    }

    pub fn handle_key(&mut self, mut event: KeyEvent) {
        self.status = None;

        if let Focus::ConfirmDelete(id) = self.focus {
            self.confirm_delete(id, &event);
            return;
        }

        if let Some(&action) = self.app_keys.dispatch(&mut event) {
            self.apply_app(action);
            return;
        }

        match self.focus {
            Focus::Search => self.type_search(&event),
            Focus::Form(_) => self.type_form(&event),
            _ => {
                if let Some(&action) = self.view_keys.dispatch(&mut event) {
                    self.apply_view(action);
                }
            }
        }
    }

    pub fn on_tick(&mut self) {
        match self.countdown.tick() {
            TickOutcome::Completed(transition) => {
                debug!(from = %transition.from, to = %transition.to, "phase complete");
                self.bell = true;
                self.status = Some(CmdMessage::success(format!(
                    "{} finished. Next up: {}",
                    transition.from, transition.to
                )));
            }
            TickOutcome::Idle | TickOutcome::Ticked | TickOutcome::MinuteMark => {}
        }
    }

    fn show(&mut self, view: View) {
        if view == self.view {
            return;
        }
        if self.view == View::Timer {
            self.countdown.pause();
        }
        self.view_keys.deregister();
        self.view = view;
        self.focus = Focus::None;
        self.view_keys.register(view_shortcuts(view));
        debug!(view = view.label(), "switched view");
    }

    fn apply_app(&mut self, action: AppAction) {
        match action {
            AppAction::NewNote => {
                self.show(View::Notes);
                self.focus = Focus::Form(Form::blank());
            }
            AppAction::Search => {
                self.show(View::Notes);
                self.focus = Focus::Search;
            }
            AppAction::Blur => self.focus = Focus::None,
            AppAction::Show(view) => self.show(view),
            AppAction::ToggleTheme => self.toggle_theme(),
            AppAction::Quit => self.quit = true,
        }
    }

    fn apply_view(&mut self, action: ViewAction) {
        match action {
            ViewAction::Up => self.selected = self.selected.saturating_sub(1),
            ViewAction::Down => {
                self.selected += 1;
                self.clamp_selection();
            }
            ViewAction::Edit => {
                if let Some(note) = self.selected_note() {
                    self.focus = Focus::Form(Form::for_note(&note));
                }
            }
            ViewAction::Delete => {
                if let Some(note) = self.selected_note() {
                    self.focus = Focus::ConfirmDelete(note.id);
                }
            }
            ViewAction::MoveUp => self.move_selected(-1),
            ViewAction::MoveDown => self.move_selected(1),
            ViewAction::CycleSort => {
                let current = self.selected_note().map(|n| n.id);
                self.sort = next_sort(self.sort);
                if let Some(id) = current {
                    self.select_id(&id);
                }
            }
            ViewAction::ToggleTimer => self.countdown.toggle(),
            ViewAction::SkipPhase => {
                let transition = self.countdown.skip();
                self.status = Some(CmdMessage::info(format!(
                    "Skipped to {}",
                    transition.to
                )));
            }
            ViewAction::ResetTimer => self.countdown.reset(),
            ViewAction::Show(view) => self.show(view),
            ViewAction::Quit => self.quit = true,
        }
    }

    fn move_selected(&mut self, step: isize) {
        if !self.query.is_empty() || self.sort.is_some() {
            self.status = Some(CmdMessage::warning(
                "Clear the search and sort to reorder notes",
            ));
            return;
        }
        let len = self.api.notes().len();
        let source = self.selected;
        let destination = match source.checked_add_signed(step) {
            Some(d) if d < len => d,
            _ => return,
        };

        match self.api.move_note(source, destination) {
            Ok(result) => {
                if !result.has_problems() {
                    self.selected = destination;
                }
                self.report(&result);
            }
            Err(e) => self.fail(e),
        }
    }

    fn confirm_delete(&mut self, id: Uuid, event: &KeyEvent) {
        self.focus = Focus::None;
        if !matches!(event.typed_char(), Some('y') | Some('Y')) {
            self.status = Some(CmdMessage::info("Delete cancelled"));
            return;
        }
        match self.api.delete(&id) {
            Ok(result) => {
                self.report(&result);
                self.clamp_selection();
            }
            Err(e) => self.fail(e),
        }
    }

    fn type_search(&mut self, event: &KeyEvent) {
        match event.key.as_str() {
            "Enter" => self.focus = Focus::None,
            "Backspace" => {
                self.query.pop();
            }
            _ => match event.typed_char() {
                Some(c) => self.query.push(c),
                None => return,
            },
        }
        self.selected = 0;
    }

    fn type_form(&mut self, event: &KeyEvent) {
        let Focus::Form(form) = &mut self.focus else {
            return;
        };
        match (event.key.as_str(), form.field) {
            ("Tab", Field::Title) | ("Enter", Field::Title) => form.field = Field::Content,
            ("Tab", Field::Content) => form.field = Field::Title,
            ("Enter", Field::Content) => {
                let form = form.clone();
                self.submit(form);
            }
            ("Backspace", _) => {
                form.active_text().pop();
            }
            _ => {
                if let Some(c) = event.typed_char() {
                    form.active_text().push(c);
                }
            }
        }
    }

    fn submit(&mut self, form: Form) {
        let outcome = match form.editing {
            Some(id) => self
                .api
                .update(&NoteUpdate::new(id, form.title, form.content)),
            None => self.api.add(form.title, form.content),
        };
        match outcome {
            Ok(result) => {
                if !result.has_problems() {
                    self.focus = Focus::None;
                    if let Some(note) = result.affected_notes.first() {
                        let id = note.id;
                        self.select_id(&id);
                    }
                }
                self.report(&result);
            }
            Err(e) => self.fail(e),
        }
    }

    fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        let value = ThemePreference::from(self.theme).to_string();
        match self.api.config(ConfigAction::Set("theme".to_string(), value)) {
            Ok(result) if result.has_problems() => self.report(&result),
            Ok(_) => {}
            Err(e) => self.fail(e),
        }
    }

    fn fail(&mut self, e: NotezError) {
        warn!(error = %e, "interactive command failed");
        self.status = Some(CmdMessage::error(e.to_string()));
    }
}

enum Event {
    Key(Key),
    Tick,
    InputClosed,
}

fn spawn_key_reader(term: Term, tx: Sender<Event>) {
    thread::spawn(move || loop {
        match term.read_key() {
            Ok(key) => {
                if tx.send(Event::Key(key)).is_err() {
                    break;
                }
            }
            Err(_) => {
                let _ = tx.send(Event::InputClosed);
                break;
            }
        }
    });
}

const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Starts or cancels the ticker so it runs exactly when the app wants ticks.
fn sync_ticker<S: NoteStore>(
    app: &App<S>,
    ticker: &mut Option<Ticker>,
    tx: &Sender<Event>,
    period: Duration,
) {
    match (app.wants_ticks(), ticker.is_some()) {
        (true, false) => {
            let tx = tx.clone();
            *ticker = Some(Ticker::spawn(period, move || {
                let _ = tx.send(Event::Tick);
            }));
        }
        (false, true) => {
            if let Some(mut running) = ticker.take() {
                running.cancel();
            }
        }
        _ => {}
    }
}

fn draw<S: NoteStore>(term: &Term, app: &App<S>) -> Result<()> {
    let (rows, cols) = term.size();
    let lines = views::render(app, usize::from(cols), usize::from(rows));
    term.clear_screen()?;
    for line in &lines {
        term.write_line(line)?;
    }
    Ok(())
}

fn event_loop<S: NoteStore>(
    term: &Term,
    app: &mut App<S>,
    rx: &Receiver<Event>,
    tx: &Sender<Event>,
) -> Result<()> {
    let mut ticker: Option<Ticker> = None;
    loop {
        sync_ticker(app, &mut ticker, tx, TICK_PERIOD);
        draw(term, app)?;

        match rx.recv() {
            Ok(Event::Key(key)) => {
                if let Some(event) = keys::translate(&key) {
                    app.handle_key(event);
                }
            }
            Ok(Event::Tick) => app.on_tick(),
            Ok(Event::InputClosed) | Err(_) => break,
        }

        if app.take_bell() {
            term.write_str("\x07")?;
        }
        if app.should_quit() {
            break;
        }
    }
    Ok(())
}

/// Runs the interactive mode until the user quits.
pub fn run<S: NoteStore>(
    api: NotezApi<S>,
    theme: Theme,
    sort: Option<SortOption>,
    view: View,
) -> Result<()> {
    let term = Term::stdout();
    if !term.is_term() {
        return Err(NotezError::Api(
            "Interactive mode needs a terminal".to_string(),
        ));
    }

    let mut app = App::new(api, theme, sort, view);
    let (tx, rx) = mpsc::channel();
    spawn_key_reader(term.clone(), tx.clone());

    term.hide_cursor()?;
    let result = event_loop(&term, &mut app, &rx, &tx);
    term.clear_screen()?;
    term.show_cursor()?;
    result
}

//! # CLI Behavior
//!
//! This is **one possible UI client** for notez, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes, and output formatting.
//!
//! ## Naked Execution (`notez`)
//!
//! Running `notez` with no arguments defaults to `notez list`.
//!
//! ## Create and Edit
//!
//! `notez create "Title" some content words` writes the note straight away.
//! Whatever part is missing is filled in through `$EDITOR`, unless
//! `--no-editor` is given, in which case the blank part gets the note rejected.
//!
//! ## Delete Asks First
//!
//! `notez delete 2` lists what it is about to remove and waits for `y`.
//! `--yes` skips the question. Anything but `y`, including a closed stdin, is a no.
//!
//! ## Interactive Mode
//!
//! `notez ui` and `notez timer` open the full-screen mode on the notes or timer
//! view. See `tui` for its keys.
//!
//! ## Module Structure
//!
//! - `commands`: Per-command handlers that call the API and print results
//! - `render`: Output formatting (lists, full notes, messages)
//! - `setup`: Argument parsing via clap
//! - `styles`: Palettes for the interactive mode
//! - `tui`: The interactive mode

mod commands;
mod render;
pub mod setup;
mod styles;
mod tui;

pub use commands::run;
pub use setup::parse;

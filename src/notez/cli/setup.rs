use clap::{Parser, Subcommand};
use notez::api::SortOption;
use notez::index::DisplayIndex;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "notez", bin_name = "notez", version)]
#[command(about = "Quick notes and a focus timer for the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding notes and config (overrides $NOTEZ_HOME)
    #[arg(long, global = true, value_name = "PATH", help_heading = "Options")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new note
    #[command(alias = "n", display_order = 1)]
    Create {
        /// Skip opening the editor
        #[arg(long)]
        no_editor: bool,

        /// Note title (opens the editor if omitted)
        title: Option<String>,

        /// Content words, joined with spaces (opens the editor if omitted)
        #[arg(trailing_var_arg = true)]
        content: Vec<String>,
    },

    /// List notes
    #[command(alias = "ls", display_order = 2)]
    List {
        /// Only notes whose title or content contains this
        #[arg(short, long)]
        search: Option<String>,

        /// newest, oldest, title-asc or title-desc
        #[arg(long)]
        sort: Option<SortOption>,
    },

    /// Search notes
    #[command(display_order = 3)]
    Search {
        term: String,

        /// newest, oldest, title-asc or title-desc
        #[arg(long)]
        sort: Option<SortOption>,
    },

    /// View one or more notes
    #[command(alias = "v", display_order = 10)]
    View {
        /// Indexes of the notes (e.g. 1 3)
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<DisplayIndex>,
    },

    /// Edit a note, in the editor unless --title or --content is given
    #[command(alias = "e", display_order = 11)]
    Edit {
        index: DisplayIndex,

        /// New title
        #[arg(short, long)]
        title: Option<String>,

        /// New content
        #[arg(short, long)]
        content: Option<String>,
    },

    /// Delete one or more notes
    #[command(alias = "rm", display_order = 12)]
    Delete {
        /// Indexes of the notes (e.g. 1 3 5)
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<DisplayIndex>,

        /// Skip confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Move a note to another position in the manual order
    #[command(alias = "mv", display_order = 13)]
    Move { from: DisplayIndex, to: DisplayIndex },

    /// Open the focus timer
    #[command(display_order = 20)]
    Timer,

    /// Open the interactive notes view
    #[command(display_order = 21)]
    Ui,

    /// Get or set configuration
    #[command(display_order = 30)]
    Config {
        /// theme, sort or storage-key
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

pub fn parse() -> Cli {
    Cli::parse()
}

//! # Notez CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, while this file
//! installs logging, invokes `cli::run()` and handles process termination.
//!
//! - `cli/setup.rs`: clap argument parsing
//! - `cli/commands.rs`: context wiring and per-command handlers
//! - `cli/render.rs`: colored terminal output for lists, notes and messages
//! - `cli/tui/`: the interactive notes, timer and matrix views
//!
//! Everything from `notez::api` inward is UI agnostic. Logging goes to stderr
//! so it never mixes with rendered output; `NOTEZ_LOG` takes an `EnvFilter`
//! directive and overrides `--verbose`.

use tracing_subscriber::EnvFilter;

mod cli;

const LOG_ENV: &str = "NOTEZ_LOG";

fn init_logging(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() {
    let cli = cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = cli::run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

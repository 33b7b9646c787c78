//! # Notez Architecture
//!
//! Notez is a **UI-agnostic notes library** with a terminal client on top. The
//! notes list, the reorder logic, the focus countdown and the keyboard shortcut
//! dispatcher all live here and know nothing about terminals.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders output, runs interactive mode  │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the in-memory notes collection                      │
//! │  - Re-reads the store after every mutation                  │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Validation, filtering, sorting, reordering               │
//! │  - Operates on Rust types, returns Rust types               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - NoteStore trait: the whole collection as one blob        │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The countdown ([`timer`]) and the dispatcher ([`shortcuts`]) sit beside this
//! stack. They share no data with notes.
//!
//! ## Indexes
//!
//! The command line addresses notes by their 1-based position in manual order
//! ([`index::DisplayIndex`]); everything below the API works with UUIDs. A
//! filtered or sorted listing still shows each note's canonical position, so an
//! index read off any listing can be fed back to `view`, `edit` or `delete`.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<CmdResult>`)
//! - **Never** writes to stdout/stderr (diagnostics go through `tracing`)
//! - **Never** calls `std::process::exit`
//!
//! ## Testing Strategy
//!
//! 1. **Commands** (`commands/*.rs`): unit tests against `InMemoryStore`.
//! 2. **API** (`api.rs`): dispatch and the refresh rule.
//! 3. **Timer and shortcuts**: state machines driven tick by tick, key by key.
//! 4. **CLI** (`tests/`): end-to-end runs of the binary against a temp data dir.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all note operations
//! - [`commands`]: Business logic for each command
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: The `Note` type
//! - [`index`]: Display indexing
//! - [`config`]: Theme, default sort and storage key
//! - [`init`]: Data directory discovery and API construction
//! - [`editor`]: External editor integration
//! - [`timer`]: Pomodoro countdown and its tick source
//! - [`shortcuts`]: Keyboard shortcut dispatch
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod editor;
pub mod error;
pub mod index;
pub mod init;
pub mod model;
pub mod shortcuts;
pub mod store;
pub mod timer;

//! # cmdz Architecture
//!
//! cmdz runs shell commands described by JSON templates. A template names a
//! command, documents its positional parameters, and carries a command string
//! with `$1 .. $N` placeholders:
//!
//! ```json
//! {
//!   "description": "Show the last lines of a log",
//!   "parameters": [
//!     { "name": "lines", "description": "How many lines" },
//!     { "name": "file", "description": "Log file" }
//!   ],
//!   "command": "tail -n $1 $2",
//!   "example": "cmdz commands/logs/tail.json 50 /var/log/syslog"
//! }
//! ```
//!
//! Like any cmdz client, the bundled CLI is a thin layer over a UI-agnostic
//! library.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, picks the exit status  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the template snapshot, config and runner            │
//! │  - Resolves targets (existing path, then store key)         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs) + engine.rs                  │
//! │  - list, help, and the run state machine                    │
//! │  - substitution and interactive/captured classification     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Template Store (store/)        Runners (runner/)           │
//! │  - scan + load_one              - CommandRunner trait       │
//! │  - immutable snapshot           - ShellRunner, Recording    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code returns `Result<CmdResult>` and never writes to
//! stdout or stderr. The one exception is by nature: an interactive command
//! gets the terminal for as long as it runs.
//!
//! ## Module Overview
//!
//! - [`api`]: the facade every client goes through
//! - [`commands`]: list, help and run
//! - [`engine`]: substitution, interactivity, status constants
//! - [`store`]: template discovery and lookup
//! - [`runner`]: process execution behind a trait
//! - [`model`]: `CommandTemplate` and friends
//! - [`config`]: configuration file
//! - [`error`]: error types

pub mod api;
pub mod commands;
pub mod config;
pub mod engine;
pub mod error;
pub mod model;
pub mod runner;
pub mod store;

//! # CLI Layer
//!
//! This module is **one possible UI client** for cmdz, not the application itself.
//!
//! The CLI layer is the only place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Decides the process exit status
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Invocation
//!
//! ```text
//! cmdz                                   list templates under the commands dir
//! cmdz commands/net/ping.json -h         help for one template
//! cmdz commands/net/ping.json host 3     run it
//! ```
//!
//! Everything after the template path is handed to the template untouched,
//! which is why clap's `-h` is disabled and cmdz's own help is `--help` only.
//!
//! ## Structure
//!
//! - `setup.rs`: clap definitions and version string
//! - `commands.rs`: context setup (config, scan, runner) and dispatch
//! - `render.rs`: renders listings, help and messages through templates
//! - `templates.rs` + `templates/`: the minijinja layouts
//! - `styles.rs`: named terminal styles for the `style` filter

mod commands;
mod render;
mod setup;
mod styles;
mod templates;

pub use commands::run;

//! Terminal output templates.
//!
//! Layout lives in the `.tmp` files next to this module and is compiled in as
//! string constants. Templates are minijinja, rendered with `trim_blocks` and
//! `lstrip_blocks`, so a line holding only a block tag produces no output and
//! every other line break in a template is one in the output.
//!
//! Anything needing Unicode-aware width math (rules under titles) is computed
//! in Rust and passed in as data.

pub const LIST_TEMPLATE: &str = include_str!("templates/list.tmp");
pub const HELP_TEMPLATE: &str = include_str!("templates/help.tmp");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.tmp");
pub const USAGE_TEMPLATE: &str = include_str!("templates/usage.tmp");

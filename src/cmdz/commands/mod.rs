//! # Command Layer
//!
//! Business logic for each operation. Functions here take Rust values and
//! return [`CmdResult`]; they never print and never exit. Rendering is the
//! CLI's job.
//!
//! - [`list`]: the templates in the store
//! - [`help`]: structured help for one template
//! - [`run`]: the per-invocation state machine (help, arity check, execute)

use serde::Serialize;

pub mod help;
pub mod list;
pub mod run;

pub use help::{HelpParameter, TemplateHelp};
pub use run::{Execution, Plan};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A template as shown in a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateEntry {
    pub key: String,
    pub description: String,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_templates: Vec<TemplateEntry>,
    pub help: Option<TemplateHelp>,
    /// Set when a command is ready to run but has not run yet.
    pub plan: Option<Plan>,
    pub execution: Option<Execution>,
    /// `None` for display-only results (listing, help).
    pub exit_code: Option<i32>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_templates(mut self, templates: Vec<TemplateEntry>) -> Self {
        self.listed_templates = templates;
        self
    }

    pub fn with_help(mut self, help: TemplateHelp) -> Self {
        self.help = Some(help);
        self
    }

    pub fn with_plan(mut self, plan: Plan) -> Self {
        self.plan = Some(plan);
        self
    }

    pub fn with_execution(mut self, execution: Execution) -> Self {
        self.exit_code = Some(execution.status);
        self.execution = Some(execution);
        self
    }

    pub fn with_exit_code(mut self, code: i32) -> Self {
        self.exit_code = Some(code);
        self
    }

    /// True when a child process was (or was attempted to be) started.
    pub fn executed(&self) -> bool {
        self.execution.is_some()
    }

    /// Appends the messages of `other` and takes over its outcome fields.
    pub fn merge(mut self, other: CmdResult) -> Self {
        self.messages.extend(other.messages);
        if other.execution.is_some() {
            self.execution = other.execution;
            self.plan = None;
        }
        if other.exit_code.is_some() {
            self.exit_code = other.exit_code;
        }
        self
    }
}

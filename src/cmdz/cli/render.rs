//! # Rendering
//!
//! Turns `CmdResult` pieces into terminal text through the templates in
//! [`super::templates`]. Styling goes through a `style` filter backed by
//! [`super::styles`]; when stdout is not a color terminal the filter returns
//! plain text.
//!
//! Each `render_*` function takes an explicit `use_color` so tests can pin the
//! plain output; the `print_*` functions detect it.

use super::styles::{names, style_for};
use super::templates::{HELP_TEMPLATE, LIST_TEMPLATE, MESSAGES_TEMPLATE, USAGE_TEMPLATE};
use cmdz::api::{CmdMessage, Execution, MessageLevel, TemplateEntry, TemplateHelp};
use console::{style, Term};
use minijinja::{Environment, Error, Value};
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

const LIST_RULE_WIDTH: usize = 50;
const HELP_RULE_PADDING: usize = 10;

#[derive(Serialize)]
struct ListData<'a> {
    entries: &'a [TemplateEntry],
    rule: String,
    extension: &'a str,
}

#[derive(Serialize)]
struct HelpData<'a> {
    help: &'a TemplateHelp,
    rule: String,
}

#[derive(Serialize)]
struct MessageData<'a> {
    content: &'a str,
    style: &'static str,
}

#[derive(Serialize)]
struct MessagesData<'a> {
    messages: Vec<MessageData<'a>>,
}

#[derive(Serialize)]
struct UsageData<'a> {
    arg: &'a str,
    extension: &'a str,
}

pub(super) fn stdout_color() -> bool {
    Term::stdout().features().colors_supported() && console::colors_enabled()
}

fn render_with_color<T: Serialize>(template: &str, data: &T, use_color: bool) -> Result<String, Error> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    env.set_keep_trailing_newline(true);
    env.add_filter("style", move |value: Value, name: String| -> String {
        let text = value.to_string();
        if use_color {
            style_for(&name).force_styling(true).apply_to(text).to_string()
        } else {
            text
        }
    });
    env.render_str(template, data)
}

pub(super) fn render_messages(messages: &[CmdMessage], use_color: bool) -> String {
    if messages.is_empty() {
        return String::new();
    }

    let data = MessagesData {
        messages: messages
            .iter()
            .map(|msg| MessageData {
                content: &msg.content,
                style: match msg.level {
                    MessageLevel::Info => names::INFO,
                    MessageLevel::Warning => names::WARNING,
                    MessageLevel::Error => names::ERROR,
                },
            })
            .collect(),
    };

    render_with_color(MESSAGES_TEMPLATE, &data, use_color).unwrap_or_else(|_| {
        messages
            .iter()
            .map(|m| format!("{}\n", m.content))
            .collect()
    })
}

pub(super) fn print_messages(messages: &[CmdMessage]) {
    print!("{}", render_messages(messages, stdout_color()));
}

/// Relays a captured child's output: stdout as-is, stderr with an error marker.
pub(super) fn print_execution(execution: &Execution) {
    if !execution.stdout.is_empty() {
        print!("{}", with_trailing_newline(&execution.stdout));
    }
    if !execution.stderr.is_empty() {
        eprint!(
            "{} {}",
            style("Error:").red().for_stderr(),
            with_trailing_newline(&execution.stderr)
        );
    }
}

fn with_trailing_newline(text: &str) -> String {
    if text.ends_with('\n') {
        text.to_string()
    } else {
        format!("{}\n", text)
    }
}

/// The template listing; empty when there is nothing to list.
pub(super) fn render_template_list(
    entries: &[TemplateEntry],
    extension: &str,
    use_color: bool,
) -> String {
    let data = ListData {
        entries,
        rule: "=".repeat(LIST_RULE_WIDTH),
        extension,
    };
    render_with_color(LIST_TEMPLATE, &data, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

pub(super) fn render_help(help: &TemplateHelp, use_color: bool) -> String {
    let data = HelpData {
        help,
        rule: "=".repeat(help.name.width() + HELP_RULE_PADDING),
    };
    render_with_color(HELP_TEMPLATE, &data, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

pub(super) fn render_usage_error(arg: &str, extension: &str, use_color: bool) -> String {
    let data = UsageData { arg, extension };
    render_with_color(USAGE_TEMPLATE, &data, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

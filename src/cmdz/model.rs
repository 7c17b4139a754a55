//! Core data types: [`CommandTemplate`], [`ParameterSpec`] and [`ExecutionRequest`].
//!
//! A template file is a single JSON object. Every field is optional at parse
//! time so that a file with only a description can still be listed; the
//! absence of `command` only matters once someone tries to execute it.
//!
//! ```json
//! {
//!   "description": "Ping a host",
//!   "parameters": [{ "name": "host", "description": "Host to ping" }],
//!   "command": "ping -c 3 $1",
//!   "example": "cmdz commands/net/ping.json example.org"
//! }
//! ```

use serde::Deserialize;
use serde_json::{Map, Value};

/// Shown wherever a template does not carry its own description.
pub const DEFAULT_DESCRIPTION: &str = "no description";

/// A named positional parameter. Its 1-based position in
/// [`CommandTemplate::parameters`] is the `N` of the `$N` placeholder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ParameterSpec {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl ParameterSpec {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CommandTemplate {
    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub parameters: Vec<ParameterSpec>,

    /// Shell command with `$1 .. $N` placeholders.
    #[serde(default)]
    pub command: Option<String>,

    #[serde(default)]
    pub example: Option<String>,
}

impl CommandTemplate {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: Some(command.into()),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_parameter(mut self, name: impl Into<String>, description: impl Into<String>) -> Self {
        self.parameters.push(ParameterSpec::new(name, description));
        self
    }

    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.example = Some(example.into());
        self
    }

    /// Parses a template from JSON text.
    ///
    /// The document must be a JSON object. serde would otherwise also accept
    /// the positional array form of the struct.
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        let fields: Map<String, Value> = serde_json::from_str(text)?;
        serde_json::from_value(Value::Object(fields))
    }

    /// The description, or [`DEFAULT_DESCRIPTION`] when the file has none.
    pub fn display_description(&self) -> &str {
        self.description.as_deref().unwrap_or(DEFAULT_DESCRIPTION)
    }

    /// Number of positional arguments an invocation must supply.
    ///
    /// Only the declared parameters count. Placeholders in `command` are not
    /// inspected.
    pub fn arity(&self) -> usize {
        self.parameters.len()
    }
}

/// One invocation of a template: borrowed for the duration of a single run.
#[derive(Debug, Clone, Copy)]
pub struct ExecutionRequest<'a> {
    pub name: &'a str,
    pub template: &'a CommandTemplate,
    pub args: &'a [String],
}

impl<'a> ExecutionRequest<'a> {
    pub fn new(name: &'a str, template: &'a CommandTemplate, args: &'a [String]) -> Self {
        Self {
            name,
            template,
            args,
        }
    }

    /// True when the arguments are exactly the help flag.
    pub fn is_help(&self) -> bool {
        matches!(self.args, [only] if only == HELP_FLAG)
    }
}

/// The single argument that asks a template for its help instead of running it.
pub const HELP_FLAG: &str = "-h";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_template() {
        let json = r#"{
            "description": "Copy a file",
            "parameters": [
                {"name": "src", "description": "Source"},
                {"name": "dst", "description": "Destination"}
            ],
            "command": "cp $1 $2",
            "example": "cmdz copy.json a b"
        }"#;

        let template = CommandTemplate::from_json(json).unwrap();
        assert_eq!(template.description.as_deref(), Some("Copy a file"));
        assert_eq!(template.arity(), 2);
        assert_eq!(template.parameters[1], ParameterSpec::new("dst", "Destination"));
        assert_eq!(template.command.as_deref(), Some("cp $1 $2"));
        assert_eq!(template.example.as_deref(), Some("cmdz copy.json a b"));
    }

    #[test]
    fn test_parse_defaults() {
        let template = CommandTemplate::from_json("{}").unwrap();
        assert_eq!(template, CommandTemplate::default());
        assert_eq!(template.display_description(), DEFAULT_DESCRIPTION);
        assert_eq!(template.arity(), 0);
        assert!(template.command.is_none());
        assert!(template.example.is_none());
    }

    #[test]
    fn test_parameter_description_defaults_to_empty() {
        let template =
            CommandTemplate::from_json(r#"{"parameters": [{"name": "host"}]}"#).unwrap();
        assert_eq!(template.parameters[0].description, "");
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let template =
            CommandTemplate::from_json(r#"{"command": "ls", "author": "someone"}"#).unwrap();
        assert_eq!(template.command.as_deref(), Some("ls"));
    }

    #[test]
    fn test_wrong_field_type_is_rejected() {
        assert!(CommandTemplate::from_json(r#"{"parameters": "host"}"#).is_err());
        assert!(CommandTemplate::from_json(r#"{"command": 42}"#).is_err());
        assert!(CommandTemplate::from_json("[]").is_err());
    }

    #[test]
    fn test_positional_array_is_rejected() {
        let err = CommandTemplate::from_json(r#"["desc", [], "echo positional"]"#).unwrap_err();
        assert!(err.is_data());
        assert!(CommandTemplate::from_json(r#""echo hi""#).is_err());
    }

    #[test]
    fn test_arity_ignores_placeholders() {
        let template = CommandTemplate::new("echo $1 $2 $3").with_parameter("only", "one");
        assert_eq!(template.arity(), 1);
    }

    #[test]
    fn test_is_help() {
        let template = CommandTemplate::new("ls");
        let help = vec!["-h".to_string()];
        let with_more = vec!["-h".to_string(), "x".to_string()];
        let long = vec!["--help".to_string()];

        assert!(ExecutionRequest::new("ls", &template, &help).is_help());
        assert!(!ExecutionRequest::new("ls", &template, &with_more).is_help());
        assert!(!ExecutionRequest::new("ls", &template, &long).is_help());
        assert!(!ExecutionRequest::new("ls", &template, &[]).is_help());
    }
}

use crate::model::CommandTemplate;
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HelpParameter {
    /// 1-based, the `N` of `$N`.
    pub ordinal: usize,
    pub name: String,
    pub description: String,
}

/// Everything shown by `<template> -h`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateHelp {
    pub name: String,
    pub description: String,
    pub parameters: Vec<HelpParameter>,
    pub example: Option<String>,
    pub command: Option<String>,
}

/// A template's display name: the file stem of its key or path.
pub fn template_name(target: &str) -> String {
    Path::new(target)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| target.to_string())
}

pub fn describe(name: &str, template: &CommandTemplate) -> TemplateHelp {
    TemplateHelp {
        name: name.to_string(),
        description: template.display_description().to_string(),
        parameters: template
            .parameters
            .iter()
            .enumerate()
            .map(|(i, p)| HelpParameter {
                ordinal: i + 1,
                name: p.name.clone(),
                description: p.description.clone(),
            })
            .collect(),
        example: template.example.clone(),
        command: template.command.clone(),
    }
}

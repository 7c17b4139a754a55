//! # Template Store
//!
//! An immutable snapshot of the templates found under a commands directory.
//!
//! The store is built once, by [`fs::scan`], and never mutated afterwards. It is
//! handed to [`crate::api::CmdzApi`] by value, so there is no global registry.
//!
//! ## Keys
//!
//! A template's key is its path relative to the *parent* of the scanned root,
//! with `/` separators and the extension kept:
//!
//! ```text
//! commands/                  (scanned root)
//! ├── hello.json             -> "commands/hello.json"
//! └── net/
//!     └── ping.json          -> "commands/net/ping.json"
//! ```
//!
//! With the default layout, where the commands directory sits in the
//! directory cmdz runs in, a key is also a valid path to its template. That
//! does not hold for a nested or absolute commands directory, so a target
//! that names an existing file is always loaded from that file; see
//! [`crate::api::CmdzApi::resolve`].

use crate::model::CommandTemplate;
use std::collections::BTreeMap;
use std::path::{Component, Path, PathBuf};

pub mod fs;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TemplateStore {
    templates: BTreeMap<String, CommandTemplate>,
}

impl TemplateStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&CommandTemplate> {
        self.templates.get(&normalize_key(Path::new(key)))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// `(key, description)` pairs in key order.
    pub fn list(&self) -> Vec<(&str, &str)> {
        self.templates
            .iter()
            .map(|(key, template)| (key.as_str(), template.display_description()))
            .collect()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.templates.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl FromIterator<(String, CommandTemplate)> for TemplateStore {
    fn from_iter<I: IntoIterator<Item = (String, CommandTemplate)>>(iter: I) -> Self {
        Self {
            templates: iter
                .into_iter()
                .map(|(key, template)| (normalize_key(Path::new(&key)), template))
                .collect(),
        }
    }
}

/// A file the scan could not turn into a template.
#[derive(Debug)]
pub struct ScanFailure {
    pub path: PathBuf,
    pub error: String,
}

/// Result of scanning a directory: the templates that loaded and the files that did not.
#[derive(Debug, Default)]
pub struct ScanReport {
    pub store: TemplateStore,
    pub failures: Vec<ScanFailure>,
}

/// Joins the components of `path` with `/`, dropping `.` segments.
///
/// A root or drive prefix is kept, so an absolute path never collides with a
/// relative key.
pub fn normalize_key(path: &Path) -> String {
    let mut anchor = String::new();
    let mut parts = Vec::new();
    for component in path.components() {
        match component {
            Component::Prefix(prefix) => anchor.push_str(&prefix.as_os_str().to_string_lossy()),
            Component::RootDir => anchor.push('/'),
            Component::CurDir => {}
            Component::ParentDir => parts.push("..".to_string()),
            Component::Normal(part) => parts.push(part.to_string_lossy().into_owned()),
        }
    }
    anchor + &parts.join("/")
}

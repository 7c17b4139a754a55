use super::{normalize_key, ScanFailure, ScanReport, TemplateStore};
use crate::error::{CmdzError, Result};
use crate::model::CommandTemplate;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

/// Recursively loads every `extension` file under `root`.
///
/// A file that cannot be read or parsed is recorded in
/// [`ScanReport::failures`] and left out of the store; the scan carries on
/// with the remaining files. A missing `root` gives an empty store.
pub fn scan(root: &Path, extension: &str) -> ScanReport {
    let mut report = ScanReport::default();
    if !root.is_dir() {
        debug!(root = %root.display(), "commands directory not found");
        return report;
    }

    let base = root.parent().unwrap_or(root);
    let mut templates = Vec::new();

    for entry in WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                report.failures.push(ScanFailure {
                    path: e.path().unwrap_or(root).to_path_buf(),
                    error: e.to_string(),
                });
                continue;
            }
        };

        if !entry.file_type().is_file() || !has_extension(entry.path(), extension) {
            continue;
        }

        let path = entry.path();
        match load_one(path) {
            Ok(template) => {
                let key = normalize_key(path.strip_prefix(base).unwrap_or(path));
                debug!(%key, "loaded template");
                templates.push((key, template));
            }
            Err(e) => {
                debug!(path = %path.display(), error = %e, "skipping template");
                let error = match e {
                    CmdzError::Parse { source, .. } => source.to_string(),
                    other => other.to_string(),
                };
                report.failures.push(ScanFailure {
                    path: path.to_path_buf(),
                    error,
                });
            }
        }
    }

    report.store = templates.into_iter().collect::<TemplateStore>();
    report
}

/// Loads a single template from `path`.
pub fn load_one(path: &Path) -> Result<CommandTemplate> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => CmdzError::NotFound(path.to_path_buf()),
        _ => CmdzError::Io(e),
    })?;

    CommandTemplate::from_json(&content).map_err(|source| CmdzError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().ends_with(extension))
        .unwrap_or(false)
}

use crate::error::{CmdzError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_COMMANDS_DIR: &str = "commands";
const DEFAULT_EXTENSION: &str = ".json";

#[cfg(windows)]
const DEFAULT_SHELL: &str = "cmd";
#[cfg(not(windows))]
const DEFAULT_SHELL: &str = "sh";

/// Configuration for cmdz, stored in `.cmdz/config.json`
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct CmdzConfig {
    /// Directory scanned for templates when listing
    #[serde(default = "default_commands_dir")]
    pub commands_dir: String,

    /// File extension recognized as a template (e.g. ".json")
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Programs that get the terminal instead of captured output
    #[serde(default = "default_interactive_programs")]
    pub interactive_programs: Vec<String>,

    /// Shell used to run the substituted command
    #[serde(default = "default_shell")]
    pub shell: String,
}

fn default_commands_dir() -> String {
    DEFAULT_COMMANDS_DIR.to_string()
}

fn default_extension() -> String {
    DEFAULT_EXTENSION.to_string()
}

fn default_interactive_programs() -> Vec<String> {
    [
        "ssh", "vim", "vi", "nano", "emacs", "less", "more", "man", "top", "htop",
    ]
    .iter()
    .map(|p| p.to_string())
    .collect()
}

fn default_shell() -> String {
    DEFAULT_SHELL.to_string()
}

impl Default for CmdzConfig {
    fn default() -> Self {
        Self {
            commands_dir: default_commands_dir(),
            extension: default_extension(),
            interactive_programs: default_interactive_programs(),
            shell: default_shell(),
        }
    }
}

impl CmdzConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let mut config: CmdzConfig = serde_json::from_str(&content)
            .map_err(|e| CmdzError::Config(format!("{}: {}", config_path.display(), e)))?;
        let ext = config.extension.clone();
        config.set_extension(&ext);
        Ok(config)
    }

    /// Loads the first config file found in `dirs`, falling back to defaults.
    pub fn load_first<P: AsRef<Path>>(dirs: &[P]) -> Result<Self> {
        for dir in dirs {
            if dir.as_ref().join(CONFIG_FILENAME).exists() {
                return Self::load(dir);
            }
        }
        Ok(Self::default())
    }

    pub fn get_extension(&self) -> &str {
        &self.extension
    }

    /// Set the template extension (normalizes to start with a dot)
    pub fn set_extension(&mut self, ext: &str) {
        if ext.starts_with('.') {
            self.extension = ext.to_string();
        } else {
            self.extension = format!(".{}", ext);
        }
    }

    /// True when `target` names a template file by its extension.
    pub fn is_template_path(&self, target: &str) -> bool {
        target.ends_with(&self.extension)
    }

    /// The commands directory, resolved against `base` when relative.
    pub fn commands_dir_in(&self, base: &Path) -> PathBuf {
        let dir = Path::new(&self.commands_dir);
        if dir.is_absolute() {
            dir.to_path_buf()
        } else {
            base.join(dir)
        }
    }
}

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CmdzError {
    #[error("Command file '{}' not found", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Template '{0}' has no command to execute")]
    MissingCommand(String),
}

pub type Result<T> = std::result::Result<T, CmdzError>;

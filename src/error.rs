use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum UsageError {
    #[error("path not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("{} is not valid UTF-8", .0.display())]
    Decode(PathBuf),
    #[error("Walk error: {0}")]
    Walk(String),
    #[error("JSON serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("Invalid glob pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        source: globset::Error,
    },
}
impl UsageError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        UsageError::Io {
            path: path.into(),
            source,
        }
    }
}

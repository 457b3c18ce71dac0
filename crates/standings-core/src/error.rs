use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the race standings tool.
#[derive(Error, Debug)]
pub enum StandingsError {
    /// The results file does not exist.
    #[error("Results file not found: {0}")]
    NotFound(PathBuf),

    /// An existing file could not be opened or read from disk.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A query result could not be rendered as JSON.
    #[error("Failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl StandingsError {
    /// Classify an I/O failure on `path` as either [`NotFound`] or
    /// [`FileRead`].
    ///
    /// [`NotFound`]: StandingsError::NotFound
    /// [`FileRead`]: StandingsError::FileRead
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            StandingsError::NotFound(path)
        } else {
            StandingsError::FileRead { path, source }
        }
    }
}

/// Convenience alias used throughout the standings crates.
pub type Result<T> = std::result::Result<T, StandingsError>;

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading the corpus or persisting results.
#[derive(Error, Debug)]
pub enum SearchError {
    /// A file or directory could not be read or written.
    #[error("{path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A document is not valid UTF-8 text.
    #[error("{path:?} is not valid UTF-8 text")]
    Decode { path: PathBuf },

    /// A document's file name is not valid UTF-8, so it has no unique name.
    #[error("{path:?} does not have a UTF-8 file name")]
    Name { path: PathBuf },

    /// Reading the prompt or writing to the console failed.
    #[error("console i/o failed: {0}")]
    Console(#[from] std::io::Error),

    #[error("failed to render results as JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl SearchError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SearchError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, SearchError>;

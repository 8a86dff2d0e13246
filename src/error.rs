//! Error types for catalog building and persistence

use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The root is missing, not a directory, or cannot be listed. Fatal,
    /// raised before any output. `source` is set when listing failed.
    #[error("not a readable directory: {path}")]
    Path {
        path: PathBuf,
        #[source]
        source: Option<io::Error>,
    },

    /// A subdirectory could not be listed. Recovered by skipping it.
    #[error("cannot read directory {path}: {source}")]
    Permission {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The finished catalog could not be persisted.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid file type selector: {0:?}")]
    InvalidSelector(String),

    #[error("catalog build was cancelled")]
    Cancelled,

    #[error("failed to start catalog worker: {0}")]
    Spawn(#[source] io::Error),

    /// The worker thread exited without reporting a result.
    #[error("catalog worker stopped unexpectedly")]
    WorkerLost,
}

pub type Result<T> = std::result::Result<T, CatalogError>;

impl CatalogError {
    /// Whether the error came from reading the tree (as opposed to
    /// configuration, cancellation or persistence).
    pub fn is_filesystem(&self) -> bool {
        matches!(
            self,
            CatalogError::Path { .. } | CatalogError::Permission { .. }
        )
    }
}

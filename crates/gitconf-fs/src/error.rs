//! Error types for gitconf-fs

use std::path::PathBuf;

/// Result type for gitconf-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in gitconf-fs operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Not a git repository (or any parent up to mount point): {start}")]
    RootNotFound { start: PathBuf },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

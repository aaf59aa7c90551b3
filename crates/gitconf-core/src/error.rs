//! Error types for gitconf-core

use std::path::PathBuf;

use crate::ConfigLevel;

/// Result type for gitconf-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while resolving a configuration value
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Fs(#[from] gitconf_fs::Error),

    #[error("Invalid config key '{key}': {reason}")]
    InvalidKey { key: String, reason: String },

    #[error("No {level} config file found")]
    NoConfigFile { level: ConfigLevel },

    #[error("The {level} config level is not supported on this platform")]
    UnsupportedLevel { level: ConfigLevel },

    #[error("Config file does not exist: '{}'", path.display())]
    MissingFile { path: PathBuf },

    #[error("Failed to load config file {}: {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: git2::Error,
    },

    #[error("Failed to parse {format} config at {}: {message}", path.display())]
    ConfigParse {
        path: PathBuf,
        format: String,
        message: String,
    },

    #[error("Key '{key}' not found")]
    KeyNotFound { key: String },
}


//! Filesystem layer for gitconf
//!
//! Existence probes, start-location normalisation, repository root discovery
//! and the well-known locations of git configuration files.

pub mod constants;
pub mod env;
pub mod error;
pub mod probe;
pub mod root;

pub use constants::GitPath;
pub use env::ConfigDirs;
pub use error::{Error, Result};
pub use probe::{PathKind, path_exists};
pub use root::{locate_repository_root, resolve_start};

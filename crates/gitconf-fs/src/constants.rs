//! Well-known git paths, relative to the directory they live in.

use std::path::Path;

/// Git repository markers and configuration file locations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GitPath {
    /// The `.git` directory marking a repository root
    GitDir,
    /// The repository-local config file, relative to the repository root
    LocalConfig,
    /// The per-user dotfile, relative to `$HOME`
    HomeConfig,
    /// The per-user config file, relative to `$XDG_CONFIG_HOME`
    XdgConfig,
}

impl GitPath {
    /// Get the string representation of the path.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GitDir => ".git",
            Self::LocalConfig => ".git/config",
            Self::HomeConfig => ".gitconfig",
            Self::XdgConfig => "git/config",
        }
    }
}

impl AsRef<Path> for GitPath {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl std::fmt::Display for GitPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

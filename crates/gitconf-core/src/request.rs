//! Lookup requests

use std::path::{Path, PathBuf};

use crate::{ConfigKey, ConfigLevel, Result};

/// Everything one lookup needs: where to start, which level, which key.
///
/// Built with the consuming setters and not changed afterwards.
///
/// ```
/// use gitconf_core::{ConfigLevel, LookupRequest};
///
/// let request = LookupRequest::new("user.email")
///     .unwrap()
///     .level(ConfigLevel::Global);
/// assert_eq!(request.selected_level(), Some(ConfigLevel::Global));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    start: Option<PathBuf>,
    level: Option<ConfigLevel>,
    key: ConfigKey,
}

impl LookupRequest {
    /// A request for `key` across all levels, starting in the current directory.
    pub fn new(key: &str) -> Result<Self> {
        Ok(Self::for_key(ConfigKey::parse(key)?))
    }

    pub fn for_key(key: ConfigKey) -> Self {
        Self {
            start: None,
            level: None,
            key,
        }
    }

    /// Start the repository search at `path` instead of the current directory.
    pub fn start_at(mut self, path: impl Into<PathBuf>) -> Self {
        self.start = Some(path.into());
        self
    }

    /// Query only `level`.
    pub fn level(mut self, level: ConfigLevel) -> Self {
        self.level = Some(level);
        self
    }

    /// Select the level by integer code; unknown codes search all levels.
    pub fn level_code(mut self, code: i64) -> Self {
        self.level = ConfigLevel::from_code(code);
        self
    }

    pub fn key(&self) -> &ConfigKey {
        &self.key
    }

    pub fn start(&self) -> Option<&Path> {
        self.start.as_deref()
    }

    /// The selected level, `None` for a search across all levels.
    pub fn selected_level(&self) -> Option<ConfigLevel> {
        self.level
    }
}

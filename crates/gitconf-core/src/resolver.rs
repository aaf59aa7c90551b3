//! Value resolution across configuration levels
//!
//! A request either names one level, in which case that level's file is read
//! and any failure is returned as is, or names none, in which case the levels
//! are tried in [`ConfigLevel::PRECEDENCE`] order and the first non-empty
//! value wins. Per-level failures during that search only mean the level had
//! nothing to contribute.

use std::path::{Path, PathBuf};

use gitconf_fs::{ConfigDirs, resolve_start};
use serde::Serialize;

use crate::{
    ConfigKey, ConfigLevel, Error, LevelFile, LookupRequest, PathResolver, Result, query_file,
};

/// A resolved value and where it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedValue {
    pub value: String,
    pub level: ConfigLevel,
    pub path: PathBuf,
}

/// Resolves configuration values against a fixed set of config directories.
#[derive(Debug, Clone, Default)]
pub struct ConfigResolver {
    dirs: ConfigDirs,
}

impl ConfigResolver {
    /// Create a resolver for explicit config directories.
    pub fn new(dirs: ConfigDirs) -> Self {
        Self { dirs }
    }

    /// Create a resolver with directories read from the environment.
    pub fn from_env() -> Self {
        Self::new(ConfigDirs::from_env())
    }

    /// Resolve the request to its value.
    pub fn resolve(&self, request: &LookupRequest) -> Result<String> {
        self.lookup(request).map(|resolved| resolved.value)
    }

    /// Resolve the request to its value and origin.
    pub fn lookup(&self, request: &LookupRequest) -> Result<ResolvedValue> {
        let start = resolve_start(request.start())?;
        let paths = PathResolver::new(&start, &self.dirs);

        match request.selected_level() {
            Some(level) => self.lookup_level(&paths, level, request.key()),
            None => self.search_all_levels(&paths, request.key()),
        }
    }

    /// Every level's config file as seen from `start` (or the current
    /// directory).
    pub fn candidate_files(&self, start: Option<&Path>) -> Result<Vec<LevelFile>> {
        let start = resolve_start(start)?;
        Ok(PathResolver::new(&start, &self.dirs).candidate_files())
    }

    fn lookup_level(
        &self,
        paths: &PathResolver<'_>,
        level: ConfigLevel,
        key: &ConfigKey,
    ) -> Result<ResolvedValue> {
        let path = paths
            .level_file(level)?
            .ok_or(Error::NoConfigFile { level })?;

        match query_file(key, &path)? {
            Some(value) => Ok(ResolvedValue { value, level, path }),
            None => Err(Error::KeyNotFound {
                key: key.to_string(),
            }),
        }
    }

    fn search_all_levels(
        &self,
        paths: &PathResolver<'_>,
        key: &ConfigKey,
    ) -> Result<ResolvedValue> {
        for level in ConfigLevel::PRECEDENCE {
            match self.lookup_level(paths, level, key) {
                Ok(resolved) if !resolved.value.is_empty() => {
                    tracing::debug!(%key, %level, "Resolved key");
                    return Ok(resolved);
                }
                Ok(_) => tracing::debug!(%key, %level, "Empty value, trying next level"),
                Err(e) => tracing::debug!(%key, %level, error = %e, "Level contributed nothing"),
            }
        }

        Err(Error::KeyNotFound {
            key: key.to_string(),
        })
    }
}

//! Per-level config file resolution

use std::path::{Path, PathBuf};

use gitconf_fs::{ConfigDirs, GitPath, PathKind, locate_repository_root, path_exists};
use serde::Serialize;

use crate::{ConfigLevel, Error, Result};

/// Turns a start location and a level into the config file to read.
#[derive(Debug, Clone, Copy)]
pub struct PathResolver<'a> {
    start: &'a Path,
    dirs: &'a ConfigDirs,
}

impl<'a> PathResolver<'a> {
    pub fn new(start: &'a Path, dirs: &'a ConfigDirs) -> Self {
        Self { start, dirs }
    }

    /// The existing config file for `level`, or `None` when that level has
    /// no file.
    ///
    /// Fails for the local level when `start` is outside any repository, and
    /// for the system level when no system file was supplied.
    pub fn level_file(&self, level: ConfigLevel) -> Result<Option<PathBuf>> {
        match level {
            ConfigLevel::Local => {
                let root = locate_repository_root(self.start)?;
                Ok(existing_file(root.join(GitPath::LocalConfig)))
            }
            ConfigLevel::Global => Ok(self
                .dirs
                .global_candidates()
                .into_iter()
                .find(|candidate| path_exists(candidate, PathKind::File))),
            ConfigLevel::System => match self.dirs.system_candidate() {
                Some(path) => Ok(existing_file(path.to_path_buf())),
                None => Err(Error::UnsupportedLevel { level }),
            },
        }
    }

    /// Describe every level's file, in precedence order.
    pub fn candidate_files(&self) -> Vec<LevelFile> {
        ConfigLevel::PRECEDENCE
            .into_iter()
            .map(|level| match self.level_file(level) {
                Ok(path) => LevelFile {
                    level,
                    path,
                    reason: None,
                },
                Err(e) => LevelFile {
                    level,
                    path: None,
                    reason: Some(e.to_string()),
                },
            })
            .collect()
    }
}

/// One level's config file as seen from a start location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LevelFile {
    pub level: ConfigLevel,
    /// The file that would be read, if it exists
    pub path: Option<PathBuf>,
    /// Why the level could not be resolved at all
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

fn existing_file(path: PathBuf) -> Option<PathBuf> {
    path_exists(&path, PathKind::File).then_some(path)
}

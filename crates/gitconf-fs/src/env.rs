//! Per-user and machine-wide configuration directories
//!
//! The values here are read from the process environment once and then passed
//! around explicitly, so lookups never consult global state themselves.

use std::path::{Path, PathBuf};

use crate::GitPath;

/// Directories that anchor the global and system configuration levels.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigDirs {
    /// The user's home directory (`$HOME`)
    pub home: Option<PathBuf>,
    /// The XDG configuration base (`$XDG_CONFIG_HOME`, default `$HOME/.config`)
    pub xdg_config_home: Option<PathBuf>,
    /// An explicitly supplied machine-wide config file.
    ///
    /// There is no discovered default; `None` means the system level is
    /// unsupported.
    pub system_file: Option<PathBuf>,
}

impl ConfigDirs {
    /// Read the directories from the process environment.
    ///
    /// `$XDG_CONFIG_HOME` falls back to `$HOME/.config` when unset or empty,
    /// matching how git itself locates its XDG config file.
    pub fn from_env() -> Self {
        let home = dirs::home_dir();
        let xdg_config_home = std::env::var_os("XDG_CONFIG_HOME")
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
            .or_else(|| home.as_ref().map(|h| h.join(".config")));

        tracing::debug!(?home, ?xdg_config_home, "Read config directories from environment");

        Self {
            home,
            xdg_config_home,
            system_file: None,
        }
    }

    /// Directories rooted at an explicit home, with XDG at `<home>/.config`.
    pub fn with_home(home: impl Into<PathBuf>) -> Self {
        let home = home.into();
        Self {
            xdg_config_home: Some(home.join(".config")),
            home: Some(home),
            system_file: None,
        }
    }

    /// Override the XDG configuration base.
    pub fn xdg_config_home(mut self, dir: impl Into<PathBuf>) -> Self {
        self.xdg_config_home = Some(dir.into());
        self
    }

    /// Supply the machine-wide config file.
    pub fn system_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.system_file = Some(path.into());
        self
    }

    /// `$XDG_CONFIG_HOME/git/config`
    pub fn xdg_file(&self) -> Option<PathBuf> {
        self.xdg_config_home
            .as_deref()
            .map(|dir| dir.join(GitPath::XdgConfig))
    }

    /// `$HOME/.gitconfig`
    pub fn home_file(&self) -> Option<PathBuf> {
        self.home.as_deref().map(|home| home.join(GitPath::HomeConfig))
    }

    /// Global-level candidates in lookup order: the XDG file, then the dotfile.
    pub fn global_candidates(&self) -> Vec<PathBuf> {
        self.xdg_file().into_iter().chain(self.home_file()).collect()
    }

    /// The configured system file, if any.
    pub fn system_candidate(&self) -> Option<&Path> {
        self.system_file.as_deref()
    }
}

//! [`ConfigSandbox`] — an isolated layout for config lookups.
//!
//! ```text
//! <tmp>/
//!   repo/            work tree (marker created by `init_repo`)
//!   home/            stands in for $HOME
//!   home/.config/    stands in for $XDG_CONFIG_HOME
//!   etc/gitconfig    system file, when written
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use gitconf_fs::ConfigDirs;
use tempfile::TempDir;

use crate::git::fake_git_dir;

/// A temporary directory tree with helpers to write each level's config file.
///
/// # Example
///
/// ```rust,no_run
/// use gitconf_test_utils::ConfigSandbox;
///
/// let sandbox = ConfigSandbox::new();
/// sandbox.init_repo();
/// sandbox.write_local("[user]\n\tname = Local\n");
/// sandbox.write_home("[user]\n\tname = Global\n");
/// let dirs = sandbox.dirs();
/// ```
pub struct ConfigSandbox {
    // Keeps the directory alive for the sandbox's lifetime
    _temp_dir: TempDir,
    root: PathBuf,
}

impl Default for ConfigSandbox {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigSandbox {
    /// Create the sandbox with empty `repo/` and `home/` directories.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        // Canonical so paths compare equal to what lookups report
        let root = dunce::canonicalize(temp_dir.path()).unwrap();
        fs::create_dir_all(root.join("repo")).unwrap();
        fs::create_dir_all(root.join("home")).unwrap();
        Self {
            _temp_dir: temp_dir,
            root,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The work tree directory.
    pub fn repo(&self) -> PathBuf {
        self.root.join("repo")
    }

    pub fn home(&self) -> PathBuf {
        self.root.join("home")
    }

    pub fn xdg(&self) -> PathBuf {
        self.home().join(".config")
    }

    pub fn system_path(&self) -> PathBuf {
        self.root.join("etc").join("gitconfig")
    }

    /// Mark `repo/` as a repository root.
    pub fn init_repo(&self) {
        fake_git_dir(&self.repo());
    }

    /// Create a directory below the work tree and return its path.
    pub fn mkdir(&self, relative: &str) -> PathBuf {
        let path = self.repo().join(relative);
        fs::create_dir_all(&path).unwrap();
        path
    }

    /// Write `repo/.git/config`.
    pub fn write_local(&self, content: &str) -> PathBuf {
        self.write(self.repo().join(".git").join("config"), content)
    }

    /// Write `home/.gitconfig`.
    pub fn write_home(&self, content: &str) -> PathBuf {
        self.write(self.home().join(".gitconfig"), content)
    }

    /// Write `home/.config/git/config`.
    pub fn write_xdg(&self, content: &str) -> PathBuf {
        self.write(self.xdg().join("git").join("config"), content)
    }

    /// Write `etc/gitconfig`.
    pub fn write_system(&self, content: &str) -> PathBuf {
        self.write(self.system_path(), content)
    }

    /// Config directories pointing into the sandbox, with no system file.
    pub fn dirs(&self) -> ConfigDirs {
        ConfigDirs::with_home(self.home())
    }

    /// Config directories with the sandbox's system file supplied.
    pub fn dirs_with_system(&self) -> ConfigDirs {
        self.dirs().system_file(self.system_path())
    }

    fn write(&self, path: PathBuf, content: &str) -> PathBuf {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content)
            .unwrap_or_else(|e| panic!("ConfigSandbox: failed to write {}: {e}", path.display()));
        path
    }
}

//! Git repository fixtures.
//!
//! Prefer the fake marker unless the test needs libgit2 to have written the
//! repository itself.

use std::fs;
use std::path::Path;

/// Creates a minimal `.git` directory **without** initialising a real
/// repository.
///
/// Realism level: **FAKE** — a marker directory with a `HEAD` file, no object
/// store and no `config`.
///
/// # Panics
/// Panics if the filesystem operations fail.
pub fn fake_git_dir(path: &Path) {
    fs::create_dir_all(path.join(".git"))
        .unwrap_or_else(|e| panic!("fake_git_dir: failed to create .git: {e}"));
    fs::write(path.join(".git/HEAD"), "ref: refs/heads/main\n")
        .unwrap_or_else(|e| panic!("fake_git_dir: failed to write HEAD: {e}"));
}

/// Initialises a real git repository using `git2`.
///
/// Realism level: **REAL** — libgit2 writes `.git/config` with its `[core]`
/// defaults.
///
/// # Panics
/// Panics if `git2::Repository::init` fails.
pub fn real_git_repo(path: &Path) -> git2::Repository {
    git2::Repository::init(path).unwrap_or_else(|e| {
        panic!(
            "real_git_repo: failed to init repository at {}: {e}",
            path.display()
        )
    })
}

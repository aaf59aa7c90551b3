//! Start-location handling and repository root discovery

use std::path::{Component, Path, PathBuf};

use crate::{Error, GitPath, PathKind, Result, path_exists};

/// Resolve where a lookup starts.
///
/// Uses `start` when given (and non-empty), otherwise the current working
/// directory. A location that is not a directory, such as a file inside a
/// work tree, is replaced by its parent.
pub fn resolve_start(start: Option<&Path>) -> Result<PathBuf> {
    let location = match start {
        Some(path) if !path.as_os_str().is_empty() => path.to_path_buf(),
        _ => std::env::current_dir().map_err(|e| Error::io(".", e))?,
    };

    if path_exists(&location, PathKind::Directory) {
        return Ok(location);
    }

    let parent = match location.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    tracing::debug!(
        start = %location.display(),
        parent = %parent.display(),
        "Start location is not a directory, using its parent"
    );
    Ok(parent)
}

/// Walk upward from `start` until a directory containing a `.git` directory
/// is found, and return that directory.
///
/// `start` is made absolute first (relative to the current directory) and
/// `..` components are folded lexically; symlinks are not resolved. The walk
/// stops at the filesystem root with [`Error::RootNotFound`].
pub fn locate_repository_root(start: impl AsRef<Path>) -> Result<PathBuf> {
    let start = start.as_ref();
    let absolute = std::path::absolute(start).map_err(|e| Error::io(start, e))?;
    let absolute = fold_components(dunce::simplified(&absolute));

    let mut current = absolute.as_path();
    loop {
        if path_exists(current.join(GitPath::GitDir), PathKind::Directory) {
            tracing::debug!(root = %current.display(), "Found repository root");
            return Ok(current.to_path_buf());
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => break,
        }
    }

    tracing::debug!(start = %absolute.display(), "No repository root above start");
    Err(Error::RootNotFound { start: absolute })
}

/// Drop `.` components and apply `..` against the preceding component.
fn fold_components(path: &Path) -> PathBuf {
    let mut folded = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // `..` at the root stays at the root
                folded.pop();
            }
            other => folded.push(other),
        }
    }
    folded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold_components_applies_parent_dirs() {
        let folded = fold_components(Path::new("/a/b/../c/./d"));
        assert_eq!(folded, PathBuf::from("/a/c/d"));
    }

    #[test]
    fn test_fold_components_stops_at_root() {
        let folded = fold_components(Path::new("/a/../../b"));
        assert_eq!(folded, PathBuf::from("/b"));
    }
}

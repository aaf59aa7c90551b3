//! Existence probes

use std::path::Path;

/// The kind of filesystem entry a probe expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    File,
    Directory,
}

/// Check whether `path` exists and is of the expected kind.
///
/// Symlinks are followed, so a dangling link reports `false`. A missing path,
/// a path of the other kind and a path that cannot be stat'ed (e.g.
/// permission denied) all report `false` too.
pub fn path_exists(path: impl AsRef<Path>, kind: PathKind) -> bool {
    match std::fs::metadata(path.as_ref()) {
        Ok(meta) => match kind {
            PathKind::File => meta.is_file(),
            PathKind::Directory => meta.is_dir(),
        },
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_file_is_not_a_directory() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("config");
        fs::write(&file, "[core]\n").unwrap();

        assert!(path_exists(&file, PathKind::File));
        assert!(!path_exists(&file, PathKind::Directory));
    }

    #[test]
    fn test_directory_is_not_a_file() {
        let temp = TempDir::new().unwrap();

        assert!(path_exists(temp.path(), PathKind::Directory));
        assert!(!path_exists(temp.path(), PathKind::File));
    }

    #[test]
    fn test_missing_path_is_false_for_both_kinds() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope");

        assert!(!path_exists(&missing, PathKind::File));
        assert!(!path_exists(&missing, PathKind::Directory));
    }

    #[cfg(unix)]
    #[test]
    fn test_dangling_symlink_is_absent() {
        let temp = TempDir::new().unwrap();
        let link = temp.path().join(".git");
        std::os::unix::fs::symlink(temp.path().join("gone"), &link).unwrap();

        assert!(!path_exists(&link, PathKind::Directory));
        assert!(!path_exists(&link, PathKind::File));

        fs::create_dir(temp.path().join("gone")).unwrap();
        assert!(path_exists(&link, PathKind::Directory));
    }
}

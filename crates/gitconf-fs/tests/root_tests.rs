//! Repository root discovery from various starting depths

use assert_fs::TempDir;
use assert_fs::prelude::*;
use gitconf_fs::{Error, locate_repository_root};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;
use std::path::PathBuf;

fn canonical_root(temp: &TempDir) -> PathBuf {
    // macOS tempdirs live behind a /var -> /private/var symlink
    dunce::canonicalize(temp.path()).unwrap()
}

#[rstest]
#[case::at_root("")]
#[case::one_level("src")]
#[case::three_levels("src/config/nested")]
#[case::deep("a/b/c/d/e/f/g")]
fn test_finds_marker_from_any_depth(#[case] relative: &str) {
    let temp = TempDir::new().unwrap();
    let root = canonical_root(&temp);
    temp.child(".git").create_dir_all().unwrap();
    let start = root.join(relative);
    std::fs::create_dir_all(&start).unwrap();

    let found = locate_repository_root(&start).unwrap();

    assert_eq!(found, root);
}

#[test]
fn test_nearest_marker_wins() {
    let temp = TempDir::new().unwrap();
    let root = canonical_root(&temp);
    temp.child(".git").create_dir_all().unwrap();
    temp.child("vendor/lib/.git").create_dir_all().unwrap();
    temp.child("vendor/lib/src").create_dir_all().unwrap();

    let found = locate_repository_root(root.join("vendor/lib/src")).unwrap();

    assert_eq!(found, root.join("vendor/lib"));
}

#[test]
fn test_fails_without_marker() {
    let temp = TempDir::new().unwrap();
    temp.child("a/b").create_dir_all().unwrap();

    let result = locate_repository_root(temp.path().join("a/b"));

    assert!(
        matches!(result, Err(Error::RootNotFound { .. })),
        "expected RootNotFound, got {result:?}"
    );
}

#[test]
fn test_git_file_is_not_a_marker() {
    let temp = TempDir::new().unwrap();
    // Worktree pointer files are not repository markers here
    temp.child(".git").write_str("gitdir: /elsewhere/.git").unwrap();

    let result = locate_repository_root(temp.path());

    assert!(result.is_err());
}

#[test]
fn test_parent_dir_components_are_folded() {
    let temp = TempDir::new().unwrap();
    let root = canonical_root(&temp);
    temp.child("repo/.git").create_dir_all().unwrap();
    temp.child("repo/src").create_dir_all().unwrap();
    temp.child("other").create_dir_all().unwrap();

    // other/../repo/src resolves inside the repository
    let found = locate_repository_root(root.join("other/../repo/src")).unwrap();

    assert_eq!(found, root.join("repo"));
}

#[test]
fn test_missing_start_still_walks_upward() {
    let temp = TempDir::new().unwrap();
    let root = canonical_root(&temp);
    temp.child(".git").create_dir_all().unwrap();

    let found = locate_repository_root(root.join("not/created/yet")).unwrap();

    assert_eq!(found, root);
}

#[test]
fn test_root_not_found_reports_absolute_start() {
    let temp = TempDir::new().unwrap();
    let root = canonical_root(&temp);

    match locate_repository_root(&root) {
        Err(Error::RootNotFound { start }) => {
            assert!(start.is_absolute());
            assert_eq!(start, root);
        }
        other => panic!("expected RootNotFound, got {other:?}"),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn test_marker_found_from_generated_depths(segments in proptest::collection::vec("[a-z]{1,6}", 0..6)) {
        let temp = TempDir::new().unwrap();
        let root = canonical_root(&temp);
        std::fs::create_dir(root.join(".git")).unwrap();
        let start = segments.iter().fold(root.clone(), |path, segment| path.join(segment));
        std::fs::create_dir_all(&start).unwrap();

        prop_assert_eq!(locate_repository_root(&start).unwrap(), root);
    }
}

//! Start-location normalisation

use assert_fs::TempDir;
use assert_fs::prelude::*;
use gitconf_fs::resolve_start;
use std::path::PathBuf;

#[test]
fn test_directory_start_is_kept() {
    let temp = TempDir::new().unwrap();
    let dir = temp.child("work");
    dir.create_dir_all().unwrap();

    let start = resolve_start(Some(dir.path())).unwrap();

    assert_eq!(start, dir.path());
}

#[test]
fn test_file_start_uses_parent_directory() {
    let temp = TempDir::new().unwrap();
    let file = temp.child("src/main.rs");
    file.write_str("fn main() {}").unwrap();

    let start = resolve_start(Some(file.path())).unwrap();

    assert_eq!(start, temp.path().join("src"));
}

#[test]
fn test_bare_relative_name_falls_back_to_current_dir() {
    let start = resolve_start(Some(std::path::Path::new("no-such-entry-here"))).unwrap();

    assert_eq!(start, PathBuf::from("."));
}

#[test]
fn test_no_start_uses_current_dir() {
    let start = resolve_start(None).unwrap();

    assert_eq!(start, std::env::current_dir().unwrap());
}

#[test]
fn test_empty_start_uses_current_dir() {
    let start = resolve_start(Some(std::path::Path::new(""))).unwrap();

    assert_eq!(start, std::env::current_dir().unwrap());
}

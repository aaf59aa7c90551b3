use criterion::{Criterion, black_box, criterion_group, criterion_main};
use gitconf_fs::{PathKind, locate_repository_root, path_exists};
use std::fs;
use tempfile::tempdir;

fn locate_repository_root_benchmark(c: &mut Criterion) {
    // Marker a few levels above the start
    c.bench_function("root::locate_repository_root (found)", |b| {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join(".git")).unwrap();
        let start_path = dir.path().join("some/nested/dir");
        fs::create_dir_all(&start_path).unwrap();

        b.iter(|| {
            let _ = locate_repository_root(black_box(&start_path)).unwrap();
        })
    });

    // No marker anywhere: walks all the way to the filesystem root
    c.bench_function("root::locate_repository_root (not found)", |b| {
        let dir = tempdir().unwrap();
        let start_path = dir.path().join("some/nested/dir");
        fs::create_dir_all(&start_path).unwrap();

        b.iter(|| {
            let result = locate_repository_root(black_box(&start_path));
            assert!(result.is_err());
        })
    });
}

fn path_exists_benchmark(c: &mut Criterion) {
    c.bench_function("probe::path_exists (missing)", |b| {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing");

        b.iter(|| path_exists(black_box(&missing), PathKind::File))
    });
}

criterion_group!(benches, locate_repository_root_benchmark, path_exists_benchmark);
criterion_main!(benches);

//! Storage tests against real temporary directories and the in-memory backend.

use super::*;
use crate::{cube, sphere, translate, Vector};

#[test]
fn disk_storage_writes_text() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("model.scad");

    DiskStorage.store(&path, "sphere(r=5);").unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "sphere(r=5);");
}

#[test]
fn disk_storage_truncates_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("model.scad");
    std::fs::write(&path, "a much longer previous model that must disappear").unwrap();

    save_text("cube(size=[1, 1, 1], center=false);", &path).unwrap();

    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "cube(size=[1, 1, 1], center=false);"
    );
}

#[test]
fn missing_directory_is_an_open_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no-such-dir").join("model.scad");

    let err = save_text("sphere(r=1);", &path).unwrap_err();

    assert!(matches!(err, PersistenceError::Open { .. }));
    assert_eq!(err.path(), path.as_path());
    assert!(!path.exists());
}

#[test]
fn save_prints_before_writing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("model.scad");
    let model = translate(Vector::new(0.0, 0.0, 10.0), sphere(5.0));

    model.save(&path).unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), model.to_string());
}

#[test]
fn in_memory_storage_replaces_entries() {
    let mut storage = InMemoryStorage::default();
    assert!(storage.is_empty());

    cube(Vector::splat(1.0), false).store_in(&mut storage, "a.scad").unwrap();
    sphere(2.0).store_in(&mut storage, "a.scad").unwrap();
    sphere(3.0).store_in(&mut storage, "b.scad").unwrap();

    assert_eq!(storage.len(), 2);
    assert_eq!(storage.get("a.scad"), Some("sphere(r=2);"));
    assert_eq!(storage.get("b.scad"), Some("sphere(r=3);"));
    assert_eq!(storage.get("c.scad"), None);
}

#[cfg(target_os = "linux")]
#[test]
fn full_device_is_a_write_error() {
    let path = std::path::Path::new("/dev/full");

    let err = save_text("sphere(r=1);", path).unwrap_err();

    assert!(matches!(err, PersistenceError::Write { .. }));
    assert!(err.to_string().starts_with("failed to write to file /dev/full"));
    assert_eq!(err.path(), path);
}

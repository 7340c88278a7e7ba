use std::fs;

use contacts_engine::{ensure_data_dir, AtomicFileWriter};
use tempfile::TempDir;

#[test]
fn creates_missing_data_dir() {
    let temp = TempDir::new().unwrap();
    let new_dir = temp.path().join("data");
    assert!(!new_dir.exists());
    ensure_data_dir(&new_dir).unwrap();
    assert!(new_dir.is_dir());
}

#[test]
fn atomic_write_replaces_existing() {
    let temp = TempDir::new().unwrap();
    let writer = AtomicFileWriter::new(temp.path().to_path_buf());

    let first = writer.write("contacts.ron", "hello").unwrap();
    assert_eq!(first.file_name().unwrap(), "contacts.ron");
    assert_eq!(fs::read_to_string(&first).unwrap(), "hello");

    let second = writer.write("contacts.ron", "world").unwrap();
    assert_eq!(first, second);
    assert_eq!(fs::read_to_string(&second).unwrap(), "world");
}

#[test]
fn no_partial_file_on_error() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("not_a_dir");
    fs::write(&file_path, "x").unwrap();

    let writer = AtomicFileWriter::new(file_path.clone());
    let result = writer.write("contacts.ron", "data");
    assert!(result.is_err());
    assert!(!file_path.with_file_name("contacts.ron").exists());
}

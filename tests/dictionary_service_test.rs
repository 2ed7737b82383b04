//! Tests for DictionaryService persistence against a real word file

use std::path::PathBuf;
use std::sync::Arc;

use tempfile::TempDir;

use trieviz::application::services::DictionaryService;
use trieviz::infrastructure::traits::{RealFileSystem, WordStore};
use trieviz::infrastructure::{FileWordStore, MemoryWordStore};
use trieviz::util::testing;

fn file_store(path: PathBuf) -> Arc<FileWordStore> {
    testing::init_test_setup();
    Arc::new(FileWordStore::new(path, Arc::new(RealFileSystem)))
}

#[test]
fn given_saved_words_when_reopening_then_loaded_in_insertion_order() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("data").join("words.toml");

    let mut first = DictionaryService::open(file_store(path.clone()));
    first.insert("pear");
    first.insert("apple");
    first.insert("peach");
    first.remove_word("apple");
    assert!(first.take_warning().is_none());

    // Act
    let second = DictionaryService::open(file_store(path.clone()));

    // Assert
    assert!(path.exists());
    assert_eq!(second.trie().words(), ["pear", "peach"]);
    assert_eq!(second.all_words(), vec!["peach", "pear"]);
}

#[test]
fn given_corrupt_word_file_when_opening_then_starts_empty() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("words.toml");
    std::fs::write(&path, "words = [ this is not toml").unwrap();

    let service = DictionaryService::open(file_store(path));

    assert!(service.is_empty());
}

#[test]
fn given_invalid_entries_in_file_when_opening_then_skipped() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("words.toml");
    std::fs::write(&path, r#"words = ["cat", "", "Dog1", "cat", "cab"]"#).unwrap();

    let service = DictionaryService::open(file_store(path));

    assert_eq!(service.trie().words(), ["cat", "cab"]);
}

#[test]
fn given_word_file_when_deleting_all_data_then_file_removed() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("words.toml");
    let mut service = DictionaryService::open(file_store(path.clone()));
    service.insert("cat");
    assert!(path.exists());

    service.delete_all_data();

    assert!(service.is_empty());
    assert!(!path.exists());
    assert!(service.take_warning().is_none());
    assert!(file_store(path).load().unwrap().is_empty());
}

#[test]
fn given_failing_store_when_inserting_then_change_kept_and_warning_reported() {
    let mut service = DictionaryService::open(Arc::new(MemoryWordStore::failing()));

    assert!(service.insert("cat"));

    assert!(service.contains("cat"));
    let warning = service.take_warning().unwrap();
    assert!(warning.starts_with("Error saving data:"), "{warning}");
    assert!(service.take_warning().is_none());
}

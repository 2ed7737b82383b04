//! Tests for the interactive menu driven by scripted input

use std::io::Cursor;
use std::sync::Arc;

use trieviz::cli::menu::Menu;
use trieviz::config::Settings;
use trieviz::infrastructure::di::ServiceContainer;
use trieviz::infrastructure::MemoryWordStore;
use trieviz::util::testing;

fn container(store: Arc<MemoryWordStore>) -> ServiceContainer {
    testing::init_test_setup();
    ServiceContainer::with_store(&Settings::default(), store)
}

/// Run the menu over `script` and return everything it printed.
fn run_script(services: &mut ServiceContainer, script: &str) -> String {
    colored::control::set_override(false);
    let mut out = Vec::new();
    Menu::new(services, Cursor::new(script.as_bytes().to_vec()), &mut out)
        .run()
        .unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn given_add_script_when_running_then_word_stored_and_reported() {
    let store = Arc::new(MemoryWordStore::new());
    let mut services = container(store.clone());

    let out = run_script(&mut services, "1\n  Apple \n0\n");

    assert!(out.contains("Word 'apple' added successfully!"));
    assert!(out.contains("Total words in dictionary: 1"));
    assert!(out.contains("Words: 1 | Trie updated"));
    assert!(out.ends_with("Goodbye!\n"));
    assert_eq!(store.stored(), Some(vec!["apple".to_string()]));
}

#[test]
fn given_invalid_then_duplicate_then_cancel_when_adding_then_retries() {
    let store = Arc::new(MemoryWordStore::with_words(["cat"]));
    let mut services = container(store);

    let out = run_script(&mut services, "1\nc4t\ncat\nback\n0\n");

    assert!(out.contains("Error: Word can only contain English letters (a-z)"));
    assert!(out.contains("Error: Word 'cat' already exists in dictionary"));
    assert!(out.contains("Please try again or enter 'back' to cancel"));
    assert!(out.contains("Operation cancelled"));
    assert_eq!(services.dictionary.word_count(), 1);
}

#[test]
fn given_bad_choices_when_running_then_error_messages_shown() {
    let mut services = container(Arc::new(MemoryWordStore::new()));

    let out = run_script(&mut services, "9\nhello\n0\n");

    assert!(out.contains("!Invalid choice! Please enter number (0-7)!"));
    assert!(out.contains("!Invalid choice! Please enter a number (0-7), not text!!"));
}

#[test]
fn given_empty_dictionary_when_checking_then_empty_notice() {
    let mut services = container(Arc::new(MemoryWordStore::new()));

    let out = run_script(&mut services, "2\n6\n0\n");

    assert!(out.contains("!Dictionary is empty! No words to check"));
    assert!(out.contains("!Dictionary is empty! No words to print"));
}

#[test]
fn given_words_when_finding_by_prefix_then_numbered_and_highlighted() {
    let mut services = container(Arc::new(MemoryWordStore::with_words(["cat", "car", "bat"])));

    let out = run_script(&mut services, "4\nCA\n0\n");

    assert!(out.contains("Found 2 words with prefix 'ca':"));
    assert!(out.contains("1. car\n2. cat\n"));
    assert!(out.contains("Words: 3 | Found 2 words with prefix: ca"));
}

#[test]
fn given_words_when_checking_then_found_and_missing_reported() {
    let mut services = container(Arc::new(MemoryWordStore::with_words(["cat"])));

    let out = run_script(&mut services, "2\ncat\n2\ndog\n3\nc\n3\nz\n0\n");

    assert!(out.contains("Word 'cat' was found in dictionary!"));
    assert!(out.contains("Word 'dog' was not found in dictionary"));
    assert!(out.contains("There are words starting with 'c'!"));
    assert!(out.contains("No words starting with 'z' found"));
    assert!(out.contains("Highlighting word: cat"));
    assert!(out.contains("Highlighting prefix: c"));
}

#[test]
fn given_words_when_removing_then_store_updated() {
    let store = Arc::new(MemoryWordStore::with_words(["cat", "car"]));
    let mut services = container(store.clone());

    let out = run_script(&mut services, "5\ncar\n5\ncar\n0\n");

    assert!(out.contains("Word 'car' removed successfully!"));
    assert!(out.contains("Word 'car' not found in dictionary"));
    assert_eq!(store.stored(), Some(vec!["cat".to_string()]));
}

#[test]
fn given_confirmation_when_deleting_all_then_dictionary_empty() {
    let store = Arc::new(MemoryWordStore::with_words(["cat", "car"]));
    let mut services = container(store.clone());

    let out = run_script(&mut services, "7\nno\n7\nyes\n0\n");

    assert!(out.contains("Operation cancelled"));
    assert!(out.contains("All dictionary data deleted successfully!"));
    assert!(out.contains("Dictionary is empty. Add some words!"));
    assert!(services.dictionary.is_empty());
    assert_eq!(store.stored(), None);
}

#[test]
fn given_end_of_input_when_prompting_then_exits() {
    let mut services = container(Arc::new(MemoryWordStore::new()));

    let out = run_script(&mut services, "1\n");

    assert!(out.ends_with("Goodbye!\n"));
}

//! Tests for the Trie through its public API
//!
//! Covers counting, duplicates, prefix queries, removal and clearing.

use rstest::{fixture, rstest};

use trieviz::domain::node::letter_at;
use trieviz::domain::{Trie, ALPHABET_SIZE};

#[fixture]
fn pets() -> Trie {
    Trie::from_words(["cat", "car", "bat"])
}

// ============================================================
// insert() / contains()
// ============================================================

#[test]
fn given_inserted_words_when_counting_then_every_word_is_contained() {
    let words = ["apple", "app", "banana", "band", "bandana", "zebra"];
    let mut trie = Trie::new();

    for word in words {
        assert!(trie.insert(word));
    }

    assert_eq!(trie.word_count(), words.len());
    for word in words {
        assert!(trie.contains(word), "missing {word}");
    }
}

#[rstest]
fn given_existing_word_when_inserting_again_then_state_unchanged(mut pets: Trie) {
    let before = pets.words().to_vec();

    assert!(!pets.insert("cat"));

    assert_eq!(pets.words(), before.as_slice());
    assert_eq!(pets.word_count(), 3);
}

#[rstest]
fn given_proper_prefix_when_contains_then_false(pets: Trie) {
    assert!(!pets.contains("ca"));
    assert!(pets.starts_with("ca"));
    assert!(!pets.starts_with("cb"));
}

// ============================================================
// get_by_prefix()
// ============================================================

#[rstest]
fn given_empty_prefix_when_get_by_prefix_then_empty(pets: Trie) {
    assert!(pets.get_by_prefix("").is_empty());
}

#[rstest]
fn given_shared_prefix_when_get_by_prefix_then_alphabetical(pets: Trie) {
    assert_eq!(pets.get_by_prefix("ca"), vec!["car", "cat"]);
    assert_eq!(pets.get_by_prefix("cat"), vec!["cat"]);
    assert!(pets.get_by_prefix("d").is_empty());
}

#[test]
fn given_word_and_extension_when_get_by_prefix_then_both_listed() {
    let trie = Trie::from_words(["carton", "car", "cart"]);

    assert_eq!(trie.get_by_prefix("car"), vec!["car", "cart", "carton"]);
}

#[test]
fn given_every_letter_when_listing_all_then_sorted() {
    let words: Vec<String> = (0..ALPHABET_SIZE)
        .rev()
        .map(|i| letter_at(i).to_string())
        .collect();
    let trie = Trie::from_words(&words);

    let all = trie.all_words();
    assert_eq!(all.len(), ALPHABET_SIZE);
    assert_eq!(all.first().map(String::as_str), Some("a"));
    assert_eq!(all.last().map(String::as_str), Some("z"));
}

// ============================================================
// remove_word()
// ============================================================

#[rstest]
fn given_absent_word_when_removing_then_false_and_count_unchanged(mut pets: Trie) {
    assert!(!pets.remove_word("dog"));
    assert!(!pets.remove_word("ca"));
    assert_eq!(pets.word_count(), 3);
}

#[rstest]
fn given_present_word_when_removing_then_siblings_intact(mut pets: Trie) {
    assert!(pets.remove_word("car"));

    assert_eq!(pets.word_count(), 2);
    assert!(!pets.contains("car"));
    assert!(pets.contains("cat"));
    assert!(pets.contains("bat"));
    assert_eq!(pets.words(), ["cat", "bat"]);
}

#[test]
fn given_prefix_word_when_removing_longer_word_then_prefix_word_kept() {
    let mut trie = Trie::from_words(["car", "cart"]);

    assert!(trie.remove_word("cart"));

    assert!(trie.contains("car"));
    assert!(!trie.starts_with("cart"));
}

// ============================================================
// clear()
// ============================================================

#[rstest]
fn given_words_when_clearing_then_every_letter_query_empty(mut pets: Trie) {
    pets.clear();

    assert!(pets.is_empty());
    assert_eq!(pets.word_count(), 0);
    for i in 0..ALPHABET_SIZE {
        assert!(pets.get_by_prefix(&letter_at(i).to_string()).is_empty());
    }
}

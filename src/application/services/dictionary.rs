//! Dictionary service
//!
//! Owns the trie and keeps the persisted word list in step with it.

use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use crate::domain::Trie;
use crate::infrastructure::traits::WordStore;

/// Trie plus persistence. Every successful mutation is followed by a save
/// of the full word list; clearing purges the store.
///
/// Persistence failures never undo an in-memory change. They are logged and
/// kept as a warning for the front end to show (see [`Self::take_warning`]).
pub struct DictionaryService {
    trie: Trie,
    store: Arc<dyn WordStore>,
    warning: Option<String>,
}

impl DictionaryService {
    /// Load stored words and replay them into a fresh trie.
    ///
    /// A store that cannot be read yields an empty dictionary.
    #[instrument(level = "debug", skip_all)]
    pub fn open(store: Arc<dyn WordStore>) -> Self {
        let words = store.load().unwrap_or_else(|e| {
            warn!("could not load stored words, starting empty: {}", e);
            Vec::new()
        });
        let trie = Trie::from_words(&words);
        info!("dictionary opened with {} words", trie.word_count());
        Self {
            trie,
            store,
            warning: None,
        }
    }

    /// Add `word`; false if empty or already present.
    pub fn insert(&mut self, word: &str) -> bool {
        if !self.trie.insert(word) {
            debug!("insert skipped: {:?}", word);
            return false;
        }
        debug!("inserted {}", word);
        self.persist();
        true
    }

    pub fn contains(&self, word: &str) -> bool {
        self.trie.contains(word)
    }

    pub fn starts_with(&self, prefix: &str) -> bool {
        self.trie.starts_with(prefix)
    }

    /// Remove `word`; false if absent.
    pub fn remove_word(&mut self, word: &str) -> bool {
        if !self.trie.remove_word(word) {
            debug!("remove skipped, not present: {:?}", word);
            return false;
        }
        debug!("removed {}", word);
        self.persist();
        true
    }

    pub fn get_by_prefix(&self, prefix: &str) -> Vec<String> {
        self.trie.get_by_prefix(prefix)
    }

    /// All words, alphabetical.
    pub fn all_words(&self) -> Vec<String> {
        self.trie.all_words()
    }

    pub fn word_count(&self) -> usize {
        self.trie.word_count()
    }

    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }

    /// Empty the dictionary and delete the stored word list.
    pub fn delete_all_data(&mut self) {
        self.trie.clear();
        if let Err(e) = self.store.purge() {
            warn!("could not delete stored words: {}", e);
            self.warning = Some(format!("Could not delete data file: {}", e));
        }
    }

    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    /// Pending persistence warning, if the last write failed.
    pub fn take_warning(&mut self) -> Option<String> {
        self.warning.take()
    }

    fn persist(&mut self) {
        if let Err(e) = self.store.save(self.trie.words()) {
            warn!("could not save words: {}", e);
            self.warning = Some(format!("Error saving data: {}", e));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::MemoryWordStore;

    #[test]
    fn given_stored_words_when_opening_then_replayed_in_order() {
        let store = Arc::new(MemoryWordStore::with_words(["pear", "apple"]));
        let service = DictionaryService::open(store);

        assert_eq!(service.word_count(), 2);
        assert_eq!(service.trie().words(), ["pear", "apple"]);
        assert_eq!(service.all_words(), vec!["apple", "pear"]);
    }

    #[test]
    fn given_insert_when_successful_then_store_holds_full_list() {
        let store = Arc::new(MemoryWordStore::new());
        let mut service = DictionaryService::open(store.clone());

        assert!(service.insert("cat"));
        assert!(service.insert("car"));
        assert!(!service.insert("cat"));

        assert_eq!(store.stored(), Some(vec!["cat".to_string(), "car".to_string()]));
        assert!(service.take_warning().is_none());
    }

    #[test]
    fn given_failing_store_when_inserting_then_memory_kept_and_warning_set() {
        let mut service = DictionaryService::open(Arc::new(MemoryWordStore::failing()));

        assert!(service.insert("owl"));
        assert!(service.contains("owl"));
        let warning = service.take_warning().unwrap();
        assert!(warning.starts_with("Error saving data"));
        assert!(service.take_warning().is_none());

        service.delete_all_data();
        assert!(service.is_empty());
        assert!(service
            .take_warning()
            .unwrap()
            .starts_with("Could not delete data file"));
    }

    #[test]
    fn given_words_when_deleting_all_then_store_purged() {
        let store = Arc::new(MemoryWordStore::with_words(["a", "b"]));
        let mut service = DictionaryService::open(store.clone());

        service.delete_all_data();

        assert!(service.is_empty());
        assert_eq!(store.stored(), None);
    }
}

//! In-memory prefix tree with a flat, insertion-ordered word list.
//!
//! The tree and the flat list always describe the same set of words. Removal
//! does not unlink nodes: the list entry is dropped and the whole tree is
//! rebuilt by replaying the remaining words. This costs O(total word length)
//! per removal and leaves no dead branches behind.

use tracing::{instrument, warn};

use crate::domain::node::{is_valid_word, letter_index, TrieNode};

/// Initial capacity of the flat word list.
pub const INITIAL_CAPACITY: usize = 10;

#[derive(Debug)]
pub struct Trie {
    root: TrieNode,
    words: Vec<String>,
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl Trie {
    pub fn new() -> Self {
        Self {
            root: TrieNode::new(),
            words: Vec::with_capacity(INITIAL_CAPACITY),
        }
    }

    /// Build a trie by replaying previously stored words in order.
    ///
    /// Empty, duplicate and non a-z entries are skipped so that a damaged
    /// word list cannot break the tree/list invariant.
    #[instrument(level = "debug", skip_all)]
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Self::new();
        for word in words {
            let word = word.as_ref();
            if word.is_empty() || !is_valid_word(word) {
                warn!("skipping invalid stored word: {:?}", word);
                continue;
            }
            if trie.contains(word) {
                warn!("skipping duplicate stored word: {}", word);
                continue;
            }
            trie.insert_path(word);
            trie.push_word(word);
        }
        trie
    }

    /// Insert `word`. Returns false for empty input or an existing word.
    ///
    /// # Panics
    ///
    /// Panics if `word` contains anything other than `a..=z`. Input is
    /// normalized by [`crate::domain::validation::normalize`] before it gets
    /// here.
    pub fn insert(&mut self, word: &str) -> bool {
        if word.is_empty() || self.contains(word) {
            return false;
        }
        assert!(
            is_valid_word(word),
            "trie accepts only lowercase a-z words, got {:?}",
            word
        );

        self.insert_path(word);
        self.push_word(word);
        true
    }

    pub fn contains(&self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }
        self.find_node(word).is_some_and(TrieNode::is_end_of_word)
    }

    pub fn starts_with(&self, prefix: &str) -> bool {
        if prefix.is_empty() {
            return false;
        }
        self.find_node(prefix).is_some()
    }

    /// Remove `word`, then rebuild the tree from the remaining words.
    pub fn remove_word(&mut self, word: &str) -> bool {
        if word.is_empty() || !self.contains(word) {
            return false;
        }
        let Some(position) = self.words.iter().position(|w| w == word) else {
            return false;
        };

        // Vec::remove shifts the tail left, keeping insertion order.
        self.words.remove(position);
        self.rebuild();
        true
    }

    /// All words under `prefix`, alphabetical pre-order.
    ///
    /// A word equal to the prefix itself comes first, then the words of each
    /// child subtree from `a` to `z`.
    pub fn get_by_prefix(&self, prefix: &str) -> Vec<String> {
        if prefix.is_empty() {
            return Vec::new();
        }
        let Some(node) = self.find_node(prefix) else {
            return Vec::new();
        };

        let mut result = Vec::with_capacity(count_words(node));
        let mut path = String::from(prefix);
        collect_words(node, &mut path, &mut result);
        result
    }

    /// Every stored word, alphabetical pre-order over the whole tree.
    pub fn all_words(&self) -> Vec<String> {
        let mut result = Vec::with_capacity(self.words.len());
        let mut path = String::new();
        collect_words(&self.root, &mut path, &mut result);
        result
    }

    /// Flat word list in insertion order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Drop every word and start over with an empty root.
    pub fn clear(&mut self) {
        self.root = TrieNode::new();
        self.words = Vec::with_capacity(INITIAL_CAPACITY);
    }

    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Node at the end of `path`; `None` if the path leaves the tree or
    /// contains a character outside `a..=z`.
    fn find_node(&self, path: &str) -> Option<&TrieNode> {
        path.chars().try_fold(&self.root, |node, c| {
            letter_index(c).and_then(|index| node.child_at(index))
        })
    }

    fn insert_path(&mut self, word: &str) {
        let mut current = &mut self.root;
        for c in word.chars() {
            let Some(index) = letter_index(c) else {
                panic!("invalid character {:?} in {:?}", c, word);
            };
            current = current.child_or_insert(index);
        }
        current.set_end_of_word(true);
    }

    fn push_word(&mut self, word: &str) {
        if self.words.len() == self.words.capacity() {
            let additional = self.words.capacity().max(INITIAL_CAPACITY);
            self.words.reserve_exact(additional);
        }
        self.words.push(word.to_string());
    }

    #[instrument(level = "trace", skip(self))]
    fn rebuild(&mut self) {
        self.root = TrieNode::new();
        let words = std::mem::take(&mut self.words);
        for word in &words {
            self.insert_path(word);
        }
        self.words = words;
    }
}

fn count_words(node: &TrieNode) -> usize {
    let own = usize::from(node.is_end_of_word());
    own + node.children().map(|(_, child)| count_words(child)).sum::<usize>()
}

fn collect_words(node: &TrieNode, path: &mut String, result: &mut Vec<String>) {
    if node.is_end_of_word() {
        result.push(path.clone());
    }
    for (letter, child) in node.children() {
        path.push(letter);
        collect_words(child, path, result);
        path.pop();
    }
}

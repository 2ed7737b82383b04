//! Fixed fan-out trie node.

/// Number of child slots per node, one per lowercase ASCII letter.
pub const ALPHABET_SIZE: usize = 26;

/// Map a letter to its child slot (`'a'` → 0 … `'z'` → 25).
///
/// Returns `None` for anything outside `a..=z`.
pub fn letter_index(c: char) -> Option<usize> {
    if c.is_ascii_lowercase() {
        Some(c as usize - 'a' as usize)
    } else {
        None
    }
}

/// Inverse of [`letter_index`]. Caller guarantees `index < ALPHABET_SIZE`.
pub fn letter_at(index: usize) -> char {
    (b'a' + index as u8) as char
}

/// True if every character of `s` is a lowercase ASCII letter.
pub fn is_valid_word(s: &str) -> bool {
    s.chars().all(|c| letter_index(c).is_some())
}

/// Trie node: 26 optional owned children and an end-of-word flag.
#[derive(Debug, Default)]
pub struct TrieNode {
    children: [Option<Box<TrieNode>>; ALPHABET_SIZE],
    end_of_word: bool,
}

impl TrieNode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn child_at(&self, index: usize) -> Option<&TrieNode> {
        self.children[index].as_deref()
    }

    pub fn set_child(&mut self, index: usize, node: TrieNode) {
        self.children[index] = Some(Box::new(node));
    }

    /// Child at `index`, created empty if the slot is vacant.
    pub fn child_or_insert(&mut self, index: usize) -> &mut TrieNode {
        self.children[index].get_or_insert_with(Box::default)
    }

    pub fn is_end_of_word(&self) -> bool {
        self.end_of_word
    }

    pub fn set_end_of_word(&mut self, end_of_word: bool) {
        self.end_of_word = end_of_word;
    }

    /// Occupied children in alphabetical order, paired with their letter.
    pub fn children(&self) -> impl Iterator<Item = (char, &TrieNode)> {
        self.children
            .iter()
            .enumerate()
            .filter_map(|(i, child)| child.as_deref().map(|node| (letter_at(i), node)))
    }

    pub fn is_leaf(&self) -> bool {
        self.children.iter().all(Option::is_none)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case('a', Some(0))]
    #[case('m', Some(12))]
    #[case('z', Some(25))]
    #[case('A', None)]
    #[case('{', None)]
    #[case('é', None)]
    fn test_letter_index(#[case] c: char, #[case] expected: Option<usize>) {
        assert_eq!(letter_index(c), expected);
    }

    #[test]
    fn test_letter_at_is_inverse_of_letter_index() {
        for i in 0..ALPHABET_SIZE {
            assert_eq!(letter_index(letter_at(i)), Some(i));
        }
    }

    #[test]
    fn given_new_node_when_setting_child_then_child_is_reachable() {
        let mut node = TrieNode::new();
        assert!(node.is_leaf());

        let mut child = TrieNode::new();
        child.set_end_of_word(true);
        node.set_child(2, child);

        assert!(!node.is_leaf());
        assert!(node.child_at(2).is_some_and(TrieNode::is_end_of_word));
        assert!(node.child_at(3).is_none());
    }

    #[test]
    fn given_children_inserted_out_of_order_when_iterating_then_alphabetical() {
        let mut node = TrieNode::new();
        node.child_or_insert(letter_index('t').unwrap());
        node.child_or_insert(letter_index('b').unwrap());
        node.child_or_insert(letter_index('k').unwrap());

        let letters: String = node.children().map(|(c, _)| c).collect();
        assert_eq!(letters, "bkt");
    }
}

//! Highlight selection for the visual tree.

/// Current highlight selector. The variants are mutually exclusive, so
/// selecting a word drops a previously selected prefix and vice versa.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum HighlightState {
    #[default]
    None,
    Word(String),
    Prefix(String),
    Words(Vec<String>),
}

impl HighlightState {
    pub fn highlight_word(&mut self, word: impl Into<String>) {
        *self = HighlightState::Word(word.into());
    }

    pub fn highlight_prefix(&mut self, prefix: impl Into<String>) {
        *self = HighlightState::Prefix(prefix.into());
    }

    pub fn highlight_words(&mut self, words: Vec<String>) {
        *self = HighlightState::Words(words);
    }

    pub fn clear(&mut self) {
        *self = HighlightState::None;
    }

    pub fn is_active(&self) -> bool {
        match self {
            HighlightState::None => false,
            HighlightState::Word(s) | HighlightState::Prefix(s) => !s.is_empty(),
            HighlightState::Words(words) => !words.is_empty(),
        }
    }

    /// True if the node at `path` lies on the way to a highlighted target.
    ///
    /// Ancestors of a target are highlighted too; the root (empty path) never
    /// is.
    pub fn is_highlighted(&self, path: &str) -> bool {
        if path.is_empty() {
            return false;
        }
        match self {
            HighlightState::None => false,
            HighlightState::Word(target) | HighlightState::Prefix(target) => {
                target.starts_with(path)
            }
            HighlightState::Words(targets) => targets.iter().any(|w| w.starts_with(path)),
        }
    }
}

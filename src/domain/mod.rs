//! Domain layer: the trie, its visual layout and highlight model
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod error;
pub mod highlight;
pub mod layout;
pub mod node;
pub mod trie;
pub mod validation;

pub use error::{DomainError, InputKind};
pub use highlight::HighlightState;
pub use layout::{LayoutConfig, LayoutEngine, VisualNode, VisualTree};
pub use node::{TrieNode, ALPHABET_SIZE};
pub use trie::Trie;
pub use validation::normalize;

//! Visualizer service
//!
//! Keeps the last built visual tree, the highlight selection and a status
//! message. Drawing is left to the caller: the tree is exported either as
//! indented text or as a flat [`LayoutSnapshot`].

use serde::Serialize;
use tracing::debug;

use crate::domain::{HighlightState, LayoutConfig, LayoutEngine, Trie, VisualTree};
use crate::tree_traits::{TreeDisplay, EMPTY_MESSAGE};

/// Flat, serializable view of a laid-out tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayoutSnapshot {
    pub panel_width: i32,
    pub node_radius: i32,
    pub nodes: Vec<NodeSnapshot>,
    pub edges: Vec<EdgeSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeSnapshot {
    pub path: String,
    pub label: String,
    pub x: i32,
    pub y: i32,
    pub subtree_width: i32,
    pub end_of_word: bool,
    pub highlighted: bool,
}

/// Edge between two nodes, identified by their paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EdgeSnapshot {
    pub from: String,
    pub to: String,
}

pub struct VisualizerService {
    engine: LayoutEngine,
    tree: Option<VisualTree>,
    highlight: HighlightState,
    status: String,
}

impl VisualizerService {
    pub fn new(config: LayoutConfig) -> Self {
        Self {
            engine: LayoutEngine::new(config),
            tree: None,
            highlight: HighlightState::default(),
            status: "Ready".to_string(),
        }
    }

    /// Rebuild the visual tree from the current trie contents.
    ///
    /// Nothing is rebuilt automatically; call this after every mutation that
    /// should become visible.
    pub fn refresh(&mut self, trie: &Trie) {
        self.tree = Some(self.engine.rebuild(trie));
        self.status = "Trie updated".to_string();
    }

    pub fn set_panel_width(&mut self, width: i32) {
        self.engine.set_panel_width(width);
    }

    pub fn highlight_word(&mut self, word: &str) {
        self.highlight.highlight_word(word);
        self.status = format!("Highlighting word: {}", word);
    }

    pub fn highlight_prefix(&mut self, prefix: &str) {
        self.highlight.highlight_prefix(prefix);
        self.status = format!("Highlighting prefix: {}", prefix);
    }

    /// Highlight every word under `prefix`; returns how many were found.
    pub fn highlight_words_by_prefix(&mut self, trie: &Trie, prefix: &str) -> usize {
        let words = trie.get_by_prefix(prefix);
        let count = words.len();
        self.highlight.highlight_words(words);
        self.status = format!("Found {} words with prefix: {}", count, prefix);
        count
    }

    pub fn clear_highlights(&mut self) {
        self.highlight.clear();
        self.status = "Highlight cleared".to_string();
    }

    pub fn highlight(&self) -> &HighlightState {
        &self.highlight
    }

    /// Last built tree; `None` until the first [`Self::refresh`].
    pub fn tree(&self) -> Option<&VisualTree> {
        self.tree.as_ref()
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn status_line(&self, trie: &Trie) -> String {
        format!("Words: {} | {}", trie.word_count(), self.status)
    }

    /// Indented text drawing of the current tree.
    pub fn render_text(&self) -> String {
        match &self.tree {
            Some(tree) => tree.to_tree_string(&self.highlight).to_string(),
            None => EMPTY_MESSAGE.to_string(),
        }
    }

    /// Nodes in pre-order with coordinates and highlight flags, plus edges.
    pub fn snapshot(&self) -> LayoutSnapshot {
        let config = self.engine.config();
        let mut snapshot = LayoutSnapshot {
            panel_width: config.effective_panel_width(),
            node_radius: config.node_radius,
            nodes: Vec::new(),
            edges: Vec::new(),
        };
        let Some(tree) = &self.tree else {
            return snapshot;
        };

        snapshot.nodes = tree
            .iter()
            .map(|(_, node)| NodeSnapshot {
                path: node.full_word.clone(),
                label: node.display_label(),
                x: node.x,
                y: node.y,
                subtree_width: node.subtree_width,
                end_of_word: node.end_of_word,
                highlighted: self.highlight.is_highlighted(&node.full_word),
            })
            .collect();
        snapshot.edges = tree
            .edges()
            .into_iter()
            .map(|(parent, child)| EdgeSnapshot {
                from: parent.full_word.clone(),
                to: child.full_word.clone(),
            })
            .collect();
        debug!(
            "snapshot: {} nodes, {} edges",
            snapshot.nodes.len(),
            snapshot.edges.len()
        );
        snapshot
    }
}

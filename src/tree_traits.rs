//! Text rendering of the visual tree via `termtree`.

use colored::Colorize;
use generational_arena::Index;
use termtree::Tree;
use tracing::instrument;

use crate::domain::{HighlightState, VisualTree};

pub const EMPTY_MESSAGE: &str = "Dictionary is empty. Add some words!";

pub trait TreeDisplay {
    /// Render as an indented tree. End-of-word nodes carry a `*` marker and
    /// nodes on a highlighted path are drawn in bold cyan.
    fn to_tree_string(&self, highlight: &HighlightState) -> Tree<String>;
}

impl TreeDisplay for VisualTree {
    #[instrument(level = "trace", skip_all)]
    fn to_tree_string(&self, highlight: &HighlightState) -> Tree<String> {
        fn build_tree(
            tree: &VisualTree,
            idx: Index,
            highlight: &HighlightState,
        ) -> Option<Tree<String>> {
            let node = tree.node(idx)?;
            let mut label = node.display_label();
            if highlight.is_highlighted(&node.full_word) {
                label = label.cyan().bold().to_string();
            }
            if node.end_of_word {
                label = format!("{} {}", label, "*".red());
            }
            let leaves: Vec<_> = node
                .children
                .iter()
                .filter_map(|&child| build_tree(tree, child, highlight))
                .collect();
            Some(Tree::new(label).with_leaves(leaves))
        }

        if self.is_empty() {
            return Tree::new(EMPTY_MESSAGE.to_string());
        }
        build_tree(self, self.root(), highlight).unwrap_or_else(|| Tree::new(String::new()))
    }
}

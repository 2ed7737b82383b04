//! Visual tree derived from the trie, with layout coordinates.
//!
//! # Algorithm
//!
//! 1. Gather every word by asking the trie for each single-letter prefix
//!    `a..z` and keeping the first occurrence of each word.
//! 2. Replay the words into a fresh arena-backed tree, one node per character.
//! 3. Subtree widths, bottom-up: a leaf is 1 wide, an inner node is as wide as
//!    its children together.
//! 4. Coordinates, top-down: the root sits centered at the top of the panel and
//!    each node's children are spread under it, `spacing` per width unit.
//!
//! Child order is creation order. Because step 1 yields words in alphabetical
//! pre-order, creation order is alphabetical too; a different enumeration order
//! in [`Trie::get_by_prefix`] would silently reorder the layout.

use generational_arena::{Arena, Index};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::domain::node::{letter_at, ALPHABET_SIZE};
use crate::domain::trie::Trie;

pub const DEFAULT_PANEL_WIDTH: i32 = 1200;

/// Spacing parameters for the layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Horizontal distance per unit of subtree width
    pub spacing: i32,
    /// Vertical distance between tree levels
    pub level_gap: i32,
    /// Node circle radius, also offsets the root from the top edge
    pub node_radius: i32,
    /// Gap between the top edge and the root circle
    pub top_margin: i32,
    /// Width of the drawing area; the root is centered in it
    pub panel_width: i32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            spacing: 60,
            level_gap: 80,
            node_radius: 20,
            top_margin: 50,
            panel_width: DEFAULT_PANEL_WIDTH,
        }
    }
}

impl LayoutConfig {
    /// Panel width, falling back to the default when unset or negative.
    pub fn effective_panel_width(&self) -> i32 {
        if self.panel_width <= 0 {
            DEFAULT_PANEL_WIDTH
        } else {
            self.panel_width
        }
    }

    /// Coordinates of the root node.
    pub fn root_position(&self) -> (i32, i32) {
        (
            self.effective_panel_width() / 2,
            self.node_radius + self.top_margin,
        )
    }
}

/// Positioned node of the visual tree.
#[derive(Debug, Clone)]
pub struct VisualNode {
    /// Letter on the edge into this node, `None` for the root
    pub label: Option<char>,
    /// Path from the root to this node, empty for the root
    pub full_word: String,
    pub end_of_word: bool,
    pub x: i32,
    pub y: i32,
    pub subtree_width: i32,
    pub parent: Option<Index>,
    pub children: Vec<Index>,
}

impl VisualNode {
    fn new(label: Option<char>, full_word: String, parent: Option<Index>) -> Self {
        Self {
            label,
            full_word,
            end_of_word: false,
            x: 0,
            y: 0,
            subtree_width: 1,
            parent,
            children: Vec::new(),
        }
    }

    /// Display label: the letter, or `root`.
    pub fn display_label(&self) -> String {
        self.label
            .map(String::from)
            .unwrap_or_else(|| "root".to_string())
    }
}

/// Arena-backed visual tree. Always has a root; an empty dictionary yields a
/// root without children.
#[derive(Debug)]
pub struct VisualTree {
    arena: Arena<VisualNode>,
    root: Index,
}

impl Default for VisualTree {
    fn default() -> Self {
        Self::new()
    }
}

impl VisualTree {
    pub fn new() -> Self {
        let mut arena = Arena::new();
        let root = arena.insert(VisualNode::new(None, String::new(), None));
        Self { arena, root }
    }

    pub fn root(&self) -> Index {
        self.root
    }

    pub fn node(&self, idx: Index) -> Option<&VisualNode> {
        self.arena.get(idx)
    }

    fn node_mut(&mut self, idx: Index) -> Option<&mut VisualNode> {
        self.arena.get_mut(idx)
    }

    /// Number of nodes including the root.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node(self.root)
            .map_or(true, |root| root.children.is_empty())
    }

    pub fn child_with_label(&self, idx: Index, label: char) -> Option<Index> {
        self.node(idx)?
            .children
            .iter()
            .copied()
            .find(|&child| self.node(child).and_then(|n| n.label) == Some(label))
    }

    /// Node whose path equals `path`; the empty path is the root.
    pub fn find(&self, path: &str) -> Option<&VisualNode> {
        let idx = path
            .chars()
            .try_fold(self.root, |idx, c| self.child_with_label(idx, c))?;
        self.node(idx)
    }

    /// Add `word` below the root, creating nodes as needed.
    pub fn insert_word(&mut self, word: &str) {
        let mut current = self.root;
        let mut path = String::with_capacity(word.len());
        for c in word.chars() {
            path.push(c);
            current = match self.child_with_label(current, c) {
                Some(child) => child,
                None => {
                    let child = self
                        .arena
                        .insert(VisualNode::new(Some(c), path.clone(), Some(current)));
                    if let Some(parent) = self.node_mut(current) {
                        parent.children.push(child);
                    }
                    child
                }
            };
        }
        if let Some(node) = self.node_mut(current) {
            node.end_of_word = true;
        }
    }

    /// Number of levels, counting the root.
    pub fn depth(&self) -> usize {
        self.calculate_depth(self.root)
    }

    fn calculate_depth(&self, idx: Index) -> usize {
        self.node(idx).map_or(0, |node| {
            1 + node
                .children
                .iter()
                .map(|&child| self.calculate_depth(child))
                .max()
                .unwrap_or(0)
        })
    }

    /// Pre-order traversal, children left to right.
    pub fn iter(&self) -> PreOrderIter<'_> {
        PreOrderIter {
            tree: self,
            stack: vec![self.root],
        }
    }

    pub fn iter_postorder(&self) -> PostOrderIter<'_> {
        PostOrderIter {
            tree: self,
            stack: vec![(self.root, false)],
        }
    }

    /// Parent/child pairs in pre-order of the child.
    pub fn edges(&self) -> Vec<(&VisualNode, &VisualNode)> {
        self.iter()
            .filter_map(|(_, node)| {
                let parent = self.node(node.parent?)?;
                Some((parent, node))
            })
            .collect()
    }
}

pub struct PreOrderIter<'a> {
    tree: &'a VisualTree,
    stack: Vec<Index>,
}

impl<'a> Iterator for PreOrderIter<'a> {
    type Item = (Index, &'a VisualNode);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(idx) = self.stack.pop() {
            if let Some(node) = self.tree.node(idx) {
                // reversed so the leftmost child is popped first
                self.stack.extend(node.children.iter().rev());
                return Some((idx, node));
            }
        }
        None
    }
}

pub struct PostOrderIter<'a> {
    tree: &'a VisualTree,
    stack: Vec<(Index, bool)>,
}

impl<'a> Iterator for PostOrderIter<'a> {
    type Item = (Index, &'a VisualNode);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((idx, visited)) = self.stack.pop() {
            if let Some(node) = self.tree.node(idx) {
                if visited {
                    return Some((idx, node));
                }
                self.stack.push((idx, true));
                for &child in node.children.iter().rev() {
                    self.stack.push((child, false));
                }
            }
        }
        None
    }
}

/// Builds positioned visual trees from a trie.
#[derive(Debug, Clone, Default)]
pub struct LayoutEngine {
    config: LayoutConfig,
}

impl LayoutEngine {
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn set_panel_width(&mut self, width: i32) {
        self.config.panel_width = width;
    }

    /// Full rebuild: gather words, build the tree, size and place it.
    #[instrument(level = "debug", skip_all)]
    pub fn rebuild(&self, trie: &Trie) -> VisualTree {
        let words = gather_words(trie);
        let mut tree = VisualTree::new();
        for word in &words {
            tree.insert_word(word);
        }
        compute_subtree_widths(&mut tree);
        let (x, y) = self.config.root_position();
        let root = tree.root();
        self.assign_coordinates(&mut tree, root, x, y);
        debug!("layout: {} words, {} nodes", words.len(), tree.len());
        tree
    }

    fn assign_coordinates(&self, tree: &mut VisualTree, idx: Index, x: i32, y: i32) {
        let Some(node) = tree.node_mut(idx) else {
            return;
        };
        node.x = x;
        node.y = y;
        let children = node.children.clone();
        if children.is_empty() {
            return;
        }

        let widths: Vec<i32> = children
            .iter()
            .map(|&child| tree.node(child).map_or(1, |n| n.subtree_width))
            .collect();
        let spacing = self.config.spacing;
        let total: i32 = widths.iter().sum();

        let mut cursor = x - (total * spacing) / 2 + spacing / 2;
        for (&child, &width) in children.iter().zip(&widths) {
            let child_x = cursor + (width * spacing - spacing) / 2;
            self.assign_coordinates(tree, child, child_x, y + self.config.level_gap);
            cursor += width * spacing;
        }
    }
}

/// Every word of the trie, via one prefix query per starting letter.
///
/// Relies on `get_by_prefix` returning words in alphabetical pre-order, so
/// visual children come out alphabetical too.
pub fn gather_words(trie: &Trie) -> Vec<String> {
    (0..ALPHABET_SIZE)
        .flat_map(|i| trie.get_by_prefix(&letter_at(i).to_string()))
        .unique()
        .collect()
}

/// Post-order width pass: leaves are 1 wide, inner nodes sum their children.
pub fn compute_subtree_widths(tree: &mut VisualTree) {
    let order: Vec<Index> = tree.iter_postorder().map(|(idx, _)| idx).collect();
    for idx in order {
        let Some(node) = tree.node(idx) else {
            continue;
        };
        let sum: i32 = node
            .children
            .iter()
            .filter_map(|&child| tree.node(child))
            .map(|child| child.subtree_width)
            .sum();
        if let Some(node) = tree.node_mut(idx) {
            node.subtree_width = sum.max(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trie_of(words: &[&str]) -> Trie {
        let mut trie = Trie::new();
        for w in words {
            trie.insert(w);
        }
        trie
    }

    #[test]
    fn test_gather_words_dedups_in_alphabetical_preorder() {
        let trie = trie_of(&["cat", "bat", "car", "b"]);
        assert_eq!(gather_words(&trie), vec!["b", "bat", "car", "cat"]);
    }

    #[test]
    fn test_empty_trie_yields_root_only() {
        let tree = LayoutEngine::default().rebuild(&Trie::new());
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 1);
        let root = tree.find("").unwrap();
        assert_eq!((root.x, root.y), (600, 70));
        assert_eq!(root.subtree_width, 1);
        assert_eq!(root.display_label(), "root");
    }

    #[test]
    fn test_subtree_widths_count_leaves() {
        let tree = LayoutEngine::default().rebuild(&trie_of(&["cat", "car", "bat", "ca"]));
        assert_eq!(tree.find("").unwrap().subtree_width, 3);
        assert_eq!(tree.find("c").unwrap().subtree_width, 2);
        assert_eq!(tree.find("ca").unwrap().subtree_width, 2);
        assert_eq!(tree.find("car").unwrap().subtree_width, 1);
        assert_eq!(tree.find("b").unwrap().subtree_width, 1);
    }

    #[test]
    fn test_coordinates_for_known_tree() {
        // root width 3: b (1), c (2) -> ca -> car, cat
        let tree = LayoutEngine::default().rebuild(&trie_of(&["cat", "car", "bat"]));
        let pos = |p: &str| {
            let n = tree.find(p).unwrap();
            (n.x, n.y)
        };
        // cursor = 600 - 90 + 30 = 540
        assert_eq!(pos("b"), (540, 150));
        // cursor = 600; child_x = 600 + 30
        assert_eq!(pos("c"), (630, 150));
        assert_eq!(pos("ca"), (630, 230));
        // cursor = 630 - 60 + 30 = 600
        assert_eq!(pos("car"), (600, 310));
        assert_eq!(pos("cat"), (660, 310));
        assert_eq!(pos("bat"), (540, 310));
    }

    #[test]
    fn test_nonpositive_panel_width_falls_back() {
        let config = LayoutConfig {
            panel_width: 0,
            ..LayoutConfig::default()
        };
        assert_eq!(config.root_position(), (600, 70));
    }

    #[test]
    fn test_children_in_alphabetical_order_and_paths_recorded() {
        let tree = LayoutEngine::default().rebuild(&trie_of(&["dog", "ant", "cow"]));
        let root = tree.node(tree.root()).unwrap();
        let labels: Vec<char> = root
            .children
            .iter()
            .filter_map(|&c| tree.node(c).and_then(|n| n.label))
            .collect();
        assert_eq!(labels, vec!['a', 'c', 'd']);

        let cow = tree.find("cow").unwrap();
        assert!(cow.end_of_word);
        assert!(!tree.find("co").unwrap().end_of_word);
        assert_eq!(tree.depth(), 4);
    }

    #[test]
    fn test_edges_and_iterators_cover_all_nodes() {
        let tree = LayoutEngine::default().rebuild(&trie_of(&["ab", "ac"]));
        let pre: Vec<String> = tree.iter().map(|(_, n)| n.full_word.clone()).collect();
        assert_eq!(pre, vec!["", "a", "ab", "ac"]);
        let post: Vec<String> = tree
            .iter_postorder()
            .map(|(_, n)| n.full_word.clone())
            .collect();
        assert_eq!(post, vec!["ab", "ac", "a", ""]);
        assert_eq!(tree.edges().len(), tree.len() - 1);
    }
}

//! trieviz: a prefix-tree dictionary with a persisted word list and a
//! deterministic tree layout for visualization.
//!
//! Layers:
//! - [`domain`]: trie, validation, highlight selection, layout engine
//! - [`application`]: dictionary and visualizer services
//! - [`infrastructure`]: word list persistence, service wiring
//! - [`cli`]: command line and interactive menu

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod tree_traits;
pub mod util;

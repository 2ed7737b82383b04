//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueHint};

/// Prefix-tree dictionary with a persistent word list and tree visualization
#[derive(Parser, Debug)]
#[command(name = "trieviz")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Debug output, repeat for more (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub debug: u8,

    /// Config file (layered on top of the global config)
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Word list file (overrides config)
    #[arg(long, global = true, env = "TRIEVIZ_DATA_FILE", value_hint = ValueHint::FilePath)]
    pub data_file: Option<PathBuf>,

    /// Without a subcommand the interactive menu starts
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add words to the dictionary
    Add {
        /// Words to add
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Check whether a word exists
    Check {
        /// Word to look up
        word: String,
    },

    /// Check whether any word starts with a prefix
    Prefix {
        /// Prefix to look up
        prefix: String,
    },

    /// List words starting with a prefix
    Find {
        /// Prefix to search
        prefix: String,
    },

    /// Remove a word
    Remove {
        /// Word to remove
        word: String,
    },

    /// Show all words in alphabetical order
    List,

    /// Delete all words and the stored word list
    Clear {
        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Draw the trie as a tree
    Tree {
        #[command(flatten)]
        highlight: HighlightArgs,
    },

    /// Show computed node coordinates
    Layout {
        #[command(flatten)]
        highlight: HighlightArgs,
        /// Panel width used to center the root
        #[arg(short, long)]
        width: Option<i32>,
        /// Emit the layout as TOML
        #[arg(long)]
        toml: bool,
    },

    /// Interactive menu
    Shell,

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Highlight selector shared by `tree` and `layout`.
#[derive(Args, Debug, Default)]
#[group(multiple = false)]
pub struct HighlightArgs {
    /// Highlight the path of a word
    #[arg(long)]
    pub word: Option<String>,
    /// Highlight the path of a prefix
    #[arg(long)]
    pub prefix: Option<String>,
    /// Highlight every word starting with a prefix
    #[arg(long)]
    pub find: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Create config template
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Show config and data paths
    Path,
}

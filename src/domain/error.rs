//! Domain-level errors (no external dependencies)

use std::fmt;

use thiserror::Error;

/// What a piece of user input is meant to be; used in validation messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Word,
    Prefix,
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputKind::Word => write!(f, "Word"),
            InputKind::Prefix => write!(f, "Prefix"),
        }
    }
}

/// Domain errors represent rejected input.
/// Absence (word not found, empty dictionary) is not an error.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("{kind} cannot be empty")]
    EmptyInput { kind: InputKind },

    #[error("{kind} can only contain English letters (a-z)")]
    InvalidCharacters { kind: InputKind },
}

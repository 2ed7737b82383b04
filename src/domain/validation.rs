//! Normalization of raw user input into trie-safe words.

use crate::domain::error::{DomainError, InputKind};
use crate::domain::node::is_valid_word;

/// Input that cancels an interactive prompt.
pub const CANCEL_KEYWORD: &str = "back";

/// Trim and lowercase `input`, then require a non-empty `a..=z` string.
pub fn normalize(input: &str, kind: InputKind) -> Result<String, DomainError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(DomainError::EmptyInput { kind });
    }
    let normalized = trimmed.to_ascii_lowercase();
    if !is_valid_word(&normalized) {
        return Err(DomainError::InvalidCharacters { kind });
    }
    Ok(normalized)
}

pub fn is_cancel(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case(CANCEL_KEYWORD)
}

//! Errors raised at the input boundary
//!
//! The game itself never fails; these only come from parsing typed letters
//! and word lists.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("'{0}' is not a letter from a to z")]
    InvalidLetter(char),

    #[error("word must contain at least one letter")]
    EmptyWord,

    #[error("word '{0}' must contain only ASCII letters")]
    InvalidCharacters(String),

    #[error("word list is empty")]
    EmptyWordList,
}

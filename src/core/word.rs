//! Target word representation
//!
//! A `TargetWord` stores the lowercase word along with a bitmask of the
//! letters it contains for constant-time membership checks.

use super::{GameError, Letter};
use std::fmt;

/// The word the player has to uncover
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TargetWord {
    text: String,
    letter_mask: u32,
}

impl TargetWord {
    /// Create a new target word from a string
    ///
    /// # Errors
    /// Returns `GameError` if:
    /// - The word is empty (after trimming)
    /// - It contains anything other than ASCII letters
    ///
    /// # Examples
    /// ```
    /// use assembly_endgame::core::TargetWord;
    ///
    /// let word = TargetWord::new("React").unwrap();
    /// assert_eq!(word.text(), "react");
    ///
    /// assert!(TargetWord::new("").is_err());
    /// assert!(TargetWord::new("c++").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, GameError> {
        let text: String = text.into().trim().to_lowercase();

        if text.is_empty() {
            return Err(GameError::EmptyWord);
        }

        if !text.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(GameError::InvalidCharacters(text));
        }

        let letter_mask = text
            .bytes()
            .fold(0u32, |mask, b| mask | 1 << Letter::from_byte(b).index());

        Ok(Self { text, letter_mask })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letter slots on the board
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false: empty words are rejected at construction
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Letters of the word in order, duplicates included
    pub fn letters(&self) -> impl Iterator<Item = Letter> + '_ {
        self.text.bytes().map(Letter::from_byte)
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub const fn contains(&self, letter: Letter) -> bool {
        self.letter_mask & (1 << letter.index()) != 0
    }

    /// Bitmask of the distinct letters in the word (bit `n` = `n`th letter)
    #[inline]
    #[must_use]
    pub const fn letter_mask(&self) -> u32 {
        self.letter_mask
    }

    /// Number of distinct letters in the word
    #[inline]
    #[must_use]
    pub const fn distinct_letters(&self) -> u32 {
        self.letter_mask.count_ones()
    }
}

impl fmt::Display for TargetWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

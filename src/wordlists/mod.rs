//! Word lists and random word selection
//!
//! The default list is embedded into the binary at build time. A `WordPool`
//! guarantees a non-empty list, so drawing a word never fails.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::{GameError, TargetWord};
use rand::Rng;

/// A non-empty set of candidate target words
#[derive(Debug, Clone)]
pub struct WordPool {
    words: Vec<TargetWord>,
}

impl WordPool {
    /// Create a pool from a list of words
    ///
    /// # Errors
    /// Returns `GameError::EmptyWordList` if `words` is empty.
    pub fn new(words: Vec<TargetWord>) -> Result<Self, GameError> {
        if words.is_empty() {
            return Err(GameError::EmptyWordList);
        }
        Ok(Self { words })
    }

    /// Pool over the embedded word list
    #[must_use]
    pub fn embedded() -> Self {
        Self {
            words: loader::words_from_slice(WORDS),
        }
    }

    /// Draw a word uniformly at random
    ///
    /// The random source is injected so a seeded generator gives a
    /// reproducible sequence of words.
    ///
    /// # Examples
    /// ```
    /// use assembly_endgame::wordlists::WordPool;
    /// use rand::{SeedableRng, rngs::StdRng};
    ///
    /// let pool = WordPool::embedded();
    /// let first = pool.random_word(&mut StdRng::seed_from_u64(7));
    /// let again = pool.random_word(&mut StdRng::seed_from_u64(7));
    /// assert_eq!(first, again);
    /// ```
    pub fn random_word<R: Rng + ?Sized>(&self, rng: &mut R) -> TargetWord {
        let index = rng.random_range(0..self.words.len());
        self.words[index].clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false: empty pools are rejected at construction
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn words(&self) -> &[TargetWord] {
        &self.words
    }
}

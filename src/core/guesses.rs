//! Guessed letters in the order they were tried

use super::{Letter, TargetWord};

/// Insertion-ordered set of guessed letters
///
/// Keeps the guess order for "last guess" lookups and a bitmask for
/// constant-time membership. Inserting a letter twice is a no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuessedLetters {
    order: Vec<Letter>,
    mask: u32,
}

impl GuessedLetters {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a letter, returning `false` if it was already present
    pub fn insert(&mut self, letter: Letter) -> bool {
        if self.contains(letter) {
            return false;
        }
        self.mask |= 1 << letter.index();
        self.order.push(letter);
        true
    }

    #[inline]
    #[must_use]
    pub const fn contains(&self, letter: Letter) -> bool {
        self.mask & (1 << letter.index()) != 0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// The most recent guess, if any
    #[must_use]
    pub fn last(&self) -> Option<Letter> {
        self.order.last().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = Letter> + '_ {
        self.order.iter().copied()
    }

    pub fn clear(&mut self) {
        self.order.clear();
        self.mask = 0;
    }

    /// Guessed letters that do not appear in `word`
    #[must_use]
    pub fn misses(&self, word: &TargetWord) -> usize {
        (self.mask & !word.letter_mask()).count_ones() as usize
    }

    /// True when every letter of `word` has been guessed
    #[must_use]
    pub const fn covers(&self, word: &TargetWord) -> bool {
        word.letter_mask() & !self.mask == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(c: char) -> Letter {
        Letter::new(c).unwrap()
    }

    #[test]
    fn insert_keeps_order() {
        let mut guesses = GuessedLetters::new();
        assert!(guesses.insert(letter('q')));
        assert!(guesses.insert(letter('a')));
        assert!(guesses.insert(letter('m')));

        let order: String = guesses.iter().map(Letter::as_char).collect();
        assert_eq!(order, "qam");
        assert_eq!(guesses.last(), Some(letter('m')));
    }

    #[test]
    fn duplicate_insert_is_ignored() {
        let mut guesses = GuessedLetters::new();
        assert!(guesses.insert(letter('e')));
        assert!(!guesses.insert(letter('e')));
        assert_eq!(guesses.len(), 1);
        assert_eq!(guesses.last(), Some(letter('e')));
    }

    #[test]
    fn duplicate_does_not_move_last() {
        let mut guesses = GuessedLetters::new();
        guesses.insert(letter('a'));
        guesses.insert(letter('b'));
        guesses.insert(letter('a'));
        assert_eq!(guesses.last(), Some(letter('b')));
    }

    #[test]
    fn misses_and_covers() {
        let word = TargetWord::new("react").unwrap();
        let mut guesses = GuessedLetters::new();
        for c in ['r', 'z', 'e', 'q', 'a', 'c'] {
            guesses.insert(letter(c));
        }
        assert_eq!(guesses.misses(&word), 2);
        assert!(!guesses.covers(&word));

        guesses.insert(letter('t'));
        assert!(guesses.covers(&word));
    }

    #[test]
    fn clear_resets_everything() {
        let mut guesses = GuessedLetters::new();
        guesses.insert(letter('x'));
        guesses.clear();
        assert!(guesses.is_empty());
        assert_eq!(guesses.last(), None);
        assert!(!guesses.contains(letter('x')));
    }
}

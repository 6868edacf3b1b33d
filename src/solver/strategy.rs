//! Letter selection strategies
//!
//! Defines the Strategy trait and concrete implementations used by the
//! simulation command to play games without a human.

use crate::core::{Letter, TargetWord};
use crate::game::Game;
use rand::Rng;
use rand::prelude::IndexedRandom;

/// English letters from most to least common
pub const FREQUENCY_ORDER: &str = "etaoinsrhldcumfpgwybvkxjqz";

/// A strategy for choosing the next letter to guess
pub trait Strategy {
    /// Pick an unguessed letter for `game`
    ///
    /// Returns `None` only when every letter has been guessed.
    fn select_letter<R: Rng + ?Sized>(&self, game: &Game, rng: &mut R) -> Option<Letter>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
pub enum StrategyType<'a> {
    /// Most common unguessed letter among words that fit the board (default)
    Candidates(CandidateStrategy<'a>),
    /// Fixed English letter-frequency order
    Frequency(FrequencyStrategy),
    /// Uniformly random unguessed letter
    Random(RandomStrategy),
}

impl Strategy for StrategyType<'_> {
    fn select_letter<R: Rng + ?Sized>(&self, game: &Game, rng: &mut R) -> Option<Letter> {
        match self {
            Self::Candidates(s) => s.select_letter(game, rng),
            Self::Frequency(s) => s.select_letter(game, rng),
            Self::Random(s) => s.select_letter(game, rng),
        }
    }
}

impl<'a> StrategyType<'a> {
    /// Create strategy from name string
    ///
    /// Supported names: "candidates", "frequency", "random".
    /// Defaults to candidates if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str, words: &'a [TargetWord]) -> Self {
        match name {
            "frequency" => Self::Frequency(FrequencyStrategy),
            "random" => Self::Random(RandomStrategy),
            _ => Self::Candidates(CandidateStrategy::new(words)),
        }
    }
}

fn unguessed(game: &Game) -> impl Iterator<Item = Letter> + '_ {
    Letter::all().filter(|&letter| !game.is_guessed(letter))
}

/// Guess letters in English frequency order
pub struct FrequencyStrategy;

impl Strategy for FrequencyStrategy {
    fn select_letter<R: Rng + ?Sized>(&self, game: &Game, _rng: &mut R) -> Option<Letter> {
        FREQUENCY_ORDER
            .bytes()
            .map(Letter::from_byte)
            .find(|&letter| !game.is_guessed(letter))
    }
}

/// Guess any unguessed letter with equal probability
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn select_letter<R: Rng + ?Sized>(&self, game: &Game, rng: &mut R) -> Option<Letter> {
        let remaining: Vec<Letter> = unguessed(game).collect();
        remaining.choose(rng).copied()
    }
}

/// Narrow the word list to words consistent with the board, then guess the
/// unguessed letter that appears in most of them
///
/// Falls back to frequency order when no word fits (custom targets outside
/// the list).
pub struct CandidateStrategy<'a> {
    words: &'a [TargetWord],
}

impl<'a> CandidateStrategy<'a> {
    #[must_use]
    pub const fn new(words: &'a [TargetWord]) -> Self {
        Self { words }
    }

    /// Words that could still be the target given what has been revealed
    #[must_use]
    pub fn candidates(&self, game: &Game) -> Vec<&'a TargetWord> {
        self.words
            .iter()
            .filter(|word| fits_board(word, game))
            .collect()
    }
}

/// A word fits when it has the same length, agrees with every revealed slot,
/// and hides only letters that have not been guessed yet
fn fits_board(word: &TargetWord, game: &Game) -> bool {
    let target = game.target();
    word.len() == target.len()
        && word.letters().zip(target.letters()).all(|(candidate, actual)| {
            if game.is_guessed(actual) {
                candidate == actual
            } else {
                !game.is_guessed(candidate)
            }
        })
}

impl Strategy for CandidateStrategy<'_> {
    fn select_letter<R: Rng + ?Sized>(&self, game: &Game, rng: &mut R) -> Option<Letter> {
        let candidates = self.candidates(game);

        let mut counts = [0usize; 26];
        for word in &candidates {
            for letter in unguessed(game).filter(|&l| word.contains(l)) {
                counts[letter.index()] += 1;
            }
        }

        // Ties resolve towards the more common English letter
        let best = FREQUENCY_ORDER
            .bytes()
            .map(Letter::from_byte)
            .enumerate()
            .filter(|&(_, letter)| !game.is_guessed(letter))
            .max_by_key(|&(rank, letter)| (counts[letter.index()], std::cmp::Reverse(rank)))
            .map(|(_, letter)| letter);

        match best {
            Some(letter) if counts[letter.index()] > 0 => Some(letter),
            _ => FrequencyStrategy.select_letter(game, rng),
        }
    }
}

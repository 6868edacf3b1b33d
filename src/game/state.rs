//! Game state machine
//!
//! A game is a target word plus the letters guessed so far. Every other
//! quantity (wrong guesses, won, lost, ...) is derived on demand, so the
//! state can never disagree with itself.

use crate::catalog::{Language, allowed_wrong_guesses};
use crate::core::{GuessedLetters, Letter, TargetWord};

/// Where a game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    #[inline]
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// What a call to [`Game::guess`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// New letter that appears in the word
    Correct,
    /// New letter that does not appear in the word
    Wrong,
    /// Letter was already guessed; nothing changed
    Repeated,
    /// Game is over; nothing changed
    Ignored,
}

/// A single round of the game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    target: TargetWord,
    guessed: GuessedLetters,
    allowed_wrong: usize,
}

impl Game {
    /// Start a game that is lost after `allowed_wrong` wrong guesses
    #[must_use]
    pub fn new(target: TargetWord, allowed_wrong: usize) -> Self {
        tracing::debug!(
            length = target.len(),
            distinct = target.distinct_letters(),
            allowed_wrong,
            "new game"
        );
        Self {
            target,
            guessed: GuessedLetters::new(),
            allowed_wrong,
        }
    }

    /// Start a game with one life per catalog entry beyond the last
    #[must_use]
    pub fn with_catalog(target: TargetWord, catalog: &[Language]) -> Self {
        Self::new(target, allowed_wrong_guesses(catalog))
    }

    /// Guess a letter
    ///
    /// Has no effect once the game is over or if the letter was already
    /// guessed.
    pub fn guess(&mut self, letter: Letter) -> GuessOutcome {
        if self.is_over() {
            tracing::debug!(%letter, "guess ignored, game is over");
            return GuessOutcome::Ignored;
        }
        if !self.guessed.insert(letter) {
            return GuessOutcome::Repeated;
        }

        let outcome = if self.target.contains(letter) {
            GuessOutcome::Correct
        } else {
            GuessOutcome::Wrong
        };
        tracing::debug!(
            %letter,
            ?outcome,
            wrong = self.wrong_guess_count(),
            "letter guessed"
        );

        match self.status() {
            GameStatus::Won => tracing::info!(
                word = %self.target,
                guesses = self.guessed.len(),
                "game won"
            ),
            GameStatus::Lost => tracing::info!(word = %self.target, "game lost"),
            GameStatus::Playing => {}
        }

        outcome
    }

    /// Reset with a fresh target word; allowed in any state
    pub fn new_game(&mut self, target: TargetWord) {
        tracing::debug!(
            length = target.len(),
            distinct = target.distinct_letters(),
            "starting over"
        );
        self.target = target;
        self.guessed.clear();
    }

    #[inline]
    #[must_use]
    pub const fn target(&self) -> &TargetWord {
        &self.target
    }

    #[inline]
    #[must_use]
    pub const fn guessed(&self) -> &GuessedLetters {
        &self.guessed
    }

    #[inline]
    #[must_use]
    pub const fn allowed_wrong(&self) -> usize {
        self.allowed_wrong
    }

    #[must_use]
    pub fn is_guessed(&self, letter: Letter) -> bool {
        self.guessed.contains(letter)
    }

    /// Distinct guessed letters that are not in the target word
    #[must_use]
    pub fn wrong_guess_count(&self) -> usize {
        self.guessed.misses(&self.target)
    }

    /// Wrong guesses remaining before the game is lost
    #[must_use]
    pub fn guesses_left(&self) -> usize {
        self.allowed_wrong.saturating_sub(self.wrong_guess_count())
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.guessed.covers(&self.target)
    }

    #[must_use]
    pub fn is_lost(&self) -> bool {
        self.wrong_guess_count() >= self.allowed_wrong
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.is_won() || self.is_lost()
    }

    #[must_use]
    pub fn last_guessed(&self) -> Option<Letter> {
        self.guessed.last()
    }

    /// True when there is a last guess and it missed
    #[must_use]
    pub fn is_last_guess_incorrect(&self) -> bool {
        self.last_guessed()
            .is_some_and(|letter| !self.target.contains(letter))
    }

    /// Won takes precedence over lost
    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.is_won() {
            GameStatus::Won
        } else if self.is_lost() {
            GameStatus::Lost
        } else {
            GameStatus::Playing
        }
    }
}

//! A play session: the current game, where new words come from, and a tally
//! of finished games
//!
//! Front ends own exactly one `Session` and drive it with `guess` and
//! `new_game`; nothing else holds mutable game state.

use super::state::{Game, GameStatus, GuessOutcome};
use super::view::Board;
use crate::catalog::Language;
use crate::core::Letter;
use crate::wordlists::WordPool;
use rand::Rng;

/// Finished games in this session
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
}

impl Statistics {
    pub fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::Won => {
                self.total_games += 1;
                self.games_won += 1;
            }
            GameStatus::Lost => self.total_games += 1,
            GameStatus::Playing => {}
        }
    }

    /// Percentage of finished games that were won
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

pub struct Session<R: Rng> {
    game: Game,
    pool: WordPool,
    rng: R,
    catalog: &'static [Language],
    stats: Statistics,
}

impl<R: Rng> Session<R> {
    /// Start a session; the first word is drawn immediately
    pub fn new(pool: WordPool, mut rng: R, catalog: &'static [Language]) -> Self {
        let target = pool.random_word(&mut rng);
        Self {
            game: Game::with_catalog(target, catalog),
            pool,
            rng,
            catalog,
            stats: Statistics::default(),
        }
    }

    /// Guess a letter, counting the game in the statistics if it just ended
    pub fn guess(&mut self, letter: Letter) -> GuessOutcome {
        let outcome = self.game.guess(letter);
        if matches!(outcome, GuessOutcome::Correct | GuessOutcome::Wrong) {
            self.stats.record(self.game.status());
        }
        outcome
    }

    /// Abandon the current game and start another with a fresh word
    pub fn new_game(&mut self) {
        let target = self.pool.random_word(&mut self.rng);
        self.game.new_game(target);
    }

    #[must_use]
    pub fn board(&self) -> Board {
        Board::from_game(&self.game, self.catalog)
    }

    #[must_use]
    pub const fn game(&self) -> &Game {
        &self.game
    }

    #[must_use]
    pub const fn catalog(&self) -> &'static [Language] {
        self.catalog
    }

    #[must_use]
    pub const fn stats(&self) -> Statistics {
        self.stats
    }

    /// The session's random source, shared with decorative effects
    pub fn rng(&mut self) -> &mut R {
        &mut self.rng
    }
}

//! Self-play engine
//!
//! Drives a game to completion with a strategy standing in for the player.

use super::Strategy;
use crate::game::{Game, GameStatus};
use rand::Rng;

/// Keep guessing until the game is over
///
/// Returns the final status. A game that cannot finish (every letter guessed
/// with lives to spare) is returned as `Playing`.
pub fn play_out<S: Strategy, R: Rng + ?Sized>(
    strategy: &S,
    game: &mut Game,
    rng: &mut R,
) -> GameStatus {
    while !game.is_over() {
        let Some(letter) = strategy.select_letter(game, rng) else {
            break;
        };
        game.guess(letter);
    }
    game.status()
}

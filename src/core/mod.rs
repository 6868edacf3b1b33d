//! Core domain types for the game
//!
//! Letters, target words and the guessed-letter set. Everything here is pure
//! and cheap to copy or clone; validation happens once at construction.

mod error;
mod guesses;
mod letter;
mod word;

pub use error::GameError;
pub use guesses::GuessedLetters;
pub use letter::{ALPHABET, Letter};
pub use word::TargetWord;

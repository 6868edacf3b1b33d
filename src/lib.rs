//! Assembly: Endgame
//!
//! A hangman-style word game: guess the word in under eight attempts to keep
//! the programming world safe from Assembly. Every wrong guess eliminates one
//! language, most modern first.
//!
//! # Quick Start
//!
//! ```rust
//! use assembly_endgame::catalog::LANGUAGES;
//! use assembly_endgame::core::{Letter, TargetWord};
//! use assembly_endgame::game::{Board, Game, GuessOutcome};
//!
//! let mut game = Game::with_catalog(TargetWord::new("react").unwrap(), LANGUAGES);
//! assert_eq!(game.guess(Letter::new('a').unwrap()), GuessOutcome::Correct);
//! assert_eq!(game.guess(Letter::new('z').unwrap()), GuessOutcome::Wrong);
//!
//! let board = Board::from_game(&game, LANGUAGES);
//! assert_eq!(board.word_line(), "_ _ A _ _");
//! assert!(board.chips[0].lost);
//! ```

// Core domain types
pub mod core;

// Language catalog and farewell lines
pub mod catalog;

// Game state machine, view model and session
pub mod game;

// Word lists
pub mod wordlists;

// Automatic guessers
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

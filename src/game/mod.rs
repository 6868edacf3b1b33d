//! The game: state machine, the view model derived from it, and the session
//! that front ends drive

pub mod session;
pub mod state;
pub mod view;

pub use session::{Session, Statistics};
pub use state::{Game, GameStatus, GuessOutcome};
pub use view::{Announcement, Banner, Board, Chip, Effect, Key, KeyState, Slot};

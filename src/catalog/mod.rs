//! Language catalog and farewell text
//!
//! Static data describing the "lives" of a game.

mod farewell;
mod languages;

pub use farewell::farewell_text;
pub use languages::{LANGUAGES, Language, Rgb, allowed_wrong_guesses};

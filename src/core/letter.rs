//! A single guessable letter
//!
//! The game alphabet is fixed to ASCII `a..=z`; a `Letter` can only hold one
//! of those 26 values, so everything downstream of input parsing is total.

use super::GameError;
use std::fmt;

/// The 26 letters of the on-screen keyboard, in order
pub const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

/// One lowercase ASCII letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(u8);

impl Letter {
    /// Create a letter from a character, folding uppercase to lowercase
    ///
    /// # Errors
    /// Returns `GameError::InvalidLetter` for anything outside `a..=z` / `A..=Z`.
    ///
    /// # Examples
    /// ```
    /// use assembly_endgame::core::Letter;
    ///
    /// assert_eq!(Letter::new('Q').unwrap().as_char(), 'q');
    /// assert!(Letter::new('7').is_err());
    /// ```
    pub fn new(c: char) -> Result<Self, GameError> {
        let lower = c.to_ascii_lowercase();
        if lower.is_ascii_lowercase() {
            Ok(Self(lower as u8))
        } else {
            Err(GameError::InvalidLetter(c))
        }
    }

    /// Build a letter from a byte already known to be in `b'a'..=b'z'`
    #[inline]
    pub(crate) const fn from_byte(byte: u8) -> Self {
        debug_assert!(byte.is_ascii_lowercase());
        Self(byte)
    }

    /// Every letter of the alphabet, `a` first
    pub fn all() -> impl Iterator<Item = Self> {
        (b'a'..=b'z').map(Self)
    }

    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }

    #[inline]
    #[must_use]
    pub const fn to_uppercase(self) -> char {
        self.0.to_ascii_uppercase() as char
    }

    /// Zero-based position in the alphabet (`a` = 0)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 - b'a') as usize
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl TryFrom<char> for Letter {
    type Error = GameError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::new(c)
    }
}

//! The language catalog
//!
//! Each entry is one "life". Wrong guesses consume languages in catalog order;
//! the last entry (Assembly) is the one left standing when the game is lost.

/// 24-bit color, independent of any terminal backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// A catalog entry: name plus chip colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    pub name: &'static str,
    pub background: Rgb,
    pub foreground: Rgb,
}

const LIGHT: Rgb = Rgb(0xF9, 0xF4, 0xDA);
const DARK: Rgb = Rgb(0x1E, 0x1E, 0x1E);

/// Languages in the order they are lost
pub const LANGUAGES: &[Language] = &[
    Language { name: "HTML", background: Rgb(0xE2, 0x68, 0x0F), foreground: LIGHT },
    Language { name: "CSS", background: Rgb(0x32, 0x8A, 0xF1), foreground: LIGHT },
    Language { name: "JavaScript", background: Rgb(0xF4, 0xEB, 0x13), foreground: DARK },
    Language { name: "React", background: Rgb(0x2E, 0xD3, 0xE9), foreground: DARK },
    Language { name: "TypeScript", background: Rgb(0x29, 0x8E, 0xC6), foreground: LIGHT },
    Language { name: "Node.js", background: Rgb(0x59, 0x91, 0x37), foreground: LIGHT },
    Language { name: "Python", background: Rgb(0xFF, 0xD7, 0x42), foreground: DARK },
    Language { name: "Ruby", background: Rgb(0xD0, 0x2B, 0x2B), foreground: LIGHT },
    Language { name: "Assembly", background: Rgb(0x2D, 0x51, 0x9F), foreground: LIGHT },
];

/// Wrong guesses a catalog allows before the game is lost
#[inline]
#[must_use]
pub const fn allowed_wrong_guesses(catalog: &[Language]) -> usize {
    catalog.len().saturating_sub(1)
}

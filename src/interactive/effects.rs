//! Decorative overlays: confetti for a win, falling tears for a loss
//!
//! Purely cosmetic. Particles are generated once when the overlay starts and
//! their positions are a pure function of elapsed time.

use crate::catalog::{LANGUAGES, Rgb};
use crate::game::Effect;
use rand::Rng;
use rand::prelude::IndexedRandom;
use std::time::Instant;

pub const TEAR_COUNT: usize = 24;
pub const CONFETTI_COUNT: usize = 160;

const CONFETTI_GLYPHS: &[char] = &['*', '+', '•', '◆', '▪', '✦'];

/// One falling emoji
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Teardrop {
    /// Horizontal position, percent of the screen width (0–100)
    pub left: u8,
    /// Seconds before it starts falling (0–1.5)
    pub delay: f32,
    /// Seconds per fall (3–6)
    pub duration: f32,
    /// Nominal size (12–48); large ones are drawn as a crying face
    pub size: u8,
}

impl Teardrop {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            left: rng.random_range(0..=100),
            delay: rng.random_range(0.0..1.5),
            duration: rng.random_range(3.0..6.0),
            size: rng.random_range(12..=48),
        }
    }

    #[must_use]
    pub const fn glyph(&self) -> &'static str {
        if self.size >= 30 { "😢" } else { "💧" }
    }

    /// Fraction of the fall completed (0–1) at `t` seconds; repeats forever
    #[must_use]
    pub fn progress(&self, t: f32) -> Option<f32> {
        if t < self.delay {
            return None;
        }
        Some(((t - self.delay) % self.duration) / self.duration)
    }
}

/// One piece of confetti
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfettiPiece {
    /// Horizontal position, percent of the screen width (0–100)
    pub left: u8,
    pub delay: f32,
    /// Rows per second
    pub speed: f32,
    pub color: Rgb,
    pub glyph: char,
}

impl ConfettiPiece {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            left: rng.random_range(0..=100),
            delay: rng.random_range(0.0..2.0),
            speed: rng.random_range(4.0..14.0),
            color: LANGUAGES
                .choose(rng)
                .map_or(Rgb(0xFF, 0xFF, 0xFF), |language| language.background),
            glyph: CONFETTI_GLYPHS.choose(rng).copied().unwrap_or('*'),
        }
    }

    /// Row reached at `t` seconds, or `None` before it starts and after it
    /// has fallen past `height`; confetti does not recycle
    #[must_use]
    pub fn row(&self, t: f32, height: u16) -> Option<u16> {
        if t < self.delay {
            return None;
        }
        let row = (t - self.delay) * self.speed;
        (row < f32::from(height)).then_some(row as u16)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Overlay {
    None,
    Confetti(Vec<ConfettiPiece>),
    Tears(Vec<Teardrop>),
}

impl Overlay {
    #[must_use]
    pub const fn effect(&self) -> Effect {
        match self {
            Self::None => Effect::None,
            Self::Confetti(_) => Effect::Confetti,
            Self::Tears(_) => Effect::Tears,
        }
    }
}

/// A glyph to draw on top of the board
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: u16,
    pub y: u16,
    pub glyph: ParticleGlyph,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParticleGlyph {
    Emoji(&'static str),
    Char(char, Rgb),
}

/// The active overlay and when it started
#[derive(Debug)]
pub struct EffectLayer {
    overlay: Overlay,
    started: Instant,
}

impl Default for EffectLayer {
    fn default() -> Self {
        Self {
            overlay: Overlay::None,
            started: Instant::now(),
        }
    }
}

impl EffectLayer {
    /// Switch to the overlay for `effect`, regenerating particles only when
    /// the kind of effect changes
    pub fn sync<R: Rng + ?Sized>(&mut self, effect: Effect, rng: &mut R) {
        if self.overlay.effect() == effect {
            return;
        }
        self.overlay = match effect {
            Effect::None => Overlay::None,
            Effect::Confetti => {
                Overlay::Confetti((0..CONFETTI_COUNT).map(|_| ConfettiPiece::random(rng)).collect())
            }
            Effect::Tears => Overlay::Tears((0..TEAR_COUNT).map(|_| Teardrop::random(rng)).collect()),
        };
        self.started = Instant::now();
    }

    #[must_use]
    pub const fn overlay(&self) -> &Overlay {
        &self.overlay
    }

    /// Particles to draw for a `width` × `height` screen right now
    #[must_use]
    pub fn particles(&self, width: u16, height: u16) -> Vec<Particle> {
        particles_at(
            &self.overlay,
            self.started.elapsed().as_secs_f32(),
            width,
            height,
        )
    }
}

/// Particles of `overlay` at `t` seconds after it started
#[must_use]
pub fn particles_at(overlay: &Overlay, t: f32, width: u16, height: u16) -> Vec<Particle> {
    if width < 2 || height == 0 {
        return Vec::new();
    }
    // Leave room for double-width emoji at the right edge
    let column = |left: u8| (u32::from(width - 2) * u32::from(left) / 100) as u16;

    match overlay {
        Overlay::None => Vec::new(),
        Overlay::Tears(tears) => tears
            .iter()
            .filter_map(|tear| {
                let progress = tear.progress(t)?;
                Some(Particle {
                    x: column(tear.left),
                    y: ((f32::from(height) * progress) as u16).min(height - 1),
                    glyph: ParticleGlyph::Emoji(tear.glyph()),
                })
            })
            .collect(),
        Overlay::Confetti(pieces) => pieces
            .iter()
            .filter_map(|piece| {
                Some(Particle {
                    x: column(piece.left),
                    y: piece.row(t, height)?,
                    glyph: ParticleGlyph::Char(piece.glyph, piece.color),
                })
            })
            .collect(),
    }
}

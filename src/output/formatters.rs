//! Formatting utilities for terminal output

use crate::game::{Chip, Key, KeyState, Slot};
use colored::{ColoredString, Colorize};

/// Format a language chip in its own colors, crossed out once lost
#[must_use]
pub fn chip_label(chip: &Chip) -> ColoredString {
    if chip.lost {
        format!(" 💀 {} ", chip.name).bright_black().strikethrough()
    } else {
        let (bg, fg) = (chip.background, chip.foreground);
        format!(" {} ", chip.name)
            .truecolor(fg.0, fg.1, fg.2)
            .on_truecolor(bg.0, bg.1, bg.2)
            .bold()
    }
}

/// Format one word slot; letters revealed by a loss are shown in red
#[must_use]
pub fn slot_text(slot: Slot) -> ColoredString {
    match slot.letter {
        Some(letter) if slot.missed => format!(" {letter} ").red().bold(),
        Some(letter) => format!(" {letter} ").bright_white().bold(),
        None => " _ ".bright_black(),
    }
}

/// Format one keyboard key by guess state
#[must_use]
pub fn key_text(key: Key) -> ColoredString {
    let label = key.letter.to_uppercase().to_string();
    match key.state {
        KeyState::Correct => label.black().on_green().bold(),
        KeyState::Wrong => label.white().on_red(),
        KeyState::Unused if key.disabled => label.bright_black(),
        KeyState::Unused => label.black().on_yellow(),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar showing how many wrong guesses remain
#[must_use]
pub fn lives_bar(left: usize, allowed: usize) -> String {
    create_progress_bar(left as f64, allowed as f64, allowed.max(1) * 2)
}

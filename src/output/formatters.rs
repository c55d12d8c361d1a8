//! Formatting utilities for terminal output

use crate::core::LetterClassification;
use crate::game::Tile;
use colored::{ColoredString, Colorize};

/// Keyboard rows used for letter hints
pub const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Render a letter as a colored block for its classification
#[must_use]
pub fn colored_letter(letter: Option<char>, class: LetterClassification) -> ColoredString {
    let text = format!(" {} ", letter.map_or('_', |c| c.to_ascii_uppercase()));
    match class {
        LetterClassification::Correct => text.black().on_green().bold(),
        LetterClassification::WrongSpot => text.black().on_yellow().bold(),
        LetterClassification::Absent => text.white().on_bright_black(),
        LetterClassification::Pending => text.bright_white().bold(),
        LetterClassification::Empty => text.bright_black(),
    }
}

/// Render a board tile
#[must_use]
pub fn colored_tile(tile: &Tile) -> ColoredString {
    colored_letter(tile.letter(), tile.classification())
}

/// Human-readable name of a classification
#[must_use]
pub const fn classification_label(class: LetterClassification) -> &'static str {
    match class {
        LetterClassification::Empty => "empty",
        LetterClassification::Pending => "pending",
        LetterClassification::Correct => "correct",
        LetterClassification::WrongSpot => "wrong spot",
        LetterClassification::Absent => "absent",
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

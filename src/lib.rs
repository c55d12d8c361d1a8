//! Wordle Board
//!
//! A word-guessing game engine: pick a hidden 4, 5 or 6 letter word, score
//! guesses letter by letter, and drive the board from any front end.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_board::core::{Feedback, LetterClassification, Word};
//!
//! let secret = Word::new("crane").unwrap();
//! let guess = Word::new("trace").unwrap();
//!
//! let feedback = Feedback::evaluate(&secret, &guess).unwrap();
//! assert_eq!(feedback.classifications()[0], LetterClassification::Absent);
//! assert_eq!(feedback.to_string(), "-GGYG");
//! ```

// Core domain types
pub mod core;

// Board state machine and input routing
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

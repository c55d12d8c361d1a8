//! Core domain types for the game
//!
//! Pure types with no I/O: words, word lengths, per-letter classifications
//! and the guess evaluator.

mod classification;
mod feedback;
mod word;

pub use classification::LetterClassification;
pub use feedback::Feedback;
pub use word::{Word, WordError, WordLength};

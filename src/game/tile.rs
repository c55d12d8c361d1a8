//! Tiles and rows of the board

use crate::core::{Feedback, LetterClassification};

/// One letter cell of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tile {
    letter: Option<char>,
    classification: LetterClassification,
}

impl Tile {
    #[inline]
    #[must_use]
    pub const fn letter(&self) -> Option<char> {
        self.letter
    }

    #[inline]
    #[must_use]
    pub const fn classification(&self) -> LetterClassification {
        self.classification
    }

    fn fill(&mut self, letter: char) {
        self.letter = Some(letter);
        self.classification = LetterClassification::Pending;
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}

/// A row of exactly `word_length` tiles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    tiles: Vec<Tile>,
    submitted: bool,
}

impl Row {
    pub(super) fn new(word_length: usize) -> Self {
        Self {
            tiles: vec![Tile::default(); word_length],
            submitted: false,
        }
    }

    #[inline]
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Every tile holds a letter
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.tiles.iter().all(|t| t.letter.is_some())
    }

    /// The row has been scored and can no longer change
    #[inline]
    #[must_use]
    pub const fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Letters entered so far, in order
    #[must_use]
    pub fn word(&self) -> String {
        self.tiles.iter().filter_map(|t| t.letter).collect()
    }

    /// Classification of every tile, in order
    #[must_use]
    pub fn classifications(&self) -> Vec<LetterClassification> {
        self.tiles.iter().map(|t| t.classification).collect()
    }

    pub(super) fn set_letter(&mut self, column: usize, letter: char) {
        self.tiles[column].fill(letter);
    }

    pub(super) fn clear_letter(&mut self, column: usize) {
        self.tiles[column].clear();
    }

    pub(super) fn apply(&mut self, feedback: &Feedback) {
        for (tile, &class) in self.tiles.iter_mut().zip(feedback.classifications()) {
            tile.classification = class;
        }
        self.submitted = true;
    }
}

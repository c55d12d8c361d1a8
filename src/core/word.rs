//! Word representation
//!
//! A `Word` stores a lowercase 4-6 letter word. `WordLength` is the validated
//! word-length setting shared by the catalog, the evaluator and the board.

use rustc_hash::FxHashMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error type for invalid words and word lengths
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must be {min}-{max} letters, got {0}", min = WordLength::MIN, max = WordLength::MAX)]
    InvalidLength(usize),

    #[error("Word must contain only ASCII letters")]
    NonAscii,

    #[error("Word contains invalid characters")]
    InvalidCharacters,

    #[error("Unsupported word length {0} (expected 4, 5 or 6)")]
    UnsupportedLength(usize),

    #[error("Guess has {found} letters but the secret word has {expected}")]
    LengthMismatch { expected: usize, found: usize },
}

/// Number of letters per word for a game session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WordLength(usize);

impl WordLength {
    pub const MIN: usize = 4;
    pub const MAX: usize = 6;

    pub const FOUR: Self = Self(4);
    pub const FIVE: Self = Self(5);
    pub const SIX: Self = Self(6);

    /// Every supported length, shortest first
    pub const ALL: [Self; 3] = [Self::FOUR, Self::FIVE, Self::SIX];

    /// Validate a raw length
    ///
    /// # Errors
    /// Returns `WordError::UnsupportedLength` outside 4..=6.
    ///
    /// # Examples
    /// ```
    /// use wordle_board::core::WordLength;
    ///
    /// assert_eq!(WordLength::new(6).unwrap().get(), 6);
    /// assert!(WordLength::new(7).is_err());
    /// ```
    pub const fn new(len: usize) -> Result<Self, WordError> {
        if len >= Self::MIN && len <= Self::MAX {
            Ok(Self(len))
        } else {
            Err(WordError::UnsupportedLength(len))
        }
    }

    #[inline]
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }
}

impl Default for WordLength {
    fn default() -> Self {
        Self::FIVE
    }
}

impl fmt::Display for WordLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for WordLength {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s
            .trim()
            .parse::<usize>()
            .map_err(|_| WordError::InvalidCharacters)?;
        Self::new(len)
    }
}

/// A lowercase word of a supported length
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// The text is lowercased before validation.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not 4, 5 or 6
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_board::core::Word;
    ///
    /// let word = Word::new("Crane").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !(WordLength::MIN..=WordLength::MAX).contains(&text.len()) {
            return Err(WordError::InvalidLength(text.len()));
        }

        if !text.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word's letters as ASCII bytes
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// The word's length as a validated setting
    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> WordLength {
        // Length was range-checked in `new`
        WordLength(self.text.len())
    }

    /// Get the character at a specific position
    ///
    /// # Panics
    /// Panics if `position` is past the end of the word
    #[inline]
    #[must_use]
    pub fn char_at(&self, position: usize) -> u8 {
        self.letters()[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.letters().contains(&letter)
    }

    /// Count how many times each letter occurs
    #[must_use]
    pub fn char_counts(&self) -> FxHashMap<u8, u8> {
        let mut counts = FxHashMap::default();
        for &ch in self.letters() {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid_lengths() {
        for text in ["cake", "crane", "planet"] {
            let word = Word::new(text).unwrap();
            assert_eq!(word.text(), text);
            assert_eq!(word.word_length().get(), text.len());
        }
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("CrAnE").unwrap();
        assert_eq!(word.text(), "crane");
        assert_eq!(word, Word::new("crane").unwrap());
    }

    #[test]
    fn word_creation_invalid_length() {
        assert!(matches!(Word::new("cat"), Err(WordError::InvalidLength(3))));
        assert!(matches!(
            Word::new("rainbow"),
            Err(WordError::InvalidLength(7))
        ));
        assert!(matches!(Word::new(""), Err(WordError::InvalidLength(0))));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(matches!(
            Word::new("cran3"),
            Err(WordError::InvalidCharacters)
        ));
        assert!(Word::new("cran ").is_err());
        assert!(Word::new("cran!").is_err());
        assert!(matches!(Word::new("crêpe"), Err(WordError::NonAscii)));
    }

    #[test]
    fn word_letter_queries() {
        let word = Word::new("speed").unwrap();
        assert_eq!(word.char_at(0), b's');
        assert_eq!(word.char_at(4), b'd');
        assert!(word.has_letter(b'e'));
        assert!(!word.has_letter(b'z'));
    }

    #[test]
    fn word_char_counts_duplicates() {
        let word = Word::new("sassy").unwrap();
        let counts = word.char_counts();
        assert_eq!(counts.get(&b's'), Some(&3));
        assert_eq!(counts.get(&b'a'), Some(&1));
        assert_eq!(counts.get(&b'y'), Some(&1));
        assert_eq!(counts.len(), 3);
    }

    #[test]
    fn word_length_bounds() {
        assert!(WordLength::new(3).is_err());
        assert_eq!(WordLength::new(4).unwrap(), WordLength::FOUR);
        assert_eq!(WordLength::new(6).unwrap(), WordLength::SIX);
        assert!(matches!(
            WordLength::new(7),
            Err(WordError::UnsupportedLength(7))
        ));
        assert_eq!(WordLength::default(), WordLength::FIVE);
    }

    #[test]
    fn word_length_parses_from_str() {
        assert_eq!("5".parse::<WordLength>().unwrap(), WordLength::FIVE);
        assert_eq!(" 4 ".parse::<WordLength>().unwrap(), WordLength::FOUR);
        assert!("five".parse::<WordLength>().is_err());
        assert!("9".parse::<WordLength>().is_err());
    }

    #[test]
    fn word_display() {
        let word = Word::new("crane").unwrap();
        assert_eq!(format!("{word}"), "crane");
        assert_eq!(format!("{}", WordLength::SIX), "6");
    }
}

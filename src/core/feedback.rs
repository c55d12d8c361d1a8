//! Guess scoring and feedback representation
//!
//! `Feedback` is the ordered list of classifications produced by scoring a
//! guess against the secret word, one entry per letter.

use super::{LetterClassification, Word, WordError};
use std::fmt;

/// Scored feedback for one guess
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback(Vec<LetterClassification>);

impl Feedback {
    /// Score `guess` against `secret`
    ///
    /// Implements Wordle's feedback rules, including duplicate letters: no
    /// letter is marked `Correct` or `WrongSpot` more often than it occurs
    /// in the secret.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches as `Correct` and remove them from the
    ///    pool of remaining secret letters. Letters missing from the secret
    ///    entirely are marked `Absent` right away.
    /// 2. Second pass: every unmarked letter takes the first matching letter
    ///    still in the pool (`WrongSpot`), or is `Absent` if none is left.
    ///
    /// Exact matches must all be reserved before the second pass runs, or an
    /// earlier misplaced copy could steal the letter a later green needs.
    ///
    /// # Errors
    /// Returns `WordError::LengthMismatch` if the words differ in length.
    ///
    /// # Examples
    /// ```
    /// use wordle_board::core::{Feedback, Word};
    ///
    /// let secret = Word::new("crane").unwrap();
    /// let guess = Word::new("trace").unwrap();
    /// let feedback = Feedback::evaluate(&secret, &guess).unwrap();
    ///
    /// // T(gray) R(green) A(green) C(yellow) E(green)
    /// assert_eq!(feedback, Feedback::from_str("-GGYG").unwrap());
    /// ```
    pub fn evaluate(secret: &Word, guess: &Word) -> Result<Self, WordError> {
        let secret_letters = secret.letters();
        let guess_letters = guess.letters();

        if secret_letters.len() != guess_letters.len() {
            return Err(WordError::LengthMismatch {
                expected: secret_letters.len(),
                found: guess_letters.len(),
            });
        }

        // `Pending` marks letters the first pass left undecided
        let mut result = vec![LetterClassification::Pending; guess_letters.len()];
        let mut remaining: Vec<Option<u8>> = secret_letters.iter().copied().map(Some).collect();

        // First pass: exact matches, plus letters the secret never contains
        for (i, (&letter, &target)) in guess_letters.iter().zip(secret_letters).enumerate() {
            if letter == target {
                result[i] = LetterClassification::Correct;
                remaining[i] = None;
            } else if !secret.has_letter(letter) {
                result[i] = LetterClassification::Absent;
            }
        }

        // Second pass: misplaced letters consume the leftmost unused occurrence
        for (i, &letter) in guess_letters.iter().enumerate() {
            if result[i].is_scored() {
                continue;
            }

            result[i] = match remaining.iter_mut().find(|slot| **slot == Some(letter)) {
                Some(slot) => {
                    *slot = None;
                    LetterClassification::WrongSpot
                }
                None => LetterClassification::Absent,
            };
        }

        Ok(Self(result))
    }

    /// Classifications in letter order
    #[inline]
    #[must_use]
    pub fn classifications(&self) -> &[LetterClassification] {
        &self.0
    }

    /// Check if this is a perfect match (all greens)
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        !self.0.is_empty()
            && self
                .0
                .iter()
                .all(|&c| c == LetterClassification::Correct)
    }

    /// Count the number of green feedback squares
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.count(LetterClassification::Correct)
    }

    /// Count the number of yellow feedback squares
    #[must_use]
    pub fn count_wrong_spot(&self) -> usize {
        self.count(LetterClassification::WrongSpot)
    }

    fn count(&self, class: LetterClassification) -> usize {
        self.0.iter().filter(|&&c| c == class).count()
    }

    /// Parse feedback from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// Returns `None` for an unsupported length or an unknown symbol.
    ///
    /// # Examples
    /// ```
    /// use wordle_board::core::Feedback;
    ///
    /// let f1 = Feedback::from_str("GY-G").unwrap();
    /// let f2 = Feedback::from_str("🟩🟨⬜🟩").unwrap();
    /// assert_eq!(f1, f2);
    /// ```
    #[must_use]
    #[allow(clippy::should_implement_trait)] // Option API for callers; FromStr is implemented below too
    pub fn from_str(s: &str) -> Option<Self> {
        let classes: Option<Vec<LetterClassification>> =
            s.chars().map(LetterClassification::from_symbol).collect();
        let classes = classes?;

        super::WordLength::new(classes.len()).ok()?;
        Some(Self(classes))
    }

    /// Convert feedback to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|c| c.to_emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for class in &self.0 {
            write!(f, "{}", class.symbol())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Feedback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str(s).ok_or_else(|| format!("Invalid feedback string: {s}"))
    }
}

//! Score command
//!
//! Scores a single guess against a given secret word.

use crate::core::{Feedback, Word, WordError};
use crate::wordlists::WordCatalog;

/// Result of scoring one guess
pub struct ScoreResult {
    pub secret: Word,
    pub guess: Word,
    pub feedback: Feedback,
    /// Whether the guess would be accepted in a game
    pub accepted: bool,
}

/// Score `guess` against `secret`
///
/// # Errors
///
/// Returns an error if either word is invalid or their lengths differ.
///
/// # Examples
/// ```
/// use wordle_board::commands::score_guess;
/// use wordle_board::wordlists::WordCatalog;
///
/// let catalog = WordCatalog::from_words(&["sassy"], &["asses"]);
/// let result = score_guess("sassy", "asses", &catalog).unwrap();
/// assert_eq!(result.feedback.to_string(), "YYG-Y");
/// assert!(result.accepted);
/// ```
pub fn score_guess(
    secret: &str,
    guess: &str,
    catalog: &WordCatalog,
) -> Result<ScoreResult, WordError> {
    let secret = Word::new(secret.trim())?;
    let guess = Word::new(guess.trim())?;
    let feedback = Feedback::evaluate(&secret, &guess)?;
    let accepted = catalog.is_accepted_guess(guess.text());

    Ok(ScoreResult {
        secret,
        guess,
        feedback,
        accepted,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> WordCatalog {
        WordCatalog::from_words(&["crane"], &["trace"])
    }

    #[test]
    fn scores_trace_against_crane() {
        let result = score_guess("crane", "TRACE", &catalog()).unwrap();
        assert_eq!(result.guess.text(), "trace");
        assert_eq!(result.feedback, Feedback::from_str("-GGYG").unwrap());
        assert!(result.accepted);
    }

    #[test]
    fn unknown_guess_is_still_scored() {
        let result = score_guess("crane", "nacre", &catalog()).unwrap();
        assert!(!result.accepted);
        assert_eq!(result.feedback.count_wrong_spot(), 4);
        assert_eq!(result.feedback.count_correct(), 1);
    }

    #[test]
    fn mismatched_lengths_fail() {
        assert!(matches!(
            score_guess("crane", "cake", &catalog()),
            Err(WordError::LengthMismatch {
                expected: 5,
                found: 4
            })
        ));
    }

    #[test]
    fn invalid_words_fail() {
        assert!(score_guess("cr4ne", "trace", &catalog()).is_err());
        assert!(score_guess("crane", "", &catalog()).is_err());
    }
}

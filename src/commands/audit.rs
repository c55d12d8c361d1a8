//! Catalog audit
//!
//! Checks the word catalog for loading problems and verifies the scoring
//! rules over every pair of solutions of each length.

use crate::core::{Feedback, LetterClassification, Word, WordLength};
use crate::wordlists::{LoadStats, WordCatalog};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Maximum number of violating pairs kept for the report
const MAX_EXAMPLES: usize = 10;

/// Audit results for one word length
#[derive(Debug, Clone)]
pub struct LengthAudit {
    pub length: WordLength,
    pub solutions: usize,
    pub pairs_checked: usize,
    /// Pairs that broke a scoring rule, as (secret, guess, reason)
    pub violations: Vec<(String, String, String)>,
    pub violation_count: usize,
    pub average_correct: f64,
    pub average_wrong_spot: f64,
}

/// Audit results for the whole catalog
#[derive(Debug, Clone)]
pub struct AuditResult {
    pub lengths: Vec<LengthAudit>,
    pub load_stats: LoadStats,
    pub accepted_count: usize,
    pub duration: Duration,
}

impl AuditResult {
    /// No scoring violations and no skipped solutions
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.lengths.iter().all(|l| l.violation_count == 0)
            && self.load_stats.skipped_solutions.is_empty()
    }
}

/// Check one scored pair against the scoring rules
///
/// Returns a description of the first broken rule, if any:
/// - a guess equal to the secret must be all `Correct`
/// - exact position matches must be `Correct`
/// - no letter gets more `Correct` + `WrongSpot` marks than the secret has
#[must_use]
pub fn check_feedback(secret: &Word, guess: &Word, feedback: &Feedback) -> Option<String> {
    let classes = feedback.classifications();

    if classes.len() != guess.letters().len() {
        return Some(format!(
            "{} classifications for {} letters",
            classes.len(),
            guess.letters().len()
        ));
    }

    if secret == guess && !feedback.is_perfect() {
        return Some("identical words not all correct".to_string());
    }

    for (i, (&g, &s)) in guess.letters().iter().zip(secret.letters()).enumerate() {
        if g == s && classes[i] != LetterClassification::Correct {
            return Some(format!("position {i} matches but is {:?}", classes[i]));
        }
    }

    let counts = secret.char_counts();
    for &letter in guess.letters() {
        let marked = guess
            .letters()
            .iter()
            .zip(classes)
            .filter(|&(&l, c)| {
                l == letter
                    && matches!(
                        c,
                        LetterClassification::Correct | LetterClassification::WrongSpot
                    )
            })
            .count();
        let available = usize::from(counts.get(&letter).copied().unwrap_or(0));
        if marked > available {
            return Some(format!(
                "'{}' marked {marked} times, secret has {available}",
                letter as char
            ));
        }
    }

    None
}

/// Audit the catalog for the given word lengths
///
/// Every solution is scored against every solution of the same length, in
/// parallel.
///
/// # Panics
///
/// Panics if the progress bar template is invalid.
pub fn run_audit(
    catalog: &WordCatalog,
    lengths: &[WordLength],
    show_progress: bool,
) -> AuditResult {
    let start = Instant::now();

    let total: usize = lengths.iter().map(|&l| catalog.solution_count(l)).sum();
    let pb = if show_progress {
        ProgressBar::new(total as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let lengths = lengths
        .iter()
        .map(|&length| {
            pb.set_message(format!("{length}-letter words"));
            audit_length(catalog, length, &pb)
        })
        .collect();

    pb.finish_with_message("Complete!");

    AuditResult {
        lengths,
        load_stats: catalog.load_stats().clone(),
        accepted_count: catalog.accepted_count(),
        duration: start.elapsed(),
    }
}

fn audit_length(catalog: &WordCatalog, length: WordLength, pb: &ProgressBar) -> LengthAudit {
    let solutions = catalog.solutions(length);
    let examples: Mutex<Vec<(String, String, String)>> = Mutex::new(Vec::new());

    // (pairs, violations, correct marks, wrong-spot marks) per secret
    let (pairs, violation_count, correct, wrong_spot) = solutions
        .par_iter()
        .map(|secret| {
            let mut tally = (0usize, 0usize, 0usize, 0usize);
            for guess in solutions {
                tally.0 += 1;
                let reason = match Feedback::evaluate(secret, guess) {
                    Ok(feedback) => {
                        tally.2 += feedback.count_correct();
                        tally.3 += feedback.count_wrong_spot();
                        check_feedback(secret, guess, &feedback)
                    }
                    Err(e) => Some(e.to_string()),
                };

                if let Some(reason) = reason {
                    tally.1 += 1;
                    if let Ok(mut examples) = examples.lock()
                        && examples.len() < MAX_EXAMPLES
                    {
                        examples.push((secret.to_string(), guess.to_string(), reason));
                    }
                }
            }
            pb.inc(1);
            tally
        })
        .reduce(|| (0, 0, 0, 0), |a, b| (a.0 + b.0, a.1 + b.1, a.2 + b.2, a.3 + b.3));

    if violation_count > 0 {
        log::warn!("{violation_count} scoring violations among {length}-letter words");
    }

    let average = |marks: usize| {
        if pairs == 0 {
            0.0
        } else {
            marks as f64 / pairs as f64
        }
    };

    LengthAudit {
        length,
        solutions: solutions.len(),
        pairs_checked: pairs,
        violations: examples.into_inner().unwrap_or_default(),
        violation_count,
        average_correct: average(correct),
        average_wrong_spot: average(wrong_spot),
    }
}

/// One-line summary for logs and the terminal
#[must_use]
pub fn summary_line(result: &AuditResult) -> String {
    let pairs: usize = result.lengths.iter().map(|l| l.pairs_checked).sum();
    let violations: usize = result.lengths.iter().map(|l| l.violation_count).sum();
    let status = if result.is_clean() {
        "clean".green().to_string()
    } else {
        "problems found".red().to_string()
    };
    format!("{pairs} pairs checked, {violations} violations: {status}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn correct_feedback_passes_check() {
        let secret = word("sassy");
        let guess = word("assss");
        let feedback = Feedback::evaluate(&secret, &guess).unwrap();
        assert_eq!(check_feedback(&secret, &guess, &feedback), None);
    }

    #[test]
    fn over_marked_letter_is_flagged() {
        // Every s yellow or green: more marks than sassy has
        let secret = word("sassy");
        let guess = word("assss");
        let bogus = Feedback::from_str("YYGGY").unwrap();
        let reason = check_feedback(&secret, &guess, &bogus).unwrap();
        assert!(reason.contains("'s'"), "{reason}");
    }

    #[test]
    fn missed_green_is_flagged() {
        let secret = word("crane");
        let guess = word("trace");
        let bogus = Feedback::from_str("-YGYG").unwrap();
        let reason = check_feedback(&secret, &guess, &bogus).unwrap();
        assert!(reason.contains("position 1"), "{reason}");
    }

    #[test]
    fn identical_words_must_be_perfect() {
        let secret = word("crane");
        let bogus = Feedback::from_str("GGGGY").unwrap();
        assert!(check_feedback(&secret, &secret, &bogus).is_some());
    }

    #[test]
    fn audit_small_catalog_is_clean() {
        let catalog = WordCatalog::from_words(
            &["cake", "lake", "sassy", "crane", "slate", "floor", "robot", "planet"],
            &["trace"],
        );
        let result = run_audit(&catalog, &WordLength::ALL, false);

        assert!(result.is_clean());
        assert_eq!(result.lengths.len(), 3);

        let five = &result.lengths[1];
        assert_eq!(five.length, WordLength::FIVE);
        assert_eq!(five.solutions, 5);
        assert_eq!(five.pairs_checked, 25);
        assert_eq!(five.violation_count, 0);
        // Each word scored against itself contributes five greens
        assert!(five.average_correct >= 1.0);
    }

    #[test]
    fn audit_reports_skipped_entries() {
        let catalog = WordCatalog::from_words(&["crane", "cr4ne"], &["trace"]);
        let result = run_audit(&catalog, &[WordLength::FIVE], false);

        assert!(!result.is_clean());
        assert_eq!(result.load_stats.skipped_solutions, vec!["cr4ne"]);
        assert_eq!(result.lengths[0].violation_count, 0);
    }

    #[test]
    fn audit_empty_length() {
        let catalog = WordCatalog::from_words(&["crane"], &["trace"]);
        let result = run_audit(&catalog, &[WordLength::SIX], false);

        let six = &result.lengths[0];
        assert_eq!(six.pairs_checked, 0);
        assert!(six.average_correct.abs() < f64::EPSILON);
    }
}

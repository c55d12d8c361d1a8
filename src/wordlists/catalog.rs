//! Secret word selection and guess validation

use super::loader::{load_accepted_guesses, load_from_file, load_solutions, normalize};
use super::{ACCEPTED, SOLUTIONS};
use crate::core::{Word, WordLength};
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::{FxHashMap, FxHashSet};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading or querying the catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No solution has the requested length
    #[error("no {length}-letter words in the solutions list")]
    CatalogExhausted { length: WordLength },

    #[error("failed to read word list {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// What happened to the raw lists while building a catalog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadStats {
    /// Solution entries that are not a valid 4-6 letter word
    pub skipped_solutions: Vec<String>,
    /// Solution entries listed more than once
    pub duplicate_solutions: usize,
    /// Solutions absent from the accepted list (accepted anyway)
    pub unlisted_solutions: Vec<String>,
}

/// The dictionary: candidate secret words and accepted guesses
///
/// Solutions are partitioned by length when the catalog is built, so picking
/// a secret never resamples and a missing length is reported immediately.
/// The accepted set always includes every solution.
#[derive(Debug, Clone, Default)]
pub struct WordCatalog {
    solutions: FxHashMap<WordLength, Vec<Word>>,
    accepted: FxHashSet<String>,
    stats: LoadStats,
}

impl WordCatalog {
    /// Build a catalog from already-split entries
    ///
    /// Entries are normalized; invalid solutions are skipped.
    #[must_use]
    pub fn from_lists(solutions: Vec<String>, accepted: Vec<String>) -> Self {
        let mut by_length: FxHashMap<WordLength, Vec<Word>> = FxHashMap::default();
        let mut seen: FxHashSet<String> = FxHashSet::default();
        let mut stats = LoadStats::default();

        let mut accepted: FxHashSet<String> = accepted
            .iter()
            .map(|w| normalize(w))
            .filter(|w| !w.is_empty())
            .collect();

        for raw in solutions {
            let entry = normalize(&raw);
            if entry.is_empty() {
                continue;
            }

            let Ok(word) = Word::new(entry.as_str()) else {
                log::debug!("skipping solution entry {entry:?}");
                stats.skipped_solutions.push(entry);
                continue;
            };

            if !seen.insert(entry.clone()) {
                stats.duplicate_solutions += 1;
                continue;
            }

            if !accepted.contains(&entry) {
                stats.unlisted_solutions.push(entry.clone());
                accepted.insert(entry);
            }

            by_length.entry(word.word_length()).or_default().push(word);
        }

        let catalog = Self {
            solutions: by_length,
            accepted,
            stats,
        };

        log::info!(
            "word catalog ready: {} solutions ({} 4-letter, {} 5-letter, {} 6-letter), {} accepted guesses",
            seen.len(),
            catalog.solution_count(WordLength::FOUR),
            catalog.solution_count(WordLength::FIVE),
            catalog.solution_count(WordLength::SIX),
            catalog.accepted_count()
        );

        catalog
    }

    /// Build a catalog from raw newline-delimited text
    ///
    /// # Examples
    /// ```
    /// use wordle_board::core::WordLength;
    /// use wordle_board::wordlists::WordCatalog;
    ///
    /// let catalog = WordCatalog::from_text("Crane\nslate\n", "trace\n");
    /// assert_eq!(catalog.solution_count(WordLength::FIVE), 2);
    /// assert!(catalog.is_accepted_guess("TRACE "));
    /// assert!(catalog.is_accepted_guess("crane"));
    /// ```
    #[must_use]
    pub fn from_text(solutions_raw: &str, accepted_raw: &str) -> Self {
        Self::from_lists(
            load_solutions(solutions_raw),
            load_accepted_guesses(accepted_raw),
        )
    }

    /// Build a catalog from string slices
    #[must_use]
    pub fn from_words<S: AsRef<str>, T: AsRef<str>>(solutions: &[S], accepted: &[T]) -> Self {
        Self::from_lists(
            solutions.iter().map(|s| s.as_ref().to_string()).collect(),
            accepted.iter().map(|s| s.as_ref().to_string()).collect(),
        )
    }

    /// The word lists compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_words(SOLUTIONS, ACCEPTED)
    }

    /// Load both lists from files
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Io` if either file cannot be read.
    pub fn from_files(
        solutions_path: impl AsRef<Path>,
        accepted_path: impl AsRef<Path>,
    ) -> Result<Self, CatalogError> {
        let solutions = load_from_file(solutions_path)?;
        let accepted = load_from_file(accepted_path)?;
        Ok(Self::from_lists(solutions, accepted))
    }

    /// Pick a random secret word of the given length
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::CatalogExhausted` if no solution has that length.
    pub fn pick_secret_word<R: Rng + ?Sized>(
        &self,
        length: WordLength,
        rng: &mut R,
    ) -> Result<Word, CatalogError> {
        self.solutions(length)
            .choose(rng)
            .cloned()
            .ok_or(CatalogError::CatalogExhausted { length })
    }

    /// Case- and whitespace-insensitive check against the accepted list
    #[must_use]
    pub fn is_accepted_guess(&self, word: &str) -> bool {
        self.accepted.contains(&normalize(word))
    }

    /// All solutions of the given length
    #[must_use]
    pub fn solutions(&self, length: WordLength) -> &[Word] {
        self.solutions.get(&length).map_or(&[], Vec::as_slice)
    }

    #[must_use]
    pub fn solution_count(&self, length: WordLength) -> usize {
        self.solutions(length).len()
    }

    #[must_use]
    pub fn accepted_count(&self) -> usize {
        self.accepted.len()
    }

    /// Report of entries skipped or patched while loading
    #[must_use]
    pub const fn load_stats(&self) -> &LoadStats {
        &self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn sample_catalog() -> WordCatalog {
        WordCatalog::from_words(
            &["cake", "Crane ", "slate", "planet", "sassy"],
            &["lake", "trace", "crane", "plenty"],
        )
    }

    #[test]
    fn partitions_solutions_by_length() {
        let catalog = sample_catalog();
        assert_eq!(catalog.solution_count(WordLength::FOUR), 1);
        assert_eq!(catalog.solution_count(WordLength::FIVE), 3);
        assert_eq!(catalog.solution_count(WordLength::SIX), 1);
    }

    #[test]
    fn picked_word_has_requested_length() {
        let catalog = sample_catalog();
        let mut rng = StdRng::seed_from_u64(7);

        for length in WordLength::ALL {
            for _ in 0..20 {
                let word = catalog.pick_secret_word(length, &mut rng).unwrap();
                assert_eq!(word.word_length(), length);
                assert!(catalog.solutions(length).contains(&word));
            }
        }
    }

    #[test]
    fn picking_is_reproducible_with_seed() {
        let catalog = sample_catalog();
        let first = catalog
            .pick_secret_word(WordLength::FIVE, &mut StdRng::seed_from_u64(42))
            .unwrap();
        let second = catalog
            .pick_secret_word(WordLength::FIVE, &mut StdRng::seed_from_u64(42))
            .unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn missing_length_is_exhausted() {
        let catalog = WordCatalog::from_words(&["crane", "slate"], &["trace"]);
        let mut rng = StdRng::seed_from_u64(1);

        let err = catalog
            .pick_secret_word(WordLength::SIX, &mut rng)
            .unwrap_err();
        assert!(matches!(
            err,
            CatalogError::CatalogExhausted {
                length: WordLength::SIX
            }
        ));
    }

    #[test]
    fn empty_catalog_is_exhausted_for_every_length() {
        let catalog = WordCatalog::default();
        let mut rng = StdRng::seed_from_u64(1);
        for length in WordLength::ALL {
            assert!(catalog.pick_secret_word(length, &mut rng).is_err());
        }
    }

    #[test]
    fn accepted_guess_is_normalized() {
        let catalog = sample_catalog();
        assert!(catalog.is_accepted_guess("trace"));
        assert!(catalog.is_accepted_guess("  TRACE\n"));
        assert!(catalog.is_accepted_guess("Plenty"));
        assert!(!catalog.is_accepted_guess("zzzzz"));
        assert!(!catalog.is_accepted_guess(""));
    }

    #[test]
    fn solutions_are_always_accepted() {
        let catalog = sample_catalog();
        for word in ["cake", "crane", "slate", "planet", "sassy"] {
            assert!(catalog.is_accepted_guess(word), "{word} should be accepted");
        }
    }

    #[test]
    fn load_stats_record_problems() {
        let catalog = WordCatalog::from_words(
            &["crane", "crane", "c4ke", "toolongword", "slate", ""],
            &["crane"],
        );
        let stats = catalog.load_stats();

        assert_eq!(stats.duplicate_solutions, 1);
        assert_eq!(stats.skipped_solutions, vec!["c4ke", "toolongword"]);
        assert_eq!(stats.unlisted_solutions, vec!["slate"]);
        assert_eq!(catalog.solution_count(WordLength::FIVE), 2);
    }

    #[test]
    fn from_text_matches_from_words() {
        let text = WordCatalog::from_text("cake\ncrane\n", "trace\n");
        let words = WordCatalog::from_words(&["cake", "crane"], &["trace"]);

        for length in WordLength::ALL {
            assert_eq!(text.solutions(length), words.solutions(length));
        }
        assert_eq!(text.accepted_count(), words.accepted_count());
    }

    #[test]
    fn embedded_catalog_covers_all_lengths() {
        let catalog = WordCatalog::embedded();
        for length in WordLength::ALL {
            assert!(catalog.solution_count(length) > 0);
        }
        assert!(catalog.load_stats().skipped_solutions.is_empty());
    }
}

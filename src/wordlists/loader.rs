//! Word list loading utilities
//!
//! Parses newline-delimited word lists from text or files.
//! Entries may carry surrounding whitespace or mixed case; everything returned
//! here is trimmed and lowercased.

use super::CatalogError;
use std::fs;
use std::path::Path;

/// Normalize a raw entry or guess for comparison
///
/// # Examples
/// ```
/// use wordle_board::wordlists::loader::normalize;
///
/// assert_eq!(normalize("  Crane\r"), "crane");
/// ```
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Split a raw word list into normalized entries, skipping blank lines
#[must_use]
pub fn parse_word_list(raw: &str) -> Vec<String> {
    raw.lines()
        .map(normalize)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Parse the list of candidate secret words
#[must_use]
pub fn load_solutions(raw: &str) -> Vec<String> {
    parse_word_list(raw)
}

/// Parse the list of accepted guess words
#[must_use]
pub fn load_accepted_guesses(raw: &str) -> Vec<String> {
    parse_word_list(raw)
}

/// Read and parse a word list file
///
/// # Errors
///
/// Returns `CatalogError::Io` if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use wordle_board::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/solutions.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, CatalogError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let words = parse_word_list(&content);
    log::debug!("read {} entries from {}", words.len(), path.display());
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_trims_and_lowercases() {
        let raw = "Crane\r\n  slate \nIRATE\n";
        assert_eq!(parse_word_list(raw), vec!["crane", "slate", "irate"]);
    }

    #[test]
    fn parse_skips_blank_lines() {
        let raw = "\n\ncake\n   \n\nplanet\n";
        assert_eq!(parse_word_list(raw), vec!["cake", "planet"]);
    }

    #[test]
    fn solutions_and_accepted_share_parsing() {
        let raw = "Able\nBAKER\n";
        assert_eq!(load_solutions(raw), load_accepted_guesses(raw));
    }

    #[test]
    fn load_from_missing_file_is_io_error() {
        let result = load_from_file("definitely/not/a/real/wordlist.txt");
        assert!(matches!(result, Err(CatalogError::Io { .. })));
    }

    #[test]
    fn load_from_file_reads_entries() {
        let path = std::env::temp_dir()
            .join(format!("wordle_board_loader_{}.txt", std::process::id()));
        fs::write(&path, "Crane\n\n slate\n").unwrap();

        let words = load_from_file(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(words, vec!["crane", "slate"]);
    }
}

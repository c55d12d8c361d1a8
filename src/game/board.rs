//! Board state machine
//!
//! The board owns the grid of rows, the typing cursor and the game status.
//! Letters only ever go into the active row; submitting a complete row scores
//! it against the secret word and either advances to the next row or ends
//! the game.

use super::{GameConfig, GameError, Row};
use crate::core::{Feedback, LetterClassification, Word, WordLength};
use crate::wordlists::WordCatalog;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rustc_hash::FxHashMap;

/// Overall state of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    /// `Won` and `Lost` are terminal
    #[inline]
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Result of an accepted submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    /// Index of the row that was scored
    pub row: usize,
    pub guess: Word,
    pub feedback: Feedback,
    /// Status after the submission
    pub status: GameStatus,
}

/// A game in progress
///
/// Borrows the catalog for the lifetime of the session; everything else is
/// owned.
#[derive(Debug)]
pub struct Board<'a> {
    catalog: &'a WordCatalog,
    config: GameConfig,
    rng: StdRng,
    rows: Vec<Row>,
    secret: Word,
    active_row: usize,
    active_column: usize,
    status: GameStatus,
}

impl<'a> Board<'a> {
    /// Start a game with a random secret word from the catalog
    ///
    /// # Errors
    ///
    /// Returns `GameError::Config` if the attempt count is out of range, or
    /// `GameError::CatalogExhausted` if the catalog has no solution of the
    /// configured length.
    ///
    /// # Examples
    /// ```
    /// use wordle_board::game::{Board, GameConfig, GameStatus};
    /// use wordle_board::wordlists::WordCatalog;
    ///
    /// let catalog = WordCatalog::from_words(&["crane"], &["trace"]);
    /// let mut board = Board::new(&catalog, GameConfig::default()).unwrap();
    ///
    /// for ch in "crane".chars() {
    ///     board.append_letter(ch);
    /// }
    /// let outcome = board.submit_row().unwrap();
    /// assert!(outcome.feedback.is_perfect());
    /// assert_eq!(board.status(), GameStatus::Won);
    /// ```
    pub fn new(catalog: &'a WordCatalog, config: GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        let mut rng = config
            .seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        let secret = catalog.pick_secret_word(config.word_length, &mut rng)?;
        Ok(Self::assemble(catalog, config, rng, secret))
    }

    /// Start a game with a known secret word
    ///
    /// # Errors
    ///
    /// Returns `GameError::Config` if the attempt count is out of range, or
    /// `GameError::Word` if `secret` is not a valid word of the configured
    /// length.
    pub fn with_secret(
        catalog: &'a WordCatalog,
        config: GameConfig,
        secret: &str,
    ) -> Result<Self, GameError> {
        config.validate()?;
        let secret = Word::new(secret.trim())?;
        if secret.word_length() != config.word_length {
            return Err(crate::core::WordError::LengthMismatch {
                expected: config.word_length.get(),
                found: secret.word_length().get(),
            }
            .into());
        }

        let rng = config
            .seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        Ok(Self::assemble(catalog, config, rng, secret))
    }

    fn assemble(catalog: &'a WordCatalog, config: GameConfig, rng: StdRng, secret: Word) -> Self {
        log::debug!(
            "new {}-letter game, {} attempts",
            config.word_length,
            config.max_attempts
        );
        log::trace!("secret word: {secret}");

        let mut board = Self {
            catalog,
            config,
            rng,
            rows: Vec::new(),
            secret,
            active_row: 0,
            active_column: 0,
            status: GameStatus::InProgress,
        };
        board.clear_board();
        board
    }

    /// Start over with a fresh secret, possibly with a new configuration
    ///
    /// On error the current game is left untouched.
    ///
    /// # Errors
    ///
    /// Returns `GameError::Config` if the attempt count is out of range, or
    /// `GameError::CatalogExhausted` if the catalog has no solution of the
    /// requested length.
    pub fn new_game(&mut self, config: GameConfig) -> Result<(), GameError> {
        config.validate()?;

        let secret = match config.seed {
            Some(seed) if config.seed != self.config.seed => {
                let mut rng = StdRng::seed_from_u64(seed);
                let secret = self.catalog.pick_secret_word(config.word_length, &mut rng)?;
                self.rng = rng;
                secret
            }
            _ => self
                .catalog
                .pick_secret_word(config.word_length, &mut self.rng)?,
        };
        log::debug!(
            "new {}-letter game, {} attempts",
            config.word_length,
            config.max_attempts
        );
        log::trace!("secret word: {secret}");

        self.config = config;
        self.secret = secret;
        self.clear_board();
        Ok(())
    }

    /// Start over with a fresh secret and the same configuration
    ///
    /// # Errors
    ///
    /// Returns `GameError::CatalogExhausted` if the catalog has no solution
    /// of the configured length.
    pub fn reset_for_retry(&mut self) -> Result<(), GameError> {
        self.new_game(self.config)
    }

    /// Clear the board but keep the current secret word
    pub fn replay(&mut self) {
        log::debug!("replaying the same secret word");
        self.clear_board();
    }

    fn clear_board(&mut self) {
        let word_length = self.config.word_length.get();
        self.rows = (0..self.config.max_attempts)
            .map(|_| Row::new(word_length))
            .collect();
        self.active_row = 0;
        self.active_column = 0;
        self.status = GameStatus::InProgress;
    }

    /// Type a letter into the next free tile of the active row
    ///
    /// Returns `false` (and changes nothing) if the row is full, the game is
    /// over, or `letter` is not an ASCII letter.
    pub fn append_letter(&mut self, letter: char) -> bool {
        if self.status.is_over()
            || self.active_column >= self.word_length().get()
            || !letter.is_ascii_alphabetic()
        {
            return false;
        }

        let column = self.active_column;
        self.rows[self.active_row].set_letter(column, letter.to_ascii_lowercase());
        self.active_column += 1;
        true
    }

    /// Remove the last letter of the active row
    ///
    /// Returns `false` if the row is empty or the game is over.
    pub fn delete_letter(&mut self) -> bool {
        if self.status.is_over() || self.active_column == 0 {
            return false;
        }

        self.active_column -= 1;
        let column = self.active_column;
        self.rows[self.active_row].clear_letter(column);
        true
    }

    /// Score the active row
    ///
    /// # Errors
    ///
    /// - `GameError::GameOver` if the game has already ended
    /// - `GameError::IncompleteRow` if the row is not full; nothing changes
    /// - `GameError::InvalidWord` if the row is not an accepted guess; the
    ///   letters stay in place and the row remains editable
    pub fn submit_row(&mut self) -> Result<SubmitOutcome, GameError> {
        if self.status.is_over() {
            return Err(GameError::GameOver);
        }

        let expected = self.word_length().get();
        if self.active_column != expected {
            return Err(GameError::IncompleteRow {
                filled: self.active_column,
                expected,
            });
        }

        let text = self.rows[self.active_row].word();
        if !self.catalog.is_accepted_guess(&text) {
            log::debug!("rejected guess {text:?}: not in word list");
            return Err(GameError::InvalidWord(text));
        }

        let guess = Word::new(text)?;
        let feedback = Feedback::evaluate(&self.secret, &guess)?;
        let row = self.active_row;
        self.rows[row].apply(&feedback);

        if feedback.is_perfect() {
            self.status = GameStatus::Won;
        } else if row + 1 >= self.rows.len() {
            self.status = GameStatus::Lost;
        } else {
            self.active_row += 1;
            self.active_column = 0;
        }

        log::info!(
            "guess {} of {}: {guess} {} -> {:?}",
            row + 1,
            self.rows.len(),
            feedback,
            self.status
        );

        Ok(SubmitOutcome {
            row,
            guess,
            feedback,
            status: self.status,
        })
    }

    /// Best classification seen for each guessed letter
    ///
    /// Merges every submitted row, keeping `Correct` over `WrongSpot` over
    /// `Absent`.
    #[must_use]
    pub fn letter_hints(&self) -> FxHashMap<char, LetterClassification> {
        let mut hints: FxHashMap<char, LetterClassification> = FxHashMap::default();
        for row in self.rows.iter().filter(|r| r.is_submitted()) {
            for tile in row.tiles() {
                if let Some(letter) = tile.letter() {
                    let class = tile.classification();
                    hints
                        .entry(letter)
                        .and_modify(|best| {
                            if class.rank() > best.rank() {
                                *best = class;
                            }
                        })
                        .or_insert(class);
                }
            }
        }
        hints
    }

    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    #[must_use]
    pub fn active_row(&self) -> usize {
        self.active_row
    }

    #[must_use]
    pub fn active_column(&self) -> usize {
        self.active_column
    }

    /// Whether the active row has a letter in every tile
    #[must_use]
    pub fn is_active_row_complete(&self) -> bool {
        self.active_column == self.word_length().get()
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub const fn word_length(&self) -> WordLength {
        self.config.word_length
    }

    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.config.max_attempts
    }

    /// Number of rows scored so far
    #[must_use]
    pub fn attempts_used(&self) -> usize {
        self.rows.iter().filter(|r| r.is_submitted()).count()
    }

    /// The secret word; callers should only reveal it once the game is over
    #[must_use]
    pub const fn secret_word(&self) -> &Word {
        &self.secret
    }

    #[must_use]
    pub const fn catalog(&self) -> &'a WordCatalog {
        self.catalog
    }
}

//! Game session configuration

use crate::core::{WordError, WordLength};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error(transparent)]
    WordLength(#[from] WordError),

    #[error("attempts must be between 1 and {max}, got {0}", max = GameConfig::MAX_ATTEMPTS)]
    InvalidAttempts(usize),
}

/// Settings fixed for the duration of one game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub word_length: WordLength,
    pub max_attempts: usize,
    /// Seed for secret word selection; `None` draws from the OS
    pub seed: Option<u64>,
}

impl GameConfig {
    pub const DEFAULT_ATTEMPTS: usize = 6;
    pub const MAX_ATTEMPTS: usize = 10;

    /// Validate a word length and attempt count
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the word length is not 4, 5 or 6, or the
    /// attempt count is outside `1..=MAX_ATTEMPTS`.
    ///
    /// # Examples
    /// ```
    /// use wordle_board::game::GameConfig;
    ///
    /// let config = GameConfig::new(4, 6).unwrap();
    /// assert_eq!(config.word_length.get(), 4);
    /// assert!(GameConfig::new(5, 0).is_err());
    /// ```
    pub fn new(word_length: usize, max_attempts: usize) -> Result<Self, ConfigError> {
        let config = Self {
            word_length: WordLength::new(word_length)?,
            max_attempts,
            seed: None,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check a config that may have been assembled field by field
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidAttempts` if the attempt count is outside
    /// `1..=MAX_ATTEMPTS`.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.max_attempts == 0 || self.max_attempts > Self::MAX_ATTEMPTS {
            return Err(ConfigError::InvalidAttempts(self.max_attempts));
        }
        Ok(())
    }

    #[must_use]
    pub const fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub const fn with_word_length(mut self, word_length: WordLength) -> Self {
        self.word_length = word_length;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            word_length: WordLength::default(),
            max_attempts: Self::DEFAULT_ATTEMPTS,
            seed: None,
        }
    }
}

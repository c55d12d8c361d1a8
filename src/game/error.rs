//! Errors reported by board operations

use super::ConfigError;
use crate::core::{WordError, WordLength};
use crate::wordlists::CatalogError;
use thiserror::Error;

/// Failure of a board operation
///
/// `IncompleteRow` and `InvalidWord` are recoverable: the board is left
/// exactly as it was and the player keeps typing.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("not enough letters ({filled} of {expected})")]
    IncompleteRow { filled: usize, expected: usize },

    #[error("not in word list: {0}")]
    InvalidWord(String),

    /// No secret word of the configured length exists
    #[error("no {length}-letter words available to start a game")]
    CatalogExhausted { length: WordLength },

    #[error("the game is over")]
    GameOver,

    #[error(transparent)]
    Word(#[from] WordError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Catalog(CatalogError),
}

impl From<CatalogError> for GameError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::CatalogExhausted { length } => Self::CatalogExhausted { length },
            other => Self::Catalog(other),
        }
    }
}

impl GameError {
    /// Whether the player can keep editing the current row
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::IncompleteRow { .. } | Self::InvalidWord(_))
    }
}

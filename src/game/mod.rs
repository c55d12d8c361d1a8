//! Game state
//!
//! The board state machine, its configuration and errors, and the router
//! that turns input events into board operations.

mod board;
mod config;
mod error;
mod input;
mod tile;

pub use board::{Board, GameStatus, SubmitOutcome};
pub use config::{ConfigError, GameConfig};
pub use error::GameError;
pub use input::{InputEvent, InputRouter, RouteOutcome};
pub use tile::{Row, Tile};

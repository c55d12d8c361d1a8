//! Word lists and the word catalog
//!
//! Provides the embedded word lists compiled into the binary, parsing of
//! custom list files, and `WordCatalog`, which picks secret words and checks
//! guesses.

mod catalog;
mod embedded;
pub mod loader;

pub use catalog::{CatalogError, LoadStats, WordCatalog};
pub use embedded::{ACCEPTED, ACCEPTED_COUNT, SOLUTIONS, SOLUTIONS_COUNT};

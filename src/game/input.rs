//! Input routing
//!
//! Translates discrete input events into board operations, dispatching only
//! what is valid for the current cursor and game status.

use super::{Board, GameError, SubmitOutcome};
use crate::core::WordError;

/// A single input event from any front end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Letter(char),
    Backspace,
    Submit,
}

/// What routing an event did to the board
#[derive(Debug)]
pub enum RouteOutcome {
    /// Event was not dispatched (unsupported key, full/empty row, game over)
    Ignored,
    LetterAdded,
    LetterRemoved,
    Submitted(SubmitOutcome),
    /// Submission was dispatched and refused by the board
    Rejected(GameError),
}

/// Routes input events to a board and tracks the "not in word list" notice
#[derive(Debug, Default)]
pub struct InputRouter {
    invalid_notice: bool,
}

impl InputRouter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Dispatch one event
    ///
    /// # Examples
    /// ```
    /// use wordle_board::game::{Board, GameConfig, InputEvent, InputRouter, RouteOutcome};
    /// use wordle_board::wordlists::WordCatalog;
    ///
    /// let catalog = WordCatalog::from_words(&["crane"], &["trace"]);
    /// let mut board = Board::new(&catalog, GameConfig::default()).unwrap();
    /// let mut router = InputRouter::new();
    ///
    /// assert!(matches!(router.route(&mut board, InputEvent::Letter('7')), RouteOutcome::Ignored));
    /// assert!(matches!(router.route(&mut board, InputEvent::Letter('c')), RouteOutcome::LetterAdded));
    /// ```
    pub fn route(&mut self, board: &mut Board<'_>, event: InputEvent) -> RouteOutcome {
        if board.status().is_over() {
            return RouteOutcome::Ignored;
        }

        match event {
            InputEvent::Letter(ch) => {
                if ch.is_ascii_alphabetic() && board.append_letter(ch) {
                    RouteOutcome::LetterAdded
                } else {
                    RouteOutcome::Ignored
                }
            }
            InputEvent::Backspace => {
                if board.delete_letter() {
                    self.invalid_notice = false;
                    RouteOutcome::LetterRemoved
                } else {
                    RouteOutcome::Ignored
                }
            }
            InputEvent::Submit => {
                if !board.is_active_row_complete() {
                    return RouteOutcome::Ignored;
                }

                match board.submit_row() {
                    Ok(outcome) => {
                        self.invalid_notice = false;
                        RouteOutcome::Submitted(outcome)
                    }
                    Err(err) => {
                        if matches!(err, GameError::InvalidWord(_)) {
                            self.invalid_notice = true;
                        }
                        RouteOutcome::Rejected(err)
                    }
                }
            }
        }
    }

    /// Route a whole typed line: letters, then a submit
    ///
    /// Clears whatever is already typed in the active row first. Returns the
    /// outcome of the submit, or a rejection if the line has the wrong number
    /// of letters.
    pub fn route_line(&mut self, board: &mut Board<'_>, line: &str) -> RouteOutcome {
        let expected = board.word_length().get();
        let letters = line.trim().chars().count();
        if letters > expected {
            return RouteOutcome::Rejected(GameError::Word(WordError::LengthMismatch {
                expected,
                found: letters,
            }));
        }

        while matches!(
            self.route(board, InputEvent::Backspace),
            RouteOutcome::LetterRemoved
        ) {}

        for ch in line.trim().chars() {
            self.route(board, InputEvent::Letter(ch));
        }

        if board.is_active_row_complete() {
            self.route(board, InputEvent::Submit)
        } else {
            RouteOutcome::Rejected(GameError::IncompleteRow {
                filled: board.active_column(),
                expected,
            })
        }
    }

    /// Whether the "not in word list" notice should be shown
    #[must_use]
    pub const fn invalid_notice(&self) -> bool {
        self.invalid_notice
    }

    /// Forget transient state for a new game
    pub fn reset(&mut self) {
        self.invalid_notice = false;
    }
}

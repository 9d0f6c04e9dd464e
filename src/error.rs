//! Error types for the tic-tac-toe engine

use std::fmt;

use thiserror::Error;

use crate::tictactoe::Mark;

/// Main error type for the tic-tac-toe engine
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid board format '{input}': {reason}")]
    InvalidFormat { input: String, reason: String },

    #[error(
        "invalid game state: {violation} (X={x_count}, O={o_count}, {starting_mark} started)"
    )]
    InvalidState {
        violation: StateViolation,
        x_count: usize,
        o_count: usize,
        starting_mark: Mark,
    },

    #[error("cell {index} is not available")]
    CellOccupied { index: usize },

    #[error("score is undefined until the game is over")]
    ScoreUndefined,

    #[error("it is {expected}'s turn, not {player}'s")]
    WrongTurn { player: Mark, expected: Mark },

    #[error("players must use different marks, both use {mark}")]
    DuplicateMark { mark: Mark },

    #[error("player {mark} has no move to make")]
    NoMoveAvailable { mark: Mark },

    #[error("invalid coordinates '{input}' (expected a column A-C and a row 1-3, e.g. A1 or 1A)")]
    InvalidCoordinates { input: String },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Whether the driving loop may report this error and retry the same turn.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::CellOccupied { .. } | Error::InvalidCoordinates { .. }
        )
    }

    pub(crate) fn io(operation: impl Into<String>, source: std::io::Error) -> Self {
        Error::Io {
            operation: operation.into(),
            source,
        }
    }
}

/// Which game-state rule a constructed state breaks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateViolation {
    /// The mark counts differ by more than one.
    MarkImbalance,
    /// The mark with more pieces on the board did not start.
    WrongStartingMark,
    /// The winner could not have completed their line on their own turn.
    ImplausibleWinner(Mark),
}

impl fmt::Display for StateViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateViolation::MarkImbalance => write!(f, "wrong number of Xs and Os"),
            StateViolation::WrongStartingMark => write!(f, "wrong starting mark"),
            StateViolation::ImplausibleWinner(mark) => write!(f, "wrong number of {mark}s"),
        }
    }
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::io("IO operation", source)
    }
}

//! Error types for board construction and instance parsing.
//!
//! The search strategies themselves never fail: running out of frontier is a
//! normal [`Outcome`](crate::solver::Outcome), not an error.

use thiserror::Error;

/// A tile sequence that does not describe a 3x3 board.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidStateError {
    #[error("expected 9 tiles, found {0}")]
    WrongLength(usize),
    #[error("tile value {0} is outside 0..=8")]
    OutOfRange(u8),
    #[error("tile value {0} appears more than once")]
    DuplicateTile(u8),
}

/// Failure to read puzzle instances from text input.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("line {line}: '{token}' is not a tile value")]
    BadNumber { line: usize, token: String },
    #[error("line {line}: {source}")]
    InvalidRow {
        line: usize,
        #[source]
        source: InvalidStateError,
    },
}

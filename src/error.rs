//! Error types for the tictactoe crate

use thiserror::Error;

/// Main error type for the tictactoe crate
///
/// Only malformed input raises an error. Placing a mark on an occupied
/// cell is defined no-op behavior, not a fault (see [`crate::Board::place_mark`]).
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("cell index {index} is out of bounds (must be 0-8)")]
    InvalidIndex { index: usize },

    #[error("board text has {got} cells, expected {expected} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("invalid mark counts: cross={cross}, circle={circle} (must be equal or cross ahead by 1)")]
    InvalidMarkCounts { cross: usize, circle: usize },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

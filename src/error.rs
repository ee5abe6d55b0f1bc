//! Errors raised while building a [MazeGrid](crate::MazeGrid).

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("maze has no rows or no columns")]
    Empty,

    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown marker {found:?} at row {row}, column {col}")]
    UnknownMarker { row: usize, col: usize, found: char },

    #[error("start position 'S' not found in maze")]
    MissingStart,

    #[error("goal position 'G' not found in maze")]
    MissingGoal,
}

pub type Result<T> = std::result::Result<T, GridError>;

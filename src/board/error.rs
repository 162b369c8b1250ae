//! Error types for chess board operations.

use std::fmt;

use super::{Color, Square};

/// Why a move was rejected.
///
/// [`Board::attempt_move`](super::Board::attempt_move) folds every variant
/// into `false`; [`Board::try_move`](super::Board::try_move) hands it back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// No piece stands on the source square
    EmptySource { from: Square },
    /// The piece cannot reach the target: wrong shape, blocked path,
    /// own piece on the target, or castling conditions not met
    IllegalPattern { from: Square, to: Square },
    /// The move would leave the mover's own king in check
    ExposesKing { from: Square, to: Square },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::EmptySource { from } => {
                write!(f, "No piece on {from}")
            }
            MoveError::IllegalPattern { from, to } => {
                write!(f, "Piece on {from} cannot move to {to}")
            }
            MoveError::ExposesKing { from, to } => {
                write!(f, "Moving {from} to {to} leaves the king in check")
            }
        }
    }
}

impl std::error::Error for MoveError {}

/// Error type for square construction failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Row out of bounds (must be 0-7)
    RowOutOfBounds { row: usize },
    /// Col out of bounds (must be 0-7)
    ColOutOfBounds { col: usize },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RowOutOfBounds { row } => {
                write!(f, "Row {row} out of bounds (must be 0-7)")
            }
            SquareError::ColOutOfBounds { col } => {
                write!(f, "Col {col} out of bounds (must be 0-7)")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for invalid board setups
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// More than one king of the same color was placed
    DuplicateKing { color: Color },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::DuplicateKing { color } => {
                write!(f, "{color} has more than one king")
            }
        }
    }
}

impl std::error::Error for BoardError {}

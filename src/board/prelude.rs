//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types.
//!
//! # Example
//! ```
//! use chess_rules::board::prelude::*;
//!
//! let board = Board::new();
//! assert_eq!(board.king_square(Color::White), Some(Square(7, 4)));
//! ```

pub use super::{
    Board, BoardBuilder, BoardError, Color, MoveError, MoveOutcome, Piece, PieceKind, Square,
    SquareError,
};

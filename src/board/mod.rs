//! Chess board representation and rules.
//!
//! The board is an 8x8 [`Grid`] of plain [`Piece`] values plus a cached
//! location for each king. Every legality probe runs on a value copy of the
//! board, so a rejected move never touches the authoritative position.
//!
//! Supports castling and promotion. There is no en passant, no draw by
//! repetition or fifty moves, and no notion of whose turn it is: callers
//! pass the color they are asking about.
//!
//! # Example
//! ```
//! use chess_rules::board::{Board, Color, Square};
//!
//! let mut board = Board::new();
//! assert!(board.attempt_move(Square(6, 4), Square(4, 4), None));
//! assert!(!board.is_check(Color::Black));
//! ```

mod builder;
mod display;
mod error;
mod grid;
mod make_move;
mod movegen;
pub mod prelude;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{BoardError, MoveError, SquareError};
pub use grid::Grid;
pub use make_move::MoveOutcome;
pub use state::{Board, BOARD_SIZE};
pub use types::{Color, Piece, PieceKind, Square, PROMOTION_KINDS};

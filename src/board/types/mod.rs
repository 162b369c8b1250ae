//! Core chess types.
//!
//! - `Color`, `PieceKind` and `Piece` - piece identity and placement state
//! - `Square` - a (row, col) board coordinate

mod piece;
mod square;

pub use piece::{Color, Piece, PieceKind, PROMOTION_KINDS};
pub use square::Square;

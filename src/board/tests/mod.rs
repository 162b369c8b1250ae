//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `terminal.rs` - Check, checkmate and stalemate classification
//! - `special_moves.rs` - Castling and promotion as committed moves
//! - `edge_cases.rs` - Rejections, atomicity and unusual setups
//! - `proptest.rs` - Property-based tests over random games


use crate::board::{Board, Color, Square};

/// Play a sequence of moves, panicking on the first one rejected.
pub(super) fn play(board: &mut Board, moves: &[(Square, Square)]) {
    for &(from, to) in moves {
        assert!(
            board.attempt_move(from, to, None),
            "move {from}-{to} rejected on\n{board}"
        );
    }
}

/// Check that every piece sits on the square it records and that the king
/// cache points at the actual kings.
pub(super) fn assert_consistent(board: &Board) {
    for sq in Square::all() {
        if let Some(piece) = board.piece_at(sq) {
            assert_eq!(piece.square(), sq, "piece on {sq} records wrong square");
        }
    }
    for color in Color::BOTH {
        let actual = Square::all().find(|&sq| {
            board
                .piece_at(sq)
                .is_some_and(|p| p.color() == color && p.kind() == crate::board::PieceKind::King)
        });
        assert_eq!(board.king_square(color), actual, "{color} king cache");
    }
}

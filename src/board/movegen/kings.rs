use super::super::{Board, Piece, PieceKind, Square, BOARD_SIZE};
use super::distance;

/// Kings step to any adjacent square, or castle.
pub(super) fn king_reaches(king: &Piece, to: Square, board: &Board) -> bool {
    match distance(king.square(), to) {
        (dr, dc) if dr <= 1 && dc <= 1 => true,
        (0, 2) => can_castle(king, to, board),
        _ => false,
    }
}

/// Column of the rook a king castles with when heading for `to`.
pub(crate) fn castling_rook_col(king_from: Square, king_to: Square) -> usize {
    if king_to.1 > king_from.1 {
        BOARD_SIZE - 1
    } else {
        0
    }
}

/// Castling needs an unmoved king and an unmoved rook in the matching
/// corner of the king's row, nothing in between, the king not in check,
/// and no attack on any square the king crosses or lands on.
fn can_castle(king: &Piece, to: Square, board: &Board) -> bool {
    if king.has_moved() {
        return false;
    }
    let from = king.square();
    let rook_col = castling_rook_col(from, to);
    let rook_ok = board.piece_at(Square(from.0, rook_col)).is_some_and(|rook| {
        rook.kind() == PieceKind::Rook && rook.color() == king.color() && !rook.has_moved()
    });
    if !rook_ok {
        return false;
    }

    let step: isize = if rook_col > from.1 { 1 } else { -1 };
    let mut col = from.1;
    loop {
        col = col.wrapping_add_signed(step);
        if col == rook_col {
            break;
        }
        if !board.is_empty(Square(from.0, col)) {
            return false;
        }
    }

    // Only after the path test: an occupied landing square would let the
    // opposing king's castling rule recurse back here.
    if board.is_check(king.color()) {
        return false;
    }

    let mut col = from.1;
    while col != to.1 {
        col = col.wrapping_add_signed(step);
        let mut probe = *board;
        probe.relocate(from, Square(from.0, col));
        if probe.is_check(king.color()) {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use crate::board::{Board, BoardBuilder, Color, PieceKind, Square};

    fn castle_ready() -> BoardBuilder {
        BoardBuilder::new()
            .piece(Square(7, 4), Color::White, PieceKind::King)
            .piece(Square(7, 7), Color::White, PieceKind::Rook)
            .piece(Square(7, 0), Color::White, PieceKind::Rook)
            .piece(Square(0, 4), Color::Black, PieceKind::King)
    }

    fn king_reaches(board: &Board, to: Square) -> bool {
        let king = board.piece_at(Square(7, 4)).expect("white king placed");
        king.is_pseudo_legal(to, board)
    }

    #[test]
    fn test_king_steps_one_square() {
        let board = BoardBuilder::new()
            .piece(Square(4, 4), Color::White, PieceKind::King)
            .build();
        let king = board.piece_at(Square(4, 4)).expect("king placed");
        let count = Square::all()
            .filter(|&sq| king.is_pseudo_legal(sq, &board))
            .count();
        assert_eq!(count, 8);
    }

    #[test]
    fn test_both_castles_available() {
        let board = castle_ready().build();
        assert!(king_reaches(&board, Square(7, 6)));
        assert!(king_reaches(&board, Square(7, 2)));
    }

    #[test]
    fn test_castle_needs_rook() {
        let board = castle_ready().clear(Square(7, 7)).build();
        assert!(!king_reaches(&board, Square(7, 6)));
        let board = castle_ready()
            .piece(Square(7, 7), Color::White, PieceKind::Bishop)
            .build();
        assert!(!king_reaches(&board, Square(7, 6)));
        let board = castle_ready()
            .piece(Square(7, 7), Color::Black, PieceKind::Rook)
            .build();
        assert!(!king_reaches(&board, Square(7, 6)));
    }

    #[test]
    fn test_castle_rejected_after_piece_moved() {
        let board = castle_ready()
            .moved_piece(Square(7, 7), Color::White, PieceKind::Rook)
            .build();
        assert!(!king_reaches(&board, Square(7, 6)));
        assert!(king_reaches(&board, Square(7, 2)));

        let board = castle_ready()
            .moved_piece(Square(7, 4), Color::White, PieceKind::King)
            .build();
        assert!(!king_reaches(&board, Square(7, 6)));
        assert!(!king_reaches(&board, Square(7, 2)));
    }

    #[test]
    fn test_queenside_blocked_on_knight_file() {
        let board = castle_ready()
            .piece(Square(7, 1), Color::White, PieceKind::Knight)
            .build();
        assert!(!king_reaches(&board, Square(7, 2)));
        assert!(king_reaches(&board, Square(7, 6)));
    }

    #[test]
    fn test_queenside_knight_file_may_be_attacked() {
        let board = castle_ready()
            .piece(Square(0, 1), Color::Black, PieceKind::Rook)
            .build();
        assert!(king_reaches(&board, Square(7, 2)));
    }

    #[test]
    fn test_no_castle_through_check() {
        let board = castle_ready()
            .piece(Square(0, 5), Color::Black, PieceKind::Rook)
            .build();
        assert!(!king_reaches(&board, Square(7, 6)));
        assert!(king_reaches(&board, Square(7, 2)));
    }

    #[test]
    fn test_no_castle_into_check() {
        let board = castle_ready()
            .piece(Square(0, 6), Color::Black, PieceKind::Rook)
            .build();
        assert!(!king_reaches(&board, Square(7, 6)));
    }

    #[test]
    fn test_no_castle_out_of_check() {
        let board = BoardBuilder::new()
            .piece(Square(7, 4), Color::White, PieceKind::King)
            .piece(Square(7, 7), Color::White, PieceKind::Rook)
            .piece(Square(0, 0), Color::Black, PieceKind::King)
            .piece(Square(2, 4), Color::Black, PieceKind::Rook)
            .build();
        assert!(board.is_check(Color::White));
        assert!(!king_reaches(&board, Square(7, 6)));
    }

    #[test]
    fn test_pawn_attack_on_landing_square_counts() {
        let board = castle_ready()
            .piece(Square(6, 7), Color::Black, PieceKind::Pawn)
            .build();
        assert!(!king_reaches(&board, Square(7, 6)));
    }
}

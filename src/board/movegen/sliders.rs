use super::super::{Board, Piece, Square};
use super::{distance, path_is_clear};

fn is_straight(from: Square, to: Square) -> bool {
    from.0 == to.0 || from.1 == to.1
}

fn is_diagonal(from: Square, to: Square) -> bool {
    let (dr, dc) = distance(from, to);
    dr == dc
}

pub(super) fn rook_reaches(rook: &Piece, to: Square, board: &Board) -> bool {
    let from = rook.square();
    is_straight(from, to) && path_is_clear(board, from, to)
}

pub(super) fn bishop_reaches(bishop: &Piece, to: Square, board: &Board) -> bool {
    let from = bishop.square();
    is_diagonal(from, to) && path_is_clear(board, from, to)
}

pub(super) fn queen_reaches(queen: &Piece, to: Square, board: &Board) -> bool {
    let from = queen.square();
    (is_straight(from, to) || is_diagonal(from, to)) && path_is_clear(board, from, to)
}

use super::super::{Board, Piece, Square};

/// Pawns push one square onto an empty square, two from their starting
/// row when both squares ahead are empty, and capture one square
/// diagonally forward onto an occupied square. No en passant.
pub(super) fn pawn_reaches(pawn: &Piece, to: Square, board: &Board) -> bool {
    let from = pawn.square();
    let direction = pawn.color().pawn_direction();
    let row_delta = to.0 as isize - from.0 as isize;
    let col_diff = from.1.abs_diff(to.1);

    match col_diff {
        0 if row_delta == direction => board.is_empty(to),
        0 if row_delta == 2 * direction => {
            from.0 == pawn.color().pawn_start_row()
                && board.is_empty(to)
                && from
                    .offset(direction, 0)
                    .is_some_and(|between| board.is_empty(between))
        }
        1 if row_delta == direction => !board.is_empty(to),
        _ => false,
    }
}

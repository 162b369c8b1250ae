use super::super::{Piece, Square};
use super::distance;

/// Knights jump in an L: two squares on one axis, one on the other.
pub(super) fn knight_reaches(knight: &Piece, to: Square) -> bool {
    matches!(distance(knight.square(), to), (1, 2) | (2, 1))
}

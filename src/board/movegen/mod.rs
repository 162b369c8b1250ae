//! Move rules and position classification.
//!
//! Each piece kind has its own reachability rule in a submodule. On top of
//! those, this module provides check detection and the brute-force search
//! that tells checkmate and stalemate apart from positions with a legal
//! move.

mod kings;
mod knights;
mod pawns;
mod sliders;

pub(crate) use kings::castling_rook_col;

use super::{Board, Color, Piece, PieceKind, Square};

/// Promotion used by legality probes; legality never depends on it.
const PROBE_PROMOTION: Option<PieceKind> = Some(PieceKind::Queen);

impl Piece {
    /// Whether this piece could move to `to` on `board`, ignoring the
    /// safety of its own king.
    ///
    /// Every kind first requires a target that is not the piece's own
    /// square and not occupied by a piece of the same color.
    #[must_use]
    pub fn is_pseudo_legal(&self, to: Square, board: &Board) -> bool {
        if Square::new(to.0, to.1).is_none() || to == self.square {
            return false;
        }
        if board
            .piece_at(to)
            .is_some_and(|target| target.color() == self.color())
        {
            return false;
        }

        match self.kind() {
            PieceKind::Pawn => pawns::pawn_reaches(self, to, board),
            PieceKind::Knight => knights::knight_reaches(self, to),
            PieceKind::Bishop => sliders::bishop_reaches(self, to, board),
            PieceKind::Rook => sliders::rook_reaches(self, to, board),
            PieceKind::Queen => sliders::queen_reaches(self, to, board),
            PieceKind::King => kings::king_reaches(self, to, board),
        }
    }
}

impl Board {
    /// Whether any piece of `attacker` could move onto `square`.
    #[must_use]
    pub fn is_square_attacked(&self, square: Square, attacker: Color) -> bool {
        self.pieces(attacker)
            .any(|piece| piece.is_pseudo_legal(square, self))
    }

    /// Whether `color`'s king is attacked. A color without a king is never
    /// in check.
    #[must_use]
    pub fn is_check(&self, color: Color) -> bool {
        self.king_square(color)
            .is_some_and(|king| self.is_square_attacked(king, color.opponent()))
    }

    /// Whether a move would be accepted, without changing this board.
    #[must_use]
    pub fn is_legal_move(&self, from: Square, to: Square) -> bool {
        let mut probe = *self;
        probe.attempt_move(from, to, PROBE_PROMOTION)
    }

    /// Every square the piece on `from` may legally move to.
    #[must_use]
    pub fn legal_destinations(&self, from: Square) -> Vec<Square> {
        if self.is_empty(from) {
            return Vec::new();
        }
        Square::all()
            .filter(|&to| self.is_legal_move(from, to))
            .collect()
    }

    /// Every legal (from, to) pair for `color`, in row-major source order.
    #[must_use]
    pub fn legal_moves(&self, color: Color) -> Vec<(Square, Square)> {
        self.pieces(color)
            .flat_map(|piece| {
                self.legal_destinations(piece.square())
                    .into_iter()
                    .map(move |to| (piece.square(), to))
            })
            .collect()
    }

    /// Whether `color` has at least one legal move.
    ///
    /// Tries every own piece against all 64 targets on a fresh copy of the
    /// board and stops at the first success.
    #[must_use]
    pub fn has_legal_move(&self, color: Color) -> bool {
        self.pieces(color).any(|piece| {
            Square::all().any(|to| self.is_legal_move(piece.square(), to))
        })
    }

    /// In check with no legal move.
    #[must_use]
    pub fn is_checkmate(&self, color: Color) -> bool {
        if !self.is_check(color) {
            return false;
        }
        let mated = !self.has_legal_move(color);
        if mated {
            log::debug!("{color} is checkmated");
        }
        mated
    }

    /// Not in check, yet no legal move.
    #[must_use]
    pub fn is_stalemate(&self, color: Color) -> bool {
        if self.is_check(color) {
            return false;
        }
        let stalemated = !self.has_legal_move(color);
        if stalemated {
            log::debug!("{color} is stalemated");
        }
        stalemated
    }
}

/// Unit step from `from` toward `to` along one axis (-1, 0 or 1).
fn step(from: usize, to: usize) -> isize {
    match to.cmp(&from) {
        std::cmp::Ordering::Greater => 1,
        std::cmp::Ordering::Less => -1,
        std::cmp::Ordering::Equal => 0,
    }
}

/// Whether every square strictly between `from` and `to` is empty.
///
/// `from` and `to` must share a row, a column or a diagonal.
fn path_is_clear(board: &Board, from: Square, to: Square) -> bool {
    let dr = step(from.0, to.0);
    let dc = step(from.1, to.1);
    let mut current = from.offset(dr, dc);
    while let Some(sq) = current {
        if sq == to {
            return true;
        }
        if !board.is_empty(sq) {
            return false;
        }
        current = sq.offset(dr, dc);
    }
    true
}

/// Absolute row and column distance between two squares.
fn distance(from: Square, to: Square) -> (usize, usize) {
    (from.0.abs_diff(to.0), from.1.abs_diff(to.1))
}

use super::movegen::castling_rook_col;
use super::{Board, MoveError, Piece, PieceKind, Square};

/// What a committed move did to the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    /// The moved piece as it now stands (the new piece after a promotion)
    pub piece: Piece,
    /// The piece that was on the target square, if any
    pub captured: Option<Piece>,
    /// Whether the move was a castle (the rook moved as well)
    pub castled: bool,
    /// The kind a pawn was promoted to
    pub promoted: Option<PieceKind>,
}

impl Board {
    /// Validate and play a move, reporting success as a bool.
    ///
    /// `promotion` picks the piece a pawn becomes on its last row; `None`
    /// or an unusable kind means Queen. On `false` the board is unchanged.
    pub fn attempt_move(&mut self, from: Square, to: Square, promotion: Option<PieceKind>) -> bool {
        self.try_move(from, to, promotion).is_ok()
    }

    /// Validate and play a move, reporting why it was rejected.
    ///
    /// The move is applied to a copy of the board first; the copy replaces
    /// this board only if the mover's king is safe on it.
    pub fn try_move(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> Result<MoveOutcome, MoveError> {
        let piece = self
            .piece_at(from)
            .ok_or(MoveError::EmptySource { from })
            .map_err(rejected)?;

        if !piece.is_pseudo_legal(to, self) {
            return Err(rejected(MoveError::IllegalPattern { from, to }));
        }

        let mut next = *self;
        let outcome = next.apply_move(piece, to, promotion);
        if next.is_check(piece.color()) {
            return Err(rejected(MoveError::ExposesKing { from, to }));
        }

        if outcome.castled {
            log::debug!("{} castles {from}-{to}", piece.color());
        }
        if let Some(kind) = outcome.promoted {
            log::debug!("{} pawn promotes to {kind:?} on {to}", piece.color());
        }
        *self = next;
        Ok(outcome)
    }

    /// Apply an already validated move: castling rook, the piece itself,
    /// then promotion. The only place a committed move changes the board.
    fn apply_move(&mut self, piece: Piece, to: Square, promotion: Option<PieceKind>) -> MoveOutcome {
        let from = piece.square();
        let castled = piece.kind() == PieceKind::King && from.1.abs_diff(to.1) == 2;

        if castled {
            let rook_from = Square(to.0, castling_rook_col(from, to));
            let rook_to = if rook_from.1 > to.1 {
                Square(to.0, to.1 - 1)
            } else {
                Square(to.0, to.1 + 1)
            };
            self.relocate(rook_from, rook_to);
        }

        let captured = self.relocate(from, to);
        let mut placed = piece;
        placed.square = to;
        placed.has_moved = true;

        let mut promoted = None;
        if placed.kind() == PieceKind::Pawn && to.0 == placed.color().promotion_row() {
            let kind = PieceKind::promotion_choice(promotion);
            placed = Piece::new(kind, placed.color(), to);
            placed.has_moved = true;
            self.put_piece(placed);
            promoted = Some(kind);
        }

        MoveOutcome {
            piece: placed,
            captured,
            castled,
            promoted,
        }
    }

    /// Move whatever stands on `from` to `to`, marking it moved and keeping
    /// the king cache in step. Returns the piece previously on `to`.
    pub(crate) fn relocate(&mut self, from: Square, to: Square) -> Option<Piece> {
        let mut piece = self.remove_piece(from)?;
        piece.square = to;
        piece.has_moved = true;

        let captured = self.remove_piece(to);
        if let Some(victim) = captured {
            if victim.kind() == PieceKind::King {
                self.king_squares[victim.color().index()] = None;
            }
        }
        self.put_piece(piece);
        captured
    }
}

fn rejected(err: MoveError) -> MoveError {
    log::trace!("move rejected: {err}");
    err
}

//! Fluent builder for constructing chess positions.
//!
//! Allows creating positions piece by piece, including pieces that are
//! already marked as moved (which matters for castling and nothing else).
//!
//! # Example
//! ```
//! use chess_rules::board::{BoardBuilder, Color, PieceKind, Square};
//!
//! let board = BoardBuilder::new()
//!     .piece(Square(7, 4), Color::White, PieceKind::King)
//!     .piece(Square(0, 4), Color::Black, PieceKind::King)
//!     .piece(Square(6, 0), Color::White, PieceKind::Pawn)
//!     .build();
//! assert_eq!(board.king_square(Color::White), Some(Square(7, 4)));
//! ```

use super::{Board, BoardError, Color, Piece, PieceKind, Square};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug, Default)]
pub struct BoardBuilder {
    pieces: Vec<Piece>,
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder { pieces: Vec::new() }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let back_rank = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        let mut builder = Self::new();
        for color in Color::BOTH {
            for (col, &kind) in back_rank.iter().enumerate() {
                builder = builder.piece(Square(color.back_row(), col), color, kind);
                builder = builder.piece(Square(color.pawn_start_row(), col), color, PieceKind::Pawn);
            }
        }
        builder
    }

    /// Place an unmoved piece on the board.
    #[must_use]
    pub fn piece(self, square: Square, color: Color, kind: PieceKind) -> Self {
        self.place(Piece::new(kind, color, square))
    }

    /// Place a piece that counts as having moved already.
    #[must_use]
    pub fn moved_piece(self, square: Square, color: Color, kind: PieceKind) -> Self {
        let mut piece = Piece::new(kind, color, square);
        piece.has_moved = true;
        self.place(piece)
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|p| p.square != square);
        self
    }

    fn place(mut self, piece: Piece) -> Self {
        // Remove any existing piece on this square
        self.pieces.retain(|p| p.square != piece.square);
        self.pieces.push(piece);
        self
    }

    /// Build the board, rejecting positions with two kings of one color.
    pub fn try_build(self) -> Result<Board, BoardError> {
        let mut board = Board::empty();

        for piece in self.pieces {
            if piece.kind() == PieceKind::King && board.king_square(piece.color()).is_some() {
                return Err(BoardError::DuplicateKing {
                    color: piece.color(),
                });
            }
            board.put_piece(piece);
        }

        Ok(board)
    }

    /// Build the board.
    ///
    /// # Panics
    ///
    /// Panics if more than one king of the same color was placed; use
    /// [`BoardBuilder::try_build`] to handle that case.
    #[must_use]
    pub fn build(self) -> Board {
        match self.try_build() {
            Ok(board) => board,
            Err(err) => panic!("invalid board setup: {err}"),
        }
    }
}

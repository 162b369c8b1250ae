use once_cell::sync::Lazy;

use super::{BoardBuilder, Color, Grid, Piece, Square};

/// Width and height of the board.
pub const BOARD_SIZE: usize = 8;

static STARTING_POSITION: Lazy<Board> = Lazy::new(|| BoardBuilder::starting_position().build());

/// An 8x8 chess position.
///
/// The board is a plain value: cloning it copies every piece, so legality
/// probes run on clones and never disturb the original.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    pub(crate) grid: Grid<Piece, BOARD_SIZE>,
    // [white, black]; must equal the king's slot after every committed move
    pub(crate) king_squares: [Option<Square>; 2],
}

impl Board {
    /// The standard starting position.
    #[must_use]
    pub fn new() -> Self {
        *STARTING_POSITION
    }

    /// A board with no pieces.
    #[must_use]
    pub fn empty() -> Self {
        Board {
            grid: Grid::new(),
            king_squares: [None, None],
        }
    }

    /// The occupant of a square, if any.
    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.grid.get(sq.0, sq.1).copied()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.grid.is_empty(sq.0, sq.1)
    }

    /// Display character for a square: piece symbol, or `'.'` when empty.
    #[must_use]
    pub fn symbol_at(&self, sq: Square) -> char {
        self.piece_at(sq).map_or('.', |piece| piece.symbol())
    }

    /// Cached location of a color's king.
    #[inline]
    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.king_squares[color.index()]
    }

    /// All pieces of one color in row-major order.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = Piece> + '_ {
        self.grid
            .occupied()
            .map(|(_, _, piece)| *piece)
            .filter(move |piece| piece.color() == color)
    }

    /// Place a piece on its own square, replacing any occupant.
    pub(crate) fn put_piece(&mut self, piece: Piece) {
        let sq = piece.square;
        if piece.kind() == super::PieceKind::King {
            self.king_squares[piece.color().index()] = Some(sq);
        }
        self.grid.set(sq.0, sq.1, Some(piece));
    }

    pub(crate) fn remove_piece(&mut self, sq: Square) -> Option<Piece> {
        self.grid.take(sq.0, sq.1)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

pub mod board;

pub use board::{
    Board, BoardBuilder, BoardError, Color, Grid, MoveError, MoveOutcome, Piece, PieceKind,
    Square, SquareError, BOARD_SIZE,
};

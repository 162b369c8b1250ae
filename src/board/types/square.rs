//! Square type.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;
use crate::board::BOARD_SIZE;

/// A square on the chess board, represented as (row, col).
///
/// Row 0 is Black's back rank (rank 8), row 7 is White's back rank
/// (rank 1). Col 0 is the a-file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(pub usize, pub usize); // (row, col)

impl Square {
    /// Create a new square with bounds checking
    #[must_use]
    pub fn new(row: usize, col: usize) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Square(row, col))
        } else {
            None
        }
    }

    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn col(self) -> usize {
        self.1
    }

    /// The square `dr` rows and `dc` cols away, if it is on the board.
    #[must_use]
    pub fn offset(self, dr: isize, dc: isize) -> Option<Square> {
        let row = self.0.checked_add_signed(dr)?;
        let col = self.1.checked_add_signed(dc)?;
        Square::new(row, col)
    }

    /// All 64 squares in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Square(row, col)))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (self.1 as u8 + b'a') as char, BOARD_SIZE - self.0)
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        if row >= BOARD_SIZE {
            return Err(SquareError::RowOutOfBounds { row });
        }
        if col >= BOARD_SIZE {
            return Err(SquareError::ColOutOfBounds { col });
        }
        Ok(Square(row, col))
    }
}

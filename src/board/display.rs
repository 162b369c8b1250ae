use std::fmt;

use super::{Board, Square, BOARD_SIZE};

const FILES: &str = "    a b c d e f g h";
const BORDER: &str = "  +-----------------+";

/// Text diagram with row 0 (rank 8) on top, uppercase for White.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{FILES}")?;
        writeln!(f, "{BORDER}")?;
        for row in 0..BOARD_SIZE {
            let rank = BOARD_SIZE - row;
            write!(f, "{rank} |")?;
            for col in 0..BOARD_SIZE {
                write!(f, " {}", self.symbol_at(Square(row, col)))?;
            }
            writeln!(f, " | {rank}")?;
        }
        writeln!(f, "{BORDER}")?;
        write!(f, "{FILES}")
    }
}

use std::fmt;

/// The marker a player drops into the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Piece {
    One,
    Two,
}

impl Piece {
    /// Get the other player's piece
    pub fn other(self) -> Piece {
        match self {
            Piece::One => Piece::Two,
            Piece::Two => Piece::One,
        }
    }

    /// Numeric id stored in the grid (1 or 2)
    pub fn value(self) -> u8 {
        match self {
            Piece::One => 1,
            Piece::Two => 2,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

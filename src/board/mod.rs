//! Board representation for k-in-a-row games

pub mod bitboard;
pub mod board;


// Re-exports
pub use bitboard::Bitboard;
pub use board::Board;

/// Cell contents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Piece {
    Empty,
    /// The side the engine plays for (maximizing)
    Player,
    /// The side the engine plays against (minimizing)
    Opponent,
}

impl Piece {
    /// Get the other side
    #[inline]
    pub fn opponent(self) -> Piece {
        match self {
            Piece::Player => Piece::Opponent,
            Piece::Opponent => Piece::Player,
            Piece::Empty => Piece::Empty,
        }
    }
}

/// Position on the board. Row 0 is the bottom row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub col: u8,
    pub row: u8,
}

impl Pos {
    #[inline]
    pub fn new(col: u8, row: u8) -> Self {
        Self { col, row }
    }

    /// Offset by a signed step, if the result stays inside `cols x rows`.
    #[inline]
    pub fn offset(self, dc: i32, dr: i32, cols: u8, rows: u8) -> Option<Pos> {
        let c = i32::from(self.col) + dc;
        let r = i32::from(self.row) + dr;
        if c >= 0 && c < i32::from(cols) && r >= 0 && r < i32::from(rows) {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            Some(Pos::new(c as u8, r as u8))
        } else {
            None
        }
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

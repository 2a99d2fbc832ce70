//! Board structure for rectangular k-in-a-row grids

use super::bitboard::Bitboard;
use super::{Piece, Pos};

/// Game board of `cols x rows` cells.
///
/// Cells are stored column-major (`col * rows + row`) with row 0 at the
/// bottom, so a column's drop cell is its lowest empty row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cols: u8,
    rows: u8,
    /// Engine-side pieces
    pub player: Bitboard,
    /// Opponent pieces
    pub opponent: Bitboard,
}

impl Board {
    pub fn new(cols: u8, rows: u8) -> Self {
        let cells = usize::from(cols) * usize::from(rows);
        Self {
            cols,
            rows,
            player: Bitboard::new(cells),
            opponent: Bitboard::new(cells),
        }
    }

    #[inline]
    pub fn cols(&self) -> u8 {
        self.cols
    }

    #[inline]
    pub fn rows(&self) -> u8 {
        self.rows
    }

    /// Total number of cells
    #[inline]
    pub fn cells(&self) -> usize {
        usize::from(self.cols) * usize::from(self.rows)
    }

    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        pos.col < self.cols && pos.row < self.rows
    }

    #[inline]
    pub fn to_index(&self, pos: Pos) -> usize {
        debug_assert!(self.contains(pos));
        usize::from(pos.col) * usize::from(self.rows) + usize::from(pos.row)
    }

    #[inline]
    pub fn from_index(&self, idx: usize) -> Pos {
        let rows = usize::from(self.rows);
        #[allow(clippy::cast_possible_truncation)]
        Pos::new((idx / rows) as u8, (idx % rows) as u8)
    }

    /// Get piece at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Piece {
        let idx = self.to_index(pos);
        if self.player.get(idx) {
            Piece::Player
        } else if self.opponent.get(idx) {
            Piece::Opponent
        } else {
            Piece::Empty
        }
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        let idx = self.to_index(pos);
        !self.player.get(idx) && !self.opponent.get(idx)
    }

    /// Put a piece on a cell. Placing `Empty` is a no-op; use `remove_stone`.
    #[inline]
    pub fn place_stone(&mut self, pos: Pos, piece: Piece) {
        let idx = self.to_index(pos);
        match piece {
            Piece::Player => self.player.set(idx),
            Piece::Opponent => self.opponent.set(idx),
            Piece::Empty => {}
        }
    }

    /// Remove a piece
    #[inline]
    pub fn remove_stone(&mut self, pos: Pos) {
        let idx = self.to_index(pos);
        self.player.clear(idx);
        self.opponent.clear(idx);
    }

    /// Get bitboard for a side (returns None for Empty)
    #[inline]
    pub fn stones(&self, piece: Piece) -> Option<&Bitboard> {
        match piece {
            Piece::Player => Some(&self.player),
            Piece::Opponent => Some(&self.opponent),
            Piece::Empty => None,
        }
    }

    /// Positions holding `piece`, column by column
    pub fn positions_of(&self, piece: Piece) -> impl Iterator<Item = Pos> + '_ {
        self.stones(piece)
            .into_iter()
            .flat_map(|bb| bb.iter_ones())
            .map(|idx| self.from_index(idx))
    }

    /// The lowest empty cell of a column, or None if the column is full or
    /// out of range.
    pub fn drop_cell(&self, col: u8) -> Option<Pos> {
        if col >= self.cols {
            return None;
        }
        (0..self.rows)
            .map(|row| Pos::new(col, row))
            .find(|&pos| self.is_empty(pos))
    }

    /// Whether a piece can still be dropped into the column
    #[inline]
    pub fn col_has_space(&self, col: u8) -> bool {
        col < self.cols && self.rows > 0 && self.is_empty(Pos::new(col, self.rows - 1))
    }

    /// Whether the column holds at least one piece
    #[inline]
    pub fn col_not_empty(&self, col: u8) -> bool {
        col < self.cols && self.rows > 0 && !self.is_empty(Pos::new(col, 0))
    }

    /// Total pieces on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.player.count() + self.opponent.count()
    }

    /// Number of empty cells
    #[inline]
    pub fn empty_count(&self) -> usize {
        self.cells() - self.stone_count() as usize
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.empty_count() == 0
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.player.is_empty() && self.opponent.is_empty()
    }

    /// The opening cell: center column, bottom row under gravity, center cell
    /// otherwise.
    pub fn center(&self, gravity: bool) -> Pos {
        if gravity {
            Pos::new(self.cols / 2, 0)
        } else {
            Pos::new(self.cols / 2, self.rows / 2)
        }
    }

    /// Left-right mirror image of this board
    pub fn mirrored(&self) -> Board {
        let mut out = Board::new(self.cols, self.rows);
        for piece in [Piece::Player, Piece::Opponent] {
            for pos in self.positions_of(piece) {
                out.place_stone(Pos::new(self.cols - 1 - pos.col, pos.row), piece);
            }
        }
        out
    }

    /// Same cells with the two sides exchanged
    pub fn with_sides_swapped(&self) -> Board {
        Board {
            cols: self.cols,
            rows: self.rows,
            player: self.opponent.clone(),
            opponent: self.player.clone(),
        }
    }
}

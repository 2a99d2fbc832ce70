//! Streak accounting along a single line of cells
//!
//! A [`LineScanner`] is fed cells one at a time along a row, column or
//! diagonal. For each side it tracks two running streaks:
//!
//! - the *contiguous* streak: consecutive cells holding that side's pieces
//! - the *open* streak: consecutive cells the other side does not hold
//!
//! When a streak is broken it is flushed into the side's tallies through
//! [`wins_in_line`]. Contiguous streaks feed the live-run count, open streaks
//! feed the count of windows that side could still complete. The scanner can
//! be reused across lines; tallies accumulate until it is dropped.

use crate::board::Piece;

/// Number of k-length windows inside a run of `len` cells.
#[inline]
pub fn wins_in_line(len: u32, k: u32) -> u32 {
    if len >= k {
        len - k + 1
    } else {
        0
    }
}

/// Per-side streaks and tallies
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SideTally {
    open_streak: u32,
    contiguous_streak: u32,
    /// Windows fully covered by this side's pieces
    pub wins: u32,
    /// Windows not blocked by the other side
    pub possible_wins: u32,
}

impl SideTally {
    #[inline]
    fn flush_contiguous(&mut self, k: u32) {
        self.wins += wins_in_line(self.contiguous_streak, k);
        self.contiguous_streak = 0;
    }

    #[inline]
    fn flush_all(&mut self, k: u32) {
        self.flush_contiguous(k);
        self.possible_wins += wins_in_line(self.open_streak, k);
        self.open_streak = 0;
    }
}

/// Streak scanner over one line at a time.
#[derive(Debug, Clone)]
pub struct LineScanner {
    k: u32,
    pub player: SideTally,
    pub opponent: SideTally,
}

impl LineScanner {
    pub fn new(k: u32) -> Self {
        Self {
            k,
            player: SideTally::default(),
            opponent: SideTally::default(),
        }
    }

    /// Feed the next cell of the current line.
    #[inline]
    pub fn push(&mut self, piece: Piece) {
        let k = self.k;
        match piece {
            Piece::Empty => {
                // Emptiness keeps both sides' windows alive.
                self.player.open_streak += 1;
                self.opponent.open_streak += 1;
                self.player.flush_contiguous(k);
                self.opponent.flush_contiguous(k);
            }
            Piece::Player => {
                self.player.open_streak += 1;
                self.player.contiguous_streak += 1;
                self.opponent.flush_all(k);
            }
            Piece::Opponent => {
                self.opponent.open_streak += 1;
                self.opponent.contiguous_streak += 1;
                self.player.flush_all(k);
            }
        }
    }

    /// Close the current line, flushing whatever streaks are still running.
    #[inline]
    pub fn end_line(&mut self) {
        self.player.flush_all(self.k);
        self.opponent.flush_all(self.k);
    }

    /// Scan a whole line.
    pub fn scan<I: IntoIterator<Item = Piece>>(&mut self, line: I) {
        for piece in line {
            self.push(piece);
        }
        self.end_line();
    }
}

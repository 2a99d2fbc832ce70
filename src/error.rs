//! Error types for configuration and game play
//!
//! The search itself never fails: timeouts and pruning are control flow,
//! and an impossible move request yields `None`. These errors surface only
//! at the edges where a driver validates a game setup or a human move.

use thiserror::Error;

use crate::board::Pos;

/// Invalid game dimensions or run length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board must have at least one column and one row (got {cols}x{rows})")]
    ZeroDimension { cols: u8, rows: u8 },

    #[error("run length k must be at least 1")]
    ZeroRunLength,

    #[error("run length {k} does not fit on a {cols}x{rows} board")]
    RunLengthTooLong { k: u8, cols: u8, rows: u8 },
}

/// A move the driver refused to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    #[error("the game is over")]
    GameOver,

    #[error("AI is thinking")]
    AiThinking,

    #[error("not your turn")]
    NotYourTurn,

    #[error("({col}, {row}) is off the board")]
    OutOfBounds { col: u8, row: u8 },

    #[error("{0} is already occupied")]
    Occupied(Pos),

    #[error("column {0} is full")]
    ColumnFull(u8),

    #[error("{0} is not the drop cell of its column")]
    NotDropCell(Pos),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            ConfigError::RunLengthTooLong { k: 9, cols: 3, rows: 3 }.to_string(),
            "run length 9 does not fit on a 3x3 board"
        );
        assert_eq!(
            PlayError::Occupied(Pos::new(2, 1)).to_string(),
            "(2, 1) is already occupied"
        );
        assert_eq!(PlayError::ColumnFull(4).to_string(), "column 4 is full");
    }
}

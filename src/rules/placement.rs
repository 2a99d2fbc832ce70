//! Move legality for both rule variants

use crate::board::{Board, Pos};
use crate::error::PlayError;

/// Check that `pos` can be played: on the board, empty and, under gravity,
/// the lowest empty cell of its column.
pub fn check_move(board: &Board, pos: Pos, gravity: bool) -> Result<(), PlayError> {
    if !board.contains(pos) {
        return Err(PlayError::OutOfBounds {
            col: pos.col,
            row: pos.row,
        });
    }
    if !board.is_empty(pos) {
        return Err(if gravity && !board.col_has_space(pos.col) {
            PlayError::ColumnFull(pos.col)
        } else {
            PlayError::Occupied(pos)
        });
    }
    if gravity && board.drop_cell(pos.col) != Some(pos) {
        return Err(PlayError::NotDropCell(pos));
    }
    Ok(())
}

#[inline]
pub fn is_valid_move(board: &Board, pos: Pos, gravity: bool) -> bool {
    check_move(board, pos, gravity).is_ok()
}

/// Where a piece dropped into `col` lands.
pub fn column_move(board: &Board, col: u8) -> Result<Pos, PlayError> {
    if col >= board.cols() {
        return Err(PlayError::OutOfBounds { col, row: 0 });
    }
    board.drop_cell(col).ok_or(PlayError::ColumnFull(col))
}

/// All legal moves, column by column.
pub fn legal_moves(board: &Board, gravity: bool) -> Vec<Pos> {
    if gravity {
        (0..board.cols()).filter_map(|c| board.drop_cell(c)).collect()
    } else {
        (0..board.cols())
            .flat_map(|col| (0..board.rows()).map(move |row| Pos::new(col, row)))
            .filter(|&pos| board.is_empty(pos))
            .collect()
    }
}

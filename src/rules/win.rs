//! Win condition checking
//!
//! A side wins with `k` or more of its pieces contiguous along a row,
//! column or diagonal. These helpers look at single cells and are meant for
//! drivers judging a finished move; the search relies on the evaluator.

use crate::board::{Board, Piece, Pos};

/// Direction vectors for line checking: horizontal, vertical, both diagonals
const DIRECTIONS: [(i32, i32); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

/// Count pieces equal to `piece` stepping away from `pos` (exclusive).
#[inline]
fn count_dir(board: &Board, pos: Pos, piece: Piece, dc: i32, dr: i32) -> usize {
    let (cols, rows) = (board.cols(), board.rows());
    let mut count = 0;
    let mut cursor = pos.offset(dc, dr, cols, rows);
    while let Some(p) = cursor {
        if board.get(p) != piece {
            break;
        }
        count += 1;
        cursor = p.offset(dc, dr, cols, rows);
    }
    count
}

/// Fast run check through one cell. No allocation.
#[inline]
pub fn has_k_at_pos(board: &Board, pos: Pos, piece: Piece, k: u8) -> bool {
    if piece == Piece::Empty || board.get(pos) != piece {
        return false;
    }
    DIRECTIONS.iter().any(|&(dc, dr)| {
        1 + count_dir(board, pos, piece, dc, dr) + count_dir(board, pos, piece, -dc, -dr)
            >= usize::from(k)
    })
}

/// The run of at least `k` pieces through `pos`, ordered along its line.
pub fn find_winning_line(board: &Board, pos: Pos, piece: Piece, k: u8) -> Option<Vec<Pos>> {
    if piece == Piece::Empty || board.get(pos) != piece {
        return None;
    }
    let (cols, rows) = (board.cols(), board.rows());

    for &(dc, dr) in &DIRECTIONS {
        let back = count_dir(board, pos, piece, -dc, -dr);
        let forward = count_dir(board, pos, piece, dc, dr);
        if 1 + back + forward < usize::from(k) {
            continue;
        }
        #[allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]
        let start = pos.offset(-dc * back as i32, -dr * back as i32, cols, rows)?;
        let mut line = Vec::with_capacity(1 + back + forward);
        let mut cursor = Some(start);
        for _ in 0..=back + forward {
            let p = cursor?;
            line.push(p);
            cursor = p.offset(dc, dr, cols, rows);
        }
        return Some(line);
    }
    None
}

/// Any k-run of `piece` on the board.
pub fn find_run(board: &Board, piece: Piece, k: u8) -> Option<Vec<Pos>> {
    board
        .positions_of(piece)
        .find_map(|pos| find_winning_line(board, pos, piece, k))
}

/// The side holding a k-run, if any.
pub fn check_winner(board: &Board, k: u8) -> Option<Piece> {
    [Piece::Player, Piece::Opponent]
        .into_iter()
        .find(|&piece| find_run(board, piece, k).is_some())
}

/// Board full and nobody won.
pub fn is_draw(board: &Board, k: u8) -> bool {
    board.is_full() && check_winner(board, k).is_none()
}

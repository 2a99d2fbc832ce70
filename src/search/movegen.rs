//! Candidate move generation and ordering
//!
//! Moves are appended in three priority tiers, skipping anything already
//! listed:
//!
//! 1. the hint path (best continuation from the previous depth or turn)
//! 2. frontier cells next to existing pieces
//! 3. every remaining legal move in raster order
//!
//! Under gravity a move is always the drop cell of its column, so hint and
//! frontier entries are reinterpreted as columns.

use crate::board::{Board, Pos};

/// Neighbour offsets in the order they are tried: left, right, below, above,
/// then the two diagonals.
const NEIGHBOURS: [(i32, i32); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (1, 1),
    (-1, 1),
    (1, -1),
];

/// Ordered, duplicate-free move list builder.
struct MoveList {
    moves: Vec<Pos>,
    seen: Vec<bool>,
}

impl MoveList {
    fn new(board: &Board) -> Self {
        Self {
            moves: Vec::with_capacity(board.empty_count()),
            seen: vec![false; board.cells()],
        }
    }

    #[inline]
    fn push(&mut self, board: &Board, pos: Pos) {
        let idx = board.to_index(pos);
        if !self.seen[idx] {
            self.seen[idx] = true;
            self.moves.push(pos);
        }
    }
}

/// Generate the ordered candidate moves for the side to move.
///
/// `hint` is read only. The board is not modified.
pub fn generate_moves(board: &Board, gravity: bool, hint: &[Pos]) -> Vec<Pos> {
    let mut list = MoveList::new(board);
    if gravity {
        gravity_moves(board, hint, &mut list);
    } else {
        free_moves(board, hint, &mut list);
    }
    list.moves
}

fn gravity_moves(board: &Board, hint: &[Pos], list: &mut MoveList) {
    let cols = board.cols();

    for pos in hint {
        if let Some(cell) = board.drop_cell(pos.col) {
            list.push(board, cell);
        }
    }

    for col in (0..cols).filter(|&c| board.col_not_empty(c)) {
        let lo = col.saturating_sub(1);
        let hi = col.saturating_add(1).min(cols - 1);
        for c in lo..=hi {
            if let Some(cell) = board.drop_cell(c) {
                list.push(board, cell);
            }
        }
    }

    for col in 0..cols {
        if let Some(cell) = board.drop_cell(col) {
            list.push(board, cell);
        }
    }
}

fn free_moves(board: &Board, hint: &[Pos], list: &mut MoveList) {
    let (cols, rows) = (board.cols(), board.rows());

    for &pos in hint {
        if board.contains(pos) && board.is_empty(pos) {
            list.push(board, pos);
        }
    }

    // Occupied cells in column-major order, both sides alike.
    for col in 0..cols {
        for row in 0..rows {
            let pos = Pos::new(col, row);
            if board.is_empty(pos) {
                continue;
            }
            for &(dc, dr) in &NEIGHBOURS {
                if let Some(n) = pos.offset(dc, dr, cols, rows) {
                    if board.is_empty(n) {
                        list.push(board, n);
                    }
                }
            }
        }
    }

    for col in 0..cols {
        for row in 0..rows {
            let pos = Pos::new(col, row);
            if board.is_empty(pos) {
                list.push(board, pos);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Piece;

    fn assert_no_duplicates(moves: &[Pos]) {
        for (i, a) in moves.iter().enumerate() {
            assert!(!moves[i + 1..].contains(a), "duplicate move {a}");
        }
    }

    #[test]
    fn test_gravity_empty_board_is_every_column() {
        let board = Board::new(5, 3);
        let moves = generate_moves(&board, true, &[]);
        let expected: Vec<Pos> = (0..5).map(|c| Pos::new(c, 0)).collect();
        assert_eq!(moves, expected);
    }

    #[test]
    fn test_gravity_frontier_before_raster() {
        let mut board = Board::new(6, 3);
        board.place_stone(Pos::new(3, 0), Piece::Player);
        let moves = generate_moves(&board, true, &[]);
        assert_eq!(
            moves,
            vec![
                Pos::new(2, 0),
                Pos::new(3, 1),
                Pos::new(4, 0),
                Pos::new(0, 0),
                Pos::new(1, 0),
                Pos::new(5, 0),
            ]
        );
    }

    #[test]
    fn test_gravity_hint_is_reinterpreted_as_column() {
        let mut board = Board::new(4, 3);
        board.place_stone(Pos::new(1, 0), Piece::Player);
        board.place_stone(Pos::new(1, 1), Piece::Opponent);
        // Cached cell (1, 0) is taken; the column still drops at row 2.
        let moves = generate_moves(&board, true, &[Pos::new(1, 0), Pos::new(3, 2)]);
        assert_eq!(moves[0], Pos::new(1, 2));
        assert_eq!(moves[1], Pos::new(3, 0));
        assert_no_duplicates(&moves);
        assert_eq!(moves.len(), 4);
    }

    #[test]
    fn test_gravity_full_column_is_skipped() {
        let mut board = Board::new(3, 1);
        board.place_stone(Pos::new(1, 0), Piece::Player);
        let moves = generate_moves(&board, true, &[Pos::new(1, 0)]);
        assert_eq!(moves, vec![Pos::new(0, 0), Pos::new(2, 0)]);
    }

    #[test]
    fn test_gravity_edge_column_frontier() {
        let mut board = Board::new(4, 2);
        board.place_stone(Pos::new(0, 0), Piece::Opponent);
        let moves = generate_moves(&board, true, &[]);
        assert_eq!(moves[..2], [Pos::new(0, 1), Pos::new(1, 0)]);
    }

    #[test]
    fn test_free_empty_board_is_column_major_raster() {
        let board = Board::new(2, 2);
        let moves = generate_moves(&board, false, &[]);
        assert_eq!(
            moves,
            vec![Pos::new(0, 0), Pos::new(0, 1), Pos::new(1, 0), Pos::new(1, 1)]
        );
    }

    #[test]
    fn test_free_neighbour_order() {
        let mut board = Board::new(3, 3);
        board.place_stone(Pos::new(1, 1), Piece::Opponent);
        let moves = generate_moves(&board, false, &[]);
        assert_eq!(
            moves,
            vec![
                Pos::new(0, 1),
                Pos::new(2, 1),
                Pos::new(1, 0),
                Pos::new(1, 2),
                Pos::new(0, 0),
                Pos::new(2, 2),
                Pos::new(0, 2),
                Pos::new(2, 0),
            ]
        );
    }

    #[test]
    fn test_free_hint_first_then_frontier() {
        let mut board = Board::new(5, 5);
        board.place_stone(Pos::new(0, 0), Piece::Player);
        let hint = [Pos::new(4, 4), Pos::new(0, 0), Pos::new(9, 9)];
        let moves = generate_moves(&board, false, &hint);

        // Occupied and off-board hints are dropped.
        assert_eq!(moves[0], Pos::new(4, 4));
        assert_eq!(moves[1..4], [Pos::new(1, 0), Pos::new(0, 1), Pos::new(1, 1)]);
        assert_eq!(moves.len(), 24);
        assert_no_duplicates(&moves);
    }

    #[test]
    fn test_free_frontier_is_deduplicated_across_pieces() {
        let mut board = Board::new(4, 4);
        board.place_stone(Pos::new(1, 1), Piece::Player);
        board.place_stone(Pos::new(2, 1), Piece::Opponent);
        let moves = generate_moves(&board, false, &[]);
        assert_eq!(moves.len(), 14);
        assert_no_duplicates(&moves);
        assert!(moves.iter().all(|&p| board.is_empty(p)));
    }

    #[test]
    fn test_full_board_has_no_moves() {
        let mut board = Board::new(2, 1);
        board.place_stone(Pos::new(0, 0), Piece::Player);
        board.place_stone(Pos::new(1, 0), Piece::Opponent);
        assert!(generate_moves(&board, false, &[]).is_empty());
        assert!(generate_moves(&board, true, &[]).is_empty());
    }

    #[test]
    fn test_generation_does_not_touch_board() {
        let mut board = Board::new(4, 4);
        board.place_stone(Pos::new(2, 0), Piece::Player);
        let before = board.clone();
        let _ = generate_moves(&board, true, &[Pos::new(2, 0)]);
        let _ = generate_moves(&board, false, &[Pos::new(2, 1)]);
        assert_eq!(board, before);
    }
}

//! Static evaluation of k-in-a-row positions
//!
//! Every full line of the board (columns, rows and both diagonal directions)
//! is run through a [`LineScanner`]. A side holding a k-run anywhere decides
//! the position outright; otherwise the score is the number of k-windows the
//! engine side can still complete minus the number the opponent can.

use crate::board::{Board, Piece, Pos};

use super::line::LineScanner;
use super::score::Score;

/// Evaluate the board from the engine side's point of view.
///
/// Returns:
/// - `Score::MIN_WIN` if the opponent holds a k-run (checked first)
/// - `Score::MAX_WIN` if the engine side holds a k-run
/// - otherwise `possible_wins(Player) - possible_wins(Opponent)`
///
/// The heuristic value is only comparable between boards of the same size
/// evaluated with the same `k`.
#[must_use]
pub fn evaluate(board: &Board, k: u8) -> i32 {
    if board.cells() == 0 {
        return 0;
    }
    let k = u32::from(k);
    let mut scanner = LineScanner::new(k);
    let (cols, rows) = (board.cols(), board.rows());

    // Vertical
    for col in 0..cols {
        scan_ray(&mut scanner, board, Pos::new(col, 0), 0, 1);
    }

    // Horizontal
    for row in 0..rows {
        scan_ray(&mut scanner, board, Pos::new(0, row), 1, 0);
    }

    // Diagonals going up-right start on the left edge or the bottom edge,
    // diagonals going down-right on the left edge or the top edge.
    for row in 0..rows {
        if diagonal_len(board, Pos::new(0, row), 1) >= k {
            scan_ray(&mut scanner, board, Pos::new(0, row), 1, 1);
        }
        if diagonal_len(board, Pos::new(0, row), -1) >= k {
            scan_ray(&mut scanner, board, Pos::new(0, row), 1, -1);
        }
    }
    if rows > 0 {
        for col in 1..cols {
            if diagonal_len(board, Pos::new(col, 0), 1) >= k {
                scan_ray(&mut scanner, board, Pos::new(col, 0), 1, 1);
            }
            if diagonal_len(board, Pos::new(col, rows - 1), -1) >= k {
                scan_ray(&mut scanner, board, Pos::new(col, rows - 1), 1, -1);
            }
        }
    }

    if scanner.opponent.wins > 0 {
        Score::MIN_WIN
    } else if scanner.player.wins > 0 {
        Score::MAX_WIN
    } else {
        #[allow(clippy::cast_possible_wrap)]
        let (mine, theirs) = (
            scanner.player.possible_wins as i32,
            scanner.opponent.possible_wins as i32,
        );
        mine - theirs
    }
}

/// Feed every cell from `start` stepping by (dc, dr) until the board edge.
#[inline]
fn scan_ray(scanner: &mut LineScanner, board: &Board, start: Pos, dc: i32, dr: i32) {
    let (cols, rows) = (board.cols(), board.rows());
    let mut cursor = Some(start);
    while let Some(pos) = cursor {
        scanner.push(board.get(pos));
        cursor = pos.offset(dc, dr, cols, rows);
    }
    scanner.end_line();
}

/// Cells on a diagonal running rightwards from `start`, going up when
/// `dr == 1` and down when `dr == -1`.
#[inline]
fn diagonal_len(board: &Board, start: Pos, dr: i32) -> u32 {
    let across = u32::from(board.cols() - start.col);
    let vertical = if dr > 0 {
        u32::from(board.rows() - start.row)
    } else {
        u32::from(start.row) + 1
    };
    across.min(vertical)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn random_board(rng: &mut StdRng, cols: u8, rows: u8, fill: f64) -> Board {
        let mut board = Board::new(cols, rows);
        for col in 0..cols {
            for row in 0..rows {
                if rng.random_bool(fill) {
                    let piece = if rng.random_bool(0.5) {
                        Piece::Player
                    } else {
                        Piece::Opponent
                    };
                    board.place_stone(Pos::new(col, row), piece);
                }
            }
        }
        board
    }

    #[test]
    fn test_evaluate_empty_board_is_balanced() {
        let board = Board::new(7, 6);
        assert_eq!(evaluate(&board, 4), 0);
    }

    #[test]
    fn test_evaluate_center_piece_on_three_by_three() {
        let mut board = Board::new(3, 3);
        board.place_stone(Pos::new(1, 1), Piece::Player);
        // Player keeps all 8 lines, opponent loses the 4 through the center.
        assert_eq!(evaluate(&board, 3), 4);
    }

    #[test]
    fn test_evaluate_horizontal_run() {
        let mut board = Board::new(5, 5);
        for col in 1..4 {
            board.place_stone(Pos::new(col, 2), Piece::Player);
        }
        assert_eq!(evaluate(&board, 3), Score::MAX_WIN);
    }

    #[test]
    fn test_evaluate_vertical_run() {
        let mut board = Board::new(5, 5);
        for row in 0..3 {
            board.place_stone(Pos::new(4, row), Piece::Opponent);
        }
        assert_eq!(evaluate(&board, 3), Score::MIN_WIN);
    }

    #[test]
    fn test_evaluate_up_right_diagonal_run() {
        let mut board = Board::new(6, 4);
        for i in 0..4 {
            board.place_stone(Pos::new(2 + i, i), Piece::Player);
        }
        assert_eq!(evaluate(&board, 4), Score::MAX_WIN);
    }

    #[test]
    fn test_evaluate_down_right_diagonal_run() {
        let mut board = Board::new(4, 6);
        for i in 0..4u8 {
            board.place_stone(Pos::new(i, 5 - i), Piece::Opponent);
        }
        assert_eq!(evaluate(&board, 4), Score::MIN_WIN);
    }

    #[test]
    fn test_evaluate_short_diagonal_is_not_a_run() {
        let mut board = Board::new(4, 4);
        board.place_stone(Pos::new(2, 0), Piece::Player);
        board.place_stone(Pos::new(3, 1), Piece::Player);
        assert_ne!(evaluate(&board, 3), Score::MAX_WIN);
    }

    #[test]
    fn test_evaluate_run_wins_regardless_of_other_cells() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let mut board = random_board(&mut rng, 6, 6, 0.4);
            for row in 0..6 {
                board.remove_stone(Pos::new(0, row));
            }
            for row in 1..5 {
                board.place_stone(Pos::new(0, row), Piece::Opponent);
            }
            assert_eq!(evaluate(&board, 4), Score::MIN_WIN);
        }
    }

    #[test]
    fn test_evaluate_opponent_run_checked_first() {
        let mut board = Board::new(4, 2);
        for col in 0..3 {
            board.place_stone(Pos::new(col, 0), Piece::Player);
            board.place_stone(Pos::new(col, 1), Piece::Opponent);
        }
        assert_eq!(evaluate(&board, 3), Score::MIN_WIN);
        assert_eq!(evaluate(&board.with_sides_swapped(), 3), Score::MIN_WIN);
    }

    #[test]
    fn test_evaluate_mirror_swap_antisymmetry() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut checked = 0;
        for _ in 0..200 {
            let cols = rng.random_range(3..=8u8);
            let rows = rng.random_range(3..=8u8);
            let k = rng.random_range(3..=4u8);
            let board = random_board(&mut rng, cols, rows, 0.3);
            let score = evaluate(&board, k);
            if Score::is_terminal(score) {
                continue;
            }
            let image = board.with_sides_swapped().mirrored();
            assert_eq!(evaluate(&image, k), -score, "board {cols}x{rows} k={k}");
            checked += 1;
        }
        assert!(checked > 30, "too few non-terminal samples: {checked}");
    }

    #[test]
    fn test_evaluate_is_pure() {
        let mut rng = StdRng::seed_from_u64(3);
        let board = random_board(&mut rng, 7, 6, 0.3);
        let before = board.clone();
        let first = evaluate(&board, 4);
        assert_eq!(evaluate(&board, 4), first);
        assert_eq!(board, before);
    }
}

//! Minimax search with alpha-beta pruning
//!
//! The searcher plays both sides on one mutable board: the engine side
//! (`Piece::Player`) maximizes, the opponent minimizes. Every trial move is
//! placed, searched and removed again before the next sibling is tried, so
//! the board is restored on every exit path, including pruning and timeout.
//!
//! Child nodes do not regenerate moves. They inherit the parent's ordered
//! list minus the move just played; under gravity the newly exposed cell in
//! the same column is prepended so it is tried first.
//!
//! Ties keep the first move reaching the best score, so move ordering is
//! directly visible in the result.
//!
//! # Example
//!
//! ```
//! use kinarow::board::{Board, Piece, Pos};
//! use kinarow::search::{generate_moves, Searcher, TimeControl};
//! use kinarow::eval::Score;
//!
//! let mut board = Board::new(3, 3);
//! board.place_stone(Pos::new(0, 0), Piece::Player);
//! board.place_stone(Pos::new(1, 1), Piece::Player);
//!
//! let moves = generate_moves(&board, false, &[]);
//! let mut searcher = Searcher::new(3, false, TimeControl::unlimited());
//! let result = searcher.search_root(&mut board, &moves, 1, moves[0]);
//! assert_eq!(result.best_move, Pos::new(2, 2));
//! assert_eq!(result.score, Score::MAX_WIN);
//! ```

use crate::board::{Board, Piece, Pos};
use crate::eval::{evaluate, Score};

use super::TimeControl;

/// Result of one fixed-depth root search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move found (the placeholder if nothing beat `MIN_WIN`)
    pub best_move: Pos,
    /// Minimax score of the best move
    pub score: i32,
    /// Depth searched
    pub depth: u32,
    /// Nodes visited by this call
    pub nodes: u64,
    /// Expected continuation after `best_move`
    pub pv: Vec<Pos>,
    /// Whether the time limit cut this search short
    pub timed_out: bool,
}

/// Depth-limited alpha-beta searcher for one move request.
pub struct Searcher {
    k: u8,
    gravity: bool,
    time: TimeControl,
    nodes: u64,
}

impl Searcher {
    pub fn new(k: u8, gravity: bool, time: TimeControl) -> Self {
        Self {
            k,
            gravity,
            time,
            nodes: 0,
        }
    }

    /// Total nodes visited since construction.
    #[inline]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    #[inline]
    pub fn k(&self) -> u8 {
        self.k
    }

    #[inline]
    pub fn gravity(&self) -> bool {
        self.gravity
    }

    #[inline]
    pub fn time(&self) -> &TimeControl {
        &self.time
    }

    /// Root maximize node over `moves` with the full `[MIN_WIN, MAX_WIN]`
    /// window. `placeholder` is reported when no move scores above
    /// `MIN_WIN`.
    pub fn search_root(
        &mut self,
        board: &mut Board,
        moves: &[Pos],
        depth: u32,
        placeholder: Pos,
    ) -> SearchResult {
        let start_nodes = self.nodes;
        let mut alpha = Score::MIN_WIN;
        let beta = Score::MAX_WIN;
        let mut best_score = Score::MIN_WIN;
        let mut best_move = placeholder;
        let mut pv = Vec::new();

        for i in 0..moves.len() {
            let mv = moves[i];
            board.place_stone(mv, Piece::Player);
            let child = self.child_moves(board, moves, i);
            let (score, line) = self.search_node(
                board,
                &child,
                depth.saturating_sub(1),
                alpha,
                beta,
                Piece::Opponent,
            );
            board.remove_stone(mv);

            if score > best_score {
                best_score = score;
                best_move = mv;
                pv = line;
            }
            alpha = alpha.max(best_score);

            if self.time.check() || alpha >= beta {
                break;
            }
        }

        SearchResult {
            best_move,
            score: best_score,
            depth,
            nodes: self.nodes - start_nodes,
            pv,
            timed_out: self.time.is_out_of_time(),
        }
    }

    /// Interior node. `side` is the piece about to move: `Player` maximizes,
    /// `Opponent` minimizes. Returns the score and the continuation from
    /// this node.
    fn search_node(
        &mut self,
        board: &mut Board,
        moves: &[Pos],
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        side: Piece,
    ) -> (i32, Vec<Pos>) {
        self.nodes += 1;

        let eval = evaluate(board, self.k);
        if depth == 0 || Score::is_terminal(eval) || moves.is_empty() {
            return (eval, Vec::new());
        }

        let maximizing = side == Piece::Player;
        let mut best_score = if maximizing {
            Score::MIN_WIN
        } else {
            Score::MAX_WIN
        };
        let mut best_line = Vec::new();

        for i in 0..moves.len() {
            let mv = moves[i];
            board.place_stone(mv, side);
            let child = self.child_moves(board, moves, i);
            let (score, line) =
                self.search_node(board, &child, depth - 1, alpha, beta, side.opponent());
            board.remove_stone(mv);

            let improved = if maximizing {
                score > best_score
            } else {
                score < best_score
            };
            if improved {
                best_score = score;
                best_line.clear();
                best_line.push(mv);
                best_line.extend(line);
            }

            if maximizing {
                alpha = alpha.max(best_score);
            } else {
                beta = beta.min(best_score);
            }

            if self.time.check() || alpha >= beta {
                break;
            }
        }

        (best_score, best_line)
    }

    /// Move list for the child after `moves[played]` has been placed.
    fn child_moves(&self, board: &Board, moves: &[Pos], played: usize) -> Vec<Pos> {
        let mut child = Vec::with_capacity(moves.len());
        if self.gravity {
            if let Some(cell) = board.drop_cell(moves[played].col) {
                child.push(cell);
            }
        }
        child.extend_from_slice(&moves[..played]);
        child.extend_from_slice(&moves[played + 1..]);
        child
    }
}

//! Iterative deepening driver
//!
//! Runs [`Searcher::search_root`] at depth 1, 2, 3, ... until the clock runs
//! out, a forced win is found, the free-placement search space is exhausted
//! or an optional depth cap is hit. Each accepted depth overwrites the
//! [`BestPath`], which in turn biases move ordering for the next depth once
//! it is long enough to say something about the opponent's reply.

use std::fmt;

use rand::Rng;

use crate::board::{Board, Pos};
use crate::eval::{evaluate, Score};

use super::{generate_moves, BestPath, Searcher};

/// Accepted paths shorter than this do not trigger move regeneration.
const REORDER_MIN_PATH: usize = 3;

/// Why the deepening loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The deadline passed or the search was stopped externally
    TimedOut,
    /// An accepted depth scored `MAX_WIN`
    ForcedWin,
    /// Free placement only: depth exceeds the number of empty cells
    SearchSpaceExhausted,
    /// The configured maximum depth was reached
    DepthLimit,
    /// The board has no empty cell
    NoMoves,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            StopReason::TimedOut => "time limit",
            StopReason::ForcedWin => "forced win",
            StopReason::SearchSpaceExhausted => "search space exhausted",
            StopReason::DepthLimit => "depth limit",
            StopReason::NoMoves => "no moves",
        };
        f.write_str(text)
    }
}

/// Answer of the deepening loop.
#[derive(Debug, Clone)]
pub struct DeepeningOutcome {
    /// Chosen move, `None` only when the board is full
    pub best_move: Option<Pos>,
    /// Score of the last accepted depth (`MIN_WIN` if none was accepted)
    pub score: i32,
    /// Last accepted depth, 0 if none
    pub depth: u32,
    /// Deepest depth started
    pub max_depth_started: u32,
    /// Nodes across all depths
    pub nodes: u64,
    pub stop_reason: StopReason,
}

/// Deepen until one of the stop conditions holds.
///
/// `path` is read for move ordering and replaced after every accepted depth.
/// Only the first depth draws its placeholder move from `rng`.
pub fn iterative_deepening<R: Rng>(
    searcher: &mut Searcher,
    board: &mut Board,
    path: &mut BestPath,
    rng: &mut R,
    max_depth: Option<u32>,
) -> DeepeningOutcome {
    let gravity = searcher.gravity();
    let mut moves = generate_moves(board, gravity, path.moves());

    if moves.is_empty() {
        return DeepeningOutcome {
            best_move: None,
            score: evaluate(board, searcher.k()),
            depth: 0,
            max_depth_started: 0,
            nodes: 0,
            stop_reason: StopReason::NoMoves,
        };
    }

    let total_moves = moves.len();
    let mut best_move = moves[0];
    let mut best_score = Score::MIN_WIN;
    let mut accepted_depth = 0;
    let mut accepted_len = 0;
    let mut depth: u32 = 1;

    let stop_reason = loop {
        if best_score == Score::MAX_WIN {
            break StopReason::ForcedWin;
        }
        if searcher.time().check() {
            break StopReason::TimedOut;
        }
        if !gravity && depth as usize > total_moves {
            break StopReason::SearchSpaceExhausted;
        }
        if max_depth.is_some_and(|cap| depth > cap) {
            break StopReason::DepthLimit;
        }

        moves = next_depth_moves(board, gravity, path, accepted_len, moves);

        let placeholder = if depth == 1 {
            moves[rng.random_range(0..moves.len())]
        } else {
            moves[0]
        };

        let result = searcher.search_root(board, &moves, depth, placeholder);
        let accepted =
            !result.timed_out && (result.score > Score::MIN_WIN || best_score == Score::MIN_WIN);

        log::debug!(
            "depth {}: move {} score {} nodes {}{}",
            depth,
            result.best_move,
            result.score,
            result.nodes,
            if accepted { "" } else { " (discarded)" }
        );

        if accepted {
            best_move = result.best_move;
            best_score = result.score;
            accepted_depth = depth;
            path.replace(best_move, &result.pv);
            accepted_len = path.len();
        }

        depth += 1;
    };

    DeepeningOutcome {
        best_move: Some(best_move),
        score: best_score,
        depth: accepted_depth,
        max_depth_started: depth - 1,
        nodes: searcher.nodes(),
        stop_reason,
    }
}

/// Root move list for the next depth. Once this turn's accepted path
/// reaches the opponent's reply, it leads the ordering.
fn next_depth_moves(
    board: &Board,
    gravity: bool,
    path: &BestPath,
    accepted_len: usize,
    moves: Vec<Pos>,
) -> Vec<Pos> {
    if accepted_len >= REORDER_MIN_PATH {
        generate_moves(board, gravity, path.moves())
    } else {
        moves
    }
}

//! Main AI engine tying the search components together
//!
//! An [`AIEngine`] is the long-lived session a driver keeps for a whole
//! game. It owns the best path carried from one turn to the next and the
//! random source for the first-depth placeholder; everything else (the
//! searcher, the clock) is created fresh for every move request.
//!
//! A move request goes through:
//!
//! 1. **Opening**: with no previous move the engine answers the center
//!    without searching
//! 2. **Iterative deepening**: alpha-beta at increasing depth until the
//!    deadline, a forced win or the end of the search space
//! 3. **Hold**: optionally block until the deadline has fully elapsed
//!
//! # Example
//!
//! ```
//! use kinarow::{AIEngine, Board, EngineConfig, GameConfig, Piece, Pos};
//!
//! let game = GameConfig::connect_four();
//! let mut engine = AIEngine::new(game, EngineConfig::with_deadline(100).hold(false));
//! let mut board = Board::new(game.cols, game.rows);
//!
//! // The opponent opened in the center column
//! board.place_stone(Pos::new(3, 0), Piece::Opponent);
//!
//! let result = engine.get_move_with_stats(&mut board, Some(Pos::new(3, 0)));
//! println!("Best move: {:?}", result.best_move);
//! println!("Depth: {} ({})", result.depth, result.search_type);
//! ```

use std::fmt;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::board::{Board, Pos};
use crate::config::{EngineConfig, GameConfig};
use crate::eval::evaluate;
use crate::search::{iterative_deepening, BestPath, Searcher, StopReason, TimeControl};

/// Which path produced the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Center move for the first move of the game, no search
    Opening,
    /// Iterative deepening alpha-beta
    IterativeDeepening,
}

impl fmt::Display for SearchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchType::Opening => f.write_str("opening"),
            SearchType::IterativeDeepening => f.write_str("iterative deepening"),
        }
    }
}

/// Result of a move request with search statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Chosen move, `None` only if the board has no empty cell
    pub best_move: Option<Pos>,
    /// Score of the accepted depth (static score for the opening)
    pub score: i32,
    pub search_type: SearchType,
    /// Last accepted depth
    pub depth: u32,
    /// Nodes searched
    pub nodes: u64,
    /// Time spent deciding, excluding the hold, in milliseconds
    pub time_ms: u64,
    /// Why deepening stopped (`None` for the opening)
    pub stop_reason: Option<StopReason>,
    /// Best move followed by the expected continuation
    pub expected_path: Vec<Pos>,
}

impl MoveResult {
    #[inline]
    fn opening(pos: Pos, score: i32, time_ms: u64) -> Self {
        Self {
            best_move: Some(pos),
            score,
            search_type: SearchType::Opening,
            depth: 0,
            nodes: 0,
            time_ms,
            stop_reason: None,
            expected_path: Vec::new(),
        }
    }
}

/// AI engine session for one game.
///
/// The engine always plays `Piece::Player` against `Piece::Opponent`.
///
/// # Example
///
/// ```
/// use kinarow::{AIEngine, Board, EngineConfig, GameConfig};
///
/// let game = GameConfig::tic_tac_toe();
/// let mut engine = AIEngine::new(game, EngineConfig::with_deadline(50).hold(false));
/// let mut board = Board::new(3, 3);
///
/// // Moving first: the center, without searching
/// assert_eq!(engine.get_move(&mut board, None), Some(board.center(false)));
/// ```
pub struct AIEngine {
    game: GameConfig,
    config: EngineConfig,
    /// Best path from the last accepted search depth
    best_path: BestPath,
    rng: StdRng,
}

impl AIEngine {
    #[must_use]
    pub fn new(game: GameConfig, config: EngineConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            game,
            config,
            best_path: BestPath::new(),
            rng,
        }
    }

    /// Pick the next move for `Piece::Player`.
    ///
    /// See [`get_move_with_stats`](Self::get_move_with_stats).
    #[must_use]
    pub fn get_move(&mut self, board: &mut Board, last_move: Option<Pos>) -> Option<Pos> {
        self.get_move_with_stats(board, last_move).best_move
    }

    /// Pick the next move and report how it was found.
    ///
    /// `last_move` is the opponent's previous move, `None` when the engine
    /// moves first. The board is used as scratch space during the search
    /// and is restored before this returns.
    #[must_use]
    pub fn get_move_with_stats(&mut self, board: &mut Board, last_move: Option<Pos>) -> MoveResult {
        let time = TimeControl::from_millis(self.config.deadline_ms);
        self.get_move_within(board, last_move, time)
    }

    /// Like [`get_move_with_stats`](Self::get_move_with_stats), but on a
    /// clock the caller already holds, typically to keep a [`StopHandle`]
    /// for cancelling from another thread.
    ///
    /// [`StopHandle`]: crate::search::StopHandle
    #[must_use]
    pub fn get_move_within(
        &mut self,
        board: &mut Board,
        last_move: Option<Pos>,
        time: TimeControl,
    ) -> MoveResult {
        log::debug!("expected path from last turn: {:?}", self.best_path.moves());

        let result = match self.opening_move(board, last_move) {
            Some(center) => {
                log::debug!("opening move {}", center);
                MoveResult::opening(center, evaluate(board, self.game.k), elapsed_ms(&time))
            }
            None => self.search(board, &time),
        };

        log::debug!(
            "{:?} in {}ms via {} (depth {}, {} nodes)",
            result.best_move,
            result.time_ms,
            result.search_type,
            result.depth,
            result.nodes
        );

        if self.config.hold_until_deadline {
            time.wait_until_deadline();
        }
        result
    }

    /// The fixed opening: center column under gravity, center cell otherwise.
    /// Only taken when the center is actually playable.
    fn opening_move(&self, board: &Board, last_move: Option<Pos>) -> Option<Pos> {
        if last_move.is_some() || board.cells() == 0 {
            return None;
        }
        let center = board.center(self.game.gravity);
        let playable = if self.game.gravity {
            board.drop_cell(center.col) == Some(center)
        } else {
            board.is_empty(center)
        };
        playable.then_some(center)
    }

    fn search(&mut self, board: &mut Board, time: &TimeControl) -> MoveResult {
        let mut searcher = Searcher::new(self.game.k, self.game.gravity, time.clone());
        let outcome = iterative_deepening(
            &mut searcher,
            board,
            &mut self.best_path,
            &mut self.rng,
            self.config.max_depth,
        );

        log::debug!(
            "deepening stopped: {} after depth {}",
            outcome.stop_reason,
            outcome.max_depth_started
        );

        MoveResult {
            best_move: outcome.best_move,
            score: outcome.score,
            search_type: SearchType::IterativeDeepening,
            depth: outcome.depth,
            nodes: outcome.nodes,
            time_ms: elapsed_ms(time),
            stop_reason: Some(outcome.stop_reason),
            expected_path: self.best_path.moves().to_vec(),
        }
    }

    /// Best move and continuation from the last accepted search depth.
    pub fn expected_path(&self) -> &[Pos] {
        self.best_path.moves()
    }

    /// Forget the cached best path. Call this when starting a new game.
    pub fn clear_cache(&mut self) {
        self.best_path.clear();
    }

    pub fn set_time_limit(&mut self, deadline_ms: u64) {
        self.config.deadline_ms = deadline_ms;
    }

    pub fn game(&self) -> &GameConfig {
        &self.game
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new(GameConfig::default(), EngineConfig::default())
    }
}

#[inline]
fn elapsed_ms(time: &TimeControl) -> u64 {
    u64::try_from(time.elapsed().as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Piece;
    use crate::eval::Score;
    use std::time::Instant;

    fn quick(game: GameConfig) -> AIEngine {
        AIEngine::new(game, EngineConfig::with_deadline(200).hold(false).seed(5))
    }

    #[test]
    fn test_opening_gravity_center_column() {
        let game = GameConfig::connect_four();
        let mut engine = quick(game);
        let mut board = Board::new(7, 6);

        let result = engine.get_move_with_stats(&mut board, None);
        assert_eq!(result.best_move, Some(Pos::new(3, 0)));
        assert_eq!(result.search_type, SearchType::Opening);
        assert_eq!(result.nodes, 0);
        assert!(engine.expected_path().is_empty());
    }

    #[test]
    fn test_opening_free_center_cell() {
        let mut engine = quick(GameConfig::gomoku());
        let mut board = Board::new(15, 15);
        assert_eq!(engine.get_move(&mut board, None), Some(Pos::new(7, 7)));
    }

    #[test]
    fn test_occupied_center_falls_back_to_search() {
        let mut engine = quick(GameConfig::tic_tac_toe());
        let mut board = Board::new(3, 3);
        board.place_stone(Pos::new(1, 1), Piece::Opponent);

        let result = engine.get_move_with_stats(&mut board, None);
        assert_eq!(result.search_type, SearchType::IterativeDeepening);
        assert!(result.best_move.is_some_and(|m| board.is_empty(m)));
    }

    #[test]
    fn test_takes_winning_move() {
        let mut engine = quick(GameConfig::tic_tac_toe());
        let mut board = Board::new(3, 3);
        board.place_stone(Pos::new(0, 0), Piece::Player);
        board.place_stone(Pos::new(1, 1), Piece::Player);
        board.place_stone(Pos::new(0, 1), Piece::Opponent);
        board.place_stone(Pos::new(1, 0), Piece::Opponent);
        let before = board.clone();

        let result = engine.get_move_with_stats(&mut board, Some(Pos::new(1, 0)));
        assert_eq!(result.best_move, Some(Pos::new(2, 2)));
        assert_eq!(result.score, Score::MAX_WIN);
        assert_eq!(result.stop_reason, Some(StopReason::ForcedWin));
        assert_eq!(result.expected_path, vec![Pos::new(2, 2)]);
        assert_eq!(board, before);
    }

    #[test]
    fn test_stopped_clock_answers_without_holding() {
        let game = GameConfig::connect_four();
        let mut engine = AIEngine::new(game, EngineConfig::with_deadline(60_000).seed(5));
        let mut board = Board::new(7, 6);
        board.place_stone(Pos::new(3, 0), Piece::Opponent);

        let time = TimeControl::from_millis(60_000);
        time.stop_handle().stop();
        let start = Instant::now();
        let result = engine.get_move_within(&mut board, Some(Pos::new(3, 0)), time);

        assert!(start.elapsed().as_secs() < 5);
        assert_eq!(result.stop_reason, Some(StopReason::TimedOut));
        assert_eq!(result.depth, 0);
        assert!(result.best_move.is_some_and(|m| board.is_empty(m)));
        assert!(engine.expected_path().is_empty());
    }

    #[test]
    fn test_gravity_completes_row() {
        let game = GameConfig::new(4, 2, 3, true);
        let mut engine = quick(game);
        let mut board = Board::new(4, 2);
        board.place_stone(Pos::new(0, 0), Piece::Player);
        board.place_stone(Pos::new(1, 0), Piece::Player);
        board.place_stone(Pos::new(0, 1), Piece::Opponent);
        board.place_stone(Pos::new(1, 1), Piece::Opponent);

        let result = engine.get_move_with_stats(&mut board, Some(Pos::new(1, 1)));
        assert_eq!(result.best_move, Some(Pos::new(2, 0)));
        assert_eq!(result.score, Score::MAX_WIN);
    }

    #[test]
    fn test_holds_until_deadline() {
        let game = GameConfig::tic_tac_toe();
        let mut engine = AIEngine::new(game, EngineConfig::with_deadline(120).seed(1));
        let mut board = Board::new(3, 3);

        let start = Instant::now();
        let _ = engine.get_move(&mut board, None);
        assert!(start.elapsed().as_millis() >= 120);
    }

    #[test]
    fn test_no_hold_returns_early() {
        let game = GameConfig::tic_tac_toe();
        let mut engine = AIEngine::new(game, EngineConfig::with_deadline(5_000).hold(false));
        let mut board = Board::new(3, 3);

        let start = Instant::now();
        let _ = engine.get_move(&mut board, None);
        assert!(start.elapsed().as_millis() < 5_000);
    }

    #[test]
    fn test_full_board_has_no_move() {
        let game = GameConfig::new(2, 1, 2, false);
        let mut engine = quick(game);
        let mut board = Board::new(2, 1);
        board.place_stone(Pos::new(0, 0), Piece::Player);
        board.place_stone(Pos::new(1, 0), Piece::Opponent);

        let result = engine.get_move_with_stats(&mut board, Some(Pos::new(1, 0)));
        assert_eq!(result.best_move, None);
        assert_eq!(result.stop_reason, Some(StopReason::NoMoves));
    }

    #[test]
    fn test_session_keeps_path_between_turns() {
        let game = GameConfig::connect_four();
        let mut engine = AIEngine::new(
            game,
            EngineConfig::with_deadline(10_000).hold(false).max_depth(4).seed(3),
        );
        let mut board = Board::new(7, 6);
        board.place_stone(Pos::new(3, 0), Piece::Opponent);

        let first = engine.get_move_with_stats(&mut board, Some(Pos::new(3, 0)));
        assert_eq!(first.stop_reason, Some(StopReason::DepthLimit));
        assert_eq!(first.depth, 4);
        assert_eq!(engine.expected_path().first().copied(), first.best_move);
        assert_eq!(engine.expected_path(), first.expected_path.as_slice());

        engine.clear_cache();
        assert!(engine.expected_path().is_empty());
    }

    #[test]
    fn test_engine_plays_legal_moves_to_the_end() {
        let game = GameConfig::new(4, 4, 3, true);
        let mut engine = AIEngine::new(
            game,
            EngineConfig::with_deadline(1_000).hold(false).max_depth(3).seed(7),
        );
        let mut board = Board::new(4, 4);
        let mut last = None;
        let mut side = Piece::Player;

        while !board.is_full() && crate::rules::check_winner(&board, 3).is_none() {
            let view = if side == Piece::Player {
                board.clone()
            } else {
                board.with_sides_swapped()
            };
            let mut scratch = view.clone();
            let mv = engine
                .get_move(&mut scratch, last)
                .expect("board has an empty cell");
            assert_eq!(scratch, view);
            assert!(crate::rules::is_valid_move(&board, mv, true), "{mv} is not legal");
            board.place_stone(mv, side);
            last = Some(mv);
            side = side.opponent();
        }
    }
}

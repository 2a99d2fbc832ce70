//! Game state management for the k-in-a-row GUI
//!
//! The GUI board stores the first mover as `Piece::Player` and the second
//! mover as `Piece::Opponent`. The engine always plays `Piece::Player`, so
//! when it moves second it is handed a side-swapped copy of the board.

use crate::rules::{check_move, column_move, find_winning_line, is_draw};
use crate::search::{StopHandle, TimeControl};
use crate::{AIEngine, Board, EngineConfig, GameConfig, MoveResult, Piece, PlayError, Pos};
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

/// Deadline choices offered in the menu, in milliseconds
pub const DEADLINE_CHOICES: [u64; 3] = [250, 1000, 3000];

/// Deadline for hotseat hints
const HINT_DEADLINE_MS: u64 = 200;

/// Seat at the table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    First,
    Second,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }

    /// Piece this side owns on the GUI board
    pub fn piece(self) -> Piece {
        match self {
            Side::First => Piece::Player,
            Side::Second => Piece::Opponent,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Side::First => "Red",
            Side::Second => "Yellow",
        }
    }
}

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Player vs AI
    PvE { human: Side },
    /// Player vs Player (hotseat)
    PvP { show_suggestions: bool },
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::PvE { human: Side::First }
    }
}

/// AI computation state. The engine session travels to the worker thread
/// and comes back with its answer.
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<(AIEngine, MoveResult)>,
        start_time: Instant,
        stop: StopHandle,
    },
}

/// Game result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameResult {
    /// `None` for a draw
    pub winner: Option<Side>,
    pub winning_line: Option<Vec<Pos>>,
}

/// Move timer for tracking thinking time
pub struct MoveTimer {
    pub start_time: Option<Instant>,
    pub last_move_duration: Option<Duration>,
    pub ai_thinking_time: Option<Duration>,
}

impl Default for MoveTimer {
    fn default() -> Self {
        Self {
            start_time: Some(Instant::now()),
            last_move_duration: None,
            ai_thinking_time: None,
        }
    }
}

impl MoveTimer {
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn stop(&mut self) -> Duration {
        let duration = self.elapsed();
        self.last_move_duration = Some(duration);
        self.start_time = None;
        duration
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.map_or(Duration::ZERO, |t| t.elapsed())
    }

    pub fn set_ai_time(&mut self, duration: Duration) {
        self.ai_thinking_time = Some(duration);
    }
}

/// Main game state
pub struct GameState {
    pub game: GameConfig,
    pub board: Board,
    pub mode: GameMode,
    pub current_turn: Side,
    pub game_over: Option<GameResult>,
    pub last_move: Option<Pos>,
    pub move_history: Vec<(Pos, Side)>,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    pub move_timer: MoveTimer,
    pub suggested_move: Option<Pos>,
    pub message: Option<String>,

    /// Engine session, `None` while it is out on the worker thread
    engine: Option<AIEngine>,
    deadline_ms: u64,
}

impl GameState {
    pub fn new(game: GameConfig, mode: GameMode) -> Self {
        let deadline_ms = DEADLINE_CHOICES[1];
        log::info!("new game: {} ({:?})", game.label(), mode);
        Self {
            game,
            board: Board::new(game.cols, game.rows),
            mode,
            current_turn: Side::First,
            game_over: None,
            last_move: None,
            move_history: Vec::new(),
            last_ai_result: None,
            ai_state: AiState::Idle,
            move_timer: MoveTimer::default(),
            suggested_move: None,
            message: None,
            engine: Some(new_engine(game, deadline_ms)),
            deadline_ms,
        }
    }

    /// Start over with the same game and mode and a fresh engine session.
    pub fn reset(&mut self) {
        *self = Self::new_with_deadline(self.game, self.mode, self.deadline_ms);
    }

    fn new_with_deadline(game: GameConfig, mode: GameMode, deadline_ms: u64) -> Self {
        let mut state = Self::new(game, mode);
        state.set_deadline(deadline_ms);
        state
    }

    pub fn deadline_ms(&self) -> u64 {
        self.deadline_ms
    }

    /// Applies from the next AI move on.
    pub fn set_deadline(&mut self, deadline_ms: u64) {
        self.deadline_ms = deadline_ms;
        if let Some(engine) = self.engine.as_mut() {
            engine.set_time_limit(deadline_ms);
        }
    }

    /// Check if it's the human's turn
    pub fn is_human_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human } => self.current_turn == human,
            GameMode::PvP { .. } => true,
        }
    }

    /// Check if it's the AI's turn
    pub fn is_ai_turn(&self) -> bool {
        !self.is_human_turn()
    }

    /// Check if AI is currently thinking
    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Expected continuation from the engine's last accepted search
    pub fn expected_path(&self) -> &[Pos] {
        self.engine.as_ref().map_or(&[], |e| e.expected_path())
    }

    /// Attempt a human move. Under gravity any cell of a column selects
    /// that column.
    pub fn try_place_stone(&mut self, pos: Pos) -> Result<(), PlayError> {
        if self.game_over.is_some() {
            return Err(PlayError::GameOver);
        }
        if self.is_ai_thinking() {
            return Err(PlayError::AiThinking);
        }
        if !self.is_human_turn() {
            return Err(PlayError::NotYourTurn);
        }

        let target = if self.game.gravity {
            column_move(&self.board, pos.col)?
        } else {
            pos
        };
        check_move(&self.board, target, self.game.gravity)?;

        self.execute_move(target);
        Ok(())
    }

    /// Execute a move (for both human and AI)
    fn execute_move(&mut self, pos: Pos) {
        let side = self.current_turn;

        self.board.place_stone(pos, side.piece());
        self.move_history.push((pos, side));
        self.last_move = Some(pos);
        self.suggested_move = None;
        self.move_timer.stop();

        if let Some(result) = self.check_game_end(pos, side) {
            match result.winner {
                Some(winner) => log::info!("{} wins after {} moves", winner.name(), self.move_history.len()),
                None => log::info!("draw after {} moves", self.move_history.len()),
            }
            self.game_over = Some(result);
            return;
        }

        self.current_turn = side.opponent();
        self.move_timer.start();
        self.message = None;
    }

    fn check_game_end(&self, pos: Pos, side: Side) -> Option<GameResult> {
        if let Some(line) = find_winning_line(&self.board, pos, side.piece(), self.game.k) {
            return Some(GameResult {
                winner: Some(side),
                winning_line: Some(line),
            });
        }
        is_draw(&self.board, self.game.k).then_some(GameResult {
            winner: None,
            winning_line: None,
        })
    }

    /// The board as seen by `side` playing `Piece::Player`
    fn view_for(&self, side: Side) -> Board {
        match side {
            Side::First => self.board.clone(),
            Side::Second => self.board.with_sides_swapped(),
        }
    }

    /// Hand the engine to a worker thread for the current side.
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() || self.game_over.is_some() {
            return;
        }
        let Some(mut engine) = self.engine.take() else {
            return;
        };

        let mut board = self.view_for(self.current_turn);
        let last_move = self.last_move;
        let (tx, rx) = channel();
        let time = TimeControl::from_millis(self.deadline_ms);
        let stop = time.stop_handle();

        thread::spawn(move || {
            let result = engine.get_move_within(&mut board, last_move, time);
            let _ = tx.send((engine, result));
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
            stop,
        };
    }

    /// Stop a running AI search and drop its answer. The session went
    /// with the worker, so a fresh engine takes its place.
    pub fn cancel_ai_thinking(&mut self) {
        if let AiState::Thinking { stop, .. } = std::mem::replace(&mut self.ai_state, AiState::Idle) {
            stop.stop();
            log::info!("AI search cancelled");
            self.engine = Some(new_engine(self.game, self.deadline_ms));
        }
    }

    /// Collect the AI's answer if it is ready
    pub fn check_ai_result(&mut self) {
        let (engine, move_result, elapsed) = match &self.ai_state {
            AiState::Thinking {
                receiver,
                start_time,
                ..
            } => match receiver.try_recv() {
                Ok((engine, result)) => (engine, result, start_time.elapsed()),
                Err(TryRecvError::Empty) => return,
                Err(TryRecvError::Disconnected) => {
                    log::warn!("AI worker thread exited without an answer");
                    self.ai_state = AiState::Idle;
                    self.engine = Some(new_engine(self.game, self.deadline_ms));
                    self.message = Some("AI error".to_string());
                    return;
                }
            },
            AiState::Idle => return,
        };

        self.ai_state = AiState::Idle;
        self.engine = Some(engine);
        self.last_ai_result = Some(move_result.clone());
        self.move_timer.set_ai_time(elapsed);

        match move_result.best_move {
            Some(pos) if check_move(&self.board, pos, self.game.gravity).is_ok() => {
                self.execute_move(pos);
            }
            Some(pos) => self.message = Some(format!("AI chose an illegal move {pos}")),
            None => self.message = Some("AI could not find a move".to_string()),
        }
    }

    /// Get AI thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }

    /// Request a move suggestion in hotseat mode
    pub fn request_suggestion(&mut self) {
        if self.game_over.is_some() || self.is_ai_thinking() {
            return;
        }

        let mut board = self.view_for(self.current_turn);
        let mut engine = AIEngine::new(
            self.game,
            EngineConfig::with_deadline(HINT_DEADLINE_MS).hold(false),
        );
        let result = engine.get_move_with_stats(&mut board, self.last_move);

        self.suggested_move = result.best_move;
        self.last_ai_result = Some(result);
    }

    /// Undo last move
    pub fn undo(&mut self) {
        if self.move_history.is_empty() {
            return;
        }
        self.cancel_ai_thinking();

        // Against the AI, take back the AI reply together with the human move
        let undo_count = match self.mode {
            GameMode::PvE { human } => {
                let last_side = self.move_history.last().map(|&(_, side)| side);
                if last_side != Some(human) && self.move_history.len() >= 2 {
                    2
                } else {
                    1
                }
            }
            GameMode::PvP { .. } => 1,
        };

        // Reset and replay
        let keep = self.move_history.len().saturating_sub(undo_count);
        let moves: Vec<_> = self.move_history.drain(..keep).collect();

        self.board = Board::new(self.game.cols, self.game.rows);
        self.current_turn = Side::First;
        self.game_over = None;
        self.last_move = None;
        self.suggested_move = None;
        self.move_history.clear();

        for (pos, side) in moves {
            self.board.place_stone(pos, side.piece());
            self.move_history.push((pos, side));
            self.last_move = Some(pos);
            self.current_turn = side.opponent();
        }

        // The cached path belongs to a line that was taken back
        if let Some(engine) = self.engine.as_mut() {
            engine.clear_cache();
        }
        self.move_timer.start();
    }
}

impl Drop for GameState {
    fn drop(&mut self) {
        if let AiState::Thinking { stop, .. } = &self.ai_state {
            stop.stop();
        }
    }
}

fn new_engine(game: GameConfig, deadline_ms: u64) -> AIEngine {
    AIEngine::new(game, EngineConfig::with_deadline(deadline_ms))
}

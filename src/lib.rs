//! k-in-a-row decision engine
//!
//! Picks the next move for one side of a generalized k-in-a-row game on a
//! rectangular board, under either rule variant:
//! - Gravity: a move names a column and the piece drops to its lowest empty
//!   cell (Connect Four)
//! - Free placement: a move names any empty cell (Gomoku, tic-tac-toe)
//!
//! The engine answers within a wall-clock deadline using iterative deepening
//! alpha-beta search against an optimal opponent.
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation with bitboards
//! - [`rules`]: Move legality and win detection for drivers
//! - [`eval`]: Line scanning and static evaluation
//! - [`search`]: Move ordering, alpha-beta, iterative deepening, time control
//! - [`engine`]: The per-game session integrating all components
//! - [`config`] and [`error`]: Game presets, engine settings, error types
//! - [`ui`]: eframe play driver
//!
//! # Quick Start
//!
//! ```
//! use kinarow::{AIEngine, Board, EngineConfig, GameConfig, Piece, Pos};
//!
//! let game = GameConfig::connect_four();
//! let mut engine = AIEngine::new(game, EngineConfig::with_deadline(100).hold(false));
//! let mut board = Board::new(game.cols, game.rows);
//!
//! // Opponent drops into column 2
//! board.place_stone(Pos::new(2, 0), Piece::Opponent);
//!
//! // AI responds
//! if let Some(pos) = engine.get_move(&mut board, Some(Pos::new(2, 0))) {
//!     board.place_stone(pos, Piece::Player);
//!     println!("AI plays at {pos}");
//! }
//! ```
//!
//! # Search
//!
//! - Moves are ordered by the previous best path, then cells next to
//!   existing pieces, then everything else
//! - Each accepted depth refreshes the best path kept by the session
//! - Timeout is a latched flag polled between sibling moves
//! - By default the answer is held until the deadline has passed

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Piece, Pos};
pub use config::{EngineConfig, GameConfig};
pub use engine::{AIEngine, MoveResult, SearchType};
pub use error::{ConfigError, PlayError};
pub use search::StopReason;

//! Search module for the k-in-a-row engine
//!
//! Contains:
//! - Ordered candidate move generation
//! - Alpha-beta minimax over an in-place board
//! - Iterative deepening with best-path reordering
//! - Latched wall-clock time control

pub mod alphabeta;
pub mod best_path;
pub mod iterative;
pub mod movegen;
pub mod timer;

pub use alphabeta::{SearchResult, Searcher};
pub use best_path::BestPath;
pub use iterative::{iterative_deepening, DeepeningOutcome, StopReason};
pub use movegen::generate_moves;
pub use timer::{StopHandle, TimeControl};

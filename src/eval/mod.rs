//! Evaluation module for k-in-a-row positions
//!
//! Contains:
//! - Line scanning with contiguous and open streak accounting
//! - Full-board static evaluation over all four directions
//! - Win sentinels shared with the search

pub mod heuristic;
pub mod line;
pub mod score;

pub use heuristic::evaluate;
pub use line::{wins_in_line, LineScanner};
pub use score::Score;

//! GUI for playing k-in-a-row against the engine
//!
//! Built on egui/eframe. The engine runs on a background thread so the
//! window keeps repainting while it thinks.

mod app;
mod board_view;
mod game_state;
mod theme;

pub use app::KinarowApp;
pub use game_state::{GameMode, GameResult, GameState, Side, DEADLINE_CHOICES};

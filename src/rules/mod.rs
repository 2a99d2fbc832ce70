//! Game rules shared by drivers
//!
//! - Move legality under gravity and free placement
//! - k-in-a-row win detection

pub mod placement;
pub mod win;

pub use placement::{check_move, column_move, is_valid_move, legal_moves};
pub use win::{check_winner, find_run, find_winning_line, has_k_at_pos, is_draw};

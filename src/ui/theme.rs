//! Theme constants for the k-in-a-row GUI

use egui::Color32;

// Board colors
pub const BOARD_BG: Color32 = Color32::from_rgb(36, 82, 160);
pub const CELL_HOLE: Color32 = Color32::from_rgb(24, 26, 30);
pub const GRID_LINE: Color32 = Color32::from_rgb(20, 50, 110);
pub const LABEL: Color32 = Color32::from_rgb(200, 210, 230);

// Piece colors: first mover and second mover
pub const FIRST_PIECE: Color32 = Color32::from_rgb(220, 50, 50);
pub const FIRST_PIECE_HIGHLIGHT: Color32 = Color32::from_rgb(245, 110, 100);
pub const SECOND_PIECE: Color32 = Color32::from_rgb(245, 200, 40);
pub const SECOND_PIECE_HIGHLIGHT: Color32 = Color32::from_rgb(255, 230, 120);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(250, 250, 252);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);
pub const PATH_MARKER: Color32 = Color32::from_rgb(150, 200, 255);

pub fn hover_invalid() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 50, 50, 100)
}

/// Translucent version of a piece color for previews and suggestions.
pub fn ghost(color: Color32) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), 110)
}

// Panel text
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Timer colors
pub const TIMER_NORMAL: Color32 = Color32::from_rgb(80, 200, 120);
pub const TIMER_WARNING: Color32 = Color32::from_rgb(255, 180, 50);
pub const TIMER_CRITICAL: Color32 = Color32::from_rgb(255, 70, 70);

// Sizes
pub const BOARD_MARGIN: f32 = 28.0;
pub const PIECE_RADIUS_RATIO: f32 = 0.4;
pub const GRID_LINE_WIDTH: f32 = 1.0;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 4.0;

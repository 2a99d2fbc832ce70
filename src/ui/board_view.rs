//! Board rendering for the k-in-a-row GUI
//!
//! Cells are drawn as holes in a frame with row 0 at the bottom, so gravity
//! games look like a standing Connect Four rack.

use crate::{Board, Piece, Pos};
use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;

/// What the board view should highlight this frame.
pub struct Overlay<'a> {
    pub current_turn: Piece,
    pub last_move: Option<Pos>,
    pub suggested_move: Option<Pos>,
    pub winning_line: Option<&'a [Pos]>,
    /// Engine's expected continuation, numbered on the board
    pub expected_path: &'a [Pos],
    pub game_over: bool,
}

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
    cols: u8,
    rows: u8,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 30.0,
            board_rect: Rect::NOTHING,
            cols: 0,
            rows: 0,
        }
    }
}

impl BoardView {
    /// Render the board and return the target cell of a click, if any.
    ///
    /// Under gravity hovering or clicking anywhere in a column targets that
    /// column's drop cell.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        gravity: bool,
        overlay: &Overlay<'_>,
    ) -> Option<Pos> {
        self.cols = board.cols();
        self.rows = board.rows();
        if self.cols == 0 || self.rows == 0 {
            return None;
        }

        let available = ui.available_size() - Vec2::splat(20.0);
        let cell_w = (available.x - 2.0 * BOARD_MARGIN) / f32::from(self.cols);
        let cell_h = (available.y - 2.0 * BOARD_MARGIN) / f32::from(self.rows);
        self.cell_size = cell_w.min(cell_h).max(8.0);

        let size = Vec2::new(
            self.cell_size * f32::from(self.cols) + 2.0 * BOARD_MARGIN,
            self.cell_size * f32::from(self.rows) + 2.0 * BOARD_MARGIN,
        );
        let (response, painter) = ui.allocate_painter(size, Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(6), BOARD_BG);
        self.draw_grid(&painter);
        self.draw_coordinates(&painter);
        self.draw_pieces(&painter, board);

        if let Some(pos) = overlay.last_move {
            painter.circle_filled(self.board_to_screen(pos), LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
        }
        if let Some(line) = overlay.winning_line {
            self.draw_winning_line(&painter, line);
        }
        if !overlay.game_over {
            self.draw_expected_path(&painter, board, overlay.expected_path);
        }
        if let Some(pos) = overlay.suggested_move {
            self.draw_suggestion(&painter, pos, overlay.current_turn);
        }

        if overlay.game_over {
            return None;
        }

        // Hover preview and click
        let hovered = response.hover_pos().and_then(|p| self.screen_to_board(p))?;
        let target = if gravity {
            board.drop_cell(hovered.col)
        } else {
            board.is_empty(hovered).then_some(hovered)
        };

        match target {
            Some(cell) => {
                let radius = self.cell_size * PIECE_RADIUS_RATIO;
                painter.circle_filled(
                    self.board_to_screen(cell),
                    radius,
                    ghost(piece_color(overlay.current_turn)),
                );
            }
            None => {
                let radius = self.cell_size * PIECE_RADIUS_RATIO;
                painter.circle_filled(self.board_to_screen(hovered), radius, hover_invalid());
            }
        }

        if response.clicked() {
            target
        } else {
            None
        }
    }

    /// Draw the frame lines between cells
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let origin = self.board_rect.min + Vec2::splat(BOARD_MARGIN);
        let width = self.cell_size * f32::from(self.cols);
        let height = self.cell_size * f32::from(self.rows);

        for col in 0..=self.cols {
            let x = f32::from(col) * self.cell_size;
            painter.line_segment(
                [origin + Vec2::new(x, 0.0), origin + Vec2::new(x, height)],
                stroke,
            );
        }
        for row in 0..=self.rows {
            let y = f32::from(row) * self.cell_size;
            painter.line_segment(
                [origin + Vec2::new(0.0, y), origin + Vec2::new(width, y)],
                stroke,
            );
        }
    }

    /// Column numbers below the board, row numbers on the left (both 0-based)
    fn draw_coordinates(&self, painter: &Painter) {
        let font = egui::FontId::proportional(12.0);

        for col in 0..self.cols {
            let center = self.board_to_screen(Pos::new(col, 0));
            let pos = Pos2::new(center.x, self.board_rect.max.y - BOARD_MARGIN * 0.5);
            painter.text(pos, egui::Align2::CENTER_CENTER, col, font.clone(), LABEL);
        }
        for row in 0..self.rows {
            let center = self.board_to_screen(Pos::new(0, row));
            let pos = Pos2::new(self.board_rect.min.x + BOARD_MARGIN * 0.5, center.y);
            painter.text(pos, egui::Align2::CENTER_CENTER, row, font.clone(), LABEL);
        }
    }

    fn draw_pieces(&self, painter: &Painter, board: &Board) {
        let radius = self.cell_size * PIECE_RADIUS_RATIO;
        for col in 0..self.cols {
            for row in 0..self.rows {
                let pos = Pos::new(col, row);
                let center = self.board_to_screen(pos);
                match board.get(pos) {
                    Piece::Empty => {
                        painter.circle_filled(center, radius, CELL_HOLE);
                    }
                    piece => self.draw_piece(painter, center, piece),
                }
            }
        }
    }

    fn draw_piece(&self, painter: &Painter, center: Pos2, piece: Piece) {
        let radius = self.cell_size * PIECE_RADIUS_RATIO;
        let highlight = match piece {
            Piece::Player => FIRST_PIECE_HIGHLIGHT,
            Piece::Opponent => SECOND_PIECE_HIGHLIGHT,
            Piece::Empty => return,
        };

        // Shadow
        painter.circle_filled(
            center + Vec2::new(2.0, 2.0),
            radius,
            Color32::from_rgba_unmultiplied(0, 0, 0, 60),
        );
        painter.circle_filled(center, radius, piece_color(piece));
        painter.circle_filled(
            center + Vec2::new(-radius * 0.3, -radius * 0.3),
            radius * 0.2,
            highlight,
        );
    }

    fn draw_winning_line(&self, painter: &Painter, line: &[Pos]) {
        let stroke = Stroke::new(4.0, WIN_HIGHLIGHT);

        for pair in line.windows(2) {
            painter.line_segment(
                [self.board_to_screen(pair[0]), self.board_to_screen(pair[1])],
                stroke,
            );
        }
        let radius = self.cell_size * PIECE_RADIUS_RATIO + 3.0;
        for &pos in line {
            painter.circle_stroke(self.board_to_screen(pos), radius, stroke);
        }
    }

    /// Number the cells the engine expects to be played next
    fn draw_expected_path(&self, painter: &Painter, board: &Board, path: &[Pos]) {
        let font = egui::FontId::proportional(11.0);
        for (i, &pos) in path.iter().enumerate() {
            if !board.contains(pos) || !board.is_empty(pos) {
                continue;
            }
            painter.text(
                self.board_to_screen(pos),
                egui::Align2::CENTER_CENTER,
                i + 1,
                font.clone(),
                PATH_MARKER,
            );
        }
    }

    fn draw_suggestion(&self, painter: &Painter, pos: Pos, turn: Piece) {
        if turn == Piece::Empty {
            return;
        }
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * PIECE_RADIUS_RATIO;
        painter.circle_filled(center, radius, ghost(piece_color(turn)));
        painter.text(
            center,
            egui::Align2::CENTER_CENTER,
            "?",
            egui::FontId::proportional(14.0),
            TEXT_PRIMARY,
        );
    }

    /// Convert screen coordinates to a cell
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min - Vec2::splat(BOARD_MARGIN);
        let col = (relative.x / self.cell_size).floor();
        let from_top = (relative.y / self.cell_size).floor();

        if col < 0.0 || from_top < 0.0 || col >= f32::from(self.cols) || from_top >= f32::from(self.rows) {
            return None;
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let (col, from_top) = (col as u8, from_top as u8);
        Some(Pos::new(col, self.rows - 1 - from_top))
    }

    /// Center of a cell on screen
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        let from_top = f32::from(self.rows - 1 - pos.row);
        Pos2::new(
            self.board_rect.min.x + BOARD_MARGIN + (f32::from(pos.col) + 0.5) * self.cell_size,
            self.board_rect.min.y + BOARD_MARGIN + (from_top + 0.5) * self.cell_size,
        )
    }
}

fn piece_color(piece: Piece) -> Color32 {
    match piece {
        Piece::Player => FIRST_PIECE,
        Piece::Opponent => SECOND_PIECE,
        Piece::Empty => CELL_HOLE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(cols: u8, rows: u8) -> BoardView {
        BoardView {
            cell_size: 40.0,
            board_rect: Rect::from_min_size(Pos2::ZERO, Vec2::splat(1000.0)),
            cols,
            rows,
        }
    }

    #[test]
    fn test_row_zero_is_drawn_at_the_bottom() {
        let view = view(7, 6);
        let bottom = view.board_to_screen(Pos::new(0, 0));
        let top = view.board_to_screen(Pos::new(0, 5));
        assert!(bottom.y > top.y);
    }

    #[test]
    fn test_screen_mapping_round_trips_every_cell() {
        let view = view(7, 6);
        for col in 0..7 {
            for row in 0..6 {
                let pos = Pos::new(col, row);
                assert_eq!(view.screen_to_board(view.board_to_screen(pos)), Some(pos));
            }
        }
        assert_eq!(view.screen_to_board(Pos2::new(1.0, 1.0)), None);
        assert_eq!(view.screen_to_board(Pos2::new(900.0, 900.0)), None);
    }

    #[test]
    fn test_show_draws_a_mixed_board_headless() {
        let mut board = Board::new(7, 6);
        board.place_stone(Pos::new(3, 0), Piece::Player);
        board.place_stone(Pos::new(3, 1), Piece::Opponent);
        let path = [Pos::new(2, 0), Pos::new(4, 0)];
        let overlay = Overlay {
            current_turn: Piece::Player,
            last_move: Some(Pos::new(3, 1)),
            suggested_move: Some(Pos::new(2, 0)),
            winning_line: None,
            expected_path: &path,
            game_over: false,
        };

        let mut view = BoardView::default();
        let ctx = egui::Context::default();
        let mut clicked = None;
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                clicked = view.show(ui, &board, true, &overlay);
            });
        });
        assert_eq!(clicked, None);
        assert_eq!((view.cols, view.rows), (7, 6));
    }
}

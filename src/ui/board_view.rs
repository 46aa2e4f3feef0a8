//! Board rendering for the tic-tac-toe GUI

use crate::rules::Line;
use crate::{Board, Cell, Pos, BOARD_SIZE};
use egui::{CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Grid drawing area (board minus margin)
    grid_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 100.0,
            grid_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell if any.
    ///
    /// Clicks are only reported while `accepting_input` is set.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        winning_line: Option<Line>,
        accepting_input: bool,
    ) -> Option<Pos> {
        let available_size = ui.available_size();
        let board_size = (available_size.x.min(available_size.y) - 20.0).max(60.0);
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / BOARD_SIZE as f32;

        let (response, painter) =
            ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());

        painter.rect_filled(response.rect, CornerRadius::same(8), BOARD_BG);
        self.grid_rect = response.rect.shrink(BOARD_MARGIN);

        self.draw_grid(&painter);
        self.draw_marks(&painter, board);

        if let Some(line) = winning_line {
            self.draw_winning_line(&painter, line);
        }

        let mut clicked_pos = None;

        if accepting_input {
            if let Some(pointer_pos) = response.hover_pos() {
                if let Some(pos) = self.screen_to_board(pointer_pos) {
                    let hover_color = if board.get(pos) == Cell::Empty {
                        hover_valid()
                    } else {
                        hover_invalid()
                    };
                    painter.rect_filled(self.cell_rect(pos).shrink(4.0), CornerRadius::same(4), hover_color);

                    // Occupied cells are still reported; the engine decides validity
                    if response.clicked() {
                        clicked_pos = Some(pos);
                    }
                }
            }
        }

        clicked_pos
    }

    /// Draw the two inner lines in each direction
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let min = self.grid_rect.min;
        let span = self.cell_size * BOARD_SIZE as f32;

        for i in 1..BOARD_SIZE {
            let offset = i as f32 * self.cell_size;

            // Vertical line
            painter.line_segment(
                [min + Vec2::new(offset, 0.0), min + Vec2::new(offset, span)],
                stroke,
            );

            // Horizontal line
            painter.line_segment(
                [min + Vec2::new(0.0, offset), min + Vec2::new(span, offset)],
                stroke,
            );
        }
    }

    /// Draw all placed marks
    fn draw_marks(&self, painter: &Painter, board: &Board) {
        for (idx, cell) in board.cells().iter().enumerate() {
            self.draw_mark(painter, Pos::from_index(idx), *cell);
        }
    }

    fn draw_mark(&self, painter: &Painter, pos: Pos, cell: Cell) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * MARK_RADIUS_RATIO;

        match cell {
            Cell::X => {
                let stroke = Stroke::new(MARK_STROKE_WIDTH, X_MARK);
                let d = Vec2::splat(radius);
                painter.line_segment([center - d, center + d], stroke);
                painter.line_segment(
                    [center + Vec2::new(-radius, radius), center + Vec2::new(radius, -radius)],
                    stroke,
                );
            }
            Cell::O => {
                painter.circle_stroke(center, radius, Stroke::new(MARK_STROKE_WIDTH, O_MARK));
            }
            Cell::Empty => {}
        }
    }

    /// Strike through the winning line
    fn draw_winning_line(&self, painter: &Painter, line: Line) {
        let start = self.board_to_screen(Pos::from_index(line[0]));
        let end = self.board_to_screen(Pos::from_index(line[2]));
        painter.line_segment([start, end], Stroke::new(WIN_LINE_WIDTH, WIN_HIGHLIGHT));
    }

    fn cell_rect(&self, pos: Pos) -> Rect {
        Rect::from_center_size(self.board_to_screen(pos), Vec2::splat(self.cell_size))
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.grid_rect.min;
        let col = (relative.x / self.cell_size).floor() as i32;
        let row = (relative.y / self.cell_size).floor() as i32;

        if Pos::is_valid(row, col) {
            Some(Pos::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Convert board position to the screen center of its cell
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        let x = self.grid_rect.min.x + (pos.col as f32 + 0.5) * self.cell_size;
        let y = self.grid_rect.min.y + (pos.row as f32 + 0.5) * self.cell_size;
        Pos2::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view_at_origin() -> BoardView {
        BoardView {
            cell_size: 100.0,
            grid_rect: Rect::from_min_size(Pos2::ZERO, Vec2::splat(300.0)),
        }
    }

    #[test]
    fn test_screen_to_board_maps_cells() {
        let view = view_at_origin();
        assert_eq!(view.screen_to_board(Pos2::new(10.0, 10.0)), Some(Pos::new(0, 0)));
        assert_eq!(view.screen_to_board(Pos2::new(150.0, 150.0)), Some(Pos::new(1, 1)));
        assert_eq!(view.screen_to_board(Pos2::new(299.0, 105.0)), Some(Pos::new(1, 2)));
    }

    #[test]
    fn test_screen_to_board_outside_grid() {
        let view = view_at_origin();
        assert_eq!(view.screen_to_board(Pos2::new(-5.0, 10.0)), None);
        assert_eq!(view.screen_to_board(Pos2::new(10.0, 300.0)), None);
    }

    #[test]
    fn test_board_to_screen_is_cell_center() {
        let view = view_at_origin();
        assert_eq!(view.board_to_screen(Pos::new(0, 0)), Pos2::new(50.0, 50.0));
        assert_eq!(view.board_to_screen(Pos::new(2, 1)), Pos2::new(150.0, 250.0));
    }
}

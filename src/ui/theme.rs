//! Theme constants for the tic-tac-toe GUI

use egui::Color32;

// Board colors
pub const BOARD_BG: Color32 = Color32::from_rgb(40, 44, 52);
pub const GRID_LINE: Color32 = Color32::from_rgb(200, 205, 215);

// Marks
pub const X_MARK: Color32 = Color32::from_rgb(235, 90, 80);
pub const O_MARK: Color32 = Color32::from_rgb(80, 160, 235);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);

pub fn hover_valid() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 255, 255, 20)
}

pub fn hover_invalid() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 50, 50, 60)
}

// Panel colors - dark modern theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const RESULT_BG: Color32 = Color32::from_rgb(45, 80, 55);
pub const NOTICE_BG: Color32 = Color32::from_rgb(80, 60, 30);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Sizes
pub const BOARD_MARGIN: f32 = 20.0;
pub const GRID_LINE_WIDTH: f32 = 4.0;
pub const MARK_RADIUS_RATIO: f32 = 0.3;
pub const MARK_STROKE_WIDTH: f32 = 8.0;
pub const WIN_LINE_WIDTH: f32 = 6.0;

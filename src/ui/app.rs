//! Main application for the tic-tac-toe GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel};

use super::board_view::BoardView;
use super::game_state::GameSession;
use super::theme::*;
use crate::config::AppConfig;
use crate::{Phase, TOTAL_CELLS};

const CELL_KEYS: [egui::Key; TOTAL_CELLS] = [
    egui::Key::Num1,
    egui::Key::Num2,
    egui::Key::Num3,
    egui::Key::Num4,
    egui::Key::Num5,
    egui::Key::Num6,
    egui::Key::Num7,
    egui::Key::Num8,
    egui::Key::Num9,
];

/// Main tic-tac-toe application
pub struct TicTacToeApp {
    session: GameSession,
    board_view: BoardView,
}

impl TicTacToeApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: &AppConfig) -> Self {
        Self {
            session: GameSession::new(config.players.clone()),
            board_view: BoardView::default(),
        }
    }

    /// Render the side panel with names, controls and results
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(220.0)
            .max_width(260.0)
            .frame(Frame::new().fill(PANEL_BG).inner_margin(12.0))
            .show(ctx, |ui| {
                ui.label(RichText::new("TIC-TAC-TOE").size(22.0).strong().color(TEXT_PRIMARY));
                ui.add_space(12.0);

                self.render_players_card(ui);
                ui.add_space(10.0);

                self.render_turn_card(ui);

                if let Some(result) = &self.session.result {
                    ui.add_space(10.0);
                    Self::render_banner(ui, result, RESULT_BG);
                }

                if let Some(notice) = &self.session.notice {
                    ui.add_space(10.0);
                    Self::render_banner(ui, &format!("⚠ {}", notice), NOTICE_BG);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    /// Name inputs and start button
    fn render_players_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("PLAYERS").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            ui.label(RichText::new("X").color(X_MARK).strong());
            ui.add(egui::TextEdit::singleline(&mut self.session.player1_input).hint_text("Player 1"));
            ui.label(RichText::new("O").color(O_MARK).strong());
            ui.add(egui::TextEdit::singleline(&mut self.session.player2_input).hint_text("Player 2"));

            ui.add_space(8.0);
            let label = RichText::new(self.session.button.label()).size(14.0).strong();
            if ui.button(label).clicked() {
                self.session.start_game();
            }
        });
    }

    /// Whose turn it is
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("TURN").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let engine = &self.session.engine;
            match (engine.phase(), engine.current_player()) {
                (Phase::InProgress, Some(player)) => {
                    ui.label(
                        RichText::new(format!("{} ({})", player.name(), player.marker()))
                            .size(16.0)
                            .color(TEXT_PRIMARY),
                    );
                }
                (Phase::Concluded, _) => {
                    ui.label(RichText::new("Game over").color(WIN_HIGHLIGHT));
                }
                _ => {
                    ui.label(RichText::new("Press Start Game").color(TEXT_SECONDARY));
                }
            }
        });
    }

    fn render_banner(ui: &mut egui::Ui, text: &str, fill: egui::Color32) {
        Frame::new()
            .fill(fill)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(text).size(14.0).color(TEXT_PRIMARY));
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let clicked = self.board_view.show(
                ui,
                self.session.engine.board(),
                self.session.engine.winning_line(),
                self.session.is_active(),
            );

            if let Some(pos) = clicked {
                self.session.click_cell(pos.to_index());
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        // Typing a name must not trigger shortcuts
        if ctx.wants_keyboard_input() {
            return;
        }

        let (new_game, cell) = ctx.input(|i| {
            let new_game = i.key_pressed(egui::Key::N);
            let cell = CELL_KEYS.iter().position(|k| i.key_pressed(*k));
            (new_game, cell)
        });

        if new_game {
            self.session.start_game();
        } else if let Some(idx) = cell {
            self.session.click_cell(idx);
        }
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.render_side_panel(ctx);
        self.render_board(ctx);
    }
}

//! Session state for the tic-tac-toe GUI
//!
//! Everything here is independent of egui, so the flow from button press
//! to result message can be tested without a window.

use crate::config::PlayerConfig;
use crate::{GameEngine, Outcome, Player};

/// Label state of the start button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StartButton {
    #[default]
    Start,
    Playing,
    Restart,
}

impl StartButton {
    pub fn label(self) -> &'static str {
        match self {
            StartButton::Start => "Start Game",
            StartButton::Playing => "Playing",
            StartButton::Restart => "Restart?",
        }
    }
}

/// Main session state: the engine plus what the side panel shows
pub struct GameSession {
    pub engine: GameEngine,
    pub player1_input: String,
    pub player2_input: String,
    pub result: Option<String>,
    pub notice: Option<String>,
    pub button: StartButton,
    active: bool,
    defaults: PlayerConfig,
}

impl GameSession {
    pub fn new(defaults: PlayerConfig) -> Self {
        Self {
            engine: GameEngine::new(),
            player1_input: String::new(),
            player2_input: String::new(),
            result: None,
            notice: None,
            button: StartButton::default(),
            active: false,
            defaults,
        }
    }

    /// True while clicks on the board are forwarded to the engine
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Start (or restart) a game with the names currently entered.
    ///
    /// Blank inputs fall back to the configured default names.
    pub fn start_game(&mut self) {
        let name1 = name_or(&self.player1_input, &self.defaults.first);
        let name2 = name_or(&self.player2_input, &self.defaults.second);

        self.engine.initialize_players(&name1, &name2);
        self.engine.reset();
        self.result = None;
        self.notice = None;
        self.button = StartButton::Playing;
        self.active = true;
    }

    /// Forward a board click at `index` to the engine and react to the outcome.
    ///
    /// Ignored while no game is active.
    pub fn click_cell(&mut self, index: usize) -> Option<Outcome> {
        if !self.active {
            return None;
        }

        let outcome = self.engine.play_turn(index);
        match &outcome {
            Outcome::Win(player) => {
                self.result = Some(win_message(player));
                self.finish();
            }
            Outcome::Tie => {
                self.result = Some("It's a tie!".to_string());
                self.finish();
            }
            Outcome::Invalid => {
                self.notice = Some("Invalid move! Try again.".to_string());
            }
            Outcome::Ongoing => {
                self.notice = None;
                self.button = StartButton::Playing;
            }
        }
        Some(outcome)
    }

    fn finish(&mut self) {
        self.notice = None;
        self.button = StartButton::Restart;
        self.active = false;
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(PlayerConfig::default())
    }
}

fn name_or(input: &str, default: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}

fn win_message(player: &Player) -> String {
    format!("{} ({}) wins!", player.name(), player.marker())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cell;

    #[test]
    fn test_new_session_is_idle() {
        let session = GameSession::default();
        assert!(!session.is_active());
        assert_eq!(session.button.label(), "Start Game");
        assert!(session.result.is_none());
    }

    #[test]
    fn test_clicks_ignored_before_start() {
        let mut session = GameSession::default();
        assert_eq!(session.click_cell(0), None);
        assert_eq!(session.engine.snapshot(), [Cell::Empty; 9]);
    }

    #[test]
    fn test_start_uses_default_names() {
        let mut session = GameSession::default();
        session.player2_input = "Bo".to_string();
        session.start_game();

        let [x, o] = session.engine.players().unwrap();
        assert_eq!(x.name(), "Player 1");
        assert_eq!(o.name(), "Bo");
        assert!(session.is_active());
        assert_eq!(session.button, StartButton::Playing);
    }

    #[test]
    fn test_configured_defaults() {
        let mut session = GameSession::new(PlayerConfig {
            first: "Red".to_string(),
            second: "Blue".to_string(),
        });
        session.start_game();
        let [x, o] = session.engine.players().unwrap();
        assert_eq!((x.name(), o.name()), ("Red", "Blue"));
    }

    #[test]
    fn test_win_announces_and_deactivates() {
        let mut session = GameSession::default();
        session.player1_input = "Ann".to_string();
        session.player2_input = "Bo".to_string();
        session.start_game();

        for idx in [0, 3, 1, 4] {
            assert_eq!(session.click_cell(idx), Some(Outcome::Ongoing));
        }
        assert!(matches!(session.click_cell(2), Some(Outcome::Win(_))));
        assert_eq!(session.result.as_deref(), Some("Ann (X) wins!"));
        assert_eq!(session.button.label(), "Restart?");
        assert!(!session.is_active());

        // Further clicks do nothing
        assert_eq!(session.click_cell(8), None);
    }

    #[test]
    fn test_tie_announces() {
        let mut session = GameSession::default();
        session.start_game();
        for idx in [0, 1, 2, 4, 3, 5, 7, 6] {
            session.click_cell(idx);
        }
        assert_eq!(session.click_cell(8), Some(Outcome::Tie));
        assert_eq!(session.result.as_deref(), Some("It's a tie!"));
        assert_eq!(session.button, StartButton::Restart);
    }

    #[test]
    fn test_invalid_move_sets_notice() {
        let mut session = GameSession::default();
        session.start_game();
        session.click_cell(4);

        assert_eq!(session.click_cell(4), Some(Outcome::Invalid));
        assert_eq!(session.notice.as_deref(), Some("Invalid move! Try again."));
        assert!(session.is_active());

        session.click_cell(0);
        assert!(session.notice.is_none());
    }

    #[test]
    fn test_restart_clears_board_and_result() {
        let mut session = GameSession::default();
        session.start_game();
        for idx in [0, 3, 1, 4, 2] {
            session.click_cell(idx);
        }

        session.start_game();
        assert!(session.result.is_none());
        assert!(session.is_active());
        assert_eq!(session.engine.snapshot(), [Cell::Empty; 9]);
        assert_eq!(session.engine.current_player().map(|p| p.name()), Some("Player 1"));
    }
}

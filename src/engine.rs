//! Game engine: players, turn order and move arbitration
//!
//! The engine owns a [`Board`] and the two [`Player`]s of a session. Every
//! move goes through [`GameEngine::play_turn`], which places the current
//! player's marker, evaluates the board and reports an [`Outcome`]:
//!
//! 1. **Invalid**: cell occupied (or out of range); nothing changed
//! 2. **Win**: the move completed a line; turn is frozen
//! 3. **Tie**: board full with no line; turn is frozen
//! 4. **Ongoing**: turn passes to the other player
//!
//! # Example
//!
//! ```
//! use tictactoe::{GameEngine, Outcome};
//!
//! let mut engine = GameEngine::new();
//! engine.initialize_players("Ann", "Bo");
//!
//! for idx in [0, 3, 1, 4] {
//!     assert_eq!(engine.play_turn(idx), Outcome::Ongoing);
//! }
//! match engine.play_turn(2) {
//!     Outcome::Win(player) => assert_eq!(player.name(), "Ann"),
//!     other => panic!("unexpected outcome: {:?}", other),
//! }
//! ```

use crate::board::{Board, Cell, Marker, TOTAL_CELLS};
use crate::rules::{find_winning_line, is_full, Line};

/// A participant: display name plus marker. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    marker: Marker,
}

impl Player {
    pub fn new(name: impl Into<String>, marker: Marker) -> Self {
        Self {
            name: name.into(),
            marker,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn marker(&self) -> Marker {
        self.marker
    }
}

/// Result of a move attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Move rejected; no state changed
    Invalid,
    /// Move accepted; the other player is now on turn
    Ongoing,
    /// Move accepted and completed a line for this player
    Win(Player),
    /// Move accepted and filled the board without a line
    Tie,
}

impl Outcome {
    /// True for `Win` and `Tie`
    #[inline]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Outcome::Win(_) | Outcome::Tie)
    }
}

/// Engine lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No players yet
    Uninitialized,
    InProgress,
    /// Win or tie reached; only `reset` or `initialize_players` leave this
    Concluded,
}

/// Game state for one session
#[derive(Debug, Clone)]
pub struct GameEngine {
    board: Board,
    /// Index 0 holds X, index 1 holds O
    players: Option<[Player; 2]>,
    current: Marker,
    phase: Phase,
    winning_line: Option<Line>,
}

impl GameEngine {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            players: None,
            current: Marker::X,
            phase: Phase::Uninitialized,
            winning_line: None,
        }
    }

    /// Create both players and hand the first turn to X.
    ///
    /// May be called from any phase; previous identities are replaced.
    /// The board is left as is, so a new game normally follows up with
    /// [`reset`](Self::reset).
    pub fn initialize_players(&mut self, name1: &str, name2: &str) {
        self.players = Some([Player::new(name1, Marker::X), Player::new(name2, Marker::O)]);
        self.current = Marker::X;
        self.phase = Phase::InProgress;
        self.winning_line = None;
        tracing::info!(x = name1, o = name2, "players initialized");
    }

    /// Clear the board and give the turn back to X.
    ///
    /// Returns to `InProgress` when players exist; before that only the
    /// board is cleared.
    pub fn reset(&mut self) {
        self.board.clear();
        self.current = Marker::X;
        self.winning_line = None;
        if self.players.is_some() {
            self.phase = Phase::InProgress;
        }
        tracing::info!(phase = ?self.phase, "game reset");
    }

    /// Attempt a move for the current player at `index` (0-8).
    pub fn play_turn(&mut self, index: usize) -> Outcome {
        if self.phase != Phase::InProgress {
            tracing::warn!(index, phase = ?self.phase, "move attempted outside of a game in progress");
            return Outcome::Invalid;
        }

        let marker = self.current;
        if !self.board.place(index, marker) {
            tracing::debug!(index, %marker, "move rejected");
            return Outcome::Invalid;
        }
        tracing::debug!(index, %marker, "move accepted");

        let cells = self.board.snapshot();
        if let Some((winner, line)) = find_winning_line(&cells) {
            debug_assert_eq!(winner, marker);
            self.phase = Phase::Concluded;
            self.winning_line = Some(line);
            let player = self.player(marker).clone();
            tracing::info!(winner = player.name(), ?line, "game won");
            return Outcome::Win(player);
        }

        if is_full(&cells) {
            self.phase = Phase::Concluded;
            tracing::info!("game tied");
            return Outcome::Tie;
        }

        self.current = marker.opponent();
        Outcome::Ongoing
    }

    /// Player on turn, `None` before initialization
    pub fn current_player(&self) -> Option<&Player> {
        self.players.as_ref().map(|_| self.player(self.current))
    }

    /// Both players (X first), `None` before initialization
    pub fn players(&self) -> Option<&[Player; 2]> {
        self.players.as_ref()
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn snapshot(&self) -> [Cell; TOTAL_CELLS] {
        self.board.snapshot()
    }

    /// Line that decided the last win
    #[inline]
    pub fn winning_line(&self) -> Option<Line> {
        self.winning_line
    }

    /// Look up a player by marker. Only called once players exist.
    fn player(&self, marker: Marker) -> &Player {
        let players = self
            .players
            .as_ref()
            .unwrap_or_else(|| unreachable!("player lookup before initialization"));
        match marker {
            Marker::X => &players[0],
            Marker::O => &players[1],
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

//! Tic-tac-toe game engine with an egui front end
//!
//! Two players alternate placing X and O on a 3x3 grid. Three in a row
//! along any row, column or diagonal wins; a full board without a line is
//! a tie.
//!
//! # Architecture
//!
//! - [`board`]: 9-cell board, write-once cells
//! - [`rules`]: Win and tie detection over a board snapshot
//! - [`engine`]: Players, turn order and move outcomes
//! - [`ui`]: egui/eframe front end
//! - [`config`], [`error`], [`logging`]: Application plumbing
//!
//! # Quick Start
//!
//! ```
//! use tictactoe::{Cell, GameEngine, Outcome};
//!
//! let mut engine = GameEngine::new();
//! engine.initialize_players("Ann", "Bo");
//!
//! assert_eq!(engine.play_turn(4), Outcome::Ongoing);
//! assert_eq!(engine.play_turn(4), Outcome::Invalid); // occupied
//! assert_eq!(engine.snapshot()[4], Cell::X);
//! ```
//!
//! Engines are plain values: create as many independent sessions as needed.

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod logging;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Marker, Pos, BOARD_SIZE, TOTAL_CELLS};
pub use engine::{GameEngine, Outcome, Phase, Player};

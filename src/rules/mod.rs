//! Game rules for tic-tac-toe
//!
//! Pure functions over a board snapshot:
//! - Win conditions (three in a row)
//! - Tie detection (full board, no winner)

pub mod tie;
pub mod win;

// Re-exports for convenient access
pub use tie::{is_full, is_tie};
pub use win::{check_winner, find_winning_line, Line, LINES};

//! Win condition checking for tic-tac-toe
//!
//! A player wins by occupying all three cells of one of the eight fixed
//! lines: three rows, three columns and two diagonals.

use crate::board::{Cell, Marker, TOTAL_CELLS};

/// Three cell indices forming a line
pub type Line = [usize; 3];

/// All winning lines, in scan order
pub const LINES: [Line; 8] = [
    [0, 1, 2], // Rows
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6], // Columns
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8], // Diagonals
    [2, 4, 6],
];

/// Find the first line held entirely by one marker.
///
/// Returns the marker and the line, `None` if no line is complete.
pub fn find_winning_line(cells: &[Cell; TOTAL_CELLS]) -> Option<(Marker, Line)> {
    LINES.iter().find_map(|&line| {
        let [a, b, c] = line;
        let marker = cells[a].marker()?;
        (cells[a] == cells[b] && cells[a] == cells[c]).then_some((marker, line))
    })
}

/// Check for a winner
///
/// Returns `Some(Marker)` if there's a winner, `None` otherwise.
#[inline]
pub fn check_winner(cells: &[Cell; TOTAL_CELLS]) -> Option<Marker> {
    find_winning_line(cells).map(|(marker, _)| marker)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    fn board_with(marker: Marker, indices: &[usize]) -> Board {
        let mut board = Board::new();
        for &i in indices {
            assert!(board.place(i, marker));
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(board.cells()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_with(Marker::X, &[0, 1, 2]);
        assert_eq!(
            find_winning_line(board.cells()),
            Some((Marker::X, [0, 1, 2]))
        );
    }

    #[test]
    fn test_winner_main_diagonal() {
        let board = board_with(Marker::X, &[0, 4, 8]);
        assert_eq!(check_winner(board.cells()), Some(Marker::X));
    }

    #[test]
    fn test_winner_every_line() {
        for line in LINES {
            let board = board_with(Marker::O, &line);
            assert_eq!(
                find_winning_line(board.cells()),
                Some((Marker::O, line)),
                "line {:?} not detected",
                line
            );
        }
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(Marker::X, &[0, 1]);
        assert_eq!(check_winner(board.cells()), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let mut board = board_with(Marker::X, &[0, 1]);
        board.place(2, Marker::O);
        assert_eq!(check_winner(board.cells()), None);
    }

    #[test]
    fn test_non_line_triple_is_not_a_win() {
        // Three markers, but not collinear
        let board = board_with(Marker::X, &[0, 1, 5]);
        assert_eq!(check_winner(board.cells()), None);
    }
}

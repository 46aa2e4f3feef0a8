//! Tie detection for tic-tac-toe

use crate::board::{Cell, TOTAL_CELLS};

use super::win::check_winner;

/// Check if every cell is occupied
#[inline]
pub fn is_full(cells: &[Cell; TOTAL_CELLS]) -> bool {
    cells.iter().all(|c| !c.is_empty())
}

/// Full board with no completed line
pub fn is_tie(cells: &[Cell; TOTAL_CELLS]) -> bool {
    is_full(cells) && check_winner(cells).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, Marker};

    fn board_from(cells: [Cell; TOTAL_CELLS]) -> Board {
        let mut board = Board::new();
        for (i, cell) in cells.into_iter().enumerate() {
            if let Some(marker) = cell.marker() {
                board.place(i, marker);
            }
        }
        board
    }

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new();
        assert!(!is_full(board.cells()));
        assert!(!is_tie(board.cells()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.place(4, Marker::X);
        assert!(!is_full(board.cells()));
    }

    #[test]
    fn test_full_board_without_line_is_tie() {
        use Cell::{O, X};
        let board = board_from([X, O, X, X, O, O, O, X, X]);
        assert!(is_full(board.cells()));
        assert_eq!(check_winner(board.cells()), None);
        assert!(is_tie(board.cells()));
    }

    #[test]
    fn test_full_board_with_line_is_not_tie() {
        use Cell::{O, X};
        let board = board_from([X, X, X, O, O, X, X, O, O]);
        assert!(is_full(board.cells()));
        assert!(!is_tie(board.cells()));
    }
}

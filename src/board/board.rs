//! Board structure: sole owner of cell occupancy

use super::{Cell, Marker, Pos, TOTAL_CELLS};

/// 3x3 game board, cells in row-major order (0-8)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; TOTAL_CELLS],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; TOTAL_CELLS],
        }
    }

    /// Copy of all cells in index order
    #[inline]
    pub fn snapshot(&self) -> [Cell; TOTAL_CELLS] {
        self.cells
    }

    /// Borrow the cells without copying
    #[inline]
    pub fn cells(&self) -> &[Cell; TOTAL_CELLS] {
        &self.cells
    }

    /// Get cell at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Check if the cell at `index` is empty. Out-of-range indices are never empty.
    #[inline]
    pub fn is_empty(&self, index: usize) -> bool {
        self.cells.get(index).is_some_and(|c| c.is_empty())
    }

    /// Mark an empty cell.
    ///
    /// Returns `false` without touching the board if the cell is occupied
    /// or `index` is outside 0..9.
    pub fn place(&mut self, index: usize, marker: Marker) -> bool {
        match self.cells.get_mut(index) {
            Some(cell) if cell.is_empty() => {
                *cell = marker.into();
                true
            }
            _ => false,
        }
    }

    /// Reset every cell to empty
    pub fn clear(&mut self) {
        self.cells = [Cell::Empty; TOTAL_CELLS];
    }

    /// Number of occupied cells
    #[inline]
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// True when no cell is empty
    #[inline]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

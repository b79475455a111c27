use std::ops::{Index, IndexMut};

use super::types::Mark;

pub const CELL_COUNT: usize = 9;

/// Fixed 3x3 board, cells indexed 0..9 row-major.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Mark::Empty; CELL_COUNT],
        }
    }

    pub fn from_cells(cells: [Mark; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    pub fn marked_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell != Mark::Empty).count()
    }
}

impl Index<usize> for Board {
    type Output = Mark;

    fn index(&self, cell: usize) -> &Mark {
        &self.cells[cell]
    }
}

impl IndexMut<usize> for Board {
    fn index_mut(&mut self, cell: usize) -> &mut Mark {
        &mut self.cells[cell]
    }
}

pub fn get_available_moves(board: &Board) -> Vec<usize> {
    board
        .cells
        .iter()
        .enumerate()
        .filter(|&(_, &cell)| cell == Mark::Empty)
        .map(|(index, _)| index)
        .collect()
}

pub fn is_valid_move(board: &Board, cell: usize) -> bool {
    if cell >= CELL_COUNT {
        return false;
    }
    board[cell] == Mark::Empty
}

use super::player::PlayerId;
use crate::error::BoardError;

pub const WIDTH: usize = 7;
pub const HEIGHT: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Occupied(PlayerId),
}

/// The 7x6 grid. Cells are addressed as `(column, row)` with row 0 at the
/// bottom, where tokens settle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; HEIGHT]; WIDTH],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; HEIGHT]; WIDTH],
        }
    }

    /// Get the cell at a position, failing outside the grid.
    pub fn cell_at(&self, column: usize, row: usize) -> Result<Cell, BoardError> {
        if column >= WIDTH || row >= HEIGHT {
            return Err(BoardError::OutOfRange { column, row });
        }
        Ok(self.cells[column][row])
    }

    /// Unchecked read for callers that iterate over known coordinates.
    pub(crate) fn get(&self, column: usize, row: usize) -> Cell {
        self.cells[column][row]
    }

    /// Columns whose top cell is still empty, in ascending order.
    pub fn available_columns(&self) -> Vec<usize> {
        (0..WIDTH).filter(|&col| !self.is_column_full(col)).collect()
    }

    /// Check if a column is full. Columns outside the board count as full.
    pub fn is_column_full(&self, column: usize) -> bool {
        if column >= WIDTH {
            return true;
        }
        self.cells[column][HEIGHT - 1] != Cell::Empty
    }

    /// Number of tokens stacked in a column.
    pub fn column_height(&self, column: usize) -> usize {
        if column >= WIDTH {
            return 0;
        }
        self.cells[column]
            .iter()
            .take_while(|cell| **cell != Cell::Empty)
            .count()
    }

    /// Drop a token in a column, returns the row where it landed
    pub fn drop(&mut self, column: usize, owner: PlayerId) -> Result<usize, BoardError> {
        if column >= WIDTH {
            return Err(BoardError::ColumnOutOfRange { column });
        }

        if self.is_column_full(column) {
            return Err(BoardError::ColumnFull { column });
        }

        let row = self.column_height(column);
        self.cells[column][row] = owner.to_cell();
        Ok(row)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..WIDTH).all(|col| self.is_column_full(col))
    }

    pub fn is_empty(&self) -> bool {
        self.token_count() == 0
    }

    pub fn token_count(&self) -> usize {
        (0..WIDTH).map(|col| self.column_height(col)).sum()
    }

    /// Write a cell directly, bypassing gravity. Lets tests build positions
    /// that cannot be reached move by move.
    #[cfg(test)]
    pub(crate) fn place(&mut self, column: usize, row: usize, cell: Cell) {
        self.cells[column][row] = cell;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

//! Grid cursor for the pairs table.

use crate::map::CursorMove;

/// Cursor over a `cols` x `rows` grid; moves wrap around the edges
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCursor {
    cols: usize,
    rows: usize,
    col: usize,
    row: usize,
}

impl GridCursor {
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            cols: cols.max(1),
            rows: rows.max(1),
            col: 0,
            row: 0,
        }
    }

    pub fn col(&self) -> usize {
        self.col
    }

    pub fn row(&self) -> usize {
        self.row
    }

    /// Row-major index of the cell under the cursor
    pub fn position(&self) -> usize {
        self.row * self.cols + self.col
    }

    pub fn apply(&mut self, mv: CursorMove) {
        match mv {
            CursorMove::Left => self.col = (self.col + self.cols - 1) % self.cols,
            CursorMove::Right => self.col = (self.col + 1) % self.cols,
            CursorMove::Up => self.row = (self.row + self.rows - 1) % self.rows,
            CursorMove::Down => self.row = (self.row + 1) % self.rows,
        }
    }

    pub fn reset(&mut self) {
        self.col = 0;
        self.row = 0;
    }
}

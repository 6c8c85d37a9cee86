//! Pieces module - shape matrices and the active piece
//!
//! Every shape is a small boolean matrix (at most 4x4). Rotation is a plain
//! 90° clockwise matrix turn (transpose, then reverse the rows); there is no
//! kick table, a rotation that collides is simply undone by the caller.

use crate::types::{PieceKind, BOARD_WIDTH};

/// Largest side of any shape matrix
pub const MAX_SHAPE_SIDE: usize = 4;

const I_ROWS: &[&[u8]] = &[&[1, 1, 1, 1]];
const O_ROWS: &[&[u8]] = &[&[1, 1], &[1, 1]];
const T_ROWS: &[&[u8]] = &[&[1, 1, 1], &[0, 1, 0]];
const L_ROWS: &[&[u8]] = &[&[1, 1, 1], &[1, 0, 0]];
const J_ROWS: &[&[u8]] = &[&[1, 1, 1], &[0, 0, 1]];
const S_ROWS: &[&[u8]] = &[&[1, 1, 0], &[0, 1, 1]];
const Z_ROWS: &[&[u8]] = &[&[0, 1, 1], &[1, 1, 0]];

/// Boolean shape matrix, `height` rows by `width` columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    grid: [[bool; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE],
    width: u8,
    height: u8,
}

impl Shape {
    /// Build a shape from rows of 0/1 values
    ///
    /// Anything beyond 4x4 is cut off.
    pub fn from_rows(rows: &[&[u8]]) -> Self {
        let mut grid = [[false; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE];
        let height = rows.len().min(MAX_SHAPE_SIDE);
        let mut width = 0;
        for (y, row) in rows.iter().take(height).enumerate() {
            width = width.max(row.len().min(MAX_SHAPE_SIDE));
            for (x, &v) in row.iter().take(MAX_SHAPE_SIDE).enumerate() {
                grid[y][x] = v != 0;
            }
        }
        Self {
            grid,
            width: width as u8,
            height: height as u8,
        }
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Whether the matrix cell at (`col`, `row`) is occupied
    pub fn get(&self, col: usize, row: usize) -> bool {
        col < self.width as usize && row < self.height as usize && self.grid[row][col]
    }

    /// Occupied (dx, dy) offsets, row by row
    pub fn offsets(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        (0..self.height as usize).flat_map(move |row| {
            (0..self.width as usize)
                .filter(move |&col| self.grid[row][col])
                .map(move |col| (col as i8, row as i8))
        })
    }

    /// Turn the matrix 90° clockwise
    ///
    /// New row `i` is old column `i` read bottom to top.
    pub fn rotated_cw(&self) -> Self {
        let (w, h) = (self.width as usize, self.height as usize);
        let mut grid = [[false; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE];
        for (i, new_row) in grid.iter_mut().enumerate().take(w) {
            for (j, cell) in new_row.iter_mut().enumerate().take(h) {
                *cell = self.grid[h - 1 - j][i];
            }
        }
        Self {
            grid,
            width: self.height,
            height: self.width,
        }
    }
}

/// Spawn-orientation shape for a piece kind
pub fn spawn_shape(kind: PieceKind) -> Shape {
    let rows = match kind {
        PieceKind::I => I_ROWS,
        PieceKind::O => O_ROWS,
        PieceKind::T => T_ROWS,
        PieceKind::L => L_ROWS,
        PieceKind::J => J_ROWS,
        PieceKind::S => S_ROWS,
        PieceKind::Z => Z_ROWS,
    };
    Shape::from_rows(rows)
}

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// Create a piece at the spawn position: horizontally centred, row 0
    pub fn spawn(kind: PieceKind) -> Self {
        let shape = spawn_shape(kind);
        Self {
            kind,
            shape,
            x: (BOARD_WIDTH / 2) as i8 - (shape.width() / 2) as i8,
            y: 0,
        }
    }

    /// Absolute board coordinates of every occupied cell
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .offsets()
            .map(move |(dx, dy)| (self.x + dx, self.y + dy))
    }

    /// Copy moved by (dx, dy)
    pub fn shifted(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Copy rotated 90° clockwise around its top-left origin
    pub fn rotated(&self) -> Self {
        Self {
            shape: self.shape.rotated_cw(),
            ..*self
        }
    }
}

//! Collision checks between a piece and the board

use crate::blocks::board::Board;
use crate::blocks::pieces::Piece;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// True if any occupied cell of `piece` is outside the side walls, below the
/// floor, or on a filled board cell
///
/// Cells above the top edge (negative rows) only collide with the walls.
pub fn collides(piece: &Piece, board: &Board) -> bool {
    piece.cells().any(|(x, y)| {
        x < 0 || x >= BOARD_WIDTH as i8 || y >= BOARD_HEIGHT as i8 || board.is_filled(x, y)
    })
}

//! Board, collision and line-clear behaviour

use tui_minigames::core::blocks::{collides, spawn_shape, Board, Piece};
use tui_minigames::core::GameRng;
use tui_minigames::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Straight from the definition: out of columns, below the floor, or on a
/// filled cell at a non-negative row.
fn collides_reference(piece: &Piece, board: &Board) -> bool {
    piece.cells().any(|(x, y)| {
        x < 0
            || x >= BOARD_WIDTH as i8
            || y >= BOARD_HEIGHT as i8
            || (y >= 0 && board.get(x, y) != Some(None))
    })
}

fn random_board(rng: &mut GameRng, density: usize) -> Board {
    let mut board = Board::new();
    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            if rng.next_index(100) < density {
                board.set(x, y, Some(PieceKind::ALL[rng.next_index(7)]));
            }
        }
    }
    board
}

#[test]
fn test_collision_matches_definition() {
    let mut rng = GameRng::new(2024);
    for round in 0..200 {
        let board = random_board(&mut rng, round % 60);
        for _ in 0..50 {
            let kind = PieceKind::ALL[rng.next_index(7)];
            let mut piece = Piece::spawn(kind);
            for _ in 0..rng.next_index(4) {
                piece = piece.rotated();
            }
            piece.x = rng.next_index(18) as i8 - 4;
            piece.y = rng.next_index(28) as i8 - 5;

            assert_eq!(
                collides(&piece, &board),
                collides_reference(&piece, &board),
                "{:?} at ({}, {})",
                kind,
                piece.x,
                piece.y
            );
        }
    }
}

#[test]
fn test_rows_above_top_never_collide() {
    let mut board = Board::new();
    board.fill_row_except(0, &[], PieceKind::J);
    // Vertical bar hanging above the board, last cell just above row 0.
    let bar = Piece {
        kind: PieceKind::I,
        shape: spawn_shape(PieceKind::I).rotated_cw(),
        x: 3,
        y: -4,
    };
    assert!(!collides(&bar, &board));
    assert!(collides(&bar.shifted(0, 1), &board));
}

#[test]
fn test_clearing_shifts_rows_above_by_one_per_row() {
    let mut board = Board::new();
    board.set(2, 10, Some(PieceKind::T));
    board.set(7, 14, Some(PieceKind::S));
    board.fill_row_except(15, &[], PieceKind::I);
    board.set(5, 16, Some(PieceKind::O));
    board.fill_row_except(18, &[], PieceKind::I);
    board.fill_row_except(19, &[4], PieceKind::L);

    let cleared = board.clear_full_rows();
    assert_eq!(cleared.len(), 2);

    // Above both cleared rows: down by two.
    assert_eq!(board.get(2, 12), Some(Some(PieceKind::T)));
    assert_eq!(board.get(7, 16), Some(Some(PieceKind::S)));
    // Between the cleared rows: down by one.
    assert_eq!(board.get(5, 17), Some(Some(PieceKind::O)));
    // Below every cleared row: unchanged.
    assert_eq!(board.get(4, 19), Some(None));
    assert_eq!(board.get(0, 19), Some(Some(PieceKind::L)));
    // Fresh rows at the top.
    assert!(board.row(0).iter().all(|c| c.is_none()));
    assert!(board.row(1).iter().all(|c| c.is_none()));
}

#[test]
fn test_merge_skips_negative_rows() {
    let mut board = Board::new();
    let bar = Piece {
        kind: PieceKind::I,
        shape: spawn_shape(PieceKind::I).rotated_cw(),
        x: 0,
        y: -2,
    };
    assert_eq!(board.merge(&bar), 2);
    assert_eq!(board.filled_count(), 2);
    assert_eq!(board.get(0, 1), Some(Some(PieceKind::I)));
}

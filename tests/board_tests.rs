//! Board tests - grid primitives

use pocket_tetris::core::{create_empty_board, Board};
use pocket_tetris::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

#[test]
fn test_board_new_empty() {
    let board = create_empty_board();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);
    assert_eq!(board.cells().len(), 200);

    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            assert_eq!(board.get(x, y), Some(None), "cell ({}, {})", x, y);
        }
    }
    assert_eq!(board, Board::default());
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new();

    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(BOARD_WIDTH as i8, 0), None);
    assert_eq!(board.get(0, BOARD_HEIGHT as i8), None);
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::new();

    assert!(board.set(5, 10, Some(PieceKind::T)));
    assert_eq!(board.get(5, 10), Some(Some(PieceKind::T)));
    assert!(board.is_occupied(5, 10));

    assert!(board.set(5, 10, None));
    assert_eq!(board.get(5, 10), Some(None));
    assert!(!board.is_occupied(5, 10));
}

#[test]
fn test_board_set_out_of_bounds() {
    let mut board = Board::new();

    assert!(!board.set(-1, 0, Some(PieceKind::T)));
    assert!(!board.set(0, -1, Some(PieceKind::T)));
    assert!(!board.set(BOARD_WIDTH as i8, 0, Some(PieceKind::T)));
    assert!(!board.set(0, BOARD_HEIGHT as i8, Some(PieceKind::T)));
    assert_eq!(board.filled_count(), 0);
}

#[test]
fn test_board_is_a_value() {
    let original = Board::new();
    let mut copy = original;
    copy.set(3, 3, Some(PieceKind::J));

    assert_eq!(original.filled_count(), 0);
    assert_eq!(copy.filled_count(), 1);
    assert_ne!(original, copy);
}

#[test]
fn test_row_full_and_empty() {
    let mut board = Board::new();
    assert!(board.is_row_empty(19));

    board.fill_row_except(19, PieceKind::I, &[9]);
    assert!(!board.is_row_full(19));
    assert!(!board.is_row_empty(19));

    board.set(9, 19, Some(PieceKind::O));
    assert!(board.is_row_full(19));
}

#[test]
fn test_rows_iterate_top_to_bottom() {
    let mut board = Board::new();
    board.set(2, 0, Some(PieceKind::S));
    board.set(7, 19, Some(PieceKind::Z));

    let rows: Vec<_> = board.rows().collect();
    assert_eq!(rows.len(), BOARD_HEIGHT as usize);
    assert_eq!(rows[0][2], Some(PieceKind::S));
    assert_eq!(rows[19][7], Some(PieceKind::Z));
    assert_eq!(board.row(19).map(|row| row[7]), Some(Some(PieceKind::Z)));
    assert_eq!(board.row(20), None);
}

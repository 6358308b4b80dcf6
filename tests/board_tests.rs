//! Board tests - grid access, placement checks and line clearing

use console_tetris::core::Board;
use console_tetris::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);

    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            assert!(board.is_valid(x, y), "Cell ({}, {}) should be valid", x, y);
            assert_eq!(board.get(x, y), Some(None));
        }
    }
    assert_eq!(board.filled_cell_count(), 0);
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new();

    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(BOARD_WIDTH as i8, 0), None);
    assert_eq!(board.get(0, BOARD_HEIGHT as i8), None);
    assert!(!board.is_valid(-1, 5));
    assert!(!board.is_occupied(-1, 5));
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::new();

    assert!(board.set(5, 10, Some(PieceKind::T)));
    assert_eq!(board.get(5, 10), Some(Some(PieceKind::T)));
    assert!(board.is_occupied(5, 10));
    assert!(!board.is_valid(5, 10));

    assert!(board.set(5, 10, None));
    assert_eq!(board.get(5, 10), Some(None));
}

#[test]
fn test_board_set_out_of_bounds() {
    let mut board = Board::new();

    assert!(!board.set(-1, 0, Some(PieceKind::T)));
    assert!(!board.set(0, -1, Some(PieceKind::T)));
    assert!(!board.set(BOARD_WIDTH as i8, 0, Some(PieceKind::T)));
    assert!(!board.set(0, BOARD_HEIGHT as i8, Some(PieceKind::T)));
    assert_eq!(board.filled_cell_count(), 0);
}

#[test]
fn test_from_rows_anchors_at_bottom() {
    let board = Board::from_rows(&["T.........", "IIII.OO..."]);

    assert_eq!(board.get(0, 18), Some(Some(PieceKind::T)));
    assert_eq!(board.get(1, 18), Some(None));
    assert_eq!(board.get(3, 19), Some(Some(PieceKind::I)));
    assert_eq!(board.get(4, 19), Some(None));
    assert_eq!(board.get(6, 19), Some(Some(PieceKind::O)));
    assert_eq!(board.occupied_row_count(), 2);
    assert_eq!(board.filled_cell_count(), 7);
}

#[test]
fn test_can_place_rejects_bounds_and_overlap() {
    let board = Board::from_rows(&["....Z....."]);

    assert!(board.can_place([(0, 0), (9, 19)].into_iter()));
    assert!(!board.can_place([(0, 0), (4, 19)].into_iter()));
    assert!(!board.can_place([(-1, 3)].into_iter()));
    assert!(!board.can_place([(0, 20)].into_iter()));
    assert!(board.can_place(std::iter::empty()));
}

#[test]
fn test_clear_bottom_two_rows_shifts_stack() {
    let mut board = Board::from_rows(&[
        "J.........",
        "IIIIIIIIII",
        "LLLLLLLLLL",
    ]);

    let cleared = board.clear_full_rows();
    assert_eq!(cleared.as_slice(), &[19, 18]);

    // The partial row lands on the floor; nothing else remains.
    assert_eq!(board.get(0, 19), Some(Some(PieceKind::J)));
    assert_eq!(board.filled_cell_count(), 1);
    assert!(!board.is_row_full(19));
}

#[test]
fn test_clear_non_adjacent_rows_keeps_order() {
    let mut board = Board::from_rows(&[
        "S.........",
        "TTTTTTTTTT",
        ".Z........",
        "OOOOOOOOOO",
    ]);

    let cleared = board.clear_full_rows();
    assert_eq!(cleared.as_slice(), &[19, 17]);

    assert_eq!(board.get(1, 19), Some(Some(PieceKind::Z)));
    assert_eq!(board.get(0, 18), Some(Some(PieceKind::S)));
    assert_eq!(board.occupied_row_count(), 2);
    for y in 0..18 {
        assert_eq!(board.row(y).map(|r| r.iter().all(|c| c.is_none())), Some(true));
    }
}

#[test]
fn test_clear_without_full_rows_is_noop() {
    let mut board = Board::from_rows(&["IIIIIIIII."]);
    let before = board.clone();

    assert!(board.clear_full_rows().is_empty());
    assert_eq!(board, before);
}

#[test]
fn test_lock_cells_skips_out_of_bounds() {
    let mut board = Board::new();
    let written = board.lock_cells(PieceKind::L, [(0, -1), (0, 0), (1, 0), (10, 0)].into_iter());

    assert_eq!(written, 2);
    assert_eq!(board.get(0, 0), Some(Some(PieceKind::L)));
    assert_eq!(board.get(1, 0), Some(Some(PieceKind::L)));
}

#[test]
fn test_write_u8_grid_uses_kind_codes() {
    let board = Board::from_rows(&["IO.......Z"]);
    let mut grid = [[0xff; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
    board.write_u8_grid(&mut grid);

    assert_eq!(grid[19][0], PieceKind::I.code());
    assert_eq!(grid[19][1], PieceKind::O.code());
    assert_eq!(grid[19][2], 0);
    assert_eq!(grid[19][9], PieceKind::Z.code());
    assert!(grid[..19].iter().all(|row| row.iter().all(|&c| c == 0)));
}

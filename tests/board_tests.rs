//! Board tests - row clearing and stack collapse behavior

use blockfall::core::Board;
use blockfall::types::{Rgb, BOARD_HEIGHT, BOARD_WIDTH};

const RED: Rgb = Rgb::new(255, 0, 0);
const BLUE: Rgb = Rgb::new(0, 0, 255);
const GREEN: Rgb = Rgb::new(0, 255, 0);

fn fill_row(board: &mut Board, y: i8, color: Rgb) {
    for x in 0..BOARD_WIDTH {
        board.fill(x, y, color);
    }
}

#[test]
fn test_clear_ignores_partial_rows() {
    let mut board = Board::new();
    // One hole at x=4 keeps the row alive.
    for x in 0..BOARD_WIDTH {
        if x != 4 {
            board.fill(x, BOARD_HEIGHT - 1, RED);
        }
    }

    assert_eq!(board.clear_full_rows(), 0);
    assert_eq!(board.len(), (BOARD_WIDTH - 1) as usize);
}

#[test]
fn test_clear_bottom_row_shifts_survivors_down() {
    let mut board = Board::new();
    fill_row(&mut board, 19, RED);
    board.fill(3, 18, BLUE);
    board.fill(7, 17, GREEN);

    assert_eq!(board.clear_full_rows(), 1);
    assert_eq!(board.len(), 2);
    assert_eq!(board.color_at(3, 19), Some(BLUE));
    assert_eq!(board.color_at(7, 18), Some(GREEN));
}

#[test]
fn test_clear_two_contiguous_rows() {
    let mut board = Board::new();
    fill_row(&mut board, 18, RED);
    fill_row(&mut board, 19, RED);
    board.fill(0, 17, BLUE);

    assert_eq!(board.clear_full_rows(), 2);
    assert_eq!(board.len(), 1);
    assert_eq!(board.color_at(0, 19), Some(BLUE));
}

#[test]
fn test_clear_non_contiguous_rows_shifts_by_rows_below() {
    let mut board = Board::new();
    fill_row(&mut board, 17, RED);
    fill_row(&mut board, 19, RED);
    // Sandwiched between the cleared rows: only row 19 is below it.
    board.fill(2, 18, BLUE);
    // Above both cleared rows: shifts by two.
    board.fill(5, 16, GREEN);

    assert_eq!(board.clear_full_rows(), 2);
    assert_eq!(board.len(), 2);
    assert_eq!(board.color_at(2, 19), Some(BLUE));
    assert_eq!(board.color_at(5, 18), Some(GREEN));
}

#[test]
fn test_clear_leaves_stack_below_cleared_rows_in_place() {
    let mut board = Board::new();
    fill_row(&mut board, 15, RED);
    fill_row(&mut board, 16, RED);
    board.fill(4, 18, BLUE);
    board.fill(9, 14, GREEN);

    assert_eq!(board.clear_full_rows(), 2);
    // No cleared row sits below row 18, so it must not move.
    assert_eq!(board.color_at(4, 18), Some(BLUE));
    assert_eq!(board.color_at(9, 16), Some(GREEN));
}

#[test]
fn test_clear_moves_hidden_rows_down_too() {
    let mut board = Board::new();
    fill_row(&mut board, 19, RED);
    board.fill(6, -1, BLUE);

    assert_eq!(board.clear_full_rows(), 1);
    assert_eq!(board.color_at(6, 0), Some(BLUE));
}

#[test]
fn test_clear_four_rows_at_once() {
    let mut board = Board::new();
    for y in 16..20 {
        fill_row(&mut board, y, RED);
    }
    board.fill(0, 15, BLUE);

    assert_eq!(board.clear_full_rows(), 4);
    assert_eq!(board.len(), 1);
    assert_eq!(board.color_at(0, 19), Some(BLUE));
}

#[test]
fn test_overflow_looks_at_rows_above_one() {
    let mut board = Board::new();
    assert!(!board.overflows_top());

    board.fill(5, 1, RED);
    assert!(!board.overflows_top());

    board.fill(5, 0, RED);
    assert!(board.overflows_top());
}

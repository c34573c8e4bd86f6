//! Locking and line clearing
//!
//! `place_tetromino` writes a resting piece into a copy of the board,
//! `get_completed_lines` finds the full rows and `clear_lines` compacts them away.
//! None of these allocate.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::pieces::Tetromino;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// Row indices of completed lines, increasing
pub type CompletedLines = ArrayVec<usize, { BOARD_HEIGHT as usize }>;

/// Write every filled mino of `piece` into a new board.
///
/// Minos outside the board are skipped; a piece that passed
/// `is_valid_position` only ever hangs off the top.
pub fn place_tetromino(board: &Board, piece: &Tetromino) -> Board {
    let mut next = *board;
    for (x, y) in piece.cells() {
        if let (Ok(x), Ok(y)) = (i8::try_from(x), i8::try_from(y)) {
            next.set(x, y, Some(piece.kind));
        }
    }
    next
}

/// Rows whose every cell is filled, top to bottom
pub fn get_completed_lines(board: &Board) -> CompletedLines {
    (0..BOARD_HEIGHT as usize)
        .filter(|&y| board.is_row_full(y))
        .collect()
}

/// Remove the given rows and let everything above fall into the gap.
///
/// Rows are treated as a set: duplicates and indices past the floor are
/// ignored, so the result always has exactly `BOARD_HEIGHT` rows. Surviving
/// rows keep their relative order; the top is refilled with empty rows.
pub fn clear_lines(board: &Board, rows: &[usize]) -> Board {
    let mut next = *board;
    let width = BOARD_WIDTH as usize;
    let cells = next.cells_mut();
    let mut write_y = BOARD_HEIGHT as usize;

    // Two-pointer compaction, scanning bottom to top
    for read_y in (0..BOARD_HEIGHT as usize).rev() {
        if rows.contains(&read_y) {
            continue;
        }
        write_y -= 1;
        if write_y != read_y {
            let src_start = read_y * width;
            cells.copy_within(src_start..src_start + width, write_y * width);
        }
    }

    cells[..write_y * width].fill(None);
    next
}

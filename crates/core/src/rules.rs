//! Movement and collision rules
//!
//! Everything here is a pure function of a board and a piece. A rejected move
//! or rotation returns the piece unchanged; there is no error channel.

use crate::board::Board;
use crate::pieces::Tetromino;
use crate::types::{Direction, Rotation, BOARD_HEIGHT, BOARD_WIDTH};

/// Check whether `piece` fits at origin `(x, y)` in `rotation`.
///
/// Each filled mask cell must lie inside the side walls and above the floor.
/// Cells above the top edge (y < 0) skip the occupancy check, so pieces may
/// sit partially above the visible board; there is no top bound.
pub fn is_valid_position(board: &Board, piece: &Tetromino, x: i8, y: i8, rotation: Rotation) -> bool {
    let candidate = piece.rotated_to(rotation).at(x, y);

    candidate.cells().iter().all(|&(bx, by)| {
        if bx < 0 || bx >= i16::from(BOARD_WIDTH) || by >= i16::from(BOARD_HEIGHT) {
            return false;
        }
        // In range here, so the narrowing is exact
        by < 0 || !board.is_occupied(bx as i8, by as i8)
    })
}

/// Check the piece at its own origin and rotation
pub fn fits(board: &Board, piece: &Tetromino) -> bool {
    is_valid_position(board, piece, piece.x, piece.y, piece.rotation)
}

/// Shift the piece one cell; unchanged if the target is invalid
///
/// An origin that would leave the `i8` range counts as invalid.
pub fn move_piece(board: &Board, piece: &Tetromino, direction: Direction) -> Tetromino {
    let (dx, dy) = direction.offset();
    let (Some(x), Some(y)) = (piece.x.checked_add(dx), piece.y.checked_add(dy)) else {
        return *piece;
    };

    if is_valid_position(board, piece, x, y, piece.rotation) {
        piece.at(x, y)
    } else {
        *piece
    }
}

/// Rotate one step clockwise about the same origin; unchanged if it doesn't fit
pub fn rotate_piece(board: &Board, piece: &Tetromino) -> Tetromino {
    let rotation = piece.rotation.rotate_cw();

    if is_valid_position(board, piece, piece.x, piece.y, rotation) {
        piece.rotated_to(rotation)
    } else {
        *piece
    }
}

/// Drop the piece straight down to its resting row
pub fn hard_drop(board: &Board, piece: &Tetromino) -> Tetromino {
    let mut y = piece.y;
    // The floor stops this well before i8::MAX for any valid piece.
    while let Some(below) = y.checked_add(1) {
        if !is_valid_position(board, piece, piece.x, below, piece.rotation) {
            break;
        }
        y = below;
    }
    piece.at(piece.x, y)
}

/// Landing preview for the active piece
pub fn ghost_piece(board: &Board, piece: &Tetromino) -> Tetromino {
    hard_drop(board, piece)
}

/// True when a freshly spawned piece already collides
pub fn is_game_over(board: &Board, piece: &Tetromino) -> bool {
    !fits(board, piece)
}

//! Core rules engine - pure, stateless and testable
//!
//! This crate contains the game rules of the falling-block puzzle: board
//! representation, piece movement and rotation checks, collision detection,
//! line clearing, scoring and level/speed progression.
//! It has **no hidden state and no I/O**:
//!
//! - Every operation is a total function of its inputs
//! - Boards and pieces are small `Copy` values; operations return new values
//! - Rejected moves return the piece unchanged rather than an error
//! - No allocation on any path
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 flat grid of cells
//! - [`pieces`]: shape masks for the seven kinds and the [`Tetromino`] instance
//! - [`rules`]: position validity, movement, rotation, hard drop, game over
//! - [`lines`]: locking pieces, finding and clearing completed rows
//! - [`scoring`]: line-clear score, level and gravity speed
//! - [`rng`]: uniform random piece generation
//!
//! # Example
//!
//! ```
//! use pocket_tetris_core::*;
//! use pocket_tetris_core::types::{Direction, PieceKind};
//!
//! let board = create_empty_board();
//! let piece = Tetromino::new(PieceKind::I);
//!
//! let piece = move_piece(&board, &piece, Direction::Left);
//! let piece = rotate_piece(&board, &piece);
//! let landed = hard_drop(&board, &piece);
//! assert!(fits(&board, &landed));
//!
//! let board = place_tetromino(&board, &landed);
//! let full = get_completed_lines(&board);
//! let board = clear_lines(&board, &full);
//! assert_eq!(calculate_score(full.len(), 0), 0);
//! assert!(!is_game_over(&board, &random_piece()));
//! ```

pub mod board;
pub mod lines;
pub mod pieces;
pub mod rng;
pub mod rules;
pub mod scoring;

pub use pocket_tetris_types as types;

// Re-export the engine surface for convenience
pub use board::{create_empty_board, Board};
pub use lines::{clear_lines, get_completed_lines, place_tetromino, CompletedLines};
pub use pieces::{get_mask, get_shape, PieceCells, ShapeMask, Tetromino};
pub use rng::{random_kind, random_piece, random_piece_with};
pub use rules::{
    fits, ghost_piece, hard_drop, is_game_over, is_valid_position, move_piece, rotate_piece,
};
pub use scoring::{calculate_level, calculate_score, get_drop_speed};

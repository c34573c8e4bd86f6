//! Terminal front end.
//!
//! Renders a [`session::GameSnapshot`] into a framebuffer of styled character
//! cells and flushes it to the terminal with crossterm. Rendering is pure and
//! unit-testable; only [`TerminalRenderer`] touches the terminal.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use pocket_tetris_core as core;
pub use pocket_tetris_session as session;
pub use pocket_tetris_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};

//! Pocket Tetris (workspace facade crate).
//!
//! Re-exports the workspace crates under one roof so the binary, the
//! integration tests and the benchmarks can use `pocket_tetris::{core, session, ...}`.

pub use pocket_tetris_core as core;
pub use pocket_tetris_input as input;
pub use pocket_tetris_session as session;
pub use pocket_tetris_term as term;
pub use pocket_tetris_types as types;

//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`] intents. There is
//! no auto-repeat handling: every key press is one discrete intent, like a tap on
//! an on-screen button.

pub mod map;

pub use pocket_tetris_types as types;

pub use map::{handle_key_event, should_quit};

//! Game session - the state container the front end drives
//!
//! The rules engine in `pocket-tetris-core` is stateless. This crate holds the
//! state of one game and applies the engine to it:
//!
//! - **Intents**: [`GameState::apply_action`] dispatches moves, rotation, drop,
//!   pause and restart
//! - **Gravity**: [`GameState::tick`] accumulates elapsed time and steps the
//!   piece down every `get_drop_speed(level)` milliseconds
//! - **Lock cycle**: a gravity step that cannot move the piece locks it,
//!   clears lines, updates score/lines/level and spawns the next piece
//! - **Game over**: a blocked spawn ends the game; intents and ticks are then
//!   ignored until restart
//!
//! # Example
//!
//! ```
//! use pocket_tetris_session::GameState;
//! use pocket_tetris_session::types::GameAction;
//!
//! let mut game = GameState::new(12345);
//! game.start();
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! game.apply_action(GameAction::HardDrop);
//!
//! // The dropped piece locks on the next gravity step.
//! let outcome = game.step_down().expect("resting piece locks");
//! assert!(!outcome.game_over);
//! assert_eq!(game.board().filled_count(), 4);
//! ```
//!
//! All state changes emit `tracing` events (debug for locks, info for line
//! clears, level-ups, new games and game over).

pub mod game_state;
pub mod snapshot;

pub use pocket_tetris_core as core;
pub use pocket_tetris_types as types;

pub use game_state::{GameState, LockOutcome};
pub use snapshot::GameSnapshot;

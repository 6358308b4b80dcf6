//! Terminal input module (core-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]s. Quitting is
//! detected separately by [`should_quit`] and never reaches the game core.
//! There is no DAS/ARR layer: held keys rely on the terminal's own auto-repeat,
//! so callers should treat `Press` and `Repeat` events alike.

pub mod map;

pub use console_tetris_types as types;

pub use map::{handle_key_event, should_quit};

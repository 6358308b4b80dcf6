//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains all the game rules and state management. It has **no
//! dependencies** on terminal, rendering or input handling, which makes it:
//!
//! - **Deterministic**: the same seed, actions and timestamps give the same game
//! - **Testable**: every rule is covered by unit tests next to the code
//! - **Portable**: the driver decides how input and time are captured
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 grid with collision checks and line clearing
//! - [`pieces`]: shape catalog, occupancy matrices and kick-based rotation
//! - [`rng`]: 7-bag piece generator with an owned, seedable PRNG
//! - [`scoring`]: line/drop points, levels and gravity intervals
//! - [`game_state`]: the state machine the driver talks to
//! - [`snapshot`]: plain read-only view handed to renderers
//!
//! # Game Rules
//!
//! - **7-Bag Randomizer**: every kind appears once per seven pieces
//! - **Rotation**: 90° matrix rotation with horizontal kicks `0, -1, +1, -2, +2`, no vertical kicks
//! - **Locking**: a piece locks as soon as it cannot move down (soft drop, hard drop or gravity)
//! - **Scoring**: `100 * lines * level` per clear, +1 per soft-drop row, +2 per hard-drop row
//! - **Levels**: one level per 10 lines; gravity speeds up 50ms per level down to 50ms
//! - **Top-out**: the game ends when a new piece cannot spawn
//!
//! # Example
//!
//! ```
//! use console_tetris_core::GameState;
//! use console_tetris_types::GameAction;
//!
//! let mut game = GameState::new(12345);
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::RotateCw);
//! game.apply_action(GameAction::HardDrop);
//!
//! assert!(game.score() > 0); // Hard drop awards points
//! ```
//!
//! # Timing
//!
//! The core never reads a clock. Call [`GameState::tick`](game_state::GameState::tick)
//! with a monotonic millisecond timestamp whose zero is the start of the game; gravity
//! advances one row each time the level's interval has elapsed.

pub mod board;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use console_tetris_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game_state::{GameState, SessionPhase};
pub use pieces::{base_matrix, try_rotate, Matrix, Piece};
pub use rng::PieceBag;
pub use scoring::{calculate_drop_score, calculate_level, calculate_line_score, drop_interval_ms};
pub use snapshot::{GameSnapshot, PieceSnapshot};

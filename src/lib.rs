//! Console Tetris (workspace facade crate).
//!
//! Re-exports the workspace crates under one name so the binary, integration
//! tests and benches can write `console_tetris::{core,input,term,types}`.

pub use console_tetris_core as core;
pub use console_tetris_input as input;
pub use console_tetris_term as term;
pub use console_tetris_types as types;

//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer. It avoids widget/layout toolkits and
//! renders into a plain framebuffer that is then flushed to the terminal:
//!
//! - [`GameView`] turns a `core::GameSnapshot` into a [`FrameBuffer`] (pure)
//! - [`TerminalRenderer`] writes framebuffers to stdout with crossterm
//!
//! Board cells are two columns wide to compensate for glyph aspect ratio.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use console_tetris_core as core;
pub use console_tetris_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{piece_color, AnchorY, GameView, Layout, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};

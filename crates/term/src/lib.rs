//! Terminal "game renderer" module.
//!
//! Renders a [`engine::Session`] into a plain framebuffer that is then
//! flushed to the terminal with crossterm. No widget toolkit is involved,
//! which keeps precise control over the 2:1 cell aspect ratio.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tetris_hint_core as core;
pub use tetris_hint_engine as engine;
pub use tetris_hint_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};

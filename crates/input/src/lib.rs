//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into a [`crate::types::Seat`] plus a
//! [`crate::types::GameAction`]. Only key presses are meaningful here; the
//! frontend filters out repeat and release events before calling in.

pub mod map;

pub use tetris_hint_types as types;

pub use map::{map_key, should_quit};

//! Terminal falling-block puzzle with a best-move hint engine (workspace facade crate).
//!
//! Re-exports the member crates under short names so binaries, tests and
//! benches can write `tetris_hint::{core, engine, input, term, types}`.

pub use tetris_hint_core as core;
pub use tetris_hint_engine as engine;
pub use tetris_hint_input as input;
pub use tetris_hint_term as term;
pub use tetris_hint_types as types;

pub mod cli;

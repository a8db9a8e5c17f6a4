//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the board and piece rules the rest of the workspace is
//! built on. It has **no dependencies** on rendering, input, or timing:
//!
//! - **Deterministic**: same seed, same piece sequence
//! - **Value types**: [`Board`] and [`Piece`] are `Copy`, so a scratch copy per
//!   simulated placement is a plain memcpy
//! - **Single collision authority**: [`Board::is_valid_placement`]
//!
//! # Module Structure
//!
//! - [`pieces`]: shape catalog, rotation and translation
//! - [`board`]: 10x20 grid with collision test, commit and line clearing
//! - [`player`]: one board plus its live piece, validated moves and gravity
//! - [`rng`]: uniform random piece source
//! - [`levels`]: level progression and falling-speed lookup
//!
//! # Example
//!
//! ```
//! use tetris_hint_core::{Board, Piece};
//! use tetris_hint_types::PieceKind;
//!
//! let mut board = Board::new();
//! let mut piece = Piece::spawn(PieceKind::O);
//!
//! // Drop the square to the floor and lock it.
//! while board.can_place(&piece, 0, 1, 0) {
//!     piece.translate(0, 1);
//! }
//! board.commit(&piece);
//! assert_eq!(board.clear_lines(), 0);
//! assert_eq!(board.column_height(4), 2);
//! ```

pub mod board;
pub mod levels;
pub mod pieces;
pub mod player;
pub mod rng;

pub use tetris_hint_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use pieces::{get_shape, Piece, PieceShape, CATALOG};
pub use player::{Player, StepOutcome};
pub use rng::{PieceSource, SimpleRng};

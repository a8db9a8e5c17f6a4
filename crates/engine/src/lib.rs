//! Placement search and game sessions
//!
//! Everything here is built on the value types from `tetris-hint-core`:
//!
//! - [`candidates`]: the fixed rotation x shift grid for a piece
//! - [`simulate`]: drop one candidate on a scratch copy of the board
//! - [`eval`]: heuristic board score
//! - [`search`]: brute-force best move and ranked alternatives
//! - [`hint`]: best move plus the clue piece for display
//! - [`steer`]: drive a live piece onto a candidate with validated moves
//! - [`session`]: Classic, Hinted and Versus games with optional autopilot
//!
//! # Example
//!
//! ```
//! use tetris_hint_engine::{best_move, core::{Board, Piece}, types::PieceKind};
//!
//! let best = best_move(&Piece::spawn(PieceKind::O), &Board::new()).unwrap();
//! assert_eq!((best.rotation(), best.shift()), (0, -4));
//! ```

pub mod candidates;
pub mod eval;
pub mod hint;
pub mod search;
pub mod session;
pub mod simulate;
pub mod steer;

pub use tetris_hint_core as core;
pub use tetris_hint_types as types;

pub use candidates::{candidates, Candidate, MAX_CANDIDATES};
pub use eval::{evaluate, evaluate_with, BoardFeatures, EvalWeights};
pub use hint::{compute_hint, Hint};
pub use search::{best_move, best_move_with, ranked_moves, scored_moves, BestMove};
pub use session::Session;
pub use simulate::{resting_piece, simulate, PlacementResult};
pub use steer::{steer, SteerError};

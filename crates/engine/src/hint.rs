//! Placement hints: the best move plus the piece drawn where it would land.

use crate::core::{Piece, Player};
use crate::search::{best_move, BestMove};
use crate::simulate::resting_piece;

/// Best move for the live piece and its resting position (the clue piece)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hint {
    pub best: BestMove,
    pub clue: Piece,
}

/// Compute the hint for a player's live piece.
///
/// None when the player has no piece or no candidate is legal.
pub fn compute_hint(player: &Player) -> Option<Hint> {
    let piece = player.piece()?;
    let best = best_move(piece, player.board())?;
    let clue = resting_piece(player.board(), piece, best.candidate)?;
    Some(Hint { best, clue })
}

//! Placement simulation.
//!
//! Works entirely on value copies: the live board and piece passed in are
//! borrowed immutably and never change.

use crate::candidates::Candidate;
use crate::core::{Board, Piece};

/// Board after a simulated drop, plus how many rows it cleared
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementResult {
    pub board: Board,
    pub lines_cleared: u32,
}

/// Where the piece comes to rest for `candidate`, or None if the rotated and
/// shifted piece is already blocked before falling.
pub fn resting_piece(board: &Board, piece: &Piece, candidate: Candidate) -> Option<Piece> {
    let mut probe = piece.moved(candidate.shift, 0, candidate.rotation);
    if !board.is_valid_placement(&probe) {
        return None;
    }
    while board.can_place(&probe, 0, 1, 0) {
        probe.translate(0, 1);
    }
    Some(probe)
}

/// Hard-drop `candidate` onto a copy of `board`, commit, and clear rows.
///
/// Returns None when the candidate is rejected; a rejection is not a
/// placement and must not be scored.
pub fn simulate(board: &Board, piece: &Piece, candidate: Candidate) -> Option<PlacementResult> {
    let rest = resting_piece(board, piece, candidate)?;
    let mut scratch = *board;
    scratch.commit(&rest);
    let lines_cleared = scratch.clear_lines();
    Some(PlacementResult {
        board: scratch,
        lines_cleared,
    })
}

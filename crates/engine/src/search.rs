//! Best-move selection.
//!
//! Brute force over [`candidates`]: simulate each, drop the rejected ones,
//! score the rest, keep the best. Ties go to the candidate enumerated first.

use tracing::trace;

use crate::candidates::{candidates, Candidate};
use crate::core::{Board, Piece};
use crate::eval::{evaluate_with, EvalWeights};
use crate::simulate::simulate;

/// A scored candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BestMove {
    pub candidate: Candidate,
    pub score: i32,
    pub lines_cleared: u32,
}

impl BestMove {
    pub fn rotation(&self) -> u8 {
        self.candidate.rotation
    }

    pub fn shift(&self) -> i8 {
        self.candidate.shift
    }
}

/// Every legal candidate with its score, in enumeration order
pub fn scored_moves(piece: &Piece, board: &Board, weights: &EvalWeights) -> Vec<BestMove> {
    candidates(piece)
        .into_iter()
        .filter_map(|candidate| {
            let result = simulate(board, piece, candidate)?;
            Some(BestMove {
                candidate,
                score: evaluate_with(&result.board, result.lines_cleared, weights),
                lines_cleared: result.lines_cleared,
            })
        })
        .collect()
}

/// Highest-scoring placement, or None when no candidate is legal
pub fn best_move(piece: &Piece, board: &Board) -> Option<BestMove> {
    best_move_with(piece, board, &EvalWeights::default())
}

/// [`best_move`] with custom weights; the first of equally scored candidates wins
pub fn best_move_with(piece: &Piece, board: &Board, weights: &EvalWeights) -> Option<BestMove> {
    let mut best: Option<BestMove> = None;
    let mut legal = 0usize;

    for candidate in candidates(piece) {
        let Some(result) = simulate(board, piece, candidate) else {
            continue;
        };
        legal += 1;
        let score = evaluate_with(&result.board, result.lines_cleared, weights);
        // Strictly greater keeps the earliest of equal scores.
        if best.map_or(true, |b| score > b.score) {
            best = Some(BestMove {
                candidate,
                score,
                lines_cleared: result.lines_cleared,
            });
        }
    }

    trace!(kind = ?piece.kind, legal, best = ?best, "move search");
    best
}

/// The `n` best placements, score descending; equal scores keep enumeration order
pub fn ranked_moves(piece: &Piece, board: &Board, n: usize) -> Vec<BestMove> {
    let mut moves = scored_moves(piece, board, &EvalWeights::default());
    // Stable sort preserves the tie-break.
    moves.sort_by(|a, b| b.score.cmp(&a.score));
    moves.truncate(n);
    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    #[test]
    fn fully_blocked_board_has_no_move() {
        let rows = vec!["#########."; 20];
        let board = Board::from_rows(&rows).unwrap();
        let piece = Piece::spawn(PieceKind::O);
        assert!(best_move(&piece, &board).is_none());
        assert!(ranked_moves(&piece, &board, 4).is_empty());
    }

    #[test]
    fn ranked_head_matches_best() {
        let board = Board::from_rows(&["##..######", "###.######"]).unwrap();
        let piece = Piece::spawn(PieceKind::J);
        let best = best_move(&piece, &board).unwrap();
        let ranked = ranked_moves(&piece, &board, 4);
        assert_eq!(ranked.len(), 4);
        assert_eq!(ranked[0], best);
        assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn best_is_maximum_under_custom_weights() {
        let board = Board::from_rows(&["####.#####"]).unwrap();
        let piece = Piece::spawn(PieceKind::I);
        let default_best = best_move(&piece, &board).unwrap();
        assert_eq!(default_best.lines_cleared, 1);

        let weights = EvalWeights {
            lines_cleared: 0,
            bumpiness: -1,
            holes: 0,
            danger: 0,
        };
        let scored = scored_moves(&piece, &board, &weights);
        let best = best_move_with(&piece, &board, &weights).unwrap();
        assert!(scored.iter().all(|m| m.score <= best.score));
    }
}

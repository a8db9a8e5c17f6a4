//! Heuristic board evaluation.
//!
//! Score = lines reward - bumpiness - holes - danger-zone penalty, with the
//! weights in [`EvalWeights`]. Higher is better; there is no fixed range.

use crate::core::Board;
use crate::types::{
    BOARD_HEIGHT, BOARD_WIDTH, BUMPINESS_WEIGHT, DANGER_WEIGHT, DANGER_ZONE, HOLE_WEIGHT,
    LINE_WEIGHT,
};

const W: usize = BOARD_WIDTH as usize;
const H: usize = BOARD_HEIGHT as usize;

/// Integer weights for each heuristic term
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvalWeights {
    pub lines_cleared: i32,
    pub bumpiness: i32,
    pub holes: i32,
    pub danger: i32,
}

impl Default for EvalWeights {
    fn default() -> Self {
        Self {
            lines_cleared: LINE_WEIGHT,
            bumpiness: BUMPINESS_WEIGHT,
            holes: HOLE_WEIGHT,
            danger: DANGER_WEIGHT,
        }
    }
}

/// Raw heuristic terms for one board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoardFeatures {
    pub heights: [u32; W],
    pub bumpiness: u32,
    pub holes: u32,
    pub danger: bool,
}

impl BoardFeatures {
    /// Extract every term in one pass over the columns
    pub fn of(board: &Board) -> Self {
        let heights = column_heights(board);
        Self {
            heights,
            bumpiness: bumpiness(&heights),
            holes: holes(board, &heights),
            danger: danger_zone_occupied(board),
        }
    }

    /// Weighted sum of the terms
    pub fn score(&self, lines_cleared: u32, weights: &EvalWeights) -> i32 {
        let mut score = weights.lines_cleared * lines_cleared as i32;
        score += weights.bumpiness * self.bumpiness as i32;
        score += weights.holes * self.holes as i32;
        if self.danger {
            score += weights.danger;
        }
        score
    }
}

/// Score a board with the default weights
pub fn evaluate(board: &Board, lines_cleared: u32) -> i32 {
    evaluate_with(board, lines_cleared, &EvalWeights::default())
}

/// Score a board with custom weights
pub fn evaluate_with(board: &Board, lines_cleared: u32, weights: &EvalWeights) -> i32 {
    BoardFeatures::of(board).score(lines_cleared, weights)
}

/// Stack height of every column, measured from the floor
pub fn column_heights(board: &Board) -> [u32; W] {
    let mut h = [0u32; W];
    for (x, height) in h.iter_mut().enumerate() {
        *height = board.column_height(x);
    }
    h
}

/// Adjacent height differences, plus an extra charge when an edge column
/// sits lower than its inner neighbour.
pub fn bumpiness(heights: &[u32; W]) -> u32 {
    let mut b = heights
        .windows(2)
        .map(|pair| pair[0].abs_diff(pair[1]))
        .sum::<u32>();
    if heights[1] > heights[0] {
        b += heights[1] - heights[0];
    }
    if heights[W - 2] > heights[W - 1] {
        b += heights[W - 2] - heights[W - 1];
    }
    b
}

/// Empty cells below the top filled cell of their column
pub fn holes(board: &Board, heights: &[u32; W]) -> u32 {
    let mut holes = 0u32;
    for (x, &col_h) in heights.iter().enumerate() {
        let top = H - col_h as usize;
        for y in top..H {
            if !board.is_occupied(x as i8, y as i8) {
                holes += 1;
            }
        }
    }
    holes
}

/// Any danger-zone cell is filled
pub fn danger_zone_occupied(board: &Board) -> bool {
    DANGER_ZONE.iter().any(|&(x, y)| board.is_occupied(x, y))
}

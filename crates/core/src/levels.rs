//! Level progression and gravity lookup.
//!
//! The core does not own timing. These helpers only translate cleared lines
//! into a level and a level into "frames per row"; the frontend decides how
//! long a frame is.

use crate::types::{
    Difficulty, FALLING_SPEED, LINES_PER_LEVEL, MAX_LEVEL, VERSUS_LINES_PER_LEVEL,
};

/// Level for a single player (1-based, capped)
pub fn solo_level(lines: u32) -> u32 {
    (lines / LINES_PER_LEVEL + 1).min(MAX_LEVEL)
}

/// Shared level for two players, from their combined lines
pub fn versus_level(lines_a: u32, lines_b: u32) -> u32 {
    ((lines_a + lines_b) / VERSUS_LINES_PER_LEVEL + 1).min(MAX_LEVEL)
}

/// Frames per gravity step while every piece in play is still falling
pub fn frames_per_row(difficulty: Difficulty, level: u32) -> u32 {
    speed_at(difficulty.index() + level as usize - 1)
}

/// Frames per gravity step for the piece still falling after its rival landed
pub fn lone_frames_per_row(difficulty: Difficulty, level: u32) -> u32 {
    speed_at(difficulty.index() + level as usize + 2)
}

fn speed_at(idx: usize) -> u32 {
    FALLING_SPEED[idx.min(FALLING_SPEED.len() - 1)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solo_level_steps_every_ten_lines_and_caps() {
        assert_eq!(solo_level(0), 1);
        assert_eq!(solo_level(9), 1);
        assert_eq!(solo_level(10), 2);
        assert_eq!(solo_level(100), 11);
        assert_eq!(solo_level(10_000), 11);
    }

    #[test]
    fn versus_level_uses_combined_lines() {
        assert_eq!(versus_level(10, 9), 1);
        assert_eq!(versus_level(10, 10), 2);
        assert_eq!(versus_level(500, 500), 11);
    }

    #[test]
    fn speed_depends_on_difficulty_offset() {
        assert_eq!(frames_per_row(Difficulty::Easy, 1), 40);
        assert_eq!(frames_per_row(Difficulty::Medium, 1), 28);
        assert_eq!(frames_per_row(Difficulty::Hard, 1), 24);
        assert_eq!(lone_frames_per_row(Difficulty::Easy, 1), 21);
        assert_eq!(frames_per_row(Difficulty::Hard, 11), 10);
    }
}

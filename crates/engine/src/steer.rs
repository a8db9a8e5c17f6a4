//! Steering: drive a live piece onto a chosen candidate through the same
//! validated moves a human would make.

use crate::candidates::Candidate;
use crate::core::Player;
use crate::types::GameAction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SteerError {
    NoActive,
    RotationBlocked,
    ShiftBlocked,
}

impl SteerError {
    pub fn code(self) -> &'static str {
        match self {
            SteerError::NoActive => "no_active",
            SteerError::RotationBlocked | SteerError::ShiftBlocked => "blocked",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            SteerError::NoActive => "no active piece",
            SteerError::RotationBlocked => "could not rotate to target rotation",
            SteerError::ShiftBlocked => "could not shift to target column due to collision",
        }
    }
}

/// Rotate, shift one column at a time, then hard drop.
///
/// The piece is left resting, not locked; gravity locks it. On error the
/// piece keeps whatever moves already succeeded.
pub fn steer(player: &mut Player, candidate: Candidate) -> Result<(), SteerError> {
    if !player.has_piece() {
        return Err(SteerError::NoActive);
    }

    for _ in 0..candidate.rotation {
        if !player.apply_action(GameAction::Rotate) {
            return Err(SteerError::RotationBlocked);
        }
    }

    let step = if candidate.shift < 0 {
        GameAction::MoveLeft
    } else {
        GameAction::MoveRight
    };
    for _ in 0..candidate.shift.unsigned_abs() {
        if !player.apply_action(step) {
            return Err(SteerError::ShiftBlocked);
        }
    }

    player.apply_action(GameAction::HardDrop);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Board;
    use crate::simulate::resting_piece;
    use crate::types::PieceKind;

    #[test]
    fn steer_without_piece_fails() {
        let mut player = Player::new();
        let err = steer(&mut player, Candidate::new(0, 0)).unwrap_err();
        assert_eq!(err, SteerError::NoActive);
        assert_eq!(err.code(), "no_active");
    }

    #[test]
    fn steer_lands_where_simulation_predicts() {
        let board = Board::from_rows(&["#.........", "##...#...."]).unwrap();
        let mut player = Player::with_board(board);
        player.spawn(PieceKind::L);

        let candidate = Candidate::new(3, -2);
        let expected = resting_piece(player.board(), player.piece().unwrap(), candidate).unwrap();
        steer(&mut player, candidate).unwrap();
        assert_eq!(player.piece(), Some(&expected));
    }

    #[test]
    fn steer_reports_blocked_shift() {
        // Wall of blocks right of the spawn column, tall enough to meet the O.
        let rows = vec!["......#..."; 20];
        let board = Board::from_rows(&rows).unwrap();
        let mut player = Player::with_board(board);
        player.spawn(PieceKind::O);

        let err = steer(&mut player, Candidate::new(0, 2)).unwrap_err();
        assert_eq!(err, SteerError::ShiftBlocked);
        assert_eq!(err.message(), "could not shift to target column due to collision");
    }
}

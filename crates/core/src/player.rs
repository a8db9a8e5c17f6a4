//! Player module - one board and the piece falling onto it
//!
//! A player validates every move against its own board before applying it,
//! so the board only ever sees committed pieces that were legal. Versus play
//! keeps two of these side by side; single-player modes keep one.

use crate::board::Board;
use crate::pieces::Piece;
use crate::types::{GameAction, PieceKind};

/// Result of a gravity step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The piece moved down one row
    Fell,
    /// The piece could not fall; it was committed and full rows were cleared
    Locked { lines: u32 },
    /// No piece in play
    Idle,
}

/// Board plus optional live piece
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    board: Board,
    piece: Option<Piece>,
    lines_cleared: u32,
}

impl Player {
    /// Fresh player with an empty board and no piece
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            piece: None,
            lines_cleared: 0,
        }
    }

    /// Player on an existing board (tests, analysis)
    pub fn with_board(board: Board) -> Self {
        Self {
            board,
            piece: None,
            lines_cleared: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn piece(&self) -> Option<&Piece> {
        self.piece.as_ref()
    }

    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    /// Whether a piece is currently in play
    pub fn has_piece(&self) -> bool {
        self.piece.is_some()
    }

    /// Put a fresh piece of `kind` at its spawn anchor.
    ///
    /// Returns false when the spawn position is blocked; the piece is still
    /// installed so the frontend can draw the collision.
    pub fn spawn(&mut self, kind: PieceKind) -> bool {
        let piece = Piece::spawn(kind);
        let valid = self.board.is_valid_placement(&piece);
        self.piece = Some(piece);
        valid
    }

    /// Check whether the live piece could take the given move
    pub fn can_move(&self, dx: i8, dy: i8, rot: u8) -> bool {
        match self.piece {
            Some(ref piece) => self.board.can_place(piece, dx, dy, rot),
            None => false,
        }
    }

    /// Shift the live piece if the target is free
    pub fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        if !self.can_move(dx, dy, 0) {
            return false;
        }
        if let Some(piece) = self.piece.as_mut() {
            piece.translate(dx, dy);
        }
        true
    }

    /// Rotate the live piece one quarter turn clockwise if the target is free
    pub fn try_rotate(&mut self) -> bool {
        if !self.can_move(0, 0, 1) {
            return false;
        }
        if let Some(piece) = self.piece.as_mut() {
            piece.rotate(1);
        }
        true
    }

    /// Slide the live piece down until it rests; returns rows travelled.
    ///
    /// The piece stays live and locks on the next gravity step.
    pub fn hard_drop(&mut self) -> u32 {
        let mut rows = 0;
        while self.try_move(0, 1) {
            rows += 1;
        }
        rows
    }

    /// Apply a piece action. Session-level actions are ignored here.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.try_move(-1, 0),
            GameAction::MoveRight => self.try_move(1, 0),
            GameAction::SoftDrop => self.try_move(0, 1),
            GameAction::Rotate => self.try_rotate(),
            GameAction::HardDrop => {
                self.hard_drop();
                self.piece.is_some()
            }
            GameAction::Pause | GameAction::Restart => false,
        }
    }

    /// Gravity: fall one row, or lock the piece when it cannot
    pub fn step_down(&mut self) -> StepOutcome {
        if self.piece.is_none() {
            return StepOutcome::Idle;
        }
        if self.try_move(0, 1) {
            return StepOutcome::Fell;
        }
        let lines = self.lock();
        StepOutcome::Locked { lines }
    }

    /// Commit the live piece, clear full rows and retire the piece
    pub fn lock(&mut self) -> u32 {
        let Some(piece) = self.piece.take() else {
            return 0;
        };
        self.board.commit(&piece);
        let lines = self.board.clear_lines();
        self.lines_cleared += lines;
        lines
    }

    /// Where the live piece would come to rest if hard-dropped now
    pub fn ghost(&self) -> Option<Piece> {
        let mut ghost = self.piece?;
        while self.board.can_place(&ghost, 0, 1, 0) {
            ghost.translate(0, 1);
        }
        Some(ghost)
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_on_empty_board_is_valid() {
        let mut player = Player::new();
        for kind in PieceKind::ALL {
            assert!(player.spawn(kind), "{:?} should spawn", kind);
        }
    }

    #[test]
    fn moves_stop_at_walls() {
        let mut player = Player::new();
        player.spawn(PieceKind::O);
        let mut steps = 0;
        while player.apply_action(GameAction::MoveLeft) {
            steps += 1;
        }
        assert_eq!(steps, 4);
        assert_eq!(player.piece().map(|p| p.x), Some(0));
    }

    #[test]
    fn hard_drop_rests_without_locking() {
        let mut player = Player::new();
        player.spawn(PieceKind::O);
        assert_eq!(player.hard_drop(), 18);
        assert!(player.has_piece());
        assert_eq!(player.board().occupied_count(), 0);

        assert_eq!(player.step_down(), StepOutcome::Locked { lines: 0 });
        assert!(!player.has_piece());
        assert_eq!(player.board().occupied_count(), 4);
    }

    #[test]
    fn ghost_matches_hard_drop() {
        let mut player = Player::new();
        player.spawn(PieceKind::T);
        let ghost = player.ghost().unwrap();
        player.hard_drop();
        assert_eq!(player.piece(), Some(&ghost));
    }

    #[test]
    fn lock_counts_cleared_lines() {
        let board = Board::from_rows(&["####.#####"]).unwrap();
        let mut player = Player::with_board(board);
        player.spawn(PieceKind::I);
        player.hard_drop();
        assert_eq!(player.lock(), 1);
        assert_eq!(player.lines_cleared(), 1);
        // Three I cells remain above the cleared floor.
        assert_eq!(player.board().occupied_count(), 3);
    }

    #[test]
    fn step_without_piece_is_idle() {
        let mut player = Player::new();
        assert_eq!(player.step_down(), StepOutcome::Idle);
    }
}

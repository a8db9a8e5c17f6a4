//! Key mapping from terminal events to seated game actions.
//!
//! The main seat plays on the arrow keys; the left seat (versus only) on
//! WASD with `t` for hard drop. Pause and restart belong to the session and
//! are reported on the main seat.

use crate::types::{GameAction, Seat};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a key press to the seat it drives and the action it requests.
pub fn map_key(key: KeyEvent) -> Option<(Seat, GameAction)> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }
    let mapped = match key.code {
        // Main seat
        KeyCode::Left => (Seat::Main, GameAction::MoveLeft),
        KeyCode::Right => (Seat::Main, GameAction::MoveRight),
        KeyCode::Down => (Seat::Main, GameAction::SoftDrop),
        KeyCode::Up => (Seat::Main, GameAction::Rotate),
        KeyCode::Char(' ') => (Seat::Main, GameAction::HardDrop),

        // Left seat
        KeyCode::Char('a') | KeyCode::Char('A') => (Seat::Left, GameAction::MoveLeft),
        KeyCode::Char('d') | KeyCode::Char('D') => (Seat::Left, GameAction::MoveRight),
        KeyCode::Char('s') | KeyCode::Char('S') => (Seat::Left, GameAction::SoftDrop),
        KeyCode::Char('w') | KeyCode::Char('W') => (Seat::Left, GameAction::Rotate),
        KeyCode::Char('t') | KeyCode::Char('T') => (Seat::Left, GameAction::HardDrop),

        // Session
        KeyCode::Char('p') | KeyCode::Char('P') => (Seat::Main, GameAction::Pause),
        KeyCode::Char('r') | KeyCode::Char('R') => (Seat::Main, GameAction::Restart),

        _ => return None,
    };
    Some(mapped)
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

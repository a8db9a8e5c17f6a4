//! Session module - one game from first spawn to game over
//!
//! A session composes one or two [`Player`]s with the piece source, level
//! progression and the optional hint/autopilot capabilities:
//!
//! - **Classic**: one board; a piece locks on the gravity step after it
//!   lands, then the next piece spawns.
//! - **Hinted**: Classic plus a best-move hint recomputed on every spawn.
//! - **Versus**: two boards fed the same pieces. A player whose piece landed
//!   waits for the other; both then receive the next piece together.
//!
//! The session never looks at a clock. The frontend calls [`Session::tick`]
//! once per frame and [`Session::apply`] for each input.

use arrayvec::ArrayVec;
use tracing::{debug, info};

use crate::core::levels::{frames_per_row, lone_frames_per_row, solo_level, versus_level};
use crate::core::{PieceSource, Player, StepOutcome};
use crate::hint::{compute_hint, Hint};
use crate::steer::steer;
use crate::types::{GameAction, ModeKind, PieceKind, Seat, Settings};

/// Complete game state
#[derive(Debug, Clone)]
pub struct Session {
    settings: Settings,
    players: ArrayVec<Player, 2>,
    next: PieceKind,
    source: PieceSource,
    /// Frame counter; gravity fires when it is a multiple of the current speed.
    frame: u64,
    /// Spawn rounds so far (a versus round feeds both boards once)
    spawned: u32,
    paused: bool,
    game_over: bool,
    hint: Option<Hint>,
}

impl Session {
    /// Create a session and spawn the first piece(s)
    pub fn new(settings: Settings) -> Self {
        let mut source = PieceSource::new(settings.seed);
        let first = source.draw();
        let next = source.draw();

        let mut players = ArrayVec::new();
        for _ in 0..settings.mode.seats() {
            players.push(Player::new());
        }

        let mut session = Self {
            settings,
            players,
            next,
            source,
            frame: 1,
            spawned: 0,
            paused: false,
            game_over: false,
            hint: None,
        };
        info!(
            mode = settings.mode.as_str(),
            difficulty = settings.difficulty.as_str(),
            autopilot = settings.autopilot,
            seed = settings.seed,
            "session started"
        );
        session.spawn_all(first);
        session
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn mode(&self) -> ModeKind {
        self.settings.mode
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// The player sitting at `seat`, if the mode has one there
    pub fn player(&self, seat: Seat) -> Option<&Player> {
        self.players.get(seat.index())
    }

    /// Piece that will spawn after the current one
    pub fn next_piece(&self) -> PieceKind {
        self.next
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn pieces_spawned(&self) -> u32 {
        self.spawned
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Current hint for the main seat, when hints are enabled and available
    pub fn hint(&self) -> Option<&Hint> {
        self.hint.as_ref()
    }

    /// Whether the move search runs on each spawn
    pub fn hints_enabled(&self) -> bool {
        self.settings.mode == ModeKind::Hinted || self.settings.autopilot
    }

    /// Lines cleared by every player together
    pub fn total_lines(&self) -> u32 {
        self.players.iter().map(Player::lines_cleared).sum()
    }

    pub fn level(&self) -> u32 {
        match self.settings.mode {
            ModeKind::Versus => {
                let a = self.players.first().map_or(0, Player::lines_cleared);
                let b = self.players.get(1).map_or(0, Player::lines_cleared);
                versus_level(a, b)
            }
            ModeKind::Classic | ModeKind::Hinted => solo_level(self.total_lines()),
        }
    }

    /// Frames between gravity steps right now
    pub fn frames_per_row(&self) -> u32 {
        let difficulty = self.settings.difficulty;
        let level = self.level();
        if self.players.iter().all(Player::has_piece) {
            frames_per_row(difficulty, level)
        } else {
            lone_frames_per_row(difficulty, level)
        }
    }

    /// Apply one input. Returns whether anything changed.
    pub fn apply(&mut self, seat: Seat, action: GameAction) -> bool {
        match action {
            GameAction::Pause => {
                if self.game_over {
                    return false;
                }
                self.paused = !self.paused;
                true
            }
            GameAction::Restart => {
                *self = Self::new(self.settings);
                true
            }
            _ => {
                if self.paused || self.game_over {
                    return false;
                }
                if seat == Seat::Main && self.settings.autopilot {
                    return false;
                }
                match self.players.get_mut(seat.index()) {
                    Some(player) => player.apply_action(action),
                    None => false,
                }
            }
        }
    }

    /// Advance one frame. Returns true when gravity fired.
    pub fn tick(&mut self) -> bool {
        if self.paused || self.game_over {
            return false;
        }

        let speed = self.frames_per_row() as u64;

        if self.settings.mode == ModeKind::Versus && self.players.iter().all(|p| !p.has_piece()) {
            let kind = self.draw_next();
            self.spawn_all(kind);
        }

        let fired = !self.game_over && self.frame % speed == 0;
        if fired {
            self.gravity();
        }
        self.frame += 1;
        fired
    }

    fn gravity(&mut self) {
        let mut locked_main = false;
        for (seat, player) in self.players.iter_mut().enumerate() {
            if let StepOutcome::Locked { lines } = player.step_down() {
                debug!(seat, lines, total = player.lines_cleared(), "piece locked");
                locked_main |= seat == 0;
            }
        }

        // Single-player modes spawn straight away; versus waits for both.
        if locked_main && self.settings.mode != ModeKind::Versus {
            let kind = self.draw_next();
            self.spawn_all(kind);
        }
    }

    fn draw_next(&mut self) -> PieceKind {
        let kind = self.next;
        self.next = self.source.draw();
        kind
    }

    /// Give every player a fresh piece of `kind`; any blocked spawn ends the game
    fn spawn_all(&mut self, kind: PieceKind) {
        let mut blocked = false;
        for player in self.players.iter_mut() {
            blocked |= !player.spawn(kind);
        }
        self.spawned += 1;
        debug!(kind = kind.as_str(), next = self.next.as_str(), "spawned");

        if blocked {
            self.finish("spawn blocked");
            return;
        }
        self.refresh_hint();
    }

    fn refresh_hint(&mut self) {
        self.hint = None;
        if !self.hints_enabled() {
            return;
        }
        let Some(main) = self.players.first() else {
            return;
        };
        self.hint = compute_hint(main);

        let Some(hint) = self.hint else {
            self.finish("no legal placement");
            return;
        };
        debug!(
            rotation = hint.best.rotation(),
            shift = hint.best.shift(),
            score = hint.best.score,
            "hint"
        );

        if self.settings.autopilot {
            if let Some(main) = self.players.first_mut() {
                if let Err(err) = steer(main, hint.best.candidate) {
                    debug!(code = err.code(), "autopilot: {}", err.message());
                }
            }
        }
    }

    fn finish(&mut self, reason: &str) {
        self.game_over = true;
        self.hint = None;
        info!(reason, lines = self.total_lines(), frame = self.frame, "game over");
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Difficulty;

    fn settings(mode: ModeKind) -> Settings {
        Settings {
            mode,
            difficulty: Difficulty::Easy,
            autopilot: false,
            seed: 7,
        }
    }

    #[test]
    fn classic_has_one_seat_and_a_piece() {
        let s = Session::new(settings(ModeKind::Classic));
        assert_eq!(s.players().len(), 1);
        assert!(s.player(Seat::Main).unwrap().has_piece());
        assert!(s.player(Seat::Left).is_none());
        assert!(s.hint().is_none());
    }

    #[test]
    fn gravity_fires_on_speed_multiples() {
        let mut s = Session::new(settings(ModeKind::Classic));
        assert_eq!(s.frames_per_row(), 40);
        let y0 = s.player(Seat::Main).unwrap().piece().unwrap().y;
        for _ in 1..40 {
            assert!(!s.tick());
        }
        assert!(s.tick());
        assert_eq!(s.player(Seat::Main).unwrap().piece().unwrap().y, y0 + 1);
    }

    #[test]
    fn pause_freezes_ticks_and_input() {
        let mut s = Session::new(settings(ModeKind::Classic));
        assert!(s.apply(Seat::Main, GameAction::Pause));
        assert!(!s.apply(Seat::Main, GameAction::MoveLeft));
        let frame = s.frame();
        s.tick();
        assert_eq!(s.frame(), frame);
        assert!(s.apply(Seat::Main, GameAction::Pause));
        assert!(!s.paused());
    }

    #[test]
    fn left_seat_is_ignored_in_classic() {
        let mut s = Session::new(settings(ModeKind::Classic));
        assert!(!s.apply(Seat::Left, GameAction::MoveLeft));
    }

    #[test]
    fn hinted_mode_has_hint_on_spawn() {
        let s = Session::new(settings(ModeKind::Hinted));
        let hint = s.hint().expect("hint on empty board");
        let main = s.player(Seat::Main).unwrap();
        assert_eq!(hint.clue.kind, main.piece().unwrap().kind);
    }
}

//! Core types module - shared data structures and constants
//!
//! This crate defines the fundamental types used throughout the workspace.
//! All types are pure data with no external dependencies, so they can be used
//! by the board engine, the move search, the terminal frontend and tests alike.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//! - Rows above the grid (`y < 0`) exist only for freshly spawned pieces.
//!
//! # Timing
//!
//! The game advances in frames of `TICK_MS` (60 frames per second). Gravity is
//! expressed in frames per row and looked up in [`FALLING_SPEED`] by
//! `difficulty + level`:
//!
//! | Index | Frames per row |
//! |-------|----------------|
//! | 0 | 40 |
//! | 1 | 28 |
//! | 2 | 24 |
//! | 3 | 21 |
//! | 4 | 18 |
//! | 5 | 15 |
//! | 6 | 13 |
//! | 7 | 12 |
//! | 8 | 11 |
//! | 9+ | 10 |
//!
//! # Examples
//!
//! ```
//! use tetris_hint_types::{Difficulty, ModeKind, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(PieceKind::from_str("t"), Some(PieceKind::T));
//! assert_eq!(ModeKind::from_str("versus"), Some(ModeKind::Versus));
//! assert_eq!(Difficulty::Hard.index(), 2);
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Frame length in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Frames per gravity step, indexed by `difficulty + level - 1`
/// (`difficulty + level + 2` for the lone survivor in versus play).
pub const FALLING_SPEED: [u32; 17] = [
    40, 28, 24, 21, 18, 15, 13, 12, 11, 10, 10, 10, 10, 10, 10, 10, 10,
];

/// Highest reachable level
pub const MAX_LEVEL: u32 = 11;

/// Lines needed per level in single-player modes
pub const LINES_PER_LEVEL: u32 = 10;

/// Combined lines needed per level in versus mode
pub const VERSUS_LINES_PER_LEVEL: u32 = 20;

/// Cells near the spawn point whose occupation means the stack has topped out.
/// Coordinates are `(x, y)`.
pub const DANGER_ZONE: [(i8, i8); 4] = [(3, 2), (4, 2), (5, 2), (4, 3)];

/// Leftmost horizontal shift tried by the move search (relative to spawn)
pub const MIN_SHIFT: i8 = -4;

/// Rightmost horizontal shift tried by the move search (relative to spawn)
pub const MAX_SHIFT: i8 = 5;

/// Reward per cleared line
pub const LINE_WEIGHT: i32 = 40;

/// Penalty per unit of bumpiness
pub const BUMPINESS_WEIGHT: i32 = -2;

/// Penalty per hole
pub const HOLE_WEIGHT: i32 = -30;

/// Penalty applied once when the danger zone is occupied
pub const DANGER_WEIGHT: i32 = -2000;


/// The seven tetromino piece kinds
///
/// The kind doubles as the colour tag of every cell the piece fills:
/// - **S**: red
/// - **Z**: green
/// - **J**: pink
/// - **L**: orange
/// - **I**: blue
/// - **O**: yellow
/// - **T**: aqua
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    S,
    Z,
    J,
    L,
    I,
    O,
    T,
}

impl PieceKind {
    /// Every kind, in catalog order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_hint_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            _ => None,
        }
    }

    /// Convert to an upper-case single letter
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::S => "S",
            PieceKind::Z => "Z",
            PieceKind::J => "J",
            PieceKind::L => "L",
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::T => "T",
        }
    }

    /// Position in [`PieceKind::ALL`]
    pub fn index(&self) -> usize {
        match self {
            PieceKind::S => 0,
            PieceKind::Z => 1,
            PieceKind::J => 2,
            PieceKind::L => 3,
            PieceKind::I => 4,
            PieceKind::O => 5,
            PieceKind::T => 6,
        }
    }
}

/// A cell on the game board
///
/// - `None`: empty
/// - `Some(PieceKind)`: filled, tagged with the colour of the piece that filled it
pub type Cell = Option<PieceKind>;

/// Actions the session accepts from a player (keyboard or autopilot)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one row down
    SoftDrop,
    /// Slide piece down until it rests (it locks on the next gravity step)
    HardDrop,
    /// Rotate piece 90° clockwise
    Rotate,
    /// Toggle pause state
    Pause,
    /// Start over with the same settings
    Restart,
}

impl GameAction {
    /// Parse action from string (case-insensitive)
    ///
    /// ```
    /// use tetris_hint_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("hardDrop"), Some(GameAction::HardDrop));
    /// assert_eq!(GameAction::from_str("rotate"), Some(GameAction::Rotate));
    /// assert_eq!(GameAction::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "softdrop" => Some(GameAction::SoftDrop),
            "harddrop" => Some(GameAction::HardDrop),
            "rotate" => Some(GameAction::Rotate),
            "pause" => Some(GameAction::Pause),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::HardDrop => "hardDrop",
            GameAction::Rotate => "rotate",
            GameAction::Pause => "pause",
            GameAction::Restart => "restart",
        }
    }

    /// Whether the action steers the live piece (as opposed to session control)
    pub fn is_piece_action(&self) -> bool {
        !matches!(self, GameAction::Pause | GameAction::Restart)
    }
}

/// Which board a keyboard action belongs to
///
/// Single-player modes only have a `Main` seat. Versus play adds `Left`,
/// drawn to the left of the main board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    Main,
    Left,
}

impl Seat {
    pub fn index(&self) -> usize {
        match self {
            Seat::Main => 0,
            Seat::Left => 1,
        }
    }
}

/// Game variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModeKind {
    /// One player, one board
    #[default]
    Classic,
    /// Two players on separate boards sharing the piece sequence
    Versus,
    /// Classic play with a best-move preview
    Hinted,
}

impl ModeKind {
    /// Parse mode from string (case-insensitive); also accepts the menu digits 1-3
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "classic" | "1" => Some(ModeKind::Classic),
            "versus" | "2" => Some(ModeKind::Versus),
            "hinted" | "hint" | "3" => Some(ModeKind::Hinted),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ModeKind::Classic => "classic",
            ModeKind::Versus => "versus",
            ModeKind::Hinted => "hinted",
        }
    }

    /// Number of boards in play
    pub fn seats(&self) -> usize {
        match self {
            ModeKind::Versus => 2,
            ModeKind::Classic | ModeKind::Hinted => 1,
        }
    }
}

/// Difficulty offsets the falling-speed lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// Parse difficulty from string (case-insensitive); accepts `e`, `m`, `h`
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" | "e" => Some(Difficulty::Easy),
            "medium" | "m" => Some(Difficulty::Medium),
            "hard" | "h" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// Offset into [`FALLING_SPEED`]
    pub fn index(&self) -> usize {
        match self {
            Difficulty::Easy => 0,
            Difficulty::Medium => 1,
            Difficulty::Hard => 2,
        }
    }
}

/// Runtime game settings (chosen on the command line)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub mode: ModeKind,
    pub difficulty: Difficulty,
    /// Let the move search play the main seat
    pub autopilot: bool,
    /// Seed for the piece source
    pub seed: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mode: ModeKind::Classic,
            difficulty: Difficulty::Medium,
            autopilot: false,
            seed: 1,
        }
    }
}

//! Core types module - shared data structures and constants
//!
//! Everything here is plain data with no external dependencies, so the same
//! definitions are used by the game core, the key mapping and the renderer.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 is the top)
//!
//! # Timing
//!
//! All timing values are integer milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BASE_DROP_MS` | 1000 | Gravity interval at level 1 |
//! | `DROP_STEP_MS` | 50 | Interval reduction per level |
//! | `DROP_INTERVAL_MIN_MS` | 50 | Fastest gravity interval |
//! | `POLL_MS` | 10 | Driver input poll cadence |
//!
//! # Examples
//!
//! ```
//! use console_tetris_types::{GameAction, PieceKind, RotateDir, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let piece = PieceKind::from_char('t').unwrap();
//! assert_eq!(piece, PieceKind::T);
//! assert_eq!(piece.letter(), 'T');
//!
//! assert_eq!(RotateDir::Clockwise.inverse(), RotateDir::CounterClockwise);
//! assert_eq!(GameAction::from_str("hardDrop"), Some(GameAction::HardDrop));
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Gravity interval at level 1 (one row per second)
pub const BASE_DROP_MS: u32 = 1000;

/// Gravity interval reduction per level above 1
pub const DROP_STEP_MS: u32 = 50;

/// Gravity never gets faster than this
pub const DROP_INTERVAL_MIN_MS: u32 = 50;

/// Lines needed to advance one level
pub const LINES_PER_LEVEL: u32 = 10;

/// Points per cleared line, multiplied by the level at clear time
pub const LINE_CLEAR_POINTS: u32 = 100;

/// Points per row for a soft drop step
pub const SOFT_DROP_POINTS: u32 = 1;

/// Points per row for a hard drop step
pub const HARD_DROP_POINTS: u32 = 2;

/// How long the driver waits for input between ticks
pub const POLL_MS: u32 = 10;

/// Horizontal offsets tried, in order, when a rotation collides.
pub const KICK_OFFSETS: [i8; 5] = [0, -1, 1, -2, 2];

/// The seven tetromino piece kinds
///
/// Render colors follow the classic console palette:
/// - **I**: White
/// - **O**: Yellow
/// - **T**: Magenta
/// - **S**: Green
/// - **Z**: Red
/// - **J**: Cyan
/// - **L**: Blue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// Catalog order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Parse a piece letter (case-insensitive)
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'I' => Some(PieceKind::I),
            'J' => Some(PieceKind::J),
            'L' => Some(PieceKind::L),
            'O' => Some(PieceKind::O),
            'S' => Some(PieceKind::S),
            'T' => Some(PieceKind::T),
            'Z' => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Canonical upper-case letter
    pub fn letter(self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::J => 'J',
            PieceKind::L => 'L',
            PieceKind::O => 'O',
            PieceKind::S => 'S',
            PieceKind::T => 'T',
            PieceKind::Z => 'Z',
        }
    }

    /// Compact cell code used by snapshots (0 is reserved for empty).
    pub fn code(self) -> u8 {
        match self {
            PieceKind::I => 1,
            PieceKind::J => 2,
            PieceKind::L => 3,
            PieceKind::O => 4,
            PieceKind::S => 5,
            PieceKind::T => 6,
            PieceKind::Z => 7,
        }
    }

    /// Inverse of [`PieceKind::code`].
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(PieceKind::I),
            2 => Some(PieceKind::J),
            3 => Some(PieceKind::L),
            4 => Some(PieceKind::O),
            5 => Some(PieceKind::S),
            6 => Some(PieceKind::T),
            7 => Some(PieceKind::Z),
            _ => None,
        }
    }
}

/// Rotation direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotateDir {
    Clockwise,
    CounterClockwise,
}

impl RotateDir {
    pub fn inverse(self) -> Self {
        match self {
            RotateDir::Clockwise => RotateDir::CounterClockwise,
            RotateDir::CounterClockwise => RotateDir::Clockwise,
        }
    }
}

/// Commands the game core understands.
///
/// Quitting is a driver concern and has no variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    SoftDrop,
    HardDrop,
    RotateCw,
    RotateCcw,
    TogglePause,
}

impl GameAction {
    /// Parse action name (case-insensitive), e.g. for scripted replays
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "softdrop" => Some(GameAction::SoftDrop),
            "harddrop" => Some(GameAction::HardDrop),
            "rotatecw" => Some(GameAction::RotateCw),
            "rotateccw" => Some(GameAction::RotateCcw),
            "togglepause" | "pause" => Some(GameAction::TogglePause),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::HardDrop => "hardDrop",
            GameAction::RotateCw => "rotateCw",
            GameAction::RotateCcw => "rotateCcw",
            GameAction::TogglePause => "togglePause",
        }
    }
}

/// Cell on the board (None = empty, Some = filled with piece kind)
pub type Cell = Option<PieceKind>;

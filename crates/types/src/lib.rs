//! Shared types and constants for the blockfall engine.
//!
//! Everything here is plain data with no external dependencies, so it can be
//! used by the core engine, the terminal view, and the input mapping alike.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//! - **Spawn row**: -1 (pieces appear partially above the visible board)
//!
//! # Gravity Intervals by Level
//!
//! | Level | Interval |
//! |-------|----------|
//! | 1 | 800ms |
//! | 2 | 720ms |
//! | 3 | 630ms |
//! | 4 | 550ms |
//! | 5 | 470ms |
//! | 6 | 380ms |
//! | 7 | 300ms |
//! | 8 | 220ms |
//! | 9 | 150ms |
//! | 10+ | 100ms |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Command, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(PieceKind::from_str("t"), Some(PieceKind::T));
//! assert_eq!(Command::from_str("hardDrop"), Some(Command::HardDrop));
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Row a freshly spawned piece's shape matrix starts on.
pub const SPAWN_Y: i8 = -1;

/// Default host frame pacing in milliseconds (~60 FPS).
pub const FRAME_MS: u32 = 16;

/// Gravity interval per level in milliseconds, indexed by `level - 1`.
///
/// Levels past the end of the table use the last entry.
pub const GRAVITY_INTERVALS_MS: [u32; 10] = [800, 720, 630, 550, 470, 380, 300, 220, 150, 100];

/// Horizontal wall-kick offsets tried after a rotation, in order.
pub const WALL_KICK_OFFSETS: [i8; 5] = [0, 1, -1, 2, -2];

/// Line clear points by number of rows cleared at once (index 0 unused).
///
/// Multiplied by the level in effect before the clear is counted.
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Points per row travelled during a hard drop.
pub const HARD_DROP_POINTS: u32 = 2;

/// Cleared lines needed to advance one level.
pub const LINES_PER_LEVEL: u32 = 10;

/// The seven tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
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
    /// All kinds, in the order the randomizer indexes them.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            "o" => Some(PieceKind::O),
            "s" => Some(PieceKind::S),
            "t" => Some(PieceKind::T),
            "z" => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Uppercase single-letter name.
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::J => "J",
            PieceKind::L => "L",
            PieceKind::O => "O",
            PieceKind::S => "S",
            PieceKind::T => "T",
            PieceKind::Z => "Z",
        }
    }
}

/// Commands the engine accepts from input sources.
///
/// This is the complete player-facing command set; anything else a front end
/// receives is ignored before it reaches the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down (no points)
    SoftDrop,
    /// Rotate piece 90° clockwise with horizontal wall kicks
    Rotate,
    /// Drop piece to the lowest legal row and lock it
    HardDrop,
    /// Toggle pause
    Pause,
    /// Start a brand new game
    Restart,
}

impl Command {
    /// Parse a command from its camelCase name (case-insensitive).
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::Command;
    ///
    /// assert_eq!(Command::from_str("moveLeft"), Some(Command::MoveLeft));
    /// assert_eq!(Command::from_str("ROTATE"), Some(Command::Rotate));
    /// assert_eq!(Command::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(Command::MoveLeft),
            "moveright" => Some(Command::MoveRight),
            "softdrop" => Some(Command::SoftDrop),
            "rotate" => Some(Command::Rotate),
            "harddrop" => Some(Command::HardDrop),
            "pause" => Some(Command::Pause),
            "restart" => Some(Command::Restart),
            _ => None,
        }
    }

    /// camelCase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::SoftDrop => "softDrop",
            Command::Rotate => "rotate",
            Command::HardDrop => "hardDrop",
            Command::Pause => "pause",
            Command::Restart => "restart",
        }
    }

    /// Whether the command still applies while the game is paused or over.
    pub fn is_meta(&self) -> bool {
        matches!(self, Command::Pause | Command::Restart)
    }
}

/// A single board cell.
///
/// `locked` is set only for permanently placed blocks; an empty cell is never
/// locked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cell {
    pub kind: Option<PieceKind>,
    pub locked: bool,
}

impl Cell {
    pub const EMPTY: Cell = Cell {
        kind: None,
        locked: false,
    };

    /// A permanently placed block of `kind`.
    pub const fn locked(kind: PieceKind) -> Self {
        Self {
            kind: Some(kind),
            locked: true,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.kind.is_none()
    }
}

/// Board-relative position of a shape's top-left corner.
///
/// `y` may be negative while a piece is still entering the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i8,
    pub y: i8,
}

impl Position {
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    /// Offset by `(dx, dy)`, saturating at the i8 range.
    pub const fn offset(self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

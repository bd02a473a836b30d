//! Core types module - shared data structures and constants
//!
//! This crate defines the fundamental types used throughout the workspace.
//! Everything here is plain data with no external dependencies, so it can be
//! shared by the engine, the terminal renderer and the input layer.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//! - **Spawn origin**: (3, 0)
//! - **Preview origin**: (12, 1), to the right of the board
//!
//! # Timing Constants
//!
//! All timing is counted in fixed ticks, not milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 20 | Length of one game tick |
//! | `MOVE_TICKS` | 5 | Ticks between repeated sideways / soft-drop moves |
//! | `GRAVITY_TICKS` | 30 | Ticks between gravity drops at the start of a game |
//! | `DIFFICULTY_TICKS` | 3000 | Ticks between difficulty increases |
//! | `LINE_CLEAR_TICKS` | 20 | Ticks a full row flashes before it is removed |
//! | `FLASH_DIVISOR` | 4 | Ticks per flash phase of a clearing row |
//!
//! # Examples
//!
//! ```
//! use tui_bloc_types::{Color, Rotation, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(Color::from_index(1), Some(Color::Blue));
//! assert_eq!(Color::from_index(0), None);
//!
//! assert_eq!(Rotation::North.rotate(1), Rotation::East);
//! assert_eq!(Rotation::North.rotate(-1), Rotation::West);
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Pieces are described by a 4x4 mask
pub const PIECE_SIZE: usize = 4;

/// Where a freshly promoted piece appears on the board
pub const SPAWN_POSITION: (i8, i8) = (3, 0);

/// Where the next piece is parked, in board coordinates
pub const PREVIEW_POSITION: (i8, i8) = (12, 1);

/// Fixed tick length in milliseconds
pub const TICK_MS: u32 = 20;

/// Ticks between auto-repeated horizontal moves and soft-drop steps
pub const MOVE_TICKS: u32 = 5;

/// Gravity interval (in ticks) at the start of a game
pub const GRAVITY_TICKS: u32 = 30;

/// Ticks between difficulty increases
pub const DIFFICULTY_TICKS: u32 = 3000;

/// Ticks a full row stays on the board before it is removed
pub const LINE_CLEAR_TICKS: u32 = 20;

/// How many ticks each highlight / normal phase of a clearing row lasts
pub const FLASH_DIVISOR: u32 = 4;

/// Base award for clearing 0..=4 rows with one piece
pub const LINE_AWARDS: [Score; 5] = [0, 100, 300, 600, 1000];

/// Number of entries in the high score table
pub const HIGH_SCORE_COUNT: usize = 10;

/// Maximum length of a player name in the high score table
pub const MAX_NAME_LEN: usize = 20;

/// Game score
pub type Score = u64;

/// The seven block colors
///
/// Each color selects one piece shape family:
/// - **Blue**: J
/// - **Cyan**: I
/// - **Green**: S
/// - **Purple**: T
/// - **Red**: Z
/// - **Orange**: L
/// - **Yellow**: O
///
/// Catalogue index 0 is reserved for "empty" and deliberately has no variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Blue,
    Cyan,
    Green,
    Purple,
    Red,
    Orange,
    Yellow,
}

impl Color {
    /// All real colors in catalogue order
    pub const ALL: [Color; 7] = [
        Color::Blue,
        Color::Cyan,
        Color::Green,
        Color::Purple,
        Color::Red,
        Color::Orange,
        Color::Yellow,
    ];

    /// Catalogue index (1..=7)
    pub fn index(self) -> usize {
        match self {
            Color::Blue => 1,
            Color::Cyan => 2,
            Color::Green => 3,
            Color::Purple => 4,
            Color::Red => 5,
            Color::Orange => 6,
            Color::Yellow => 7,
        }
    }

    /// Inverse of [`Color::index`]; 0 and anything past 7 map to `None`
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            1..=7 => Some(Self::ALL[index - 1]),
            _ => None,
        }
    }
}

/// The four compass-named orientations
///
/// The rotation cycle goes: North → East → South → West → North
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// All rotations in index order
    pub const ALL: [Rotation; 4] = [
        Rotation::North,
        Rotation::East,
        Rotation::South,
        Rotation::West,
    ];

    pub fn index(self) -> usize {
        match self {
            Rotation::North => 0,
            Rotation::East => 1,
            Rotation::South => 2,
            Rotation::West => 3,
        }
    }

    /// Rotation for an index, wrapping modulo 4
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    /// Rotate clockwise
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_bloc_types::Rotation;
    ///
    /// assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
    /// ```
    pub fn rotate_cw(&self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }

    /// Rotate counter-clockwise
    pub fn rotate_ccw(&self) -> Self {
        match self {
            Rotation::North => Rotation::West,
            Rotation::West => Rotation::South,
            Rotation::South => Rotation::East,
            Rotation::East => Rotation::North,
        }
    }

    /// Rotate by a direction of +1 (clockwise) or -1 (counter-clockwise)
    pub fn rotate(&self, direction: i8) -> Self {
        debug_assert!(direction == 1 || direction == -1);
        if direction > 0 {
            self.rotate_cw()
        } else {
            self.rotate_ccw()
        }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(Color)`: Locked block of that color
pub type Cell = Option<Color>;

/// Discrete input events the engine reacts to
///
/// Held keys come in start/stop pairs so the tick driver can run its own
/// repeat timers; everything else is one-shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    MoveLeftStart,
    MoveLeftStop,
    MoveRightStart,
    MoveRightStop,
    /// Rotate clockwise
    Rotate,
    /// Rotate counter-clockwise
    RotateCcw,
    SoftDropStart,
    SoftDropStop,
    HardDrop,
    /// Abandon the current game
    Quit,
}

/// Sound cue requested by the engine when a piece locks
///
/// At most one cue is emitted per lock, by priority:
/// `GameOver` > `LinesCleared` > `Drop`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioCue {
    /// A hard-dropped piece locked without clearing anything
    Drop,
    /// The lock completed one or more rows
    LinesCleared,
    /// The promoted piece does not fit at the spawn origin
    GameOver,
}

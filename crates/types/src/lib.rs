//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used by the rules engine and by any
//! front-end that drives it. Everything here is plain data with no dependencies.
//!
//! # Field Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//! - **Spawn origin**: (3, 0), the top-left corner of the figure's bounding box
//!
//! # Rule Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `MAX_LEVEL` | 10 | Highest reachable level |
//! | `SCORE_PER_LEVEL` | 600 | Points needed per level step |
//! | `LINE_SCORES` | 0/100/300/700/1500 | Reward for 0-4 cleared rows |
//!
//! # Speed Curve
//!
//! The tick interval (milliseconds between gravity steps) shrinks as the level grows:
//!
//! | Level | Interval |
//! |-------|----------|
//! | 1 | 1000ms |
//! | 2 | 900ms |
//! | 5 | 600ms |
//! | 10 | 100ms |
//!
//! # Examples
//!
//! ```
//! use brick_tetris_types::{ShapeKind, Rotation, Stage, UserAction, FIELD_WIDTH, FIELD_HEIGHT};
//!
//! // Shapes carry their own color tag
//! assert_eq!(ShapeKind::I.color(), 1);
//! assert_eq!(ShapeKind::O.color(), 7);
//!
//! // Rotation cycles with period four
//! let r = Rotation::North.rotate_cw().rotate_cw().rotate_cw().rotate_cw();
//! assert_eq!(r, Rotation::North);
//!
//! // Unknown raw action codes decode to None
//! assert_eq!(UserAction::from_code(6), Some(UserAction::Down));
//! assert_eq!(UserAction::from_code(42), None);
//!
//! assert!(Stage::GameOver.is_terminal());
//! assert_eq!(FIELD_WIDTH, 10);
//! assert_eq!(FIELD_HEIGHT, 20);
//! ```

/// Field width in cells (10 columns)
pub const FIELD_WIDTH: u8 = 10;

/// Field height in cells (20 rows)
pub const FIELD_HEIGHT: u8 = 20;

/// Side of the square preview grid holding the next figure
pub const FIGURE_SIZE: usize = 4;

/// Horizontal spawn origin (top-left of the bounding box)
pub const SPAWN_X: i8 = 3;

/// Vertical spawn origin (top row)
pub const SPAWN_Y: i8 = 0;

/// Highest reachable level
pub const MAX_LEVEL: u32 = 10;

/// Points required to advance one level
pub const SCORE_PER_LEVEL: u32 = 600;

/// Reward for clearing 0, 1, 2, 3 or 4 rows with a single figure
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 700, 1500];

/// Tick interval in milliseconds for levels 1 through 10 (index = level - 1)
pub const SPEED_BY_LEVEL_MS: [u32; MAX_LEVEL as usize] =
    [1000, 900, 800, 700, 600, 500, 400, 300, 200, 100];

/// A cell on the field
///
/// - `0`: empty
/// - `1..=7`: occupied, the value is the color of the shape that settled there
pub type Cell = u8;

/// The empty cell value
pub const EMPTY: Cell = 0;

/// Largest valid cell value (one color per shape)
pub const MAX_COLOR: Cell = 7;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speed_curve_is_non_increasing() {
        for pair in SPEED_BY_LEVEL_MS.windows(2) {
            assert!(pair[0] > pair[1]);
        }
    }

    #[test]
    fn reward_table_matches_rules() {
        assert_eq!(LINE_SCORES, [0, 100, 300, 700, 1500]);
        assert_eq!(MAX_LEVEL, 10);
        assert_eq!(SCORE_PER_LEVEL, 600);
    }

    #[test]
    fn spawn_origin_is_horizontally_centered() {
        // A 4-wide bounding box starting at column 3 covers the middle columns.
        assert_eq!(SPAWN_X as u8 * 2 + 4, FIELD_WIDTH);
        assert_eq!(SPAWN_Y, 0);
    }
}

/// The seven tetromino shapes, in catalog order
///
/// The catalog order fixes the color tag: `color = index + 1`.
/// - **I**: four in a row
/// - **Z**: zigzag stepping down to the right
/// - **S**: zigzag stepping down to the left
/// - **T**: three in a row with a bump on top
/// - **L**: three in a row with a foot on the right
/// - **J**: three in a row with a foot on the left
/// - **O**: 2x2 square
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    I,
    Z,
    S,
    T,
    L,
    J,
    O,
}

impl ShapeKind {
    /// Every shape in catalog order
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::I,
        ShapeKind::Z,
        ShapeKind::S,
        ShapeKind::T,
        ShapeKind::L,
        ShapeKind::J,
        ShapeKind::O,
    ];

    /// Catalog index (0..7)
    pub fn index(self) -> usize {
        self as usize
    }

    /// Color tag written into the field (1..=7)
    pub fn color(self) -> Cell {
        self.index() as Cell + 1
    }

    /// Parse shape from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use brick_tetris_types::ShapeKind;
    ///
    /// assert_eq!(ShapeKind::from_str("t"), Some(ShapeKind::T));
    /// assert_eq!(ShapeKind::from_str("O"), Some(ShapeKind::O));
    /// assert_eq!(ShapeKind::from_str("x"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(ShapeKind::I),
            "z" => Some(ShapeKind::Z),
            "s" => Some(ShapeKind::S),
            "t" => Some(ShapeKind::T),
            "l" => Some(ShapeKind::L),
            "j" => Some(ShapeKind::J),
            "o" => Some(ShapeKind::O),
            _ => None,
        }
    }

    /// Lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::I => "i",
            ShapeKind::Z => "z",
            ShapeKind::S => "s",
            ShapeKind::T => "t",
            ShapeKind::L => "l",
            ShapeKind::J => "j",
            ShapeKind::O => "o",
        }
    }
}

/// Rotation states of a figure
///
/// - **North**: canonical (spawn) orientation
/// - **East**: rotated 90° clockwise
/// - **South**: rotated 180°
/// - **West**: rotated 270° clockwise
///
/// The cycle goes: North → East → South → West → North
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    const CYCLE: [Rotation; 4] = [
        Rotation::North,
        Rotation::East,
        Rotation::South,
        Rotation::West,
    ];

    /// Number of clockwise quarter turns from North
    pub fn index(self) -> usize {
        self as usize
    }

    /// Rotate clockwise (90°)
    ///
    /// # Examples
    ///
    /// ```
    /// use brick_tetris_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
    /// assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
    /// ```
    pub fn rotate_cw(&self) -> Self {
        self.turned(1)
    }

    /// Apply `quarter_turns` clockwise quarter turns (negative turns go counter-clockwise)
    pub fn turned(&self, quarter_turns: i8) -> Self {
        let idx = (self.index() as i32 + quarter_turns as i32).rem_euclid(4);
        Self::CYCLE[idx as usize]
    }
}

/// Player actions accepted by the controller
///
/// The discriminants are the raw codes a front-end may send; see
/// [`UserAction::from_code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserAction {
    /// Leave the START stage and begin play
    Start,
    /// Toggle pause
    Pause,
    /// End the session immediately
    Terminate,
    /// Move the figure one column left
    Left,
    /// Move the figure one column right
    Right,
    /// Reserved, never changes state
    Up,
    /// Force a gravity step (hard drop while held)
    Down,
    /// Rotate the figure clockwise
    Action,
}

impl UserAction {
    /// Decode a raw action code; unknown codes yield `None`
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(UserAction::Start),
            1 => Some(UserAction::Pause),
            2 => Some(UserAction::Terminate),
            3 => Some(UserAction::Left),
            4 => Some(UserAction::Right),
            5 => Some(UserAction::Up),
            6 => Some(UserAction::Down),
            7 => Some(UserAction::Action),
            _ => None,
        }
    }

    /// Raw action code
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Parse action from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use brick_tetris_types::UserAction;
    ///
    /// assert_eq!(UserAction::from_str("left"), Some(UserAction::Left));
    /// assert_eq!(UserAction::from_str("ACTION"), Some(UserAction::Action));
    /// assert_eq!(UserAction::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "start" => Some(UserAction::Start),
            "pause" => Some(UserAction::Pause),
            "terminate" => Some(UserAction::Terminate),
            "left" => Some(UserAction::Left),
            "right" => Some(UserAction::Right),
            "up" => Some(UserAction::Up),
            "down" => Some(UserAction::Down),
            "action" => Some(UserAction::Action),
            _ => None,
        }
    }

    /// Lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            UserAction::Start => "start",
            UserAction::Pause => "pause",
            UserAction::Terminate => "terminate",
            UserAction::Left => "left",
            UserAction::Right => "right",
            UserAction::Up => "up",
            UserAction::Down => "down",
            UserAction::Action => "action",
        }
    }
}

/// Stages of the gameplay state machine
///
/// `Spawn`, `Shifting` and `Attaching` are transient: the controller resolves them
/// before returning from the call that entered them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Waiting for the player to start
    Start,
    /// Promoting the next figure to the field
    Spawn,
    /// Applying one gravity step
    Shifting,
    /// Figure is under player control
    Moving,
    /// Play suspended
    Pause,
    /// Merging the figure into the field and clearing rows
    Attaching,
    /// Session finished
    GameOver,
}

impl Stage {
    /// True only for `GameOver`
    pub fn is_terminal(self) -> bool {
        matches!(self, Stage::GameOver)
    }

    /// Uppercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Start => "START",
            Stage::Spawn => "SPAWN",
            Stage::Shifting => "SHIFTING",
            Stage::Moving => "MOVING",
            Stage::Pause => "PAUSE",
            Stage::Attaching => "ATTACHING",
            Stage::GameOver => "GAME_OVER",
        }
    }
}

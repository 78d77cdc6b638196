//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds the rules of the falling-block game and nothing else. It has no
//! dependency on rendering, input devices or clocks: a driver calls [`Game::action`]
//! for player events and [`Game::tick`] on its own timer, then reads a
//! [`GameSnapshot`] to draw the frame.
//!
//! # Module Structure
//!
//! - [`field`]: 10x20 grid of settled cells
//! - [`shapes`]: the seven tetrominoes and their rotation tables
//! - [`figure`]: the falling figure (shape, color, position, rotation)
//! - [`generator`]: uniform random shape selection with a one-piece preview
//! - [`collision`]: placement checks, moves, rotation and drops
//! - [`scoring`]: settling, row clearing and score/level/speed progression
//! - [`game`]: the stage machine driving a session
//! - [`snapshot`]: read-only view handed to front-ends
//!
//! # Game Rules
//!
//! - Figures spawn at column 3, row 0 in their canonical orientation
//! - Rotation turns the shape clockwise inside its rotation box, with no wall kicks
//! - Clearing 1/2/3/4 rows with one figure awards 100/300/700/1500 points
//! - Every 600 points raise the level (up to 10) and shorten the tick interval
//! - The game ends when the next figure cannot enter the field
//!
//! # Example
//!
//! ```
//! use brick_tetris_core::Game;
//! use brick_tetris_core::types::{ShapeKind, Stage, UserAction};
//!
//! let mut game = Game::with_seed(12345);
//! game.set_next_shape(ShapeKind::O);
//! game.action(UserAction::Start, false);
//! assert_eq!(game.stage(), Stage::Moving);
//!
//! // A held Down drops the figure to the floor and settles it
//! game.action(UserAction::Down, true);
//! assert_eq!(game.pieces(), 1);
//! assert_eq!(game.field().occupied(), 4);
//!
//! let snapshot = game.snapshot();
//! assert_eq!(snapshot.score, 0);
//! assert!(!snapshot.paused);
//! ```

pub mod collision;
pub mod error;
pub mod field;
pub mod figure;
pub mod game;
pub mod generator;
pub mod scoring;
pub mod shapes;
pub mod snapshot;

pub use brick_tetris_types as types;

// Re-export commonly used types for convenience
pub use collision::{can_place, try_move, try_rotate, Direction};
pub use error::{FieldError, FieldResult};
pub use field::{Field, FieldGrid};
pub use figure::Figure;
pub use game::Game;
pub use generator::FigureGenerator;
pub use scoring::{scan_and_clear, settle, Progress};
pub use snapshot::GameSnapshot;

//! Brick Tetris (workspace facade crate).
//!
//! The rules live in dedicated crates under `crates/`; this package re-exports them as
//! `brick_tetris::{core, types}` and hosts the headless session driver.

pub mod sim;

pub use brick_tetris_core as core;
pub use brick_tetris_types as types;

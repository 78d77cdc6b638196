//! Scoring module - settling figures, clearing rows, score/level/speed
//!
//! Rules:
//! - A settled figure writes its color into every cell it covers.
//! - Full rows are collected bottom-to-top, then cleared from the lowest index to the
//!   highest so earlier clears never move a row that is still waiting to be cleared.
//! - Rewards come from a fixed table (no level multiplier, no combos).
//! - `level = min(MAX_LEVEL, 1 + score / SCORE_PER_LEVEL)`; the tick interval shrinks
//!   as the level grows.

use arrayvec::ArrayVec;

use crate::error::FieldResult;
use crate::field::Field;
use crate::figure::Figure;
use crate::types::{FIELD_HEIGHT, LINE_SCORES, MAX_LEVEL, SCORE_PER_LEVEL, SPEED_BY_LEVEL_MS};

/// Write every cell of `figure` into the field using the figure's color
pub fn settle(field: &mut Field, figure: &Figure) -> FieldResult<()> {
    for (x, y) in figure.cells() {
        field.set(x, y, figure.color)?;
    }
    Ok(())
}

/// Clear all full rows and return how many were cleared
pub fn scan_and_clear(field: &mut Field) -> FieldResult<usize> {
    let mut full_rows: ArrayVec<usize, { FIELD_HEIGHT as usize }> = ArrayVec::new();
    for row in (0..FIELD_HEIGHT as usize).rev() {
        if field.is_row_full(row) {
            full_rows.push(row);
        }
    }

    for &row in full_rows.iter().rev() {
        field.clear_row(row)?;
    }

    Ok(full_rows.len())
}

/// Reward for clearing `lines` rows with one figure
///
/// Counts above four cannot come from a single tetromino and earn the four-row reward.
pub fn score_for(lines: usize) -> u32 {
    LINE_SCORES[lines.min(LINE_SCORES.len() - 1)]
}

/// Level reached with `score` points
pub fn level_for(score: u32) -> u32 {
    (1 + score / SCORE_PER_LEVEL).min(MAX_LEVEL)
}

/// Tick interval in milliseconds for a level
pub fn speed_for(level: u32) -> u32 {
    let idx = level.clamp(1, MAX_LEVEL) as usize - 1;
    SPEED_BY_LEVEL_MS[idx]
}

/// Score, high score, level and speed of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    score: u32,
    high_score: u32,
    level: u32,
    speed: u32,
}

impl Progress {
    pub fn new() -> Self {
        Self {
            score: 0,
            high_score: 0,
            level: 1,
            speed: speed_for(1),
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Current tick interval in milliseconds
    pub fn speed(&self) -> u32 {
        self.speed
    }

    /// Account for `lines` cleared rows; returns the points awarded
    pub fn apply_clear(&mut self, lines: usize) -> u32 {
        let points = score_for(lines);
        self.score = self.score.saturating_add(points);
        self.high_score = self.high_score.max(self.score);
        self.level = level_for(self.score);
        self.speed = speed_for(self.level);
        points
    }

    /// Raise the high score to an externally stored value
    pub fn load_high_score(&mut self, value: u32) {
        self.high_score = self.high_score.max(value);
    }

    /// Start a new session, keeping the high score
    pub fn reset(&mut self) {
        *self = Self {
            high_score: self.high_score,
            ..Self::new()
        };
    }
}

impl Default for Progress {
    fn default() -> Self {
        Self::new()
    }
}

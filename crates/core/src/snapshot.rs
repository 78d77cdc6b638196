use crate::field::FieldGrid;
use crate::shapes::PreviewGrid;
use crate::types::{EMPTY, FIELD_HEIGHT, FIELD_WIDTH, FIGURE_SIZE, SPEED_BY_LEVEL_MS};

/// Read-only view of a game for front-ends
///
/// `field` holds the settled cells with the active figure drawn on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub field: FieldGrid,
    pub next: PreviewGrid,
    pub score: u32,
    pub high_score: u32,
    pub level: u32,
    /// Tick interval in milliseconds
    pub speed: u32,
    pub paused: bool,
}

impl GameSnapshot {
    /// Reset to the view of a fresh, empty game
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Number of occupied cells in `field`
    pub fn occupied(&self) -> usize {
        self.field
            .iter()
            .flatten()
            .filter(|&&cell| cell != EMPTY)
            .count()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            field: [[EMPTY; FIELD_WIDTH as usize]; FIELD_HEIGHT as usize],
            next: [[EMPTY; FIGURE_SIZE]; FIGURE_SIZE],
            score: 0,
            high_score: 0,
            level: 1,
            speed: SPEED_BY_LEVEL_MS[0],
            paused: false,
        }
    }
}

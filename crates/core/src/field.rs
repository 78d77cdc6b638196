//! Field module - owns the game grid
//!
//! The field is a 10x20 grid of cells stored in one flat, row-major array sized by the
//! compile-time dimensions, so construction cannot partially fail.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom).

use crate::error::{FieldError, FieldResult};
use crate::types::{Cell, EMPTY, FIELD_HEIGHT, FIELD_WIDTH, MAX_COLOR};

const WIDTH: usize = FIELD_WIDTH as usize;
const HEIGHT: usize = FIELD_HEIGHT as usize;

/// Total number of cells on the field
const FIELD_SIZE: usize = WIDTH * HEIGHT;

/// Field rendered as plain rows, the layout front-ends draw from
pub type FieldGrid = [[Cell; WIDTH]; HEIGHT];

/// The game field - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; FIELD_SIZE],
}

impl Field {
    /// Create a new empty field
    pub fn new() -> Self {
        Self {
            cells: [EMPTY; FIELD_SIZE],
        }
    }

    /// Flat index for (x, y), `None` when out of bounds
    #[inline(always)]
    fn index(x: i32, y: i32) -> Option<usize> {
        if x < 0 || x >= WIDTH as i32 || y < 0 || y >= HEIGHT as i32 {
            return None;
        }
        Some((y as usize) * WIDTH + (x as usize))
    }

    pub fn width(&self) -> u8 {
        FIELD_WIDTH
    }

    pub fn height(&self) -> u8 {
        FIELD_HEIGHT
    }

    /// Check if position lies inside the field
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        Self::index(x, y).is_some()
    }

    /// Get cell at position (x, y)
    pub fn get(&self, x: i32, y: i32) -> FieldResult<Cell> {
        Self::index(x, y)
            .map(|idx| self.cells[idx])
            .ok_or(FieldError::OutOfBounds { x, y })
    }

    /// Set cell at position (x, y)
    ///
    /// Rejects coordinates outside the field and values above [`MAX_COLOR`].
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> FieldResult<()> {
        if cell > MAX_COLOR {
            return Err(FieldError::InvalidCell(cell));
        }
        let idx = Self::index(x, y).ok_or(FieldError::OutOfBounds { x, y })?;
        self.cells[idx] = cell;
        Ok(())
    }

    /// Check if position is inside the field and empty
    pub fn is_free(&self, x: i32, y: i32) -> bool {
        matches!(Self::index(x, y), Some(idx) if self.cells[idx] == EMPTY)
    }

    /// Check if a row is completely filled
    ///
    /// Rows outside the field are never full.
    pub fn is_row_full(&self, row: usize) -> bool {
        if row >= HEIGHT {
            return false;
        }
        self.row(row).iter().all(|&cell| cell != EMPTY)
    }

    /// Clear a row and shift every row above it down by one
    ///
    /// The new top row is empty. Rows below `row` are untouched, so several full rows
    /// can be cleared one after another as long as they are processed from the lowest
    /// index to the highest.
    pub fn clear_row(&mut self, row: usize) -> FieldResult<()> {
        if row >= HEIGHT {
            return Err(FieldError::OutOfBounds {
                x: 0,
                y: row as i32,
            });
        }

        // Bottom-up, so each source row is read before it is overwritten
        for y in (1..=row).rev() {
            let src_start = (y - 1) * WIDTH;
            self.cells.copy_within(src_start..src_start + WIDTH, y * WIDTH);
        }

        self.cells[..WIDTH].fill(EMPTY);
        Ok(())
    }

    /// Zero the entire grid
    pub fn reset(&mut self) {
        self.cells.fill(EMPTY);
    }

    /// Cells of one row
    ///
    /// # Panics
    ///
    /// Panics if `row` is outside the field.
    pub fn row(&self, row: usize) -> &[Cell] {
        let start = row * WIDTH;
        &self.cells[start..start + WIDTH]
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of occupied cells
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell != EMPTY).count()
    }

    /// True when no cell is occupied
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&cell| cell == EMPTY)
    }

    /// Copy the field into a row-major grid without allocating
    pub fn write_grid(&self, out: &mut FieldGrid) {
        for (y, row) in out.iter_mut().enumerate() {
            row.copy_from_slice(self.row(y));
        }
    }
}

impl Default for Field {
    fn default() -> Self {
        Self::new()
    }
}

//! The falling figure

use crate::shapes::{shape_cells, ShapeCells};
use crate::types::{Cell, Rotation, ShapeKind, SPAWN_X, SPAWN_Y};

/// A figure placed on (or about to enter) the field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Figure {
    pub kind: ShapeKind,
    pub color: Cell,
    /// Column of the rotation box top-left corner
    pub x: i8,
    /// Row of the rotation box top-left corner
    pub y: i8,
    pub rotation: Rotation,
}

impl Figure {
    /// Create a figure at the spawn origin in its canonical orientation
    pub fn spawn(kind: ShapeKind) -> Self {
        Self::at(kind, SPAWN_X, SPAWN_Y)
    }

    /// Create a figure at an arbitrary origin in its canonical orientation
    pub fn at(kind: ShapeKind, x: i8, y: i8) -> Self {
        Self {
            kind,
            color: kind.color(),
            x,
            y,
            rotation: Rotation::North,
        }
    }

    /// Offsets for the current rotation
    pub fn shape(&self) -> ShapeCells {
        shape_cells(self.kind, self.rotation)
    }

    /// Absolute field coordinates of the four occupied cells
    pub fn cells(&self) -> [(i32, i32); 4] {
        self.cells_after(0, 0, 0)
    }

    /// Absolute cells after translating by (dx, dy) and turning `quarter_turns` clockwise
    pub fn cells_after(&self, dx: i8, dy: i8, quarter_turns: i8) -> [(i32, i32); 4] {
        let x = self.x as i32 + dx as i32;
        let y = self.y as i32 + dy as i32;
        shape_cells(self.kind, self.rotation.turned(quarter_turns))
            .map(|(cx, cy)| (x + cx as i32, y + cy as i32))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_figure_spawn() {
        let figure = Figure::spawn(ShapeKind::T);

        assert_eq!(figure.kind, ShapeKind::T);
        assert_eq!(figure.color, 4);
        assert_eq!(figure.rotation, Rotation::North);
        assert_eq!((figure.x, figure.y), (3, 0));
    }

    #[test]
    fn test_figure_cells_i() {
        let figure = Figure::spawn(ShapeKind::I);
        assert_eq!(figure.cells(), [(3, 0), (4, 0), (5, 0), (6, 0)]);
    }

    #[test]
    fn test_cells_after_translation() {
        let figure = Figure::spawn(ShapeKind::O);
        assert_eq!(figure.cells_after(-1, 2, 0), [(2, 2), (3, 2), (2, 3), (3, 3)]);
    }
}

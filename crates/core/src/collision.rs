//! Collision module - validates and applies figure movement against the field
//!
//! The active figure is never written into the field until it settles, so a candidate
//! placement can only collide with settled cells or the field edges. Overlapping the
//! figure's own current cells is therefore never a conflict.
//!
//! Rotation has no wall kicks: if the rotated cells do not fit where they are, the
//! rotation is rejected and the figure is left untouched.

use log::trace;

use crate::field::Field;
use crate::figure::Figure;
use crate::shapes::is_rotation_invariant;

/// Unit translation requested by the player or by gravity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Down,
}

impl Direction {
    /// (dx, dy) for a single step
    pub fn offset(self) -> (i8, i8) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
        }
    }
}

/// Check whether the figure fits after translating by (dx, dy) and turning
/// `rotation_delta` quarter turns clockwise
pub fn can_place(field: &Field, figure: &Figure, dx: i8, dy: i8, rotation_delta: i8) -> bool {
    figure
        .cells_after(dx, dy, rotation_delta)
        .iter()
        .all(|&(x, y)| field.is_free(x, y))
}

/// Move one step in `direction`; returns false (figure unchanged) when blocked
pub fn try_move(field: &Field, figure: &mut Figure, direction: Direction) -> bool {
    let (dx, dy) = direction.offset();
    if !can_place(field, figure, dx, dy, 0) {
        trace!("move {:?} rejected at ({}, {})", direction, figure.x, figure.y);
        return false;
    }
    figure.x += dx;
    figure.y += dy;
    true
}

/// Rotate 90° clockwise inside the shape's rotation box; returns false when not applied
///
/// The O shape is rotation-invariant, so it is never rotated.
pub fn try_rotate(field: &Field, figure: &mut Figure) -> bool {
    if is_rotation_invariant(figure.kind) {
        return false;
    }
    if !can_place(field, figure, 0, 0, 1) {
        trace!(
            "rotation of {} rejected at ({}, {})",
            figure.kind.as_str(),
            figure.x,
            figure.y
        );
        return false;
    }
    figure.rotation = figure.rotation.rotate_cw();
    true
}

/// One validated row of downward movement
pub fn soft_drop_step(field: &Field, figure: &mut Figure) -> bool {
    try_move(field, figure, Direction::Down)
}

/// Drop until blocked; returns the number of rows travelled
pub fn hard_drop(field: &Field, figure: &mut Figure) -> u32 {
    let distance = drop_distance(field, figure);
    figure.y += distance as i8;
    distance
}

/// Rows the figure can still fall before it is blocked
pub fn drop_distance(field: &Field, figure: &Figure) -> u32 {
    let mut distance: u32 = 0;
    while can_place(field, figure, 0, distance as i8 + 1, 0) {
        distance += 1;
    }
    distance
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ShapeKind, FIELD_HEIGHT};

    #[test]
    fn test_spawn_fits_empty_field() {
        let field = Field::new();
        for kind in ShapeKind::ALL {
            assert!(can_place(&field, &Figure::spawn(kind), 0, 0, 0));
        }
    }

    #[test]
    fn test_try_move_walls() {
        let field = Field::new();
        let mut figure = Figure::spawn(ShapeKind::O);

        let mut moved = 0;
        while try_move(&field, &mut figure, Direction::Left) {
            moved += 1;
        }
        assert_eq!(moved, 3);
        assert_eq!(figure.x, 0);

        let mut moved = 0;
        while try_move(&field, &mut figure, Direction::Right) {
            moved += 1;
        }
        assert_eq!(moved, 8);
        assert_eq!(figure.x, 8);
    }

    #[test]
    fn test_try_move_blocked_leaves_figure() {
        let mut field = Field::new();
        field.set(3, 2, 1).unwrap();
        let mut figure = Figure::spawn(ShapeKind::O);

        assert!(!try_move(&field, &mut figure, Direction::Down));
        assert_eq!((figure.x, figure.y), (3, 0));
    }

    #[test]
    fn test_rotation_rejected_at_floor() {
        // East I extends three rows below its origin row.
        let field = Field::new();
        let start = Figure::at(ShapeKind::I, 3, FIELD_HEIGHT as i8 - 1);
        let mut figure = start;

        assert!(!try_rotate(&field, &mut figure));
        assert_eq!(figure, start);
    }

    #[test]
    fn test_rotation_allowed_on_spawn_row() {
        let field = Field::new();
        for kind in ShapeKind::ALL {
            if kind == ShapeKind::O {
                continue;
            }
            let mut figure = Figure::spawn(kind);
            assert!(try_rotate(&field, &mut figure), "{:?}", kind);
            assert_eq!(figure.rotation, crate::types::Rotation::East);
            assert!(figure.cells().iter().all(|&(_, y)| y >= 0));
        }
    }

    #[test]
    fn test_rotation_blocked_by_settled_cell() {
        let mut field = Field::new();
        // East Z needs (5, 0) at the spawn origin.
        field.set(5, 0, 1).unwrap();
        let mut figure = Figure::spawn(ShapeKind::Z);

        assert!(!try_rotate(&field, &mut figure));
        assert_eq!(figure.rotation, crate::types::Rotation::North);
    }

    #[test]
    fn test_o_never_rotates() {
        let field = Field::new();
        let mut figure = Figure::at(ShapeKind::O, 4, 8);
        assert!(!try_rotate(&field, &mut figure));
        assert_eq!(figure.rotation, crate::types::Rotation::North);
    }

    #[test]
    fn test_hard_drop_reaches_floor() {
        let field = Field::new();
        let mut figure = Figure::spawn(ShapeKind::O);

        let distance = hard_drop(&field, &mut figure);

        assert_eq!(distance, FIELD_HEIGHT as u32 - 2);
        assert_eq!(figure.y, FIELD_HEIGHT as i8 - 2);
        assert!(!soft_drop_step(&field, &mut figure));
    }
}

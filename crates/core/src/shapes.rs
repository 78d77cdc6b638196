//! Shapes module - the tetromino catalog and rotation tables
//!
//! Each shape lives in a square rotation box anchored at the figure origin: 4x4 for I,
//! 2x2 for O and 3x3 for the others. The canonical (North) layout sits in the top rows
//! of the box. The three other orientations are precomputed by turning the whole box
//! 90° clockwise, so the table for rotation `r + 1` is exactly the box rotation of the
//! table for `r`, and every offset stays inside the box (never above or left of the
//! origin). The O shape looks the same in all four states.

use crate::types::{Cell, Rotation, ShapeKind, EMPTY, FIGURE_SIZE};

/// Offset of a single cell relative to the figure origin
pub type CellOffset = (i8, i8);

/// Shape of a figure - 4 cell offsets from the figure origin
pub type ShapeCells = [CellOffset; 4];

/// Square grid used to preview the next figure
pub type PreviewGrid = [[Cell; FIGURE_SIZE]; FIGURE_SIZE];

/// Catalog indexed by `[shape][rotation]`
static SHAPE_TABLE: [[ShapeCells; 4]; 7] = [
    // I
    [
        [(0, 0), (1, 0), (2, 0), (3, 0)],
        [(3, 0), (3, 1), (3, 2), (3, 3)],
        [(0, 3), (1, 3), (2, 3), (3, 3)],
        [(0, 0), (0, 1), (0, 2), (0, 3)],
    ],
    // Z
    [
        [(0, 0), (1, 0), (1, 1), (2, 1)],
        [(2, 0), (1, 1), (2, 1), (1, 2)],
        [(0, 1), (1, 1), (1, 2), (2, 2)],
        [(1, 0), (0, 1), (1, 1), (0, 2)],
    ],
    // S
    [
        [(1, 0), (2, 0), (0, 1), (1, 1)],
        [(1, 0), (1, 1), (2, 1), (2, 2)],
        [(1, 1), (2, 1), (0, 2), (1, 2)],
        [(0, 0), (0, 1), (1, 1), (1, 2)],
    ],
    // T
    [
        [(1, 0), (0, 1), (1, 1), (2, 1)],
        [(1, 0), (1, 1), (2, 1), (1, 2)],
        [(0, 1), (1, 1), (2, 1), (1, 2)],
        [(1, 0), (0, 1), (1, 1), (1, 2)],
    ],
    // L
    [
        [(0, 0), (1, 0), (2, 0), (2, 1)],
        [(2, 0), (2, 1), (1, 2), (2, 2)],
        [(0, 1), (0, 2), (1, 2), (2, 2)],
        [(0, 0), (1, 0), (0, 1), (0, 2)],
    ],
    // J
    [
        [(0, 0), (1, 0), (2, 0), (0, 1)],
        [(1, 0), (2, 0), (2, 1), (2, 2)],
        [(2, 1), (0, 2), (1, 2), (2, 2)],
        [(0, 0), (0, 1), (0, 2), (1, 2)],
    ],
    // O
    [
        [(0, 0), (1, 0), (0, 1), (1, 1)],
        [(0, 0), (1, 0), (0, 1), (1, 1)],
        [(0, 0), (1, 0), (0, 1), (1, 1)],
        [(0, 0), (1, 0), (0, 1), (1, 1)],
    ],
];

/// Side of the rotation box per shape
static BOX_SIZES: [i8; 7] = [
    4, // I
    3, // Z
    3, // S
    3, // T
    3, // L
    3, // J
    2, // O
];

/// Get the cell offsets for a shape and rotation
pub fn shape_cells(kind: ShapeKind, rotation: Rotation) -> ShapeCells {
    SHAPE_TABLE[kind.index()][rotation.index()]
}

/// Side of the square box a shape rotates in
pub fn box_size(kind: ShapeKind) -> i8 {
    BOX_SIZES[kind.index()]
}

/// True for shapes whose rotation never changes their cells
pub fn is_rotation_invariant(kind: ShapeKind) -> bool {
    kind == ShapeKind::O
}

/// Turn cells 90° clockwise inside a `size` x `size` box (y grows downward)
pub fn rotate_in_box(cells: ShapeCells, size: i8) -> ShapeCells {
    cells.map(|(x, y)| (size - 1 - y, x))
}

/// Canonical layout of a shape drawn into a preview grid with its color
pub fn preview_grid(kind: ShapeKind) -> PreviewGrid {
    let mut grid = [[EMPTY; FIGURE_SIZE]; FIGURE_SIZE];
    for (x, y) in shape_cells(kind, Rotation::North) {
        grid[y as usize][x as usize] = kind.color();
    }
    grid
}

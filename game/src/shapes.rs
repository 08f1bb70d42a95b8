use serde::{Deserialize, Serialize};

/// Largest extent of any shape in either direction.
pub const MAX_SHAPE_EXTENT: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Shape {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl Shape {
    pub const ALL: [Shape; 7] = [
        Shape::I,
        Shape::O,
        Shape::T,
        Shape::S,
        Shape::Z,
        Shape::J,
        Shape::L,
    ];

    /// Value written into the field when this shape locks (1..=7).
    pub const fn cell_value(self) -> u8 {
        self as u8 + 1
    }

    /// Canonical spawn orientation.
    pub fn matrix(self) -> ShapeMatrix {
        let rows: &[&[u8]] = match self {
            Shape::I => &[&[1, 1, 1, 1]],
            Shape::O => &[&[1, 1], &[1, 1]],
            Shape::T => &[&[0, 1, 0], &[1, 1, 1]],
            Shape::S => &[&[0, 1, 1], &[1, 1, 0]],
            Shape::Z => &[&[1, 1, 0], &[0, 1, 1]],
            Shape::J => &[&[1, 0, 0], &[1, 1, 1]],
            Shape::L => &[&[0, 0, 1], &[1, 1, 1]],
        };
        ShapeMatrix::from_rows(rows)
    }
}

/// A rectangular boolean matrix of at most 4x4 cells, row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShapeMatrix {
    width: usize,
    height: usize,
    cells: [bool; MAX_SHAPE_EXTENT * MAX_SHAPE_EXTENT],
}

impl ShapeMatrix {
    fn from_rows(rows: &[&[u8]]) -> Self {
        let height = rows.len().min(MAX_SHAPE_EXTENT);
        let width = rows
            .iter()
            .map(|r| r.len())
            .max()
            .unwrap_or(0)
            .min(MAX_SHAPE_EXTENT);
        let mut cells = [false; MAX_SHAPE_EXTENT * MAX_SHAPE_EXTENT];
        for (y, row) in rows.iter().take(height).enumerate() {
            for (x, &v) in row.iter().take(width).enumerate() {
                cells[y * MAX_SHAPE_EXTENT + x] = v != 0;
            }
        }
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height && self.cells[y * MAX_SHAPE_EXTENT + x]
    }

    /// Occupied cells as `(column, row)` offsets from the top-left corner.
    pub fn occupied(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.height)
            .flat_map(move |y| (0..self.width).map(move |x| (x, y)))
            .filter(move |&(x, y)| self.get(x, y))
    }

    pub fn cell_count(&self) -> usize {
        self.occupied().count()
    }

    /// Clockwise quarter turn: reverse the row order, then transpose.
    pub fn rotated_cw(&self) -> Self {
        let mut cells = [false; MAX_SHAPE_EXTENT * MAX_SHAPE_EXTENT];
        for r in 0..self.width {
            for c in 0..self.height {
                cells[r * MAX_SHAPE_EXTENT + c] = self.get(r, self.height - 1 - c);
            }
        }
        Self {
            width: self.height,
            height: self.width,
            cells,
        }
    }
}

use serde::{Deserialize, Serialize};

use crate::field::FIELD_W;
use crate::shapes::{Shape, ShapeMatrix};

/// The falling piece: shape, current orientation and top-left board position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    pub shape: Shape,
    pub matrix: ShapeMatrix,
    pub x: i32,
    /// May be negative while the piece pokes out above the field.
    pub y: i32,
}

impl Piece {
    /// Spawns `shape` horizontally centred on the top row.
    pub fn new(shape: Shape) -> Self {
        let matrix = shape.matrix();
        Self {
            shape,
            matrix,
            x: (FIELD_W / 2) as i32 - (matrix.width() / 2) as i32,
            y: 0,
        }
    }

    /// Rotates clockwise in place. No wall kicks: callers revert on collision.
    pub fn rotate(&mut self) {
        self.matrix = self.matrix.rotated_cw();
    }

    /// Board coordinates of every occupied cell, offset by `(dx, dy)`.
    pub fn cells_at(&self, dx: i32, dy: i32) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.matrix
            .occupied()
            .map(move |(cx, cy)| (self.x + cx as i32 + dx, self.y + cy as i32 + dy))
    }

    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.cells_at(0, 0)
    }
}

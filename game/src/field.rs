use serde::{Deserialize, Serialize};

use crate::piece::Piece;

pub const FIELD_W: usize = 10;
pub const FIELD_H: usize = 18;

/// Rows cleared at once that count as a "tetris".
pub const TETRIS_ROWS: usize = 4;

pub type Row = [u8; FIELD_W];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockOutcome {
    Locked,
    /// Part of the piece was above the top row; nothing was written.
    Overflow,
}

/// The 10x18 playfield. `0` is empty, `1..=7` is the locked shape's cell value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    rows: Vec<Row>,
}

impl Default for Field {
    fn default() -> Self {
        Self::new()
    }
}

impl Field {
    pub fn new() -> Self {
        Self {
            rows: vec![[0; FIELD_W]; FIELD_H],
        }
    }

    pub fn clear(&mut self) {
        for row in &mut self.rows {
            *row = [0; FIELD_W];
        }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn get(&self, x: i32, y: i32) -> Option<u8> {
        if x < 0 || y < 0 {
            return None;
        }
        self.rows.get(y as usize)?.get(x as usize).copied()
    }

    /// Writes `value` at `(x, y)` if the coordinate is inside the field.
    pub fn set(&mut self, x: usize, y: usize, value: u8) {
        if let Some(cell) = self.rows.get_mut(y).and_then(|row| row.get_mut(x)) {
            *cell = value;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(|row| row.iter().all(|&c| c == 0))
    }

    /// Tests `piece` shifted by `(dx, dy)` against the walls, the floor and locked cells.
    ///
    /// Cells above the top row only collide with the walls.
    pub fn collides(&self, piece: &Piece, dx: i32, dy: i32) -> bool {
        piece.cells_at(dx, dy).any(|(x, y)| {
            if x < 0 || x >= FIELD_W as i32 || y >= FIELD_H as i32 {
                return true;
            }
            y >= 0 && self.rows[y as usize][x as usize] != 0
        })
    }

    pub fn lock(&mut self, piece: &Piece) -> LockOutcome {
        if piece.cells().any(|(_, y)| y < 0) {
            return LockOutcome::Overflow;
        }
        let value = piece.shape.cell_value();
        for (x, y) in piece.cells() {
            self.set(x as usize, y as usize, value);
        }
        LockOutcome::Locked
    }

    /// Removes every full row and drops the rest down, keeping their order. Returns 0..=4.
    pub fn clear_full_rows(&mut self) -> usize {
        let before = self.rows.len();
        self.rows.retain(|row| row.iter().any(|&c| c == 0));
        let cleared = before - self.rows.len();
        if cleared > 0 {
            let mut compacted = vec![[0; FIELD_W]; cleared];
            compacted.append(&mut self.rows);
            self.rows = compacted;
        }
        cleared
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::Shape;

    fn fill_row(field: &mut Field, y: usize, value: u8) {
        for x in 0..FIELD_W {
            field.set(x, y, value);
        }
    }

    #[test]
    fn fresh_spawns_do_not_collide() {
        let field = Field::new();
        for shape in Shape::ALL {
            assert!(!field.collides(&Piece::new(shape), 0, 0), "{shape:?}");
        }
    }

    #[test]
    fn walls_and_floor_collide() {
        let field = Field::new();
        let mut piece = Piece::new(Shape::O);
        piece.x = 0;
        assert!(field.collides(&piece, -1, 0));
        piece.x = FIELD_W as i32 - 2;
        assert!(field.collides(&piece, 1, 0));
        piece.y = FIELD_H as i32 - 2;
        assert!(!field.collides(&piece, 0, 0));
        assert!(field.collides(&piece, 0, 1));
    }

    #[test]
    fn cells_above_the_top_only_hit_walls() {
        let mut field = Field::new();
        fill_row(&mut field, 0, 3);
        let mut piece = Piece::new(Shape::I);
        piece.y = -1;
        assert!(!field.collides(&piece, 0, 0));
        assert!(field.collides(&piece, 0, 1));
        piece.x = -1;
        assert!(field.collides(&piece, 0, 0));
    }

    #[test]
    fn lock_writes_shape_cell_value() {
        let mut field = Field::new();
        let mut piece = Piece::new(Shape::T);
        piece.y = 16;
        assert_eq!(field.lock(&piece), LockOutcome::Locked);
        assert_eq!(field.get(5, 16), Some(Shape::T.cell_value()));
        assert_eq!(field.get(4, 17), Some(Shape::T.cell_value()));
        assert_eq!(field.get(4, 16), Some(0));
    }

    #[test]
    fn overflowing_lock_writes_nothing() {
        let mut field = Field::new();
        let mut piece = Piece::new(Shape::J);
        piece.y = -1;
        assert_eq!(field.lock(&piece), LockOutcome::Overflow);
        assert!(field.is_empty());
    }

    #[test]
    fn clearing_keeps_height_and_order() {
        let mut field = Field::new();
        field.set(0, 14, 1);
        fill_row(&mut field, 15, 2);
        field.set(3, 16, 5);
        fill_row(&mut field, 17, 4);

        assert_eq!(field.clear_full_rows(), 2);
        assert_eq!(field.rows().len(), FIELD_H);
        assert_eq!(field.get(0, 16), Some(1));
        assert_eq!(field.get(3, 17), Some(5));
        assert!(field.rows()[..16].iter().all(|r| r.iter().all(|&c| c == 0)));
    }

    #[test]
    fn four_full_rows_is_a_tetris() {
        let mut field = Field::new();
        for y in 14..18 {
            fill_row(&mut field, y, 1);
        }
        assert_eq!(field.clear_full_rows(), TETRIS_ROWS);
        assert!(field.is_empty());
    }

    #[test]
    fn nothing_to_clear_is_zero() {
        let mut field = Field::new();
        field.set(2, 17, 6);
        assert_eq!(field.clear_full_rows(), 0);
        assert_eq!(field.get(2, 17), Some(6));
    }
}

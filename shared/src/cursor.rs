//! Keyboard cursor. Navigation only; it never touches the grid.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pub col: isize,
    pub row: isize,
}

impl Cursor {
    pub fn new(col: isize, row: isize) -> Self {
        Cursor { col, row }
    }

    /// Move by a delta, wrapping to the opposite edge when leaving the board.
    ///
    /// A position past the last column lands on column 0 and a negative one
    /// lands on the last column; rows behave the same way.
    pub fn move_by(&mut self, d_col: isize, d_row: isize, width: usize, height: usize) {
        self.col = wrap(self.col.saturating_add(d_col), width);
        self.row = wrap(self.row.saturating_add(d_row), height);
    }
}

fn wrap(value: isize, extent: usize) -> isize {
    let extent = extent as isize;
    if value >= extent {
        0
    } else if value < 0 {
        extent - 1
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moves_within_bounds() {
        let mut cursor = Cursor::new(2, 2);
        cursor.move_by(1, -1, 5, 5);
        assert_eq!(cursor, Cursor::new(3, 1));
    }

    #[test]
    fn wraps_left_and_up_to_last_cell() {
        let mut cursor = Cursor::default();
        cursor.move_by(-1, -1, 4, 3);
        assert_eq!(cursor, Cursor::new(3, 2));
    }

    #[test]
    fn extreme_deltas_snap_to_edges() {
        let mut cursor = Cursor::new(1, 1);
        cursor.move_by(isize::MAX, 0, 4, 4);
        assert_eq!(cursor, Cursor::new(0, 1));
        cursor.move_by(isize::MIN, isize::MIN, 4, 4);
        assert_eq!(cursor, Cursor::new(3, 3));
    }

    #[test]
    fn wraps_right_and_down_to_zero() {
        let mut cursor = Cursor::new(3, 2);
        cursor.move_by(1, 1, 4, 3);
        assert_eq!(cursor, Cursor::new(0, 0));
    }
}

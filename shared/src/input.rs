//! Normalized input events delivered to the controller.

/// An input already translated from raw pointer, keyboard or timer events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Advance the interaction state machine (the space key).
    ToggleState,
    /// Flip the cell under the pointer.
    EditCell { col: isize, row: isize },
    /// Fill the board randomly.
    Randomize,
    /// Move the keyboard cursor by a delta.
    MoveCursor { d_col: isize, d_row: isize },
    /// One pulse of the external tick source.
    Tick(u64),
}

/// Map a pixel position onto grid coordinates for square cells of
/// `cell_size` pixels.
pub fn pixel_to_cell(x: f32, y: f32, cell_size: f32) -> (isize, isize) {
    (
        (x / cell_size).floor() as isize,
        (y / cell_size).floor() as isize,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixels_floor_to_cells() {
        assert_eq!(pixel_to_cell(0.0, 0.0, 25.0), (0, 0));
        assert_eq!(pixel_to_cell(24.9, 25.0, 25.0), (0, 1));
        assert_eq!(pixel_to_cell(130.0, 77.0, 25.0), (5, 3));
    }

    #[test]
    fn negative_pixels_map_off_the_board() {
        assert_eq!(pixel_to_cell(-1.0, 10.0, 25.0), (-1, 0));
    }
}

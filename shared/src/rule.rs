//! The Game of Life neighbor rule.

use crate::grid::Grid;

/// Offsets of the Moore neighborhood as `(d_col, d_row)`.
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Count the live cells around `(col, row)`.
///
/// Neighbors off the board read as dead, so edges and corners need no
/// special handling.
pub fn count_live_neighbors(grid: &Grid, col: isize, row: isize) -> u8 {
    NEIGHBOR_OFFSETS
        .iter()
        .filter(|(d_col, d_row)| match (col.checked_add(*d_col), row.checked_add(*d_row)) {
            (Some(col), Some(row)) => grid.get(col, row),
            _ => false,
        })
        .count() as u8
}

/// The state of a cell in the next generation.
pub fn next_state(alive: bool, live_neighbors: u8) -> bool {
    match (alive, live_neighbors) {
        (true, 2..=3) => true, // Survives
        (false, 3) => true,    // Becomes alive
        _ => false,            // Dies or remains dead
    }
}

//! Generation stepping.
//!
//! Every neighbor count is taken against the pre-step grid, never against
//! the grid being built, so generation N+1 depends on generation N alone.

use crate::grid::{CellState, Grid};
use crate::rule::{count_live_neighbors, next_state};

/// Compute the next generation of `grid`.
pub fn step(grid: &Grid) -> Grid {
    let cells: Vec<CellState> = grid
        .iter()
        .map(|(col, row, cell)| {
            let live_neighbors = count_live_neighbors(grid, col as isize, row as isize);
            next_state(cell.is_alive(), live_neighbors).into()
        })
        .collect();

    Grid::from_cells(grid.width(), grid.height(), cells)
}

/// Replace `grid` with its next generation.
///
/// Returns `false` when the generation is unchanged (a still life or an
/// empty board).
pub fn advance(grid: &mut Grid) -> bool {
    let next = step(grid);
    if *grid == next {
        return false;
    }
    *grid = next;
    true
}

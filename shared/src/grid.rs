use crate::grid::CellState::{Alive, Dead};
use crate::{Error, Result};
use rand::Rng;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum CellState {
    #[default]
    Dead,
    Alive,
}

impl CellState {
    pub fn is_alive(self) -> bool {
        self == Alive
    }
}

impl From<bool> for CellState {
    fn from(alive: bool) -> Self {
        if alive {
            Alive
        } else {
            Dead
        }
    }
}

/// A bounded `width` x `height` board of cells.
///
/// Cells are stored densely in row-major order, so every coordinate in
/// `[0, width) x [0, height)` has exactly one entry. Reads outside the board
/// see a dead cell; writes outside the board are rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<CellState>,
}

impl Grid {
    /// Creates a grid with every cell dead.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        let len = cell_count(width, height)?;
        Ok(Grid {
            width,
            height,
            cells: vec![Dead; len],
        })
    }

    /// Builds a grid from row-major cells of a known-valid size.
    pub(crate) fn from_cells(width: usize, height: usize, cells: Vec<CellState>) -> Self {
        debug_assert_eq!(cells.len(), width * height);
        Grid {
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

    /// Returns whether the cell is alive. Anything off the board is dead.
    pub fn get(&self, col: isize, row: isize) -> bool {
        self.cell(col, row).is_alive()
    }

    pub fn cell(&self, col: isize, row: isize) -> CellState {
        self.index(col, row)
            .map(|index| self.cells[index])
            .unwrap_or(Dead)
    }

    pub fn set(&mut self, col: isize, row: isize, alive: bool) -> Result<()> {
        let index = self.index(col, row).ok_or(Error::OutOfBounds {
            col,
            row,
            width: self.width,
            height: self.height,
        })?;
        self.cells[index] = alive.into();
        Ok(())
    }

    /// Flips a cell and returns its new state.
    pub fn toggle(&mut self, col: isize, row: isize) -> Result<bool> {
        let alive = !self.get(col, row);
        self.set(col, row, alive)?;
        Ok(alive)
    }

    /// Kills every cell.
    pub fn clear(&mut self) {
        self.cells.fill(Dead);
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Iterates `(col, row, state)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, CellState)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .map(move |(index, cell)| (index % width, index / width, *cell))
    }

    pub fn randomize(&mut self) {
        self.randomize_with(&mut rand::rng());
    }

    /// Makes each cell alive with probability one half.
    pub fn randomize_with<R: Rng>(&mut self, rng: &mut R) {
        for cell in self.cells.iter_mut() {
            *cell = if rng.random_bool(0.5) { Alive } else { Dead };
        }
    }

    fn index(&self, col: isize, row: isize) -> Option<usize> {
        let col = usize::try_from(col).ok().filter(|col| *col < self.width)?;
        let row = usize::try_from(row).ok().filter(|row| *row < self.height)?;
        Some(row * self.width + col)
    }
}

/// Number of cells on a `width` x `height` board.
///
/// Both sides must be non-zero and addressable by an `isize` coordinate, and
/// the product must not overflow.
pub(crate) fn cell_count(width: usize, height: usize) -> Result<usize> {
    let max = isize::MAX as usize;
    if width == 0 || height == 0 || width > max || height > max {
        return Err(Error::InvalidDimension { width, height });
    }
    width
        .checked_mul(height)
        .filter(|len| *len <= max)
        .ok_or(Error::InvalidDimension { width, height })
}

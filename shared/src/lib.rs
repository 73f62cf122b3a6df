//! Conway's Game of Life on a bounded board, driven by an idle / seeding /
//! running interaction cycle.
//!
//! * A live cell dies if it has fewer than two live neighbors.
//! * A live cell with two or three live neighbors lives on to the next generation.
//! * A live cell with more than three live neighbors dies.
//! * A dead cell will be brought back to live if it has exactly three live neighbors.
//!
//! Cells beyond the edge of the board count as dead; there is no wraparound.

pub mod config;
pub mod controller;
pub mod cursor;
pub mod engine;
mod error;
pub mod grid;
pub mod input;
pub mod rule;
pub mod tick;

pub use config::SimulationConfig;
pub use controller::{Effect, InteractionController, InteractionState};
pub use error::{Error, Result};
pub use grid::{CellState, Grid};
pub use input::Input;

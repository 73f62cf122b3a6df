//! Simulation configuration.
//!
//! Defaults match a 1280x720 window cut into 25-pixel cells, stepping once
//! every 30 ticks. Environment variables can override each field:
//! - `LIFE_GRID_WIDTH` overrides `width`
//! - `LIFE_GRID_HEIGHT` overrides `height`
//! - `LIFE_TICKS_PER_GENERATION` overrides `ticks_per_generation`

use std::str::FromStr;

use log::warn;

use crate::grid::cell_count;
use crate::{Error, Result};

pub const DEFAULT_WIDTH: usize = 51;
pub const DEFAULT_HEIGHT: usize = 28;
pub const DEFAULT_TICKS_PER_GENERATION: u64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Board width in cells.
    pub width: usize,
    /// Board height in cells.
    pub height: usize,
    /// Ticks between generation steps while running.
    pub ticks_per_generation: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            ticks_per_generation: DEFAULT_TICKS_PER_GENERATION,
        }
    }
}

impl SimulationConfig {
    /// Size the board to fit a pixel area with square cells of `cell_size`.
    pub fn from_viewport(pixel_width: f32, pixel_height: f32, cell_size: f32) -> Self {
        let fit = |pixels: f32| ((pixels / cell_size).floor() as usize).max(1);
        Self {
            width: fit(pixel_width),
            height: fit(pixel_height),
            ..Self::default()
        }
    }

    pub fn apply_env_overrides(&mut self) {
        override_from_env("LIFE_GRID_WIDTH", &mut self.width);
        override_from_env("LIFE_GRID_HEIGHT", &mut self.height);
        override_from_env("LIFE_TICKS_PER_GENERATION", &mut self.ticks_per_generation);
    }

    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] for an empty or oversized board, or
    /// [`Error::InvalidTickInterval`] when `ticks_per_generation` is zero.
    pub fn validate(&self) -> Result<()> {
        cell_count(self.width, self.height)?;
        if self.ticks_per_generation == 0 {
            return Err(Error::InvalidTickInterval);
        }
        Ok(())
    }
}

fn override_from_env<T: FromStr>(key: &str, field: &mut T) {
    if let Ok(raw) = std::env::var(key) {
        match raw.parse() {
            Ok(value) => *field = value,
            Err(_) => warn!("ignoring {key}={raw:?}: not a valid number"),
        }
    }
}

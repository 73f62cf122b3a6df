//! Error types for the simulation core.

use thiserror::Error;

/// Errors raised by grid construction, cell edits and configuration.
///
/// Everything else in the core (reads, neighbor counts, stepping, state
/// transitions) is total and never fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A grid was requested with a zero width or height.
    #[error("invalid grid dimension: {width}x{height}")]
    InvalidDimension {
        /// Requested width in cells.
        width: usize,
        /// Requested height in cells.
        height: usize,
    },

    /// A write addressed a cell outside the board.
    #[error("cell ({col}, {row}) is outside the {width}x{height} grid")]
    OutOfBounds {
        /// Column of the rejected write.
        col: isize,
        /// Row of the rejected write.
        row: isize,
        /// Grid width in cells.
        width: usize,
        /// Grid height in cells.
        height: usize,
    },

    /// The simulation would never advance because the tick throttle is zero.
    #[error("ticks per generation must be at least 1")]
    InvalidTickInterval,
}

/// Result alias used throughout the core.
pub type Result<T> = std::result::Result<T, Error>;

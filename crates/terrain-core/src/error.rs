//! Error types for terrain-core
//!
//! Provides a unified error type for grid construction and cell access.
//! Each variant carries the coordinates or shape involved so callers can
//! report the problem without re-inspecting the grid.

use thiserror::Error;

/// Terrain grid error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Grid input is empty or not rectangular
    #[error("malformed grid: {0}")]
    MalformedGrid(String),

    /// Coordinate outside the grid
    #[error("cell ({row}, {col}) out of bounds for {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// Requested label change is not allowed for the cell's current state
    #[error("invalid transition at ({row}, {col}): {reason}")]
    InvalidTransition {
        row: usize,
        col: usize,
        reason: &'static str,
    },

    /// Every region id up to `u32::MAX` is already in use
    #[error("region ids exhausted: {max} is already assigned")]
    RegionIdsExhausted { max: u32 },
}

/// Result type alias for grid operations
pub type Result<T> = std::result::Result<T, Error>;

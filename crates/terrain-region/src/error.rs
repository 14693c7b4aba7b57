//! Error types for terrain-region

use terrain_core::RegionId;
use thiserror::Error;

/// Errors that can occur during region labeling
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegionError {
    /// Core grid error
    #[error("grid error: {0}")]
    Grid(#[from] terrain_core::Error),

    /// Seed lies outside the grid
    #[error("seed ({row}, {col}) is out of bounds")]
    OutOfBounds { row: usize, col: usize },

    /// Seed addresses an obstacle
    #[error("seed ({row}, {col}) is an obstacle")]
    BlockedSeed { row: usize, col: usize },

    /// Seed cell already belongs to a region
    #[error("seed ({row}, {col}) already belongs to region {region}")]
    AlreadyLabeled {
        row: usize,
        col: usize,
        region: RegionId,
    },
}

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;

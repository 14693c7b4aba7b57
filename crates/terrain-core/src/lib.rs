//! terrain-core - Grid model for terrain region labeling
//!
//! This crate provides the data structures shared by the rest of the
//! workspace:
//!
//! - [`Grid`] - Rectangular array of cells with bounds-checked access
//! - [`CellState`] - Obstacle, unlabeled open cell, or labeled open cell
//! - [`RegionId`] - Positive identifier of a connected region
//! - [`Connectivity`] - 4-way or 8-way adjacency rule
//!
//! # Example
//!
//! ```
//! use terrain_core::{CellState, Connectivity, Grid, OBSTACLE_MARKER};
//!
//! let grid = Grid::from_markers(&[vec![0_i64, 1], vec![0, 0]], OBSTACLE_MARKER).unwrap();
//! assert_eq!(grid.state_at(0, 1).unwrap(), CellState::Obstacle);
//!
//! let around: Vec<_> = grid.neighbors(0, 0, Connectivity::FourWay).collect();
//! assert_eq!(around, vec![(1, 0), (0, 1)]);
//! ```

pub mod cell;
pub mod connectivity;
pub mod error;
pub mod grid;

pub use cell::{CellState, RegionId};
pub use connectivity::Connectivity;
pub use error::{Error, Result};
pub use grid::{Grid, Neighbors, OBSTACLE_MARKER};

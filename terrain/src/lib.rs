//! Terrain - Connected region labeling for obstacle grids
//!
//! Partitions the open cells of a 2D grid into maximal connected regions
//! under 4-way or 8-way adjacency and gives each region its own id.
//!
//! # Overview
//!
//! - Grid model with bounds-checked access ([`Grid`], [`CellState`])
//! - Seeded flood fill and exhaustive labeling ([`region`])
//! - Plain-text grid input/output and a region palette ([`io`])
//!
//! # Example
//!
//! ```
//! use terrain::{Connectivity, Grid, OBSTACLE_MARKER};
//! use terrain::region::label_all;
//!
//! let rows: &[&[i64]] = &[&[0, 1], &[1, 0]];
//!
//! let mut four = Grid::from_markers(rows, OBSTACLE_MARKER).unwrap();
//! assert_eq!(label_all(&mut four, Connectivity::FourWay).region_count, 2);
//!
//! let mut eight = Grid::from_markers(rows, OBSTACLE_MARKER).unwrap();
//! assert_eq!(label_all(&mut eight, Connectivity::EightWay).region_count, 1);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use terrain_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use terrain_io as io;
pub use terrain_region as region;

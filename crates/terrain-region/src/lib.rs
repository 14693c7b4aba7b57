//! terrain-region - Region labeling for terrain grids
//!
//! This crate partitions the open cells of a [`Grid`](terrain_core::Grid)
//! into connected regions:
//!
//! - **Seeded fill** - Label the single region containing a seed cell
//! - **Exhaustive labeling** - Label every region in row-major discovery order
//! - **Region measurements** - Sizes, bounding boxes and centroids
//!
//! # Examples
//!
//! ## Labeling every region
//!
//! ```
//! use terrain_core::{Connectivity, Grid, OBSTACLE_MARKER};
//! use terrain_region::label_all;
//!
//! let rows: &[&[i64]] = &[
//!     &[0, 0, 1, 0, 0],
//!     &[0, 1, 1, 0, 0],
//!     &[0, 0, 1, 1, 1],
//!     &[1, 1, 0, 0, 0],
//! ];
//! let mut grid = Grid::from_markers(rows, OBSTACLE_MARKER).unwrap();
//!
//! let stats = label_all(&mut grid, Connectivity::FourWay);
//! assert_eq!(stats.region_count, 3);
//! assert_eq!(stats.navigable_cells, 12);
//! assert_eq!(stats.obstacle_cells, 8);
//! ```
//!
//! ## Filling from a seed
//!
//! ```
//! use terrain_core::{Connectivity, Grid};
//! use terrain_region::{RegionError, fill_from};
//!
//! let mut grid = Grid::new(2, 2).unwrap();
//! let id = fill_from(&mut grid, (0, 0), Connectivity::FourWay).unwrap();
//! assert_eq!(id.get(), 1);
//!
//! let err = fill_from(&mut grid, (5, 5), Connectivity::FourWay).unwrap_err();
//! assert_eq!(err, RegionError::OutOfBounds { row: 5, col: 5 });
//! ```

pub mod error;
pub mod fill;
pub mod label;
pub mod regions;

// Re-export core types
pub use terrain_core;

pub use error::{RegionError, RegionResult};

pub use fill::{Fill, FillOptions, TraversalOrder, fill_from, fill_from_with_options};

pub use label::{Statistics, label_all, label_all_from, label_all_observed, label_all_with_options};

pub use regions::{RegionBounds, RegionStats, region_cells, region_sizes, region_stats};

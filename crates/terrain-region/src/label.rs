//! Exhaustive region labeling
//!
//! Scans the grid in row-major order and starts a new flood fill at every
//! open cell that no earlier fill reached. Region ids therefore follow the
//! order in which regions are first met by the scan.

use crate::error::RegionResult;
use crate::fill::{FillOptions, check_seed, flood};
use terrain_core::{CellState, Connectivity, Grid, RegionId};
use tracing::{debug, warn};

/// Summary of a labeled grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Statistics {
    /// Number of regions (highest region id, or 0 if none)
    pub region_count: usize,
    /// Number of open cells
    pub navigable_cells: usize,
    /// Number of obstacle cells
    pub obstacle_cells: usize,
}

impl Statistics {
    /// Compute statistics from the current state of a grid
    pub fn from_grid(grid: &Grid) -> Self {
        let mut stats = Statistics {
            region_count: grid.max_region().map_or(0, |id| id.get() as usize),
            ..Default::default()
        };
        for (_, state) in grid.iter() {
            match state {
                CellState::Obstacle => stats.obstacle_cells += 1,
                CellState::Open(_) => stats.navigable_cells += 1,
            }
        }
        stats
    }

    /// Total number of cells accounted for
    pub fn total_cells(&self) -> usize {
        self.navigable_cells + self.obstacle_cells
    }
}

/// Label every open cell of the grid
///
/// Each connected region receives its own id. Ids start one past the
/// highest id already present (1 on a fresh grid) and increase in the
/// order the row-major scan first reaches each region.
///
/// # Arguments
///
/// * `grid` - Grid to label in place
/// * `connectivity` - Connectivity type
///
/// # Returns
///
/// Statistics of the labeled grid.
pub fn label_all(grid: &mut Grid, connectivity: Connectivity) -> Statistics {
    label_all_with_options(grid, &FillOptions::new(connectivity))
}

/// Label every open cell of the grid using the given fill options
pub fn label_all_with_options(grid: &mut Grid, options: &FillOptions) -> Statistics {
    label_all_observed(grid, options, |_, _| {})
}

/// Label every open cell and report each cell as it is labeled
///
/// `on_visit` receives the region id and the `(row, col)` of every cell in
/// the exact order the cells are labeled. Callers that animate the fill
/// replay this sequence.
///
/// If every id up to `u32::MAX` is taken while open cells remain
/// unlabeled, the scan stops and those cells stay unlabeled.
pub fn label_all_observed<F>(grid: &mut Grid, options: &FillOptions, mut on_visit: F) -> Statistics
where
    F: FnMut(RegionId, (usize, usize)),
{
    let mut next = grid.next_region().ok();

    'scan: for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            if grid.get(row, col) != Some(CellState::UNLABELED) {
                continue;
            }
            let Some(id) = next else {
                warn!(row, col, "region ids exhausted, leaving remaining cells unlabeled");
                break 'scan;
            };
            let count = flood(grid, (row, col), id, options, &mut |cell| on_visit(id, cell));
            debug!(row, col, region = %id, cells = count, "discovered region");
            next = id.checked_next();
        }
    }

    let stats = Statistics::from_grid(grid);
    debug!(
        regions = stats.region_count,
        navigable = stats.navigable_cells,
        obstacles = stats.obstacle_cells,
        "labeled grid"
    );
    stats
}

/// Label the region around `seed` first, then the rest of the grid
///
/// The seed's region receives the first fresh id; remaining regions are
/// labeled by the row-major scan of [`label_all_with_options`].
///
/// # Errors
///
/// Returns the same errors as [`fill_from`](crate::fill_from). The grid
/// is left unchanged when the seed is rejected or no id is left.
pub fn label_all_from(
    grid: &mut Grid,
    seed: (usize, usize),
    options: &FillOptions,
) -> RegionResult<Statistics> {
    check_seed(grid, seed)?;

    let id = grid.next_region()?;
    let count = flood(grid, seed, id, options, &mut |_| {});
    debug!(row = seed.0, col = seed.1, region = %id, cells = count, "filled seed region");

    Ok(label_all_with_options(grid, options))
}

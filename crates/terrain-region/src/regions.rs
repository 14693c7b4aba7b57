//! Per-region measurements
//!
//! These functions read a labeled grid and summarize each region: its
//! size, bounding box and centroid. Regions are reported in id order;
//! index `i` of every returned vector corresponds to region id `i + 1`.

use terrain_core::{Grid, RegionId};

/// Inclusive bounding box of a region in grid coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionBounds {
    pub min_row: usize,
    pub min_col: usize,
    pub max_row: usize,
    pub max_col: usize,
}

impl RegionBounds {
    fn at(row: usize, col: usize) -> Self {
        Self {
            min_row: row,
            min_col: col,
            max_row: row,
            max_col: col,
        }
    }

    fn extend(&mut self, row: usize, col: usize) {
        self.min_row = self.min_row.min(row);
        self.min_col = self.min_col.min(col);
        self.max_row = self.max_row.max(row);
        self.max_col = self.max_col.max(col);
    }

    /// Height in rows
    pub fn height(&self) -> usize {
        self.max_row - self.min_row + 1
    }

    /// Width in columns
    pub fn width(&self) -> usize {
        self.max_col - self.min_col + 1
    }

    /// Check whether `(row, col)` lies inside the box
    pub fn contains(&self, row: usize, col: usize) -> bool {
        (self.min_row..=self.max_row).contains(&row) && (self.min_col..=self.max_col).contains(&col)
    }
}

/// Region statistics
#[derive(Debug, Clone, PartialEq)]
pub struct RegionStats {
    /// Region id
    pub region: RegionId,
    /// Number of cells
    pub cell_count: usize,
    /// Bounding box
    pub bounds: RegionBounds,
    /// Centroid row coordinate
    pub centroid_row: f64,
    /// Centroid column coordinate
    pub centroid_col: f64,
}

/// Get the cell count of each region
///
/// # Returns
///
/// A vector with one entry per id from 1 to the highest id present.
/// The index corresponds to (id - 1).
pub fn region_sizes(grid: &Grid) -> Vec<usize> {
    let n = grid.max_region().map_or(0, |id| id.get() as usize);
    let mut sizes = vec![0usize; n];
    for (_, state) in grid.iter() {
        if let Some(id) = state.region() {
            sizes[id.index()] += 1;
        }
    }
    sizes
}

/// Get detailed statistics for all regions
///
/// Ids with no cells (possible only on grids labeled by hand) are skipped.
pub fn region_stats(grid: &Grid) -> Vec<RegionStats> {
    struct Accum {
        count: usize,
        sum_row: u64,
        sum_col: u64,
        bounds: RegionBounds,
    }

    let n = grid.max_region().map_or(0, |id| id.get() as usize);
    let mut accums: Vec<Option<Accum>> = (0..n).map(|_| None).collect();

    for ((row, col), state) in grid.iter() {
        let Some(id) = state.region() else {
            continue;
        };
        let acc = accums[id.index()].get_or_insert_with(|| Accum {
            count: 0,
            sum_row: 0,
            sum_col: 0,
            bounds: RegionBounds::at(row, col),
        });
        acc.count += 1;
        acc.sum_row += row as u64;
        acc.sum_col += col as u64;
        acc.bounds.extend(row, col);
    }

    accums
        .into_iter()
        .enumerate()
        .filter_map(|(i, acc)| {
            let acc = acc?;
            let region = RegionId::new(i as u32 + 1)?;
            Some(RegionStats {
                region,
                cell_count: acc.count,
                bounds: acc.bounds,
                centroid_row: acc.sum_row as f64 / acc.count as f64,
                centroid_col: acc.sum_col as f64 / acc.count as f64,
            })
        })
        .collect()
}

/// Cells belonging to `region`, in row-major order
pub fn region_cells(grid: &Grid, region: RegionId) -> Vec<(usize, usize)> {
    grid.iter()
        .filter(|(_, state)| state.region() == Some(region))
        .map(|(cell, _)| cell)
        .collect()
}

//! Grid - rectangular terrain of obstacles and open cells
//!
//! The grid is stored row-major. Coordinates are `(row, col)` with
//! `(0, 0)` at the top-left corner.
//!
//! A grid is created once from raw input, labeled in place by the region
//! labeler and then read by whatever renders or summarizes it.

mod neighbors;

pub use neighbors::Neighbors;

use crate::cell::{CellState, RegionId};
use crate::connectivity::Connectivity;
use crate::error::{Error, Result};

/// Marker value conventionally used for obstacles in raw input
pub const OBSTACLE_MARKER: i64 = 1;

/// Rectangular grid of cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<CellState>,
}

impl Grid {
    /// Create a grid in which every cell is open and unlabeled
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedGrid`] if either dimension is zero or the
    /// cell count overflows `usize`.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(Error::MalformedGrid(format!(
                "dimensions must be at least 1x1, got {rows}x{cols}"
            )));
        }
        let len = rows.checked_mul(cols).ok_or_else(|| {
            Error::MalformedGrid(format!("{rows}x{cols} grid is too large"))
        })?;
        Ok(Self {
            rows,
            cols,
            cells: vec![CellState::UNLABELED; len],
        })
    }

    /// Build a grid from rows of cell states
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedGrid`] if there are no rows, the first row
    /// is empty, or any row differs in length from the first.
    pub fn from_rows(rows: Vec<Vec<CellState>>) -> Result<Self> {
        let cols = check_shape(rows.iter().map(Vec::len))?;
        let n_rows = rows.len();
        let cells: Vec<CellState> = rows.into_iter().flatten().collect();
        Ok(Self {
            rows: n_rows,
            cols,
            cells,
        })
    }

    /// Build a grid from raw integer markers
    ///
    /// Cells equal to `obstacle_marker` become [`CellState::Obstacle`];
    /// every other value is open ground.
    ///
    /// # Errors
    ///
    /// Same shape requirements as [`Grid::from_rows`].
    pub fn from_markers<R: AsRef<[i64]>>(rows: &[R], obstacle_marker: i64) -> Result<Self> {
        let cols = check_shape(rows.iter().map(|r| r.as_ref().len()))?;
        let cells = rows
            .iter()
            .flat_map(|r| r.as_ref().iter())
            .map(|&v| {
                if v == obstacle_marker {
                    CellState::Obstacle
                } else {
                    CellState::UNLABELED
                }
            })
            .collect();
        Ok(Self {
            rows: rows.len(),
            cols,
            cells,
        })
    }

    /// Number of rows
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells (`rows * cols`)
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false; a grid has at least one cell
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Check whether `(row, col)` lies inside the grid
    #[inline]
    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    fn out_of_bounds(&self, row: usize, col: usize) -> Error {
        Error::OutOfBounds {
            row,
            col,
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Get the state at `(row, col)`, or `None` if out of bounds
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<CellState> {
        if self.in_bounds(row, col) {
            Some(self.cells[self.index(row, col)])
        } else {
            None
        }
    }

    /// Get the state at `(row, col)`
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if the coordinate is outside the grid.
    pub fn state_at(&self, row: usize, col: usize) -> Result<CellState> {
        self.get(row, col).ok_or_else(|| self.out_of_bounds(row, col))
    }

    /// Turn a cell into an obstacle or back into unlabeled open ground
    ///
    /// Used while building a grid; labels on the cell are discarded.
    pub fn set_obstacle(&mut self, row: usize, col: usize, obstacle: bool) -> Result<()> {
        if !self.in_bounds(row, col) {
            return Err(self.out_of_bounds(row, col));
        }
        let idx = self.index(row, col);
        self.cells[idx] = if obstacle {
            CellState::Obstacle
        } else {
            CellState::UNLABELED
        };
        Ok(())
    }

    /// Assign a region to an open cell
    ///
    /// Labels are one-way: an unlabeled cell may be labeled, and setting
    /// the id a cell already has is a no-op.
    ///
    /// # Errors
    ///
    /// - [`Error::OutOfBounds`] if the coordinate is outside the grid
    /// - [`Error::InvalidTransition`] if the cell is an obstacle or already
    ///   carries a different id
    pub fn set_region(&mut self, row: usize, col: usize, id: RegionId) -> Result<()> {
        let state = self.state_at(row, col)?;
        match state {
            CellState::Obstacle => Err(Error::InvalidTransition {
                row,
                col,
                reason: "obstacles are never labeled",
            }),
            CellState::Open(Some(existing)) if existing != id => Err(Error::InvalidTransition {
                row,
                col,
                reason: "cell already belongs to another region",
            }),
            CellState::Open(_) => {
                let idx = self.index(row, col);
                self.cells[idx] = CellState::Open(Some(id));
                Ok(())
            }
        }
    }

    /// Label `(row, col)` with `id` if it is in bounds, open and unlabeled
    ///
    /// Returns `true` if the cell was claimed by this call.
    #[inline]
    pub fn claim(&mut self, row: usize, col: usize, id: RegionId) -> bool {
        if !self.in_bounds(row, col) {
            return false;
        }
        let idx = self.index(row, col);
        if self.cells[idx].is_unlabeled() {
            self.cells[idx] = CellState::Open(Some(id));
            true
        } else {
            false
        }
    }

    /// In-bounds neighbours of `(row, col)` in traversal order
    ///
    /// Yields up, down, left, right and, for [`Connectivity::EightWay`],
    /// up-left, up-right, down-left, down-right.
    pub fn neighbors(&self, row: usize, col: usize, connectivity: Connectivity) -> Neighbors {
        Neighbors::new(row, col, self.rows, self.cols, connectivity)
    }

    /// Cells of one row, or `None` if `row` is out of range
    pub fn row(&self, row: usize) -> Option<&[CellState]> {
        if row < self.rows {
            let start = row * self.cols;
            Some(&self.cells[start..start + self.cols])
        } else {
            None
        }
    }

    /// Iterate over all cells in row-major order
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), CellState)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &state)| ((i / cols, i % cols), state))
    }

    /// Number of open cells, labeled or not
    pub fn count_open(&self) -> usize {
        self.cells.iter().filter(|c| c.is_open()).count()
    }

    /// Number of obstacle cells
    pub fn count_obstacles(&self) -> usize {
        self.cells.iter().filter(|c| c.is_obstacle()).count()
    }

    /// Highest region id present, or `None` if nothing is labeled
    pub fn max_region(&self) -> Option<RegionId> {
        self.cells.iter().filter_map(|c| c.region()).max()
    }

    /// Id a new fill should use: one past the highest id present
    ///
    /// # Errors
    ///
    /// Returns [`Error::RegionIdsExhausted`] if a cell already carries
    /// `u32::MAX`.
    pub fn next_region(&self) -> Result<RegionId> {
        match self.max_region() {
            None => Ok(RegionId::FIRST),
            Some(max) => max
                .checked_next()
                .ok_or(Error::RegionIdsExhausted { max: max.get() }),
        }
    }

    /// Check whether every open cell carries a region id
    pub fn is_fully_labeled(&self) -> bool {
        !self.cells.iter().any(|c| c.is_unlabeled())
    }

    /// Copy of this grid with every region label removed
    pub fn cleared(&self) -> Self {
        Self {
            rows: self.rows,
            cols: self.cols,
            cells: self.cells.iter().map(|c| c.unlabeled()).collect(),
        }
    }
}

/// Validate row lengths and return the column count
fn check_shape(mut lens: impl Iterator<Item = usize>) -> Result<usize> {
    let cols = match lens.next() {
        None => return Err(Error::MalformedGrid("grid has no rows".to_string())),
        Some(0) => return Err(Error::MalformedGrid("grid has no columns".to_string())),
        Some(n) => n,
    };
    for (i, len) in lens.enumerate() {
        if len != cols {
            return Err(Error::MalformedGrid(format!(
                "row {} has {} cells, expected {}",
                i + 1,
                len,
                cols
            )));
        }
    }
    Ok(cols)
}

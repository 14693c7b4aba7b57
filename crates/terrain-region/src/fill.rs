//! Seeded flood fill
//!
//! This module labels the single connected region that contains a seed
//! cell. Traversal uses an explicit frontier (a queue for breadth-first,
//! a stack for depth-first) so large regions never grow the call stack.
//!
//! A cell is labeled the moment it is discovered, which keeps it from
//! being pushed onto the frontier a second time.

use crate::error::{RegionError, RegionResult};
use std::collections::VecDeque;
use terrain_core::{CellState, Connectivity, Grid, RegionId};
use tracing::debug;

/// Frontier discipline used while expanding a region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TraversalOrder {
    /// FIFO queue; cells are visited in rings around the seed
    #[default]
    BreadthFirst,
    /// LIFO stack; follows one direction as far as it goes first
    DepthFirst,
}

/// Options for fill and labeling operations
#[derive(Debug, Clone, Default)]
pub struct FillOptions {
    /// Connectivity type (4-way or 8-way)
    pub connectivity: Connectivity,
    /// Frontier discipline
    pub order: TraversalOrder,
}

impl FillOptions {
    /// Create new options with the specified connectivity
    pub fn new(connectivity: Connectivity) -> Self {
        Self {
            connectivity,
            order: TraversalOrder::default(),
        }
    }

    /// Set the traversal order
    pub fn with_order(mut self, order: TraversalOrder) -> Self {
        self.order = order;
        self
    }
}

/// Outcome of a single seeded fill
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fill {
    /// Id assigned to the region
    pub region: RegionId,
    /// Cells in the order they were labeled, starting with the seed
    pub visited: Vec<(usize, usize)>,
}

impl Fill {
    /// Number of cells in the region
    pub fn len(&self) -> usize {
        self.visited.len()
    }

    /// Always false for a successful fill; the seed is always labeled
    pub fn is_empty(&self) -> bool {
        self.visited.is_empty()
    }
}

enum Frontier {
    Queue(VecDeque<(usize, usize)>),
    Stack(Vec<(usize, usize)>),
}

impl Frontier {
    fn new(order: TraversalOrder) -> Self {
        match order {
            TraversalOrder::BreadthFirst => Frontier::Queue(VecDeque::new()),
            TraversalOrder::DepthFirst => Frontier::Stack(Vec::new()),
        }
    }

    fn push(&mut self, cell: (usize, usize)) {
        match self {
            Frontier::Queue(q) => q.push_back(cell),
            Frontier::Stack(s) => s.push(cell),
        }
    }

    fn pop(&mut self) -> Option<(usize, usize)> {
        match self {
            Frontier::Queue(q) => q.pop_front(),
            Frontier::Stack(s) => s.pop(),
        }
    }
}

/// Check that `seed` can start a new region
pub(crate) fn check_seed(grid: &Grid, seed: (usize, usize)) -> RegionResult<()> {
    let (row, col) = seed;
    match grid.get(row, col) {
        None => Err(RegionError::OutOfBounds { row, col }),
        Some(CellState::Obstacle) => Err(RegionError::BlockedSeed { row, col }),
        Some(CellState::Open(Some(region))) => {
            Err(RegionError::AlreadyLabeled { row, col, region })
        }
        Some(CellState::Open(None)) => Ok(()),
    }
}

/// Expand the region around `seed`, labeling every reachable unlabeled
/// open cell with `id`
///
/// Returns the number of cells labeled. The seed must already have passed
/// [`check_seed`]; otherwise nothing is labeled and 0 is returned.
pub(crate) fn flood<F>(
    grid: &mut Grid,
    seed: (usize, usize),
    id: RegionId,
    options: &FillOptions,
    on_visit: &mut F,
) -> usize
where
    F: FnMut((usize, usize)),
{
    if !grid.claim(seed.0, seed.1, id) {
        return 0;
    }
    on_visit(seed);

    let mut count = 1;
    let mut frontier = Frontier::new(options.order);
    frontier.push(seed);

    while let Some((row, col)) = frontier.pop() {
        for (nr, nc) in grid.neighbors(row, col, options.connectivity) {
            if grid.claim(nr, nc, id) {
                on_visit((nr, nc));
                count += 1;
                frontier.push((nr, nc));
            }
        }
    }

    count
}

/// Flood fill the region containing `seed` with a fresh region id
///
/// The new id is one past the highest id already on the grid, so the
/// first fill on an unlabeled grid gets id 1. Cells outside the seed's
/// region are left untouched.
///
/// # Arguments
///
/// * `grid` - Grid to label in place
/// * `seed` - `(row, col)` of the starting cell
/// * `connectivity` - Connectivity type
///
/// # Returns
///
/// The id assigned to the region.
///
/// # Errors
///
/// - [`RegionError::OutOfBounds`] if the seed lies outside the grid
/// - [`RegionError::BlockedSeed`] if the seed is an obstacle
/// - [`RegionError::AlreadyLabeled`] if the seed already has a region
/// - [`RegionError::Grid`] wrapping `RegionIdsExhausted` if the grid
///   already uses id `u32::MAX`
pub fn fill_from(
    grid: &mut Grid,
    seed: (usize, usize),
    connectivity: Connectivity,
) -> RegionResult<RegionId> {
    check_seed(grid, seed)?;

    let id = grid.next_region()?;
    let options = FillOptions::new(connectivity);
    let count = flood(grid, seed, id, &options, &mut |_| {});

    debug!(row = seed.0, col = seed.1, region = %id, cells = count, "filled region");
    Ok(id)
}

/// Flood fill from `seed` and record the order in which cells were labeled
///
/// Behaves like [`fill_from`] but honors the traversal order in `options`
/// and returns the visit sequence, which is identical across runs for the
/// same grid, seed and options.
pub fn fill_from_with_options(
    grid: &mut Grid,
    seed: (usize, usize),
    options: &FillOptions,
) -> RegionResult<Fill> {
    check_seed(grid, seed)?;

    let region = grid.next_region()?;
    let mut visited = Vec::new();
    flood(grid, seed, region, options, &mut |cell| visited.push(cell));

    debug!(
        row = seed.0,
        col = seed.1,
        region = %region,
        cells = visited.len(),
        order = ?options.order,
        "filled region"
    );
    Ok(Fill { region, visited })
}

#[cfg(test)]
mod tests {
    use super::*;
    use terrain_core::OBSTACLE_MARKER;

    fn markers(rows: &[&[i64]]) -> Grid {
        Grid::from_markers(rows, OBSTACLE_MARKER).unwrap()
    }

    #[test]
    fn test_fill_whole_open_grid() {
        let mut grid = Grid::new(3, 4).unwrap();
        let id = fill_from(&mut grid, (1, 1), Connectivity::FourWay).unwrap();
        assert_eq!(id, RegionId::FIRST);
        assert!(grid.is_fully_labeled());
    }

    #[test]
    fn test_fill_leaves_other_regions_untouched() {
        let mut grid = markers(&[&[0, 1, 0], &[0, 1, 0]]);
        fill_from(&mut grid, (0, 0), Connectivity::FourWay).unwrap();

        assert_eq!(grid.get(1, 0), Some(CellState::Open(Some(RegionId::FIRST))));
        assert_eq!(grid.get(0, 2), Some(CellState::UNLABELED));
        assert_eq!(grid.get(1, 2), Some(CellState::UNLABELED));
        assert_eq!(grid.get(0, 1), Some(CellState::Obstacle));
    }

    #[test]
    fn test_second_fill_gets_next_id() {
        let mut grid = markers(&[&[0, 1, 0]]);
        let a = fill_from(&mut grid, (0, 2), Connectivity::FourWay).unwrap();
        let b = fill_from(&mut grid, (0, 0), Connectivity::FourWay).unwrap();
        assert_eq!(a.get(), 1);
        assert_eq!(b.get(), 2);
    }

    #[test]
    fn test_seed_errors() {
        let mut grid = markers(&[&[1, 0]]);
        assert_eq!(
            fill_from(&mut grid, (0, 0), Connectivity::FourWay),
            Err(RegionError::BlockedSeed { row: 0, col: 0 })
        );
        assert_eq!(
            fill_from(&mut grid, (4, 0), Connectivity::FourWay),
            Err(RegionError::OutOfBounds { row: 4, col: 0 })
        );

        fill_from(&mut grid, (0, 1), Connectivity::FourWay).unwrap();
        assert_eq!(
            fill_from(&mut grid, (0, 1), Connectivity::FourWay),
            Err(RegionError::AlreadyLabeled {
                row: 0,
                col: 1,
                region: RegionId::FIRST
            })
        );
    }

    #[test]
    fn test_failed_fill_does_not_mutate() {
        let mut grid = markers(&[&[1, 0], &[0, 0]]);
        let before = grid.clone();
        assert!(fill_from(&mut grid, (0, 0), Connectivity::EightWay).is_err());
        assert_eq!(grid, before);
    }

    #[test]
    fn test_fill_after_max_id_is_error() {
        let mut grid = markers(&[&[0, 1, 0]]);
        let last = RegionId::new(u32::MAX).unwrap();
        grid.set_region(0, 0, last).unwrap();
        let before = grid.clone();

        let exhausted =
            RegionError::Grid(terrain_core::Error::RegionIdsExhausted { max: u32::MAX });
        assert_eq!(
            fill_from(&mut grid, (0, 2), Connectivity::FourWay),
            Err(exhausted.clone())
        );
        assert_eq!(
            fill_from_with_options(&mut grid, (0, 2), &FillOptions::default()),
            Err(exhausted)
        );
        assert_eq!(grid, before);
    }

    #[test]
    fn test_fill_takes_last_id() {
        let mut grid = markers(&[&[0, 1, 0]]);
        grid.set_region(0, 0, RegionId::new(u32::MAX - 1).unwrap()).unwrap();
        let id = fill_from(&mut grid, (0, 2), Connectivity::FourWay).unwrap();
        assert_eq!(id.get(), u32::MAX);
    }

    #[test]
    fn test_breadth_first_visit_order() {
        let mut grid = Grid::new(2, 3).unwrap();
        let fill = fill_from_with_options(&mut grid, (0, 0), &FillOptions::default()).unwrap();
        assert_eq!(
            fill.visited,
            vec![(0, 0), (1, 0), (0, 1), (1, 1), (0, 2), (1, 2)]
        );
    }

    #[test]
    fn test_depth_first_visit_order() {
        let mut grid = Grid::new(3, 3).unwrap();
        let options = FillOptions::default().with_order(TraversalOrder::DepthFirst);
        let fill = fill_from_with_options(&mut grid, (0, 0), &options).unwrap();
        // (0,0) claims (1,0) and (0,1); the stack then runs along the top row
        assert_eq!(
            fill.visited,
            vec![
                (0, 0),
                (1, 0),
                (0, 1),
                (1, 1),
                (0, 2),
                (1, 2),
                (2, 2),
                (2, 1),
                (2, 0)
            ]
        );
        assert_eq!(fill.len(), 9);
    }

    #[test]
    fn test_orders_agree_on_partition() {
        let rows: &[&[i64]] = &[&[0, 0, 1, 0], &[1, 0, 1, 0], &[0, 0, 0, 0], &[1, 1, 1, 0]];
        let mut bfs = markers(rows);
        let mut dfs = markers(rows);
        let options = FillOptions::new(Connectivity::FourWay);
        fill_from_with_options(&mut bfs, (0, 0), &options).unwrap();
        fill_from_with_options(
            &mut dfs,
            (0, 0),
            &options.clone().with_order(TraversalOrder::DepthFirst),
        )
        .unwrap();
        assert_eq!(bfs, dfs);
    }

    #[test]
    fn test_diagonal_needs_eight_way() {
        let rows: &[&[i64]] = &[&[0, 1], &[1, 0]];

        let mut grid = markers(rows);
        let fill =
            fill_from_with_options(&mut grid, (0, 0), &FillOptions::new(Connectivity::FourWay))
                .unwrap();
        assert_eq!(fill.len(), 1);

        let mut grid = markers(rows);
        let fill =
            fill_from_with_options(&mut grid, (0, 0), &FillOptions::new(Connectivity::EightWay))
                .unwrap();
        assert_eq!(fill.visited, vec![(0, 0), (1, 1)]);
    }
}

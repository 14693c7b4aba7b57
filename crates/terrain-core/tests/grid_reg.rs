//! Grid model regression test
//!
//! Exercises construction, bounds checks, label transitions and neighbour
//! enumeration on a grid loaded from the test data directory.

use terrain_core::{CellState, Connectivity, Error, Grid, RegionId};
use terrain_test::{RegParams, load_test_grid};

#[test]
fn grid_reg() {
    let mut rp = RegParams::new("grid");

    let grid = load_test_grid("field.txt").expect("load field.txt").grid;

    // --- Test 1: shape and counts ---
    rp.compare_values(8.0, grid.rows() as f64, 0.0);
    rp.compare_values(12.0, grid.cols() as f64, 0.0);
    rp.compare_values(36.0, grid.count_obstacles() as f64, 0.0);
    rp.compare_values(60.0, grid.count_open() as f64, 0.0);
    rp.compare_values(
        grid.len() as f64,
        (grid.count_open() + grid.count_obstacles()) as f64,
        0.0,
    );

    // --- Test 2: bounds ---
    rp.compare_values(1.0, if grid.in_bounds(7, 11) { 1.0 } else { 0.0 }, 0.0);
    rp.compare_values(0.0, if grid.in_bounds(8, 0) { 1.0 } else { 0.0 }, 0.0);
    rp.compare_values(0.0, if grid.in_bounds(0, 12) { 1.0 } else { 0.0 }, 0.0);

    // --- Test 3: neighbour counts on edges and corners ---
    let n = |r, c, conn| grid.neighbors(r, c, conn).count() as f64;
    rp.compare_values(2.0, n(0, 0, Connectivity::FourWay), 0.0);
    rp.compare_values(3.0, n(0, 0, Connectivity::EightWay), 0.0);
    rp.compare_values(3.0, n(0, 5, Connectivity::FourWay), 0.0);
    rp.compare_values(5.0, n(7, 5, Connectivity::EightWay), 0.0);
    rp.compare_values(8.0, n(3, 3, Connectivity::EightWay), 0.0);

    // --- Test 4: label transitions ---
    let mut labeled = grid.clone();
    let id = RegionId::FIRST;
    rp.compare_values(1.0, if labeled.set_region(1, 0, id).is_ok() { 1.0 } else { 0.0 }, 0.0);
    rp.compare_values(
        1.0,
        if labeled.set_region(0, 0, id).is_err() { 1.0 } else { 0.0 },
        0.0,
    );
    rp.compare_values(1.0, labeled.next_region().map_or(0.0, |id| id.get() as f64) - 1.0, 0.0);
    rp.compare_grids(&grid, &labeled.cleared());

    assert!(rp.cleanup(), "grid regression test failed");
}

#[test]
fn test_malformed_grids() {
    let cases: [Vec<Vec<CellState>>; 3] = [
        vec![],
        vec![vec![]],
        vec![vec![CellState::UNLABELED; 3], vec![CellState::Obstacle; 2]],
    ];
    for rows in cases {
        assert!(matches!(Grid::from_rows(rows), Err(Error::MalformedGrid(_))));
    }
}

#[test]
fn test_obstacle_never_labeled() {
    let mut grid = Grid::from_rows(vec![vec![CellState::Obstacle]]).unwrap();
    let err = grid.set_region(0, 0, RegionId::FIRST).unwrap_err();
    assert_eq!(
        err,
        Error::InvalidTransition {
            row: 0,
            col: 0,
            reason: "obstacles are never labeled"
        }
    );
    assert!(!grid.claim(0, 0, RegionId::FIRST));
    assert_eq!(grid.state_at(0, 0), Ok(CellState::Obstacle));
}

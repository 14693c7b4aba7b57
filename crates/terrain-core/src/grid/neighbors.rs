//! Bounds-checked neighbour enumeration

use crate::connectivity::Connectivity;

/// Iterator over the in-bounds neighbours of a cell
///
/// Created by [`Grid::neighbors`](super::Grid::neighbors).
#[derive(Debug, Clone)]
pub struct Neighbors {
    row: usize,
    col: usize,
    rows: usize,
    cols: usize,
    offsets: std::slice::Iter<'static, (isize, isize)>,
}

impl Neighbors {
    pub(super) fn new(
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
        connectivity: Connectivity,
    ) -> Self {
        Self {
            row,
            col,
            rows,
            cols,
            offsets: connectivity.offsets().iter(),
        }
    }
}

impl Iterator for Neighbors {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        for &(dr, dc) in self.offsets.by_ref() {
            let (Some(r), Some(c)) = (
                self.row.checked_add_signed(dr),
                self.col.checked_add_signed(dc),
            ) else {
                continue;
            };
            if r < self.rows && c < self.cols {
                return Some((r, c));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.offsets.len()))
    }
}

#[cfg(test)]
mod tests {
    use crate::{Connectivity, Grid};

    #[test]
    fn test_interior_four_way_order() {
        let grid = Grid::new(3, 3).unwrap();
        let n: Vec<_> = grid.neighbors(1, 1, Connectivity::FourWay).collect();
        assert_eq!(n, vec![(0, 1), (2, 1), (1, 0), (1, 2)]);
    }

    #[test]
    fn test_interior_eight_way_order() {
        let grid = Grid::new(3, 3).unwrap();
        let n: Vec<_> = grid.neighbors(1, 1, Connectivity::EightWay).collect();
        assert_eq!(
            n,
            vec![
                (0, 1),
                (2, 1),
                (1, 0),
                (1, 2),
                (0, 0),
                (0, 2),
                (2, 0),
                (2, 2)
            ]
        );
    }

    #[test]
    fn test_corner_is_clipped() {
        let grid = Grid::new(3, 3).unwrap();
        let n: Vec<_> = grid.neighbors(0, 0, Connectivity::EightWay).collect();
        assert_eq!(n, vec![(1, 0), (0, 1), (1, 1)]);

        let n: Vec<_> = grid.neighbors(2, 2, Connectivity::FourWay).collect();
        assert_eq!(n, vec![(1, 2), (2, 1)]);
    }

    #[test]
    fn test_single_cell_has_no_neighbors() {
        let grid = Grid::new(1, 1).unwrap();
        assert_eq!(grid.neighbors(0, 0, Connectivity::EightWay).count(), 0);
    }
}

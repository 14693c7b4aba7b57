//! Adjacency rules

/// Connectivity type for region traversal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Connectivity {
    /// 4-way connectivity (up, down, left, right)
    #[default]
    FourWay,
    /// 8-way connectivity (includes diagonals)
    EightWay,
}

/// Edge neighbours as (row, col) offsets: up, down, left, right
const EDGE_OFFSETS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Edge neighbours followed by the diagonals: up-left, up-right,
/// down-left, down-right
const ALL_OFFSETS: [(isize, isize); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

impl Connectivity {
    /// Neighbour offsets in traversal order
    ///
    /// The order is fixed; region ids and visit order depend on it.
    pub fn offsets(self) -> &'static [(isize, isize)] {
        match self {
            Connectivity::FourWay => &EDGE_OFFSETS,
            Connectivity::EightWay => &ALL_OFFSETS,
        }
    }
}

//! Cell states and region identifiers
//!
//! A cell is either an obstacle or open ground. Open ground may carry the
//! [`RegionId`] of the connected region it belongs to once labeling has
//! reached it.

use std::fmt;
use std::num::NonZeroU32;

/// Identifier of a connected region
///
/// Region ids are positive and assigned in discovery order starting at
/// [`RegionId::FIRST`]. Zero is never a valid id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RegionId(NonZeroU32);

impl RegionId {
    /// The first id handed out by a labeling pass
    pub const FIRST: RegionId = RegionId(NonZeroU32::MIN);

    /// Create a region id, returning `None` for zero
    pub fn new(value: u32) -> Option<Self> {
        NonZeroU32::new(value).map(Self)
    }

    /// Raw id value (always >= 1)
    #[inline]
    pub fn get(self) -> u32 {
        self.0.get()
    }

    /// Zero-based index of this region, suitable for per-region tables
    #[inline]
    pub fn index(self) -> usize {
        (self.0.get() - 1) as usize
    }

    /// The id following this one, or `None` past `u32::MAX`
    pub fn checked_next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<RegionId> for u32 {
    fn from(id: RegionId) -> u32 {
        id.get()
    }
}

/// State of a single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellState {
    /// Blocked cell; never labeled
    Obstacle,
    /// Traversable cell, labeled once a fill reaches it
    Open(Option<RegionId>),
}

impl CellState {
    /// Open and not yet labeled
    pub const UNLABELED: CellState = CellState::Open(None);

    /// Check whether the cell is an obstacle
    #[inline]
    pub fn is_obstacle(self) -> bool {
        matches!(self, CellState::Obstacle)
    }

    /// Check whether the cell is open (labeled or not)
    #[inline]
    pub fn is_open(self) -> bool {
        matches!(self, CellState::Open(_))
    }

    /// Check whether the cell is open and still waiting for a label
    #[inline]
    pub fn is_unlabeled(self) -> bool {
        matches!(self, CellState::Open(None))
    }

    /// Region this cell belongs to, if any
    #[inline]
    pub fn region(self) -> Option<RegionId> {
        match self {
            CellState::Open(region) => region,
            CellState::Obstacle => None,
        }
    }

    /// Same state with any region label removed
    #[inline]
    pub fn unlabeled(self) -> Self {
        match self {
            CellState::Open(_) => CellState::UNLABELED,
            CellState::Obstacle => CellState::Obstacle,
        }
    }
}

impl Default for CellState {
    fn default() -> Self {
        CellState::UNLABELED
    }
}

//! Region palette
//!
//! Maps cells and region ids to display colors. The mapping is a pure
//! function of the id: ids index a fixed palette and wrap around once
//! it is exhausted, so any number of regions can be drawn.

use crate::{IoError, IoResult};
use std::io::Write;
use terrain_core::{CellState, RegionId};

/// RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    /// Create a new RGB color
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Format as `#RRGGBB`
    pub fn hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }
}

/// Color of unlabeled open ground (white)
pub const OPEN_COLOR: Rgb = Rgb::new(0xFF, 0xFF, 0xFF);

/// Color of obstacles (black)
pub const OBSTACLE_COLOR: Rgb = Rgb::new(0x00, 0x00, 0x00);

/// Region colors, in id order
pub const REGION_PALETTE: [Rgb; 11] = [
    Rgb::new(0xFF, 0x00, 0x00), // red
    Rgb::new(0xFF, 0xA5, 0x00), // orange
    Rgb::new(0xFF, 0xFF, 0x00), // yellow
    Rgb::new(0x00, 0xFF, 0x00), // green
    Rgb::new(0x00, 0x00, 0xFF), // blue
    Rgb::new(0x80, 0x00, 0x80), // purple
    Rgb::new(0x00, 0xFF, 0xFF), // cyan
    Rgb::new(0xFF, 0xC0, 0xCB), // pink
    Rgb::new(0xA5, 0x2A, 0x2A), // brown
    Rgb::new(0x80, 0x00, 0x00), // maroon
    Rgb::new(0x00, 0x80, 0x00), // dark green
];

/// Color of a region
pub fn region_color(id: RegionId) -> Rgb {
    REGION_PALETTE[id.index() % REGION_PALETTE.len()]
}

/// Color of a cell in its current state
pub fn cell_color(state: CellState) -> Rgb {
    match state {
        CellState::Obstacle => OBSTACLE_COLOR,
        CellState::Open(None) => OPEN_COLOR,
        CellState::Open(Some(id)) => region_color(id),
    }
}

/// Write a legend for a labeled grid
///
/// Lists the cell counts followed by one line per region id with its
/// palette color.
///
/// # Arguments
/// * `region_count`    - Number of regions (ids `1..=region_count`)
/// * `navigable_cells` - Number of open cells
/// * `obstacle_cells`  - Number of obstacle cells
///
/// # Errors
///
/// [`IoError::InvalidData`] if `region_count` does not fit a region id.
pub fn write_legend<W: Write>(
    mut writer: W,
    region_count: usize,
    navigable_cells: usize,
    obstacle_cells: usize,
) -> IoResult<()> {
    let last = u32::try_from(region_count).map_err(|_| {
        IoError::InvalidData(format!("region count {region_count} exceeds the id range"))
    })?;
    writeln!(writer, "regions: {region_count}")?;
    writeln!(writer, "navigable cells: {navigable_cells}")?;
    writeln!(writer, "obstacle cells: {obstacle_cells}")?;
    writeln!(writer, "open: {}", OPEN_COLOR.hex())?;
    writeln!(writer, "obstacle: {}", OBSTACLE_COLOR.hex())?;
    for id in (1..=last).filter_map(RegionId::new) {
        writeln!(writer, "region {id}: {}", region_color(id).hex())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex() {
        assert_eq!(Rgb::new(0xFF, 0xA5, 0x00).hex(), "#FFA500");
        assert_eq!(OBSTACLE_COLOR.hex(), "#000000");
    }

    #[test]
    fn test_region_color_wraps() {
        let first = RegionId::FIRST;
        let wrapped = RegionId::new(REGION_PALETTE.len() as u32 + 1).unwrap();
        assert_eq!(region_color(first), REGION_PALETTE[0]);
        assert_eq!(region_color(wrapped), region_color(first));
        assert_ne!(region_color(RegionId::new(2).unwrap()), region_color(first));
    }

    #[test]
    fn test_cell_color() {
        assert_eq!(cell_color(CellState::Obstacle), OBSTACLE_COLOR);
        assert_eq!(cell_color(CellState::UNLABELED), OPEN_COLOR);
        assert_eq!(
            cell_color(CellState::Open(Some(RegionId::FIRST))),
            Rgb::new(0xFF, 0x00, 0x00)
        );
    }

    #[test]
    fn test_write_legend() {
        let mut out = Vec::new();
        write_legend(&mut out, 2, 5, 4).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "regions: 2\n\
             navigable cells: 5\n\
             obstacle cells: 4\n\
             open: #FFFFFF\n\
             obstacle: #000000\n\
             region 1: #FF0000\n\
             region 2: #FFA500\n"
        );
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_write_legend_rejects_oversized_count() {
        let mut out = Vec::new();
        let result = write_legend(&mut out, u32::MAX as usize + 1, 0, 0);
        assert!(matches!(result, Err(IoError::InvalidData(_))));
        assert!(out.is_empty());
    }
}

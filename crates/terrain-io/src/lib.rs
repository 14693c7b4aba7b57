//! terrain-io - Grid input and output for terrain region labeling
//!
//! - [`text`] - Plain-text grid reader and writers
//! - [`palette`] - Pure mapping from regions to display colors
//!
//! # Example
//!
//! ```
//! use terrain_io::{TextOptions, read_grid_text, write_labels};
//!
//! let text = "2 3\n0 1 0\n0 1 0\n";
//! let input = read_grid_text(text.as_bytes(), &TextOptions::default()).unwrap();
//!
//! let mut out = Vec::new();
//! write_labels(&input.grid, &mut out).unwrap();
//! assert_eq!(String::from_utf8(out).unwrap(), ". # .\n. # .\n");
//! ```

mod error;
pub mod palette;
pub mod text;

pub use error::{IoError, IoResult};
pub use palette::{
    OBSTACLE_COLOR, OPEN_COLOR, REGION_PALETTE, Rgb, cell_color, region_color, write_legend,
};
pub use text::{
    GridInput, TextOptions, read_grid_file, read_grid_text, write_grid_text, write_labels,
};

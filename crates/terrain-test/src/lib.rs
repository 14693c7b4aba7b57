//! terrain-test - Regression test framework for terrain region labeling
//!
//! This crate provides a small regression harness supporting three modes:
//!
//! - **Generate**: Create golden files for comparison
//! - **Compare**: Compare results with golden files
//! - **Display**: Run tests without comparison (visual inspection)
//!
//! # Usage
//!
//! ```ignore
//! use terrain_test::{RegParams, load_test_grid};
//!
//! let mut rp = RegParams::new("label");
//! let input = load_test_grid("terrain1.txt")?;
//! rp.compare_values(3.0, stats.region_count as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "generate", "compare", or "display"
//! - `RUST_LOG`: Log filter for the tracing subscriber (default "warn")

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use std::sync::Once;
use terrain_io::{GridInput, TextOptions, read_grid_file};

/// Load a test grid from the test data directory
///
/// # Arguments
///
/// * `name` - Grid filename (e.g., "terrain1.txt")
///
/// # Returns
///
/// The loaded grid and optional seed, or an error if loading fails.
pub fn load_test_grid(name: &str) -> TestResult<GridInput> {
    let path = test_data_path(name);
    read_grid_file(&path, &TextOptions::default()).map_err(|e| TestError::GridLoad {
        path: path.clone(),
        message: e.to_string(),
    })
}

/// Install a tracing subscriber that writes through the test harness
///
/// Safe to call from every test; only the first call has an effect.
pub fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // terrain-test is at crates/terrain-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to a test data file
pub fn test_data_path(name: &str) -> String {
    format!("{}/tests/data/grids/{}", workspace_root(), name)
}

/// Get the path to the golden files directory
pub fn golden_dir() -> String {
    format!("{}/tests/golden", workspace_root())
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}

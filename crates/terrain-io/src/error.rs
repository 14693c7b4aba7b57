//! I/O error types
//!
//! Provides a unified error type for reading and writing grids. Parse
//! failures carry the 1-based line number of the offending input line.

use thiserror::Error;

/// Error type for grid I/O operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// Standard I/O error (file not found, permission denied, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The text input does not follow the grid format
    #[error("parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    /// The requested output cannot be represented
    #[error("invalid data: {0}")]
    InvalidData(String),

    /// An error from the core library (e.g. non-rectangular grid)
    #[error("core error: {0}")]
    Core(#[from] terrain_core::Error),
}

/// Convenience alias for I/O results.
pub type IoResult<T> = Result<T, IoError>;

//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur during regression testing
#[derive(Debug, Error)]
pub enum TestError {
    /// Failed to load a test grid
    #[error("failed to load grid '{path}': {message}")]
    GridLoad { path: String, message: String },

    /// Failed to write a grid
    #[error("failed to write grid '{path}': {message}")]
    GridWrite { path: String, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;

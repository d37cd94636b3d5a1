//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur while building test fixtures
#[derive(Debug, Error)]
pub enum TestError {
    /// Fixture construction failed in the core crate
    #[error("fixture error: {0}")]
    Fixture(#[from] blobcam_core::Error),
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;

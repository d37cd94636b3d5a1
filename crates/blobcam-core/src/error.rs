//! Error types for blobcam-core
//!
//! Provides a unified error type for plane, pool and geometry operations.
//! Each variant captures enough context for diagnostics without exposing
//! internal buffer layout.

use thiserror::Error;

/// blobcam core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid plane dimensions
    #[error("invalid plane dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Plane dimension mismatch between two planes of one pipeline run
    #[error("dimension mismatch: expected {}x{}, got {}x{}", .expected.0, .expected.1, .actual.0, .actual.1)]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    /// Pixel coordinate outside the plane
    #[error("pixel ({col}, {row}) outside {width}x{height} plane")]
    OutOfBounds {
        row: u32,
        col: u32,
        width: u32,
        height: u32,
    },

    /// Buffer length does not match width * height
    #[error("buffer length {len} does not match {width}x{height}")]
    BufferLength { len: usize, width: u32, height: u32 },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for blobcam core operations
pub type Result<T> = std::result::Result<T, Error>;

//! blobcam Core - Basic data structures for the frame pipeline
//!
//! This crate provides the fundamental data structures shared by every
//! stage of the blobcam pipeline:
//!
//! - [`Plane`] - Fixed-size row-major 8-bit buffer with `(row, col)` addressing
//! - [`FramePool`] / [`FrameGeometry`] / [`PlaneId`] - Preallocated named planes
//! - [`Histogram`] - 256-bin intensity histogram
//! - [`Box`] - Rectangle regions, plus outline drawing onto planes
//!
//! # Buffer discipline
//!
//! Nothing in this crate allocates pixel memory after construction. A
//! pipeline run only reads and writes planes the caller already owns.

pub mod box_;
pub mod error;
pub mod plane;
pub mod pool;

pub use box_::Box;
pub use error::{Error, Result};
pub use plane::{HISTOGRAM_BINS, Histogram, Plane};
pub use pool::{
    DEFAULT_DOWNSAMPLE, DEFAULT_SENSOR_HEIGHT, DEFAULT_SENSOR_WIDTH, FrameGeometry, FramePool,
    PlaneId,
};

/// Mask sample values used between pipeline stages.
pub mod mask {
    /// Foreground marker in binarized and morphology planes
    pub const FOREGROUND: u8 = 0xFF;
    /// Background marker in binarized and morphology planes
    pub const BACKGROUND: u8 = 0x00;
    /// Foreground marker in the unit-valued labeling convention
    pub const UNIT_FOREGROUND: u8 = 0x01;
    /// Threshold at or above which a mask sample counts as foreground
    /// when converting to the unit convention
    pub const UNIT_CUTOFF: u8 = 0x80;
}

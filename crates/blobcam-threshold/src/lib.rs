//! blobcam Threshold - Grayscale to binary mask conversion
//!
//! This crate turns a grayscale plane into a foreground mask:
//!
//! - **Otsu selection** ([`otsu`]): between-class variance maximization over a 256-bin histogram
//! - **Binarization** ([`binarize`]): fixed threshold, darker pixels are foreground
//! - **Mode selection** ([`select`]): manual percentage setting or automatic selection

pub mod binarize;
pub mod error;
pub mod otsu;
pub mod select;

// Re-export core types
pub use blobcam_core;

// Re-export error types
pub use error::{ThresholdError, ThresholdResult};

pub use binarize::{binarize, binarize_sample};
pub use otsu::{DEFAULT_THRESHOLD, OtsuResult, otsu_threshold, otsu_threshold_exhaustive};
pub use select::{ThresholdMode, ThresholdSelection, select_threshold};

//! blobcam-morph - Morphological filtering of foreground masks
//!
//! This crate provides the fixed 3x3 structuring-element operations the
//! pipeline uses to denoise a binarized mask:
//!
//! - Erosion (AND of the 3x3 neighborhood)
//! - Dilation (OR of the 3x3 neighborhood)
//! - Opening (erosion followed by dilation)
//!
//! All operations write into caller-owned planes and allocate nothing.

pub mod binary;
mod error;

pub use error::{MorphError, MorphResult};

pub use binary::{BorderMode, dilate_3x3, erode_3x3, open_3x3};

//! blobcam-region - Region labeling for blobcam
//!
//! This crate provides the region side of the pipeline:
//!
//! - **Labeling contract** ([`labeler`]): the [`RegionLabeler`] trait and
//!   the fixed 0xFF/0x00 to 0x01/0x00 mask conversion
//! - **Connected components** ([`conncomp`]): a union-find labeler with
//!   bounding box, area and centroid per region
//! - **Region lists** ([`region`]): capacity-bounded, reusable storage
//!
//! # Example
//!
//! ```
//! use blobcam_core::{FrameGeometry, Plane};
//! use blobcam_region::{
//!     ConnectedComponentLabeler, ConnectivityType, RegionLabeler, RegionList, to_unit_binary,
//! };
//!
//! let mask = Plane::from_rows(&[&[0xFF, 0x00, 0xFF]]).unwrap();
//! let mut unit = Plane::new(3, 1).unwrap();
//! to_unit_binary(&mask, &mut unit).unwrap();
//!
//! let geometry = FrameGeometry::new(3, 1).unwrap();
//! let mut labeler = ConnectedComponentLabeler::new(geometry, ConnectivityType::FourWay);
//! let mut regions = RegionList::with_capacity(4);
//! assert_eq!(labeler.label(&unit, &mut regions).unwrap(), 2);
//! ```

pub mod conncomp;
pub mod error;
pub mod labeler;
pub mod region;

// Re-export core types
pub use blobcam_core;

// Re-export error types
pub use error::{RegionError, RegionResult};

pub use conncomp::{ConnectedComponentLabeler, ConnectivityType};
pub use labeler::{RegionLabeler, to_unit_binary};
pub use region::{Region, RegionList};

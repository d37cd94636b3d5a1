//! blobcam-test - Regression test framework for blobcam
//!
//! Provides the shared pieces of the per-crate `*_reg` tests:
//!
//! - [`RegParams`]: numbered checks that record failures instead of
//!   panicking, summarized by [`RegParams::cleanup`]
//! - Synthetic frame builders ([`blob_frame`], [`noise_frame`], [`sprinkle`])
//! - [`init_logging`]: installs `env_logger` in test mode
//!
//! # Usage
//!
//! ```ignore
//! use blobcam_test::RegParams;
//!
//! let mut rp = RegParams::new("otsu");
//! rp.compare_values(31.0, threshold as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: log filter for pipeline records (e.g. `blobcam=debug`)

mod error;
mod frames;
mod params;

pub use error::{TestError, TestResult};
pub use frames::{blob_frame, noise_frame, sprinkle};
pub use params::RegParams;

/// Install `env_logger` for tests.
///
/// Safe to call from every test; only the first call installs the logger.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
    log::trace!("test logger ready");
}

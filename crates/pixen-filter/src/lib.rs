//! pixen-filter - Sliding-window spatial filters
//!
//! This crate provides the neighborhood filter engine:
//!
//! - Window statistics (mean, median) over odd-sized square windows
//! - Five border policies: zero padding, edge replication, reflection,
//!   symmetric mirroring, and cropping
//! - Per-channel dispatch for grayscale and RGB images
//!
//! The `rayon` feature computes output rows in parallel; every output
//! sample is independent of its siblings, so the partition needs no
//! synchronization.

mod error;
pub mod stats;
pub mod window;

pub use error::{FilterError, FilterResult};

// Re-export commonly used functions
pub use stats::{WindowStat, window_mean, window_median};
pub use window::{filter_gray, filter_image, mean_filter, median_filter};

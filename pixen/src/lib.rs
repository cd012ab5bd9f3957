//! Pixen - Pixel-neighborhood transform engine
//!
//! Pixen derives new images from fixed-size neighborhoods of an input
//! image under a caller-selectable boundary policy. Two algorithm
//! families are provided:
//!
//! - Sliding-window spatial filters (mean, median) with five border
//!   policies
//! - Block-transform lossy compression (per-block forward/inverse DCT
//!   plus scalar quantization), per color channel
//!
//! Image decoding, persistence, and byte-size measurement are left to
//! collaborators; every operation here is a pure in-memory transform.
//!
//! # Example
//!
//! ```
//! use pixen::{BorderPolicy, Grid, Image, WindowStat};
//!
//! let plane = Grid::from_vec(5, 5, (1..=25).collect()).unwrap();
//! let image = Image::gray(plane);
//!
//! let smoothed =
//!     pixen::filter::filter_image(&image, 3, BorderPolicy::EdgeReplicate, WindowStat::Median)
//!         .unwrap();
//! assert_eq!(smoothed.width(), 5);
//!
//! let reconstructed = pixen::codec::compress_image(&image, 50.0).unwrap();
//! assert_eq!(reconstructed.height(), 5);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use pixen_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use pixen_codec as codec;
pub use pixen_filter as filter;

// The statistic selector is part of the public filtering interface
pub use pixen_filter::WindowStat;

//! pixen-test - Regression test framework for pixen
//!
//! Provides the shared tooling used by the per-crate `tests/*_reg.rs`
//! suites:
//!
//! - [`RegParams`] - indexed comparisons that record every divergence and
//!   report them together at cleanup
//! - Synthetic fixtures ([`uniform_gray`], [`ramp_gray`],
//!   [`counting_gray`], [`rgb_ramp`]) with known sample values
//!
//! # Usage
//!
//! ```
//! use pixen_test::{RegParams, uniform_gray};
//!
//! let mut rp = RegParams::new("example");
//! let grid = uniform_gray(8, 8, 128);
//! rp.compare_values(8.0, grid.width() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```

mod fixtures;
mod params;

pub use fixtures::{counting_gray, ramp_gray, rgb_ramp, uniform_gray};
pub use params::RegParams;

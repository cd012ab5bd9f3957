//! Pixen Core - Basic data structures for neighborhood image transforms
//!
//! This crate provides the fundamental data structures used throughout
//! the pixen engine:
//!
//! - [`Grid`] / [`GridMut`] - A single plane of 8-bit samples
//!   (immutable / mutable)
//! - [`Image`] - One (gray) or three (RGB) planes sharing dimensions
//! - [`BorderPolicy`] - Rules for synthesizing out-of-bounds samples,
//!   with [`Grid::extend_border`] producing the padded copy
//! - [`Error`] / [`Result`] - The unified core error type

pub mod error;
pub mod grid;
pub mod image;

pub use error::{Error, Result};
pub use grid::{BorderPolicy, Grid, GridMut};
pub use image::Image;

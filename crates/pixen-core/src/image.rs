//! Image - one or three sample planes
//!
//! An `Image` owns one grid (grayscale) or three grids (RGB). All planes
//! of one image share height and width; the constructor enforces this.
//! Both engines process planes independently through the identical
//! single-plane pipeline, so the image type only needs to route a
//! per-plane operation across its channels.

use crate::error::{Error, Result};
use crate::grid::Grid;

/// Image - grayscale or RGB sample planes
#[derive(Debug, Clone)]
pub enum Image {
    /// Single-plane grayscale image
    Gray(Grid),
    /// Three-plane RGB image
    Rgb {
        red: Grid,
        green: Grid,
        blue: Grid,
    },
}

impl Image {
    /// Create a grayscale image from a single plane.
    pub fn gray(plane: Grid) -> Self {
        Image::Gray(plane)
    }

    /// Create an RGB image from three planes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the planes disagree in size.
    pub fn rgb(red: Grid, green: Grid, blue: Grid) -> Result<Self> {
        let expected = (red.width(), red.height());
        for plane in [&green, &blue] {
            let actual = (plane.width(), plane.height());
            if actual != expected {
                return Err(Error::DimensionMismatch { expected, actual });
            }
        }
        Ok(Image::Rgb { red, green, blue })
    }

    /// Get the image width in samples.
    #[inline]
    pub fn width(&self) -> u32 {
        match self {
            Image::Gray(plane) => plane.width(),
            Image::Rgb { red, .. } => red.width(),
        }
    }

    /// Get the image height in samples.
    #[inline]
    pub fn height(&self) -> u32 {
        match self {
            Image::Gray(plane) => plane.height(),
            Image::Rgb { red, .. } => red.height(),
        }
    }

    /// Get the number of channels (1 or 3).
    #[inline]
    pub fn channels(&self) -> u32 {
        match self {
            Image::Gray(_) => 1,
            Image::Rgb { .. } => 3,
        }
    }

    /// Get the channel planes in R, G, B order (or the single gray plane).
    pub fn planes(&self) -> Vec<&Grid> {
        match self {
            Image::Gray(plane) => vec![plane],
            Image::Rgb { red, green, blue } => vec![red, green, blue],
        }
    }

    /// Apply a fallible per-plane operation to every channel.
    ///
    /// The operation is assumed to map same-sized inputs to same-sized
    /// outputs (both engines do), so the result is assembled without
    /// re-validation.
    pub fn try_map<E>(
        &self,
        mut f: impl FnMut(&Grid) -> std::result::Result<Grid, E>,
    ) -> std::result::Result<Image, E> {
        match self {
            Image::Gray(plane) => Ok(Image::Gray(f(plane)?)),
            Image::Rgb { red, green, blue } => {
                let red = f(red)?;
                let green = f(green)?;
                let blue = f(blue)?;
                debug_assert!(red.sizes_equal(&green) && red.sizes_equal(&blue));
                Ok(Image::Rgb { red, green, blue })
            }
        }
    }
}

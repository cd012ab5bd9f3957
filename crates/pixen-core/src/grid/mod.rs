//! Grid - a single plane of 8-bit samples
//!
//! The `Grid` structure is the fundamental sample container in pixen.
//! One grid holds one channel plane; a color image owns three grids
//! (see [`crate::Image`]).
//!
//! # Sample layout
//!
//! Samples are stored row-major as `u8`, one byte per sample, with no
//! row padding. All samples are in [0, 255].
//!
//! # Ownership model
//!
//! `Grid` uses `Arc` for efficient cloning (shared ownership).
//! To modify sample data, convert to `GridMut` via [`Grid::try_into_mut`]
//! or [`Grid::to_mut`], then convert back with `Into<Grid>`.

mod access;
mod border;

pub use border::BorderPolicy;

use crate::error::{Error, Result};
use std::sync::Arc;

/// Internal grid data
#[derive(Debug)]
struct GridData {
    /// Width in samples
    width: u32,
    /// Height in samples
    height: u32,
    /// Row-major sample data, `width * height` bytes
    data: Vec<u8>,
}

/// Grid - a 2D plane of 8-bit samples
///
/// Uses reference counting via `Arc` for efficient cloning.
///
/// # Examples
///
/// ```
/// use pixen_core::Grid;
///
/// let grid = Grid::new(640, 480).unwrap();
/// assert_eq!(grid.width(), 640);
/// assert_eq!(grid.height(), 480);
/// ```
#[derive(Debug, Clone)]
pub struct Grid {
    inner: Arc<GridData>,
}

impl Grid {
    /// Create a new grid with the specified dimensions.
    ///
    /// The sample data is initialized to zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyInput`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::EmptyInput { width, height });
        }

        let data = vec![0u8; (width as usize) * (height as usize)];
        Ok(Grid {
            inner: Arc::new(GridData {
                width,
                height,
                data,
            }),
        })
    }

    /// Create a grid from an existing row-major sample buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyInput`] for zero dimensions and
    /// [`Error::InvalidParameter`] when `data.len() != width * height`.
    pub fn from_vec(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::EmptyInput { width, height });
        }
        let expected = (width as usize) * (height as usize);
        if data.len() != expected {
            return Err(Error::InvalidParameter(format!(
                "sample buffer holds {} bytes, {}x{} grid needs {}",
                data.len(),
                width,
                height,
                expected
            )));
        }
        Ok(Grid {
            inner: Arc::new(GridData {
                width,
                height,
                data,
            }),
        })
    }

    /// Get the grid width in samples.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the grid height in samples.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get raw access to the sample data.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.inner.data
    }

    /// Get one row of samples.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[u8] {
        let w = self.inner.width as usize;
        let start = (y as usize) * w;
        &self.inner.data[start..start + w]
    }

    /// Get the number of strong references to this grid.
    #[inline]
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Check if two grids have the same width and height.
    pub fn sizes_equal(&self, other: &Grid) -> bool {
        self.inner.width == other.inner.width && self.inner.height == other.inner.height
    }

    /// Create a deep copy of this grid.
    ///
    /// Unlike `clone()` which shares data via Arc, this creates
    /// a completely independent copy.
    pub fn deep_clone(&self) -> Self {
        Grid {
            inner: Arc::new(GridData {
                width: self.inner.width,
                height: self.inner.height,
                data: self.inner.data.clone(),
            }),
        }
    }

    /// Try to get mutable access to the sample data.
    ///
    /// Succeeds only if there is exactly one reference to the data.
    /// If successful, returns a [`GridMut`] that allows modification.
    pub fn try_into_mut(self) -> std::result::Result<GridMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(GridMut { inner: data }),
            Err(arc) => Err(Grid { inner: arc }),
        }
    }

    /// Create a mutable copy of this grid.
    ///
    /// Always creates a new copy that can be modified.
    pub fn to_mut(&self) -> GridMut {
        GridMut {
            inner: GridData {
                width: self.inner.width,
                height: self.inner.height,
                data: self.inner.data.clone(),
            },
        }
    }
}

/// Mutable grid
///
/// Allows modification of sample data. Convert back to an immutable
/// [`Grid`] using `Into<Grid>`. The split enforces exclusive access
/// at compile time.
#[derive(Debug)]
pub struct GridMut {
    inner: GridData,
}

impl GridMut {
    /// Get the grid width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the grid height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get raw access to the sample data.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.inner.data
    }

    /// Get mutable access to the sample data.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.inner.data
    }

    /// Get mutable access to one row of samples.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_mut(&mut self, y: u32) -> &mut [u8] {
        let w = self.inner.width as usize;
        let start = (y as usize) * w;
        &mut self.inner.data[start..start + w]
    }

    /// Set every sample to the given value.
    pub fn fill(&mut self, val: u8) {
        self.inner.data.fill(val);
    }
}

impl From<GridMut> for Grid {
    fn from(grid_mut: GridMut) -> Self {
        Grid {
            inner: Arc::new(grid_mut.inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_creation() {
        let grid = Grid::new(100, 200).unwrap();
        assert_eq!(grid.width(), 100);
        assert_eq!(grid.height(), 200);
        assert_eq!(grid.data().len(), 100 * 200);
        assert!(grid.data().iter().all(|&v| v == 0));
    }

    #[test]
    fn test_grid_creation_invalid() {
        assert!(Grid::new(0, 100).is_err());
        assert!(Grid::new(100, 0).is_err());
    }

    #[test]
    fn test_grid_from_vec() {
        let grid = Grid::from_vec(3, 2, vec![1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(grid.row(0), &[1, 2, 3]);
        assert_eq!(grid.row(1), &[4, 5, 6]);
    }

    #[test]
    fn test_grid_from_vec_wrong_length() {
        assert!(Grid::from_vec(3, 2, vec![1, 2, 3]).is_err());
        assert!(Grid::from_vec(0, 2, vec![]).is_err());
    }

    #[test]
    fn test_grid_clone_shares_data() {
        let grid1 = Grid::new(100, 100).unwrap();
        let grid2 = grid1.clone();

        assert_eq!(grid1.ref_count(), 2);
        assert_eq!(grid2.ref_count(), 2);
        assert_eq!(grid1.data().as_ptr(), grid2.data().as_ptr());
    }

    #[test]
    fn test_grid_deep_clone() {
        let grid1 = Grid::new(100, 100).unwrap();
        let grid2 = grid1.deep_clone();

        assert_eq!(grid1.ref_count(), 1);
        assert_eq!(grid2.ref_count(), 1);
        assert_ne!(grid1.data().as_ptr(), grid2.data().as_ptr());
    }

    #[test]
    fn test_grid_mut_roundtrip() {
        let grid = Grid::new(10, 10).unwrap();
        let mut gm = grid.try_into_mut().unwrap();
        gm.fill(42);
        gm.row_mut(3)[7] = 99;

        let grid: Grid = gm.into();
        assert_eq!(grid.row(3)[7], 99);
        assert_eq!(grid.row(0)[0], 42);
    }

    #[test]
    fn test_try_into_mut_fails_when_shared() {
        let grid1 = Grid::new(10, 10).unwrap();
        let _grid2 = grid1.clone();
        assert!(grid1.try_into_mut().is_err());
    }

    #[test]
    fn test_sizes_equal() {
        let a = Grid::new(100, 200).unwrap();
        let b = Grid::new(100, 200).unwrap();
        let c = Grid::new(50, 200).unwrap();

        assert!(a.sizes_equal(&b));
        assert!(!a.sizes_equal(&c));
    }
}

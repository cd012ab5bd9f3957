//! Sample access functions
//!
//! Low-level functions for getting and setting individual samples.
//! Bounds-checked variants return `Option` / `Result`; the unchecked
//! variants panic on out-of-range coordinates and are meant for inner
//! loops that have already validated their index space.

use super::{Grid, GridMut};
use crate::error::{Error, Result};

impl Grid {
    /// Get a sample value at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn get(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.get_unchecked(x, y))
    }

    /// Get a sample value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn get_unchecked(&self, x: u32, y: u32) -> u8 {
        debug_assert!(x < self.width() && y < self.height());
        self.data()[(y as usize) * (self.width() as usize) + (x as usize)]
    }
}

impl GridMut {
    /// Get a sample value at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.get_unchecked(x, y))
    }

    /// Get a sample value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn get_unchecked(&self, x: u32, y: u32) -> u8 {
        debug_assert!(x < self.width() && y < self.height());
        self.data()[(y as usize) * (self.width() as usize) + (x as usize)]
    }

    /// Set a sample value at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of bounds.
    pub fn set(&mut self, x: u32, y: u32, val: u8) -> Result<()> {
        if x >= self.width() || y >= self.height() {
            return Err(Error::IndexOutOfBounds {
                x,
                y,
                width: self.width(),
                height: self.height(),
            });
        }
        self.set_unchecked(x, y, val);
        Ok(())
    }

    /// Set a sample value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn set_unchecked(&mut self, x: u32, y: u32, val: u8) {
        debug_assert!(x < self.width() && y < self.height());
        let w = self.width() as usize;
        self.data_mut()[(y as usize) * w + (x as usize)] = val;
    }
}

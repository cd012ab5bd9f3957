//! Transient block buffers
//!
//! [`Block`] holds the samples or transform coefficients of one tile as
//! `f64`; [`Levels`] holds the integer quantization output with the same
//! shape. Both live only inside one codec pass and never escape it.

use crate::tiles::Tile;
use pixen_core::Grid;

/// A small 2D buffer of `f64` values (samples or coefficients).
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    width: usize,
    height: usize,
    data: Vec<f64>,
}

impl Block {
    /// Create a zero-filled block.
    pub fn new(width: usize, height: usize) -> Self {
        debug_assert!(width > 0 && height > 0);
        Block {
            width,
            height,
            data: vec![0.0; width * height],
        }
    }

    /// Create a block from a row-major value buffer.
    ///
    /// # Panics
    ///
    /// Panics if `data.len() != width * height`.
    pub fn from_vec(width: usize, height: usize, data: Vec<f64>) -> Self {
        assert_eq!(data.len(), width * height);
        Block {
            width,
            height,
            data,
        }
    }

    /// Copy one tile's samples out of a grid, lifted to `f64`.
    pub fn from_grid(grid: &Grid, tile: Tile) -> Self {
        let mut block = Block::new(tile.width as usize, tile.height as usize);
        for ty in 0..tile.height {
            let src = grid.row(tile.row + ty);
            let start = tile.col as usize;
            let dst = block.row_mut(ty as usize);
            for (d, &s) in dst.iter_mut().zip(&src[start..start + tile.width as usize]) {
                *d = f64::from(s);
            }
        }
        block
    }

    /// Block width in values.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Block height in values.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Get a value.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> f64 {
        self.data[y * self.width + x]
    }

    /// Set a value.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, val: f64) {
        self.data[y * self.width + x] = val;
    }

    /// Get one row of values.
    #[inline]
    pub fn row(&self, y: usize) -> &[f64] {
        &self.data[y * self.width..(y + 1) * self.width]
    }

    /// Get mutable access to one row of values.
    #[inline]
    pub fn row_mut(&mut self, y: usize) -> &mut [f64] {
        &mut self.data[y * self.width..(y + 1) * self.width]
    }

    /// Raw access to the row-major value buffer.
    #[inline]
    pub fn data(&self) -> &[f64] {
        &self.data
    }
}

/// Integer quantization levels for one block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Levels {
    width: usize,
    height: usize,
    data: Vec<i32>,
}

impl Levels {
    /// Create a zero-filled level buffer.
    pub fn new(width: usize, height: usize) -> Self {
        debug_assert!(width > 0 && height > 0);
        Levels {
            width,
            height,
            data: vec![0; width * height],
        }
    }

    /// Level buffer width.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Level buffer height.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Get a level.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> i32 {
        self.data[y * self.width + x]
    }

    /// Set a level.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, val: i32) {
        self.data[y * self.width + x] = val;
    }

    /// Raw access to the row-major level buffer.
    #[inline]
    pub fn data(&self) -> &[i32] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tiles::Tile;

    #[test]
    fn test_block_get_set() {
        let mut block = Block::new(3, 2);
        block.set(2, 1, 7.5);
        assert_eq!(block.get(2, 1), 7.5);
        assert_eq!(block.get(0, 0), 0.0);
        assert_eq!(block.row(1), &[0.0, 0.0, 7.5]);
    }

    #[test]
    fn test_block_from_grid() {
        let grid = Grid::from_vec(4, 4, (0..16).collect()).unwrap();
        let tile = Tile {
            row: 2,
            col: 1,
            height: 2,
            width: 3,
        };
        let block = Block::from_grid(&grid, tile);
        assert_eq!(block.row(0), &[9.0, 10.0, 11.0]);
        assert_eq!(block.row(1), &[13.0, 14.0, 15.0]);
    }

    #[test]
    fn test_levels_get_set() {
        let mut levels = Levels::new(2, 2);
        levels.set(1, 0, -5);
        assert_eq!(levels.get(1, 0), -5);
        assert_eq!(levels.data(), &[0, -5, 0, 0]);
    }
}

//! Block tiler
//!
//! Partitions a plane into non-overlapping blocks in row-major order.
//! The last row and column of tiles may be smaller than the block size
//! when the plane dimensions are not multiples of it; partial tiles are
//! emitted at their true size rather than padded or dropped.

/// Default block edge length for the transform codec.
pub const BLOCK_SIZE: u32 = 8;

/// Placement of one block within a plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    /// Top row of the block
    pub row: u32,
    /// Left column of the block
    pub col: u32,
    /// Block height (<= block size)
    pub height: u32,
    /// Block width (<= block size)
    pub width: u32,
}

/// Lazy, restartable iterator over the tiles covering a plane.
///
/// Cloning the iterator restarts the traversal from its current position;
/// construct a fresh one to restart from the beginning.
#[derive(Debug, Clone)]
pub struct Tiles {
    height: u32,
    width: u32,
    block: u32,
    row: u32,
    col: u32,
}

impl Tiles {
    /// Tile a `height x width` plane with `block x block` tiles.
    pub fn new(height: u32, width: u32, block: u32) -> Self {
        debug_assert!(block > 0);
        Tiles {
            height,
            width,
            block,
            row: 0,
            col: 0,
        }
    }
}

impl Iterator for Tiles {
    type Item = Tile;

    fn next(&mut self) -> Option<Tile> {
        if self.row >= self.height || self.width == 0 {
            return None;
        }
        let tile = Tile {
            row: self.row,
            col: self.col,
            height: self.block.min(self.height - self.row),
            width: self.block.min(self.width - self.col),
        };
        self.col += self.block;
        if self.col >= self.width {
            self.col = 0;
            self.row += self.block;
        }
        Some(tile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_multiple() {
        let tiles: Vec<Tile> = Tiles::new(16, 16, 8).collect();
        assert_eq!(tiles.len(), 4);
        assert!(tiles.iter().all(|t| t.height == 8 && t.width == 8));
        assert_eq!(tiles[0], Tile { row: 0, col: 0, height: 8, width: 8 });
        assert_eq!(tiles[3], Tile { row: 8, col: 8, height: 8, width: 8 });
    }

    #[test]
    fn test_ragged_edges() {
        // 10x10 with block 8: tiles of 8x8, 8x2, 2x8 and 2x2
        let tiles: Vec<Tile> = Tiles::new(10, 10, 8).collect();
        assert_eq!(tiles.len(), 4);
        assert_eq!(tiles[0], Tile { row: 0, col: 0, height: 8, width: 8 });
        assert_eq!(tiles[1], Tile { row: 0, col: 8, height: 8, width: 2 });
        assert_eq!(tiles[2], Tile { row: 8, col: 0, height: 2, width: 8 });
        assert_eq!(tiles[3], Tile { row: 8, col: 8, height: 2, width: 2 });
    }

    #[test]
    fn test_smaller_than_block() {
        let tiles: Vec<Tile> = Tiles::new(3, 5, 8).collect();
        assert_eq!(tiles, vec![Tile { row: 0, col: 0, height: 3, width: 5 }]);
    }

    #[test]
    fn test_exact_partition() {
        // Every sample is covered by exactly one tile
        let (h, w) = (19u32, 13u32);
        let mut covered = vec![0u8; (h * w) as usize];
        for tile in Tiles::new(h, w, 8) {
            for y in tile.row..tile.row + tile.height {
                for x in tile.col..tile.col + tile.width {
                    covered[(y * w + x) as usize] += 1;
                }
            }
        }
        assert!(covered.iter().all(|&c| c == 1));
    }

    #[test]
    fn test_restartable() {
        let tiles = Tiles::new(10, 10, 8);
        let first: Vec<Tile> = tiles.clone().collect();
        let second: Vec<Tile> = tiles.collect();
        assert_eq!(first, second);
    }
}

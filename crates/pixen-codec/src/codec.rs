//! Block codec
//!
//! Runs the full lossy round trip per tile: forward transform, quantize,
//! dequantize, inverse transform, then writes the reconstructed block
//! back at its offset with final rounding and clamping to [0, 255].
//! Grayscale and RGB images use the identical per-channel pipeline with
//! the same base table.

use crate::block::Block;
use crate::dct::{forward_dct, inverse_dct};
use crate::quant::{check_quality, dequantize, quantize};
use crate::tiles::{BLOCK_SIZE, Tile, Tiles};
use crate::CodecResult;
use log::debug;
use pixen_core::{Grid, GridMut, Image};

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Compress and reconstruct an image.
///
/// The output has the same dimensions and channel count as the input;
/// every sample is in [0, 255]. Channels are processed independently.
///
/// # Errors
///
/// Returns [`crate::CodecError::InvalidQuality`] unless `quality` is a
/// positive finite number.
pub fn compress_image(image: &Image, quality: f64) -> CodecResult<Image> {
    check_quality(quality)?;
    debug!(
        "compressing {}x{} image ({} channels) at quality {}",
        image.width(),
        image.height(),
        image.channels(),
        quality
    );
    image.try_map(|plane| compress_gray(plane, quality))
}

/// Compress and reconstruct a single plane.
pub fn compress_gray(grid: &Grid, quality: f64) -> CodecResult<Grid> {
    check_quality(quality)?;

    let w = grid.width();
    let h = grid.height();
    let out = Grid::new(w, h)?;
    let mut out_mut = out.try_into_mut().unwrap();

    #[cfg(not(feature = "rayon"))]
    for tile in Tiles::new(h, w, BLOCK_SIZE) {
        let samples = reconstruct_tile(grid, tile, quality)?;
        write_tile(&mut out_mut, tile, &samples);
    }

    #[cfg(feature = "rayon")]
    {
        let tiles: Vec<Tile> = Tiles::new(h, w, BLOCK_SIZE).collect();
        let reconstructed: Vec<(Tile, Vec<u8>)> = tiles
            .into_par_iter()
            .map(|tile| reconstruct_tile(grid, tile, quality).map(|s| (tile, s)))
            .collect::<CodecResult<_>>()?;
        for (tile, samples) in reconstructed {
            write_tile(&mut out_mut, tile, &samples);
        }
    }

    Ok(out_mut.into())
}

/// Round-trip one tile through the transform and quantizer.
///
/// Returns the reconstructed samples in row-major order, rounded and
/// clamped to the 8-bit range.
fn reconstruct_tile(grid: &Grid, tile: Tile, quality: f64) -> CodecResult<Vec<u8>> {
    let block = Block::from_grid(grid, tile);
    let coeffs = forward_dct(&block);
    let levels = quantize(&coeffs, quality)?;
    let approx = dequantize(&levels, quality)?;
    let restored = inverse_dct(&approx);

    Ok(restored
        .data()
        .iter()
        .map(|&v| v.round().clamp(0.0, 255.0) as u8)
        .collect())
}

/// Copy a reconstructed tile into the output plane at its offset.
fn write_tile(out: &mut GridMut, tile: Tile, samples: &[u8]) {
    let tw = tile.width as usize;
    for ty in 0..tile.height {
        let dst_row = out.row_mut(tile.row + ty);
        let start = tile.col as usize;
        let src = &samples[(ty as usize) * tw..(ty as usize + 1) * tw];
        dst_row[start..start + tw].copy_from_slice(src);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CodecError;

    #[test]
    fn test_uniform_block_survives() {
        // Uniform 8x8 at quality 100: all energy in DC, reconstruction
        // within +-1 of the input
        let grid = Grid::from_vec(8, 8, vec![128; 64]).unwrap();
        let out = compress_gray(&grid, 100.0).unwrap();
        for &v in out.data() {
            assert!((i32::from(v) - 128).abs() <= 1, "sample {}", v);
        }
    }

    #[test]
    fn test_non_multiple_dimensions() {
        // 10x10 exercises edge tiles of 8x2, 2x8 and 2x2
        let grid = Grid::from_vec(10, 10, (0..100).map(|v| (v * 2) as u8).collect()).unwrap();
        let out = compress_gray(&grid, 50.0).unwrap();
        assert_eq!(out.width(), 10);
        assert_eq!(out.height(), 10);
    }

    #[test]
    fn test_output_in_range() {
        let data: Vec<u8> = (0..256).map(|v| v as u8).collect();
        let grid = Grid::from_vec(16, 16, data).unwrap();
        let out = compress_gray(&grid, 200.0).unwrap();
        assert_eq!(out.data().len(), 256);
        // u8 output is in range by construction; verify the pass ran by
        // checking the plane is not all zero
        assert!(out.data().iter().any(|&v| v > 0));
    }

    #[test]
    fn test_low_quality_is_near_lossless() {
        // quality -> 0 shrinks every step toward zero, so the round trip
        // approaches the identity
        let data: Vec<u8> = (0..64).map(|v| (v * 3 + 10) as u8).collect();
        let grid = Grid::from_vec(8, 8, data.clone()).unwrap();
        let out = compress_gray(&grid, 0.01).unwrap();
        for (&a, &b) in grid.data().iter().zip(out.data()) {
            assert!((i32::from(a) - i32::from(b)).abs() <= 1, "{} vs {}", a, b);
        }
    }

    #[test]
    fn test_zero_quality_rejected() {
        let grid = Grid::new(8, 8).unwrap();
        assert!(matches!(
            compress_gray(&grid, 0.0),
            Err(CodecError::InvalidQuality(_))
        ));
        let img = Image::gray(grid);
        assert!(matches!(
            compress_image(&img, 0.0),
            Err(CodecError::InvalidQuality(_))
        ));
    }

    #[test]
    fn test_rgb_channels_independent() {
        let base: Vec<u8> = (0..256).map(|v| (v % 251) as u8).collect();
        let red = Grid::from_vec(16, 16, base.clone()).unwrap();
        let green = Grid::from_vec(16, 16, vec![90; 256]).unwrap();
        let blue = Grid::from_vec(16, 16, base.iter().rev().copied().collect()).unwrap();

        let img = Image::rgb(red, green.clone(), blue).unwrap();
        let out = compress_image(&img, 50.0).unwrap();
        assert_eq!(out.channels(), 3);
        assert_eq!(out.width(), 16);
        assert_eq!(out.height(), 16);

        // Perturbing the red plane must not change the green output
        let red2 = Grid::from_vec(16, 16, vec![200; 256]).unwrap();
        let blue2 = Grid::from_vec(16, 16, base.iter().rev().copied().collect()).unwrap();
        let img2 = Image::rgb(red2, green, blue2).unwrap();
        let out2 = compress_image(&img2, 50.0).unwrap();

        assert_eq!(out.planes()[1].data(), out2.planes()[1].data());
        assert_eq!(out.planes()[2].data(), out2.planes()[2].data());
        assert_ne!(out.planes()[0].data(), out2.planes()[0].data());
    }

    #[test]
    fn test_input_not_mutated() {
        let data: Vec<u8> = (0..100).map(|v| (v * 5 % 256) as u8).collect();
        let grid = Grid::from_vec(10, 10, data.clone()).unwrap();
        let _ = compress_gray(&grid, 80.0).unwrap();
        assert_eq!(grid.data(), &data[..]);
    }
}

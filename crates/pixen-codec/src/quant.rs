//! Scalar quantizer
//!
//! Divides each transform coefficient by a position-dependent step and
//! rounds to an integer level; dequantization multiplies the level back.
//! The step is the base luminance table entry scaled by `quality / 100`.
//! Both directions return freshly allocated buffers and never touch the
//! caller's input.

use crate::block::{Block, Levels};
use crate::{CodecError, CodecResult};

/// Base luminance quantization table (8x8, positive integers).
pub const BASE_TABLE: [[u16; 8]; 8] = [
    [16, 11, 10, 16, 24, 40, 51, 61],
    [12, 12, 14, 19, 26, 58, 60, 55],
    [14, 13, 16, 24, 40, 57, 69, 56],
    [14, 17, 22, 29, 51, 87, 80, 62],
    [18, 22, 37, 56, 68, 109, 103, 77],
    [24, 35, 55, 64, 81, 104, 113, 92],
    [49, 64, 78, 87, 103, 121, 120, 101],
    [72, 92, 95, 98, 112, 100, 103, 99],
];

/// Validate a quality parameter.
///
/// # Errors
///
/// Returns [`CodecError::InvalidQuality`] unless `quality` is a positive
/// finite number.
pub fn check_quality(quality: f64) -> CodecResult<()> {
    if !quality.is_finite() || quality <= 0.0 {
        return Err(CodecError::InvalidQuality(quality));
    }
    Ok(())
}

/// The divisor applied to the coefficient at (row, col).
///
/// Blocks never exceed 8x8, but the table lookup wraps anyway so that the
/// step is defined for any position.
#[inline]
pub fn quantization_step(row: usize, col: usize, quality: f64) -> f64 {
    f64::from(BASE_TABLE[row % 8][col % 8]) * quality / 100.0
}

/// Quantize transform coefficients to integer levels.
///
/// Edge blocks smaller than 8x8 use only the overlapping part of the
/// table; no index exceeds the block's actual extent.
///
/// # Errors
///
/// Returns [`CodecError::InvalidQuality`] for non-positive quality.
pub fn quantize(coeffs: &Block, quality: f64) -> CodecResult<Levels> {
    check_quality(quality)?;

    let mut levels = Levels::new(coeffs.width(), coeffs.height());
    for y in 0..coeffs.height() {
        for x in 0..coeffs.width() {
            let level = (coeffs.get(x, y) / quantization_step(y, x, quality)).round();
            levels.set(x, y, level as i32);
        }
    }
    Ok(levels)
}

/// Reconstruct approximate coefficients from integer levels.
///
/// # Errors
///
/// Returns [`CodecError::InvalidQuality`] for non-positive quality.
pub fn dequantize(levels: &Levels, quality: f64) -> CodecResult<Block> {
    check_quality(quality)?;

    let mut coeffs = Block::new(levels.width(), levels.height());
    for y in 0..levels.height() {
        for x in 0..levels.width() {
            let value = f64::from(levels.get(x, y)) * quantization_step(y, x, quality);
            coeffs.set(x, y, value);
        }
    }
    Ok(coeffs)
}

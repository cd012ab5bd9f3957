//! Orthogonal block transform
//!
//! Separable orthonormalized DCT-II (forward) and DCT-III (inverse) on
//! blocks of arbitrary size: the 1D transform runs over every row, then
//! over every column of the intermediate. With orthonormal basis vectors
//! the two passes commute, and `inverse_dct(forward_dct(x))` reconstructs
//! `x` within floating-point rounding.
//!
//! The direct O(n^2) 1D transform is used rather than a fast factored
//! one: edge tiles can be any size from 1 up to the block size, and the
//! factored 8-point networks do not apply to them.

use crate::block::Block;
use std::f64::consts::PI;

/// Forward 2D transform: samples to frequency coefficients.
///
/// The DC coefficient lands at (0, 0); for a uniform block every other
/// coefficient is zero.
pub fn forward_dct(block: &Block) -> Block {
    transform_2d(block, dct_1d)
}

/// Inverse 2D transform: frequency coefficients back to samples.
pub fn inverse_dct(coeffs: &Block) -> Block {
    transform_2d(coeffs, idct_1d)
}

/// Apply a 1D transform to every row, then every column.
fn transform_2d(block: &Block, f: fn(&[f64], &mut [f64])) -> Block {
    let w = block.width();
    let h = block.height();

    let mut tmp = Block::new(w, h);
    for y in 0..h {
        f(block.row(y), tmp.row_mut(y));
    }

    let mut out = Block::new(w, h);
    let mut col_in = vec![0.0; h];
    let mut col_out = vec![0.0; h];
    for x in 0..w {
        for y in 0..h {
            col_in[y] = tmp.get(x, y);
        }
        f(&col_in, &mut col_out);
        for y in 0..h {
            out.set(x, y, col_out[y]);
        }
    }

    out
}

/// Orthonormal DCT-II of one row.
///
/// `X[k] = c(k) * sum_i x[i] * cos((2i + 1) k pi / 2n)` with
/// `c(0) = sqrt(1/n)` and `c(k) = sqrt(2/n)` for k > 0.
fn dct_1d(input: &[f64], output: &mut [f64]) {
    let n = input.len();
    debug_assert!(n > 0 && output.len() == n);

    let scale_dc = (1.0 / n as f64).sqrt();
    let scale_ac = (2.0 / n as f64).sqrt();

    for (k, out) in output.iter_mut().enumerate() {
        let mut sum = 0.0;
        for (i, &v) in input.iter().enumerate() {
            sum += v * ((PI * (2 * i + 1) as f64 * k as f64) / (2.0 * n as f64)).cos();
        }
        *out = if k == 0 { scale_dc } else { scale_ac } * sum;
    }
}

/// Orthonormal DCT-III (the inverse of [`dct_1d`]) of one row.
fn idct_1d(input: &[f64], output: &mut [f64]) {
    let n = input.len();
    debug_assert!(n > 0 && output.len() == n);

    let scale_dc = (1.0 / n as f64).sqrt();
    let scale_ac = (2.0 / n as f64).sqrt();

    for (i, out) in output.iter_mut().enumerate() {
        let mut sum = scale_dc * input[0];
        for (k, &v) in input.iter().enumerate().skip(1) {
            sum += scale_ac * v * ((PI * (2 * i + 1) as f64 * k as f64) / (2.0 * n as f64)).cos();
        }
        *out = sum;
    }
}

//! Neighborhood filter engine
//!
//! Slides an odd-sized square window over every sample of a plane and
//! replaces the sample with a statistic of its neighborhood. Border
//! handling is selected per call: four padding policies read from an
//! extended copy of the plane, while [`BorderPolicy::Crop`] restricts the
//! output to samples whose full window lies inside the original plane.

use crate::stats::{WindowStat, window_mean, window_median};
use crate::{FilterError, FilterResult};
use log::debug;
use pixen_core::{BorderPolicy, Grid, Image};

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Apply a window statistic filter to every channel of an image.
///
/// For all policies except [`BorderPolicy::Crop`] the output dimensions
/// equal the input dimensions. For `Crop` the output shrinks by
/// `2 * (window_size / 2)` in each axis.
///
/// # Errors
///
/// Returns [`FilterError::InvalidParameters`] if `window_size` is even or
/// zero, or if the image is too small for the requested window.
pub fn filter_image(
    image: &Image,
    window_size: u32,
    policy: BorderPolicy,
    stat: WindowStat,
) -> FilterResult<Image> {
    debug!(
        "filtering {}x{} image ({} channels), window {}, {:?}/{:?}",
        image.width(),
        image.height(),
        image.channels(),
        window_size,
        policy,
        stat
    );
    image.try_map(|plane| filter_gray(plane, window_size, policy, stat))
}

/// Apply a window statistic filter to a single plane.
pub fn filter_gray(
    grid: &Grid,
    window_size: u32,
    policy: BorderPolicy,
    stat: WindowStat,
) -> FilterResult<Grid> {
    check_window_size(window_size)?;
    let pad = window_size / 2;

    let w = grid.width();
    let h = grid.height();

    // Source plane and output dimensions per policy. The window of output
    // sample (x, y) always starts at source coordinate (x, y): the
    // extended source shifts the data by `pad`, and the cropped output
    // shifts the index space by `pad`.
    let (src, out_w, out_h) = if policy == BorderPolicy::Crop {
        if w <= 2 * pad || h <= 2 * pad {
            return Err(FilterError::InvalidParameters(format!(
                "window {} leaves no output for {}x{} plane under Crop",
                window_size, w, h
            )));
        }
        (grid.clone(), w - 2 * pad, h - 2 * pad)
    } else {
        (grid.extend_border(pad, policy)?, w, h)
    };

    let out = Grid::new(out_w, out_h)?;
    let mut out_mut = out.try_into_mut().unwrap();
    let row_len = out_w as usize;

    #[cfg(not(feature = "rayon"))]
    out_mut
        .data_mut()
        .chunks_mut(row_len)
        .enumerate()
        .for_each(|(y, row)| fill_row(&src, y as u32, window_size, stat, row));

    #[cfg(feature = "rayon")]
    out_mut
        .data_mut()
        .par_chunks_mut(row_len)
        .enumerate()
        .for_each(|(y, row)| fill_row(&src, y as u32, window_size, stat, row));

    Ok(out_mut.into())
}

/// Apply a mean filter (convenience wrapper).
pub fn mean_filter(image: &Image, window_size: u32, policy: BorderPolicy) -> FilterResult<Image> {
    filter_image(image, window_size, policy, WindowStat::Mean)
}

/// Apply a median filter (convenience wrapper).
pub fn median_filter(image: &Image, window_size: u32, policy: BorderPolicy) -> FilterResult<Image> {
    filter_image(image, window_size, policy, WindowStat::Median)
}

/// Compute one output row: gather each window from `src` and reduce it.
fn fill_row(src: &Grid, y: u32, size: u32, stat: WindowStat, row: &mut [u8]) {
    let mut window = Vec::with_capacity((size * size) as usize);
    for (x, out) in row.iter_mut().enumerate() {
        window.clear();
        for wy in 0..size {
            let src_row = src.row(y + wy);
            window.extend_from_slice(&src_row[x..x + size as usize]);
        }
        *out = match stat {
            WindowStat::Mean => window_mean(&window),
            WindowStat::Median => window_median(&mut window),
        };
    }
}

fn check_window_size(window_size: u32) -> FilterResult<()> {
    if window_size == 0 || window_size % 2 == 0 {
        return Err(FilterError::InvalidParameters(format!(
            "window size must be odd and >= 1, got {}",
            window_size
        )));
    }
    Ok(())
}

//! Synthetic test images
//!
//! The regression suites run against generated planes with known sample
//! values instead of image files, so the workspace needs no test data
//! directory and no decoder.

use pixen_core::{Grid, Image};

/// Create a uniform gray plane filled with `val`.
pub fn uniform_gray(width: u32, height: u32, val: u8) -> Grid {
    Grid::from_vec(
        width,
        height,
        vec![val; (width as usize) * (height as usize)],
    )
    .unwrap()
}

/// Create a gray plane with a deterministic two-axis ramp.
///
/// Sample (x, y) holds `(x * 7 + y * 13) % 256`, so neighboring samples
/// differ and every plane of the same size is reproducible.
pub fn ramp_gray(width: u32, height: u32) -> Grid {
    let mut data = Vec::with_capacity((width as usize) * (height as usize));
    for y in 0..height {
        for x in 0..width {
            data.push(((x * 7 + y * 13) % 256) as u8);
        }
    }
    Grid::from_vec(width, height, data).unwrap()
}

/// Create a gray plane with consecutive samples 1, 2, 3, ...
///
/// Wraps modulo 256. Useful for windows with easily computed medians.
pub fn counting_gray(width: u32, height: u32) -> Grid {
    let n = (width as usize) * (height as usize);
    let data: Vec<u8> = (0..n).map(|i| ((i + 1) % 256) as u8).collect();
    Grid::from_vec(width, height, data).unwrap()
}

/// Create an RGB image with three distinct deterministic ramps.
pub fn rgb_ramp(width: u32, height: u32) -> Image {
    let red = ramp_gray(width, height);
    let green = counting_gray(width, height);
    let blue = uniform_gray(width, height, 77);
    Image::rgb(red, green, blue).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform() {
        let g = uniform_gray(4, 3, 9);
        assert_eq!(g.width(), 4);
        assert_eq!(g.height(), 3);
        assert!(g.data().iter().all(|&v| v == 9));
    }

    #[test]
    fn test_ramp_deterministic() {
        let a = ramp_gray(10, 10);
        let b = ramp_gray(10, 10);
        assert_eq!(a.data(), b.data());
        assert_eq!(a.get_unchecked(2, 3), (2 * 7 + 3 * 13) as u8);
    }

    #[test]
    fn test_counting() {
        let g = counting_gray(5, 1);
        assert_eq!(g.data(), &[1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_rgb_ramp() {
        let img = rgb_ramp(6, 6);
        assert_eq!(img.channels(), 3);
        assert_eq!(img.width(), 6);
    }
}

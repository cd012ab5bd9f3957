//! Border extension for grids
//!
//! Produces an extended (virtually padded) copy of a grid for a chosen
//! border policy. The filter engine extends each plane by the window
//! half-size so that every output sample has a full neighborhood to
//! read from.

use super::Grid;
use crate::error::{Error, Result};

/// Rule for synthesizing out-of-bounds samples near grid edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderPolicy {
    /// Border filled with 0
    ZeroPad,
    /// Border filled by clamping to the nearest in-bounds coordinate
    EdgeReplicate,
    /// Border mirrored without repeating the edge sample
    Reflect,
    /// Border mirrored, repeating the edge sample
    Symmetric,
    /// No border is synthesized; output shrinks by the window half-size
    /// on every side (handled by the filter engine, not by extension)
    Crop,
}

impl BorderPolicy {
    /// Whether filtering under this policy preserves the input dimensions.
    pub fn preserves_dimensions(self) -> bool {
        !matches!(self, BorderPolicy::Crop)
    }
}

/// Map a possibly out-of-range coordinate to a source coordinate.
///
/// Returns `None` when the policy leaves the sample unsourced (ZeroPad).
/// Callers guarantee `pad < len`, so a single fold is always enough for
/// the mirror rules.
#[inline]
fn resolve(t: i64, len: i64, policy: BorderPolicy) -> Option<i64> {
    if (0..len).contains(&t) {
        return Some(t);
    }
    match policy {
        BorderPolicy::ZeroPad => None,
        BorderPolicy::EdgeReplicate => Some(t.clamp(0, len - 1)),
        BorderPolicy::Reflect => Some(if t < 0 { -t } else { 2 * len - 2 - t }),
        BorderPolicy::Symmetric => Some(if t < 0 { -t - 1 } else { 2 * len - 1 - t }),
        BorderPolicy::Crop => unreachable!("Crop is rejected before resolution"),
    }
}

impl Grid {
    /// Create a copy of this grid extended by `pad` samples on every side.
    ///
    /// The output has dimensions `(width + 2*pad, height + 2*pad)`; the
    /// border ring is synthesized according to `policy`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] when `policy` is
    /// [`BorderPolicy::Crop`] (cropping skips border output samples
    /// instead of extending the input) or when `pad >= min(width, height)`
    /// (the mirror rules would have no valid source region).
    pub fn extend_border(&self, pad: u32, policy: BorderPolicy) -> Result<Grid> {
        if policy == BorderPolicy::Crop {
            return Err(Error::InvalidParameter(
                "Crop does not produce an extended grid".into(),
            ));
        }

        let w = self.width();
        let h = self.height();
        if pad >= w.min(h) {
            return Err(Error::InvalidParameter(format!(
                "pad {} too large for {}x{} grid",
                pad, w, h
            )));
        }

        let out = Grid::new(w + 2 * pad, h + 2 * pad)?;
        let mut out_mut = out.try_into_mut().unwrap();

        for ty in 0..h + 2 * pad {
            let sy = resolve(ty as i64 - pad as i64, h as i64, policy);
            for tx in 0..w + 2 * pad {
                let sx = resolve(tx as i64 - pad as i64, w as i64, policy);
                let val = match (sy, sx) {
                    (Some(sy), Some(sx)) => self.get_unchecked(sx as u32, sy as u32),
                    _ => 0,
                };
                out_mut.set_unchecked(tx, ty, val);
            }
        }

        Ok(out_mut.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 3x3 grid with samples 1..9
    fn ramp_3x3() -> Grid {
        Grid::from_vec(3, 3, (1..=9).collect()).unwrap()
    }

    #[test]
    fn test_extend_dimensions() {
        let grid = ramp_3x3();
        let ext = grid.extend_border(2, BorderPolicy::ZeroPad).unwrap();
        assert_eq!(ext.width(), 7);
        assert_eq!(ext.height(), 7);
        // Interior is unchanged
        assert_eq!(ext.get_unchecked(2, 2), 1);
        assert_eq!(ext.get_unchecked(4, 4), 9);
    }

    #[test]
    fn test_zero_pad() {
        let grid = ramp_3x3();
        let ext = grid.extend_border(1, BorderPolicy::ZeroPad).unwrap();
        assert_eq!(ext.row(0), &[0, 0, 0, 0, 0]);
        assert_eq!(ext.row(1), &[0, 1, 2, 3, 0]);
        assert_eq!(ext.row(4), &[0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_edge_replicate() {
        let grid = ramp_3x3();
        let ext = grid.extend_border(1, BorderPolicy::EdgeReplicate).unwrap();
        assert_eq!(ext.row(0), &[1, 1, 2, 3, 3]);
        assert_eq!(ext.row(1), &[1, 1, 2, 3, 3]);
        assert_eq!(ext.row(2), &[4, 4, 5, 6, 6]);
        assert_eq!(ext.row(4), &[7, 7, 8, 9, 9]);
    }

    #[test]
    fn test_reflect() {
        // Mirror without repeating the edge: coordinate -1 maps to 1
        let grid = ramp_3x3();
        let ext = grid.extend_border(1, BorderPolicy::Reflect).unwrap();
        assert_eq!(ext.row(0), &[5, 4, 5, 6, 5]);
        assert_eq!(ext.row(1), &[2, 1, 2, 3, 2]);
        assert_eq!(ext.row(3), &[8, 7, 8, 9, 8]);
        assert_eq!(ext.row(4), &[5, 4, 5, 6, 5]);
    }

    #[test]
    fn test_symmetric() {
        // Mirror repeating the edge: coordinate -1 maps to 0
        let grid = ramp_3x3();
        let ext = grid.extend_border(1, BorderPolicy::Symmetric).unwrap();
        assert_eq!(ext.row(0), &[1, 1, 2, 3, 3]);
        assert_eq!(ext.row(1), &[1, 1, 2, 3, 3]);
        assert_eq!(ext.row(4), &[7, 7, 8, 9, 9]);
    }

    #[test]
    fn test_reflect_vs_symmetric_pad_2() {
        // At pad 2 the two mirror rules diverge: reflect(-2) = 2,
        // symmetric(-2) = 1
        let grid = ramp_3x3();
        let reflect = grid.extend_border(2, BorderPolicy::Reflect).unwrap();
        let symmetric = grid.extend_border(2, BorderPolicy::Symmetric).unwrap();

        // Top-left corner of the extension
        assert_eq!(reflect.get_unchecked(0, 0), 9); // (2, 2)
        assert_eq!(symmetric.get_unchecked(0, 0), 5); // (1, 1)
    }

    #[test]
    fn test_pad_zero_is_copy() {
        let grid = ramp_3x3();
        let ext = grid.extend_border(0, BorderPolicy::ZeroPad).unwrap();
        assert!(grid.sizes_equal(&ext));
        assert_eq!(grid.data(), ext.data());
    }

    #[test]
    fn test_pad_too_large() {
        let grid = ramp_3x3();
        assert!(grid.extend_border(3, BorderPolicy::ZeroPad).is_err());
        assert!(grid.extend_border(4, BorderPolicy::Reflect).is_err());
    }

    #[test]
    fn test_crop_rejected() {
        let grid = ramp_3x3();
        assert!(matches!(
            grid.extend_border(1, BorderPolicy::Crop),
            Err(Error::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_preserves_dimensions() {
        assert!(BorderPolicy::ZeroPad.preserves_dimensions());
        assert!(BorderPolicy::Reflect.preserves_dimensions());
        assert!(!BorderPolicy::Crop.preserves_dimensions());
    }
}

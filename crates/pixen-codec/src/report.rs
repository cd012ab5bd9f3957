//! Compression report
//!
//! Size comparison between an original and a reconstructed encoding.
//! The byte counts come from whatever persistence layer wrote the two
//! files; this type only carries the arithmetic surfaced to the user.

use crate::{CodecError, CodecResult};

/// Byte sizes of an original and reconstructed encoding, with a derived
/// compression ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompressionReport {
    /// Encoded size of the original image
    pub original_bytes: u64,
    /// Encoded size of the reconstructed image
    pub reconstructed_bytes: u64,
}

impl CompressionReport {
    /// Create a report from externally measured byte sizes.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::InvalidParameters`] when `original_bytes`
    /// is 0 (the ratio would be undefined).
    pub fn new(original_bytes: u64, reconstructed_bytes: u64) -> CodecResult<Self> {
        if original_bytes == 0 {
            return Err(CodecError::InvalidParameters(
                "original size must be > 0".into(),
            ));
        }
        Ok(CompressionReport {
            original_bytes,
            reconstructed_bytes,
        })
    }

    /// Reconstructed size over original size.
    pub fn ratio(&self) -> f64 {
        self.reconstructed_bytes as f64 / self.original_bytes as f64
    }
}

//! Error types for pixen-codec

use thiserror::Error;

/// Errors that can occur during block compression
#[derive(Debug, Error)]
pub enum CodecError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] pixen_core::Error),

    /// Quality must be a positive finite number
    #[error("invalid quality: {0} (must be > 0)")]
    InvalidQuality(f64),

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for codec operations
pub type CodecResult<T> = Result<T, CodecError>;

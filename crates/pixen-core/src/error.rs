//! Error types for pixen-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.

use thiserror::Error;

/// Pixen core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Zero-sized grid or image
    #[error("empty input: {width}x{height}")]
    EmptyInput { width: u32, height: u32 },

    /// Planes of an image disagree in size
    #[error("dimension mismatch: expected {}x{}, got {}x{}", .expected.0, .expected.1, .actual.0, .actual.1)]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    /// Coordinate outside the grid
    #[error("index out of bounds: ({x}, {y}) in {width}x{height} grid")]
    IndexOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for pixen-core operations
pub type Result<T> = std::result::Result<T, Error>;

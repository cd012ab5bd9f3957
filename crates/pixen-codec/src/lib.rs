//! pixen-codec - Block-transform lossy compression
//!
//! This crate provides the transform compression pipeline:
//!
//! - Block tiling with ragged edge tiles ([`Tiles`])
//! - Separable orthonormal forward/inverse DCT on arbitrary block sizes
//! - Scalar quantization against a fixed base table scaled by quality
//! - The full per-channel compress/reconstruct pass ([`compress_image`])
//! - Size/ratio reporting ([`CompressionReport`])
//!
//! The `rayon` feature transforms the tiles of each plane in parallel;
//! tiles write disjoint output regions, so only the final write-back is
//! serialized.

pub mod block;
pub mod codec;
pub mod dct;
mod error;
pub mod quant;
pub mod report;
pub mod tiles;

pub use error::{CodecError, CodecResult};

// Re-export commonly used items
pub use block::{Block, Levels};
pub use codec::{compress_gray, compress_image};
pub use dct::{forward_dct, inverse_dct};
pub use quant::{BASE_TABLE, dequantize, quantization_step, quantize};
pub use report::CompressionReport;
pub use tiles::{BLOCK_SIZE, Tile, Tiles};

//! # Vassago Core
//!
//! Core traits, error types and statistics for the Vassago compression tools.
//!
//! Vassago is named after the 3rd spirit of the Ars Goetia, who discovers
//! things lost and hidden - just as a lossless decoder recovers every byte
//! the encoder tucked away.
//!
//! ## Core Traits
//!
//! - [`Compressor`] - One-shot and stream compression
//! - [`Decompressor`] - One-shot and stream decompression
//! - [`Codec`] - Combined compress/decompress capability
//!
//! ## Example
//!
//! ```ignore
//! use vassago_core::{Codec, Compressor, Decompressor};
//! use vassago_huffman::HuffmanCodec;
//!
//! let codec = HuffmanCodec::new();
//! let compressed = codec.compress(data)?;
//! let original = codec.decompress(&compressed)?;
//! ```

pub mod error;
pub mod stats;
pub mod stream;
pub mod traits;
pub mod types;

pub use error::{Error, ErrorKind, Result};
pub use stats::CompressionStats;
pub use stream::{clamp_buffer_size, StreamConfig, DEFAULT_BUFFER_SIZE};
pub use traits::{Codec, Compressor, Decompressor};
pub use types::CompressionRatio;

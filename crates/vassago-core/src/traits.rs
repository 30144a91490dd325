//! Core traits for compression and decompression.
//!
//! ## Trait Hierarchy
//!
//! ```text
//! Compressor / Decompressor  (one-shot and stream operations)
//!       ↓
//! Codec  (combined compress + decompress)
//! ```

use std::io::{Cursor, Read, Seek, Write};

use crate::error::Result;
use crate::stats::CompressionStats;
use crate::types::CompressionRatio;

/// Compression operations.
pub trait Compressor {
    /// Short algorithm name, used in logs.
    fn name(&self) -> &'static str;

    /// Compress from a source into a sink.
    ///
    /// The source is read to its end, rewound once, and read again; the
    /// sink only ever sees sequential appends.
    fn compress_stream<R, W>(&self, source: &mut R, sink: &mut W) -> Result<CompressionStats>
    where
        R: Read + Seek + ?Sized,
        W: Write + ?Sized;

    /// Compress data in one shot.
    ///
    /// # Arguments
    /// * `input` - Data to compress
    ///
    /// # Returns
    /// Compressed data as a vector.
    fn compress(&self, input: &[u8]) -> Result<Vec<u8>> {
        let mut output = Vec::with_capacity(self.max_compressed_size(input.len()));
        self.compress_stream(&mut Cursor::new(input), &mut output)?;
        Ok(output)
    }

    /// Calculate maximum compressed size for input length.
    /// Useful for pre-allocating output buffers.
    fn max_compressed_size(&self, input_len: usize) -> usize;
}

/// Decompression operations.
pub trait Decompressor {
    /// Short algorithm name, used in logs.
    fn name(&self) -> &'static str;

    /// Decompress from a source into a sink.
    ///
    /// Output is appended to the sink as it is produced; on failure the
    /// bytes already written are left in place.
    fn decompress_stream<R, W>(&self, source: &mut R, sink: &mut W) -> Result<CompressionStats>
    where
        R: Read + ?Sized,
        W: Write + ?Sized;

    /// Decompress data in one shot.
    ///
    /// # Arguments
    /// * `input` - Compressed data
    ///
    /// # Returns
    /// Decompressed data as a vector.
    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>> {
        let mut output = Vec::new();
        self.decompress_stream(&mut Cursor::new(input), &mut output)?;
        Ok(output)
    }
}

/// Combined codec for both compression and decompression.
pub trait Codec: Compressor + Decompressor {
    /// Create a new codec with default settings.
    fn new() -> Self
    where
        Self: Sized;

    /// Round-trip test: compress then decompress.
    /// Returns true if data matches.
    fn verify_roundtrip(&self, data: &[u8]) -> Result<bool> {
        let compressed = self.compress(data)?;
        let decompressed = self.decompress(&compressed)?;
        Ok(data == decompressed.as_slice())
    }

    /// Get compression ratio for given data.
    fn measure_ratio(&self, data: &[u8]) -> Result<CompressionRatio> {
        let compressed = self.compress(data)?;
        Ok(CompressionRatio::new(
            data.len() as u64,
            compressed.len() as u64,
        ))
    }
}

//! Statistics for compression operations.

use crate::types::CompressionRatio;

/// Statistics from a compression/decompression operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompressionStats {
    /// Original (uncompressed) size in bytes.
    pub original_size: u64,

    /// Container size in bytes, header included.
    pub compressed_size: u64,

    /// Number of code bits in the payload, before padding.
    pub payload_bits: u64,

    /// Number of distinct byte values in the original data.
    pub distinct_symbols: usize,

    /// Longest assigned code, in bits.
    pub max_code_len: u8,

    /// Time taken in microseconds.
    pub time_us: u64,
}

impl CompressionStats {
    /// Create new empty stats.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get compression ratio.
    pub fn ratio(&self) -> CompressionRatio {
        CompressionRatio::new(self.original_size, self.compressed_size)
    }

    /// Payload size in bytes, including the padded final byte.
    pub fn payload_bytes(&self) -> u64 {
        self.payload_bits.div_ceil(8)
    }

    /// Average code length in bits per input byte.
    pub fn bits_per_symbol(&self) -> f64 {
        if self.original_size == 0 {
            return 0.0;
        }
        self.payload_bits as f64 / self.original_size as f64
    }

    /// Get throughput in bytes per second.
    pub fn throughput_bps(&self) -> f64 {
        if self.time_us == 0 {
            return 0.0;
        }
        self.original_size as f64 * 1_000_000.0 / self.time_us as f64
    }

    /// Get throughput in MB/s.
    pub fn throughput_mbs(&self) -> f64 {
        self.throughput_bps() / 1_000_000.0
    }

    /// Get space savings as percentage.
    pub fn savings_percent(&self) -> f64 {
        self.ratio().savings_percent()
    }

    /// One-line summary for logs.
    pub fn summary(&self) -> String {
        format!(
            "{} -> {} bytes (ratio: {:.2}x, {:.3} bits/symbol, {} symbols, max code {} bits), {:.1} MB/s",
            self.original_size,
            self.compressed_size,
            self.ratio().ratio(),
            self.bits_per_symbol(),
            self.distinct_symbols,
            self.max_code_len,
            self.throughput_mbs(),
        )
    }
}

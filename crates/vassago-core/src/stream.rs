//! Buffer configuration for stream-based compression.

/// Default buffer size for streaming operations (64 KB).
pub const DEFAULT_BUFFER_SIZE: usize = 64 * 1024;

/// Minimum buffer size allowed.
pub const MIN_BUFFER_SIZE: usize = 4 * 1024;

/// Maximum buffer size allowed (1 MB).
pub const MAX_BUFFER_SIZE: usize = 1024 * 1024;

/// Clamp buffer size to valid range.
#[inline]
pub fn clamp_buffer_size(size: usize) -> usize {
    size.clamp(MIN_BUFFER_SIZE, MAX_BUFFER_SIZE)
}

/// Configuration for stream buffers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamConfig {
    /// Input buffer size (default: 64 KB).
    pub input_buffer_size: usize,

    /// Output buffer size (default: 64 KB).
    pub output_buffer_size: usize,
}

impl StreamConfig {
    /// Use the same size for both buffers, clamped to the valid range.
    pub fn with_buffer_size(size: usize) -> Self {
        let size = clamp_buffer_size(size);
        StreamConfig {
            input_buffer_size: size,
            output_buffer_size: size,
        }
    }
}

impl Default for StreamConfig {
    fn default() -> Self {
        StreamConfig {
            input_buffer_size: DEFAULT_BUFFER_SIZE,
            output_buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }
}

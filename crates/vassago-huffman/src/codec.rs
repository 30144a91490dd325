//! Huffman codec (combined compressor + decompressor).

use std::io::{Read, Seek, Write};

use vassago_core::{Codec, CompressionStats, Compressor, Decompressor, Result};

use crate::compress::HuffmanCompressor;
use crate::decompress::HuffmanDecompressor;

/// Huffman codec combining compression and decompression.
#[derive(Debug, Clone, Copy, Default)]
pub struct HuffmanCodec {
    compressor: HuffmanCompressor,
    decompressor: HuffmanDecompressor,
}

impl HuffmanCodec {
    /// Create a new Huffman codec.
    pub fn new() -> Self {
        Self {
            compressor: HuffmanCompressor::new(),
            decompressor: HuffmanDecompressor::new(),
        }
    }
}

impl Compressor for HuffmanCodec {
    fn name(&self) -> &'static str {
        Compressor::name(&self.compressor)
    }

    fn compress_stream<R, W>(&self, source: &mut R, sink: &mut W) -> Result<CompressionStats>
    where
        R: Read + Seek + ?Sized,
        W: Write + ?Sized,
    {
        self.compressor.compress_stream(source, sink)
    }

    fn compress(&self, input: &[u8]) -> Result<Vec<u8>> {
        self.compressor.compress(input)
    }

    fn max_compressed_size(&self, input_len: usize) -> usize {
        self.compressor.max_compressed_size(input_len)
    }
}

impl Decompressor for HuffmanCodec {
    fn name(&self) -> &'static str {
        Decompressor::name(&self.decompressor)
    }

    fn decompress_stream<R, W>(&self, source: &mut R, sink: &mut W) -> Result<CompressionStats>
    where
        R: Read + ?Sized,
        W: Write + ?Sized,
    {
        self.decompressor.decompress_stream(source, sink)
    }

    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>> {
        self.decompressor.decompress(input)
    }
}

impl Codec for HuffmanCodec {
    fn new() -> Self {
        HuffmanCodec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    use crate::container::HEADER_SIZE;

    #[test]
    fn test_roundtrip_empty() {
        let codec = HuffmanCodec::new();
        let compressed = codec.compress(b"").unwrap();
        assert_eq!(compressed.len(), HEADER_SIZE);
        assert!(codec.decompress(&compressed).unwrap().is_empty());
    }

    #[test]
    fn test_roundtrip_small() {
        let codec = HuffmanCodec::new();
        let input = b"Hello, Huffman!";
        let compressed = codec.compress(input).unwrap();
        assert_eq!(codec.decompress(&compressed).unwrap().as_slice(), input);
    }

    #[test]
    fn test_roundtrip_large() {
        let codec = HuffmanCodec::new();
        let pattern = b"The quick brown fox jumps over the lazy dog. ";
        let input: Vec<u8> = pattern.iter().cycle().take(100_000).copied().collect();

        let compressed = codec.compress(&input).unwrap();
        // 28 distinct symbols fit in well under 8 bits each
        assert!(compressed.len() < input.len());
        assert_eq!(codec.decompress(&compressed).unwrap(), input);
    }

    #[test]
    fn test_roundtrip_two_symbols() {
        let codec = HuffmanCodec::new();
        let input: Vec<u8> = (0..999).map(|i| if i % 3 == 0 { 0x00 } else { 0xFF }).collect();
        let compressed = codec.compress(&input).unwrap();
        // one bit per symbol
        assert_eq!(compressed.len(), HEADER_SIZE + 999usize.div_ceil(8));
        assert_eq!(codec.decompress(&compressed).unwrap(), input);
    }

    #[test]
    fn test_roundtrip_all_byte_values() {
        let codec = HuffmanCodec::new();
        let input: Vec<u8> = (0..=255u8).rev().cycle().take(10_000).collect();
        assert!(codec.verify_roundtrip(&input).unwrap());
    }

    #[test]
    fn test_stream_roundtrip() {
        let codec = HuffmanCodec::new();
        let input = b"streams and slices share one container format".to_vec();

        let mut container = Vec::new();
        let enc = codec
            .compress_stream(&mut Cursor::new(&input), &mut container)
            .unwrap();
        assert_eq!(container, codec.compress(&input).unwrap());

        let mut restored = Vec::new();
        let dec = codec
            .decompress_stream(&mut container.as_slice(), &mut restored)
            .unwrap();
        assert_eq!(restored, input);
        assert_eq!(enc.payload_bits, dec.payload_bits);
        assert_eq!(enc.compressed_size, dec.compressed_size);
        assert_eq!(enc.max_code_len, dec.max_code_len);
    }

    #[test]
    fn test_measure_ratio() {
        let codec = HuffmanCodec::new();
        let input = vec![b'z'; 80_000];
        let ratio = codec.measure_ratio(&input).unwrap();
        assert_eq!(ratio.compressed_size, (HEADER_SIZE + 10_000) as u64);
        assert!(ratio.is_effective());
    }

    #[test]
    fn test_codec_is_shareable() {
        fn assert_shareable<T: Send + Sync + Clone>() {}
        assert_shareable::<HuffmanCodec>();
        assert_shareable::<HuffmanCompressor>();
        assert_shareable::<HuffmanDecompressor>();
    }

    #[test]
    fn test_names() {
        let codec = HuffmanCodec::new();
        assert_eq!(Compressor::name(&codec), "huffman");
        assert_eq!(Decompressor::name(&codec), "huffman");
    }
}

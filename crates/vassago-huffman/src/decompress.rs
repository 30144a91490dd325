//! Huffman decompression.

use std::io::{Read, Write};
use std::time::Instant;

use tracing::{debug, warn};
use vassago_core::{CompressionStats, Decompressor, Error, Result};

use crate::bitio::BitReader;
use crate::container::{ContainerHeader, HEADER_SIZE};
use crate::tree::{HuffmanTree, Node};

/// Decoded bytes are handed to the sink in chunks of this size.
const OUTPUT_CHUNK: usize = 32 * 1024;

/// Decompress a HUF1 container from `source` into `sink`.
///
/// Header problems are reported before anything is written. Once the
/// payload walk has started, every byte decoded before a failure has been
/// written to `sink` when the error is returned.
pub fn decode<R, W>(source: &mut R, sink: &mut W) -> Result<CompressionStats>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    let start = Instant::now();
    let header = ContainerHeader::read(source)?;
    let expected = header.original_size;
    let freq = &header.frequencies;
    debug!(
        "Container declares {} bytes, {} distinct symbols",
        expected,
        freq.distinct_symbols()
    );

    if expected == 0 {
        return Ok(CompressionStats {
            compressed_size: HEADER_SIZE as u64,
            distinct_symbols: freq.distinct_symbols(),
            time_us: start.elapsed().as_micros() as u64,
            ..Default::default()
        });
    }

    let tree = HuffmanTree::build(freq)
        .ok_or_else(|| Error::corrupted("empty frequency table for a non-empty container"))?;

    let mut reader = BitReader::new(&mut *source);
    let mut out = Vec::with_capacity(OUTPUT_CHUNK.min(expected as usize));
    let walked = walk(&tree, &mut reader, expected, &mut out, sink);
    // Whatever was decoded stays decoded, even when the walk failed. A chunk
    // the sink rejected was dropped by the walk and is not written again.
    if !out.is_empty() {
        sink.write_all(&out)?;
    }
    if let Err(e) = walked {
        warn!("Decoding stopped after {} payload bits: {}", reader.bits_read(), e);
        return Err(e);
    }

    let stats = CompressionStats {
        original_size: expected,
        compressed_size: HEADER_SIZE as u64 + reader.bytes_read(),
        payload_bits: reader.bits_read(),
        distinct_symbols: freq.distinct_symbols(),
        max_code_len: tree.depth() as u8,
        time_us: start.elapsed().as_micros() as u64,
    };
    debug!(
        "Decoded {} bytes from {} payload bits",
        stats.original_size, stats.payload_bits
    );

    Ok(stats)
}

/// Decompress an in-memory container.
pub fn decode_slice(input: &[u8]) -> Result<Vec<u8>> {
    let mut source = input;
    let mut output = Vec::new();
    decode(&mut source, &mut output)?;
    Ok(output)
}

/// Walk the tree once per output byte until `expected` bytes are decoded.
///
/// A leaf emits its symbol and resets to the root without consuming a bit.
/// On return `out` holds only bytes the sink has not been offered yet.
fn walk<R, W>(
    tree: &HuffmanTree,
    reader: &mut BitReader<R>,
    expected: u64,
    out: &mut Vec<u8>,
    sink: &mut W,
) -> Result<()>
where
    R: Read,
    W: Write + ?Sized,
{
    let root = tree.root();
    let mut node = root;
    let mut decoded = 0u64;

    while decoded < expected {
        if let Node::Leaf { symbol, .. } = *tree.node(node) {
            out.push(symbol);
            decoded += 1;
            node = root;
            if out.len() == OUTPUT_CHUNK {
                let written = sink.write_all(out);
                out.clear();
                written?;
            }
            continue;
        }

        let bit = reader
            .read_bit()?
            .ok_or_else(|| Error::unexpected_eof(decoded, expected))?;
        node = tree.step(node, bit).ok_or_else(|| {
            Error::corrupted_at("code leads to a missing branch", reader.bits_read() - 1)
        })?;
    }

    Ok(())
}

/// Huffman decompressor.
#[derive(Debug, Clone, Copy, Default)]
pub struct HuffmanDecompressor;

impl HuffmanDecompressor {
    /// Create a new Huffman decompressor.
    pub fn new() -> Self {
        Self
    }
}

impl Decompressor for HuffmanDecompressor {
    fn name(&self) -> &'static str {
        "huffman"
    }

    fn decompress_stream<R, W>(&self, source: &mut R, sink: &mut W) -> Result<CompressionStats>
    where
        R: Read + ?Sized,
        W: Write + ?Sized,
    {
        decode(source, sink)
    }

    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>> {
        decode_slice(input)
    }
}

//! Huffman compression.
//!
//! Encoding makes two passes over the source: the first counts symbol
//! frequencies, the second emits codes. The code table has to be complete
//! before the first bit is written, so the source is rewound once between
//! the passes.

use std::io::{Cursor, ErrorKind, Read, Seek, SeekFrom, Write};
use std::time::Instant;

use tracing::{debug, trace};
use vassago_core::{CompressionStats, Compressor, Error, Result};

use crate::bitio::BitWriter;
use crate::code::{CodeTable, MAX_CODE_LEN};
use crate::container::{ContainerHeader, HEADER_SIZE};
use crate::frequency::FrequencyCounter;
use crate::tree::HuffmanTree;

/// Chunk size for the emitting pass.
const ENCODE_CHUNK: usize = 32 * 1024;

/// Compress `source` into `sink` as a HUF1 container.
///
/// `source` is read from its current position to the end, then rewound to
/// that position for the second pass.
pub fn encode<R, W>(source: &mut R, sink: &mut W) -> Result<CompressionStats>
where
    R: Read + Seek + ?Sized,
    W: Write + ?Sized,
{
    let start = Instant::now();
    let origin = source.stream_position()?;

    let mut counter = FrequencyCounter::new();
    counter.update_from_reader(source)?;
    let (freq, original_size) = counter.finish()?;
    debug!(
        "Counted {} bytes, {} distinct symbols",
        original_size,
        freq.distinct_symbols()
    );

    let codes = {
        let tree = HuffmanTree::build(&freq);
        if let Some(tree) = &tree {
            trace!("Built tree with {} nodes, depth {}", tree.len(), tree.depth());
        }
        CodeTable::from_tree(tree.as_ref())
    };
    trace!("Code table: {:?}", codes);

    ContainerHeader::new(original_size, freq.clone()).write(sink)?;

    let mut writer = BitWriter::new(&mut *sink);
    if original_size > 0 {
        source.seek(SeekFrom::Start(origin))?;
        let encoded = emit_codes(source, &codes, &mut writer)?;
        if encoded != original_size {
            return Err(Error::SourceChanged {
                counted: original_size,
                encoded,
            });
        }
    }
    writer.flush()?;

    let stats = CompressionStats {
        original_size,
        compressed_size: HEADER_SIZE as u64 + writer.bytes_written(),
        payload_bits: writer.bits_written(),
        distinct_symbols: freq.distinct_symbols(),
        max_code_len: codes.max_len(),
        time_us: start.elapsed().as_micros() as u64,
    };
    debug!(
        "Encoded {} payload bits into {} bytes",
        stats.payload_bits,
        stats.payload_bytes()
    );

    Ok(stats)
}

/// Compress an in-memory buffer.
pub fn encode_slice(input: &[u8]) -> Result<Vec<u8>> {
    let mut output = Vec::with_capacity(HEADER_SIZE + input.len());
    encode(&mut Cursor::new(input), &mut output)?;
    Ok(output)
}

/// Second pass: write every byte's code. Returns the number of bytes encoded.
fn emit_codes<R, W>(source: &mut R, codes: &CodeTable, writer: &mut BitWriter<W>) -> Result<u64>
where
    R: Read + ?Sized,
    W: Write,
{
    let mut buf = vec![0u8; ENCODE_CHUNK];
    let mut encoded = 0u64;
    loop {
        let n = match source.read(&mut buf) {
            Ok(0) => return Ok(encoded),
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };
        for &byte in &buf[..n] {
            let code = codes.get(byte);
            if !code.is_assigned() {
                return Err(Error::MissingCode { symbol: byte });
            }
            writer.write_bits(code.bits, code.len)?;
        }
        encoded += n as u64;
    }
}

/// Huffman compressor.
#[derive(Debug, Clone, Copy, Default)]
pub struct HuffmanCompressor;

impl HuffmanCompressor {
    /// Create a new Huffman compressor.
    pub fn new() -> Self {
        Self
    }
}

impl Compressor for HuffmanCompressor {
    fn name(&self) -> &'static str {
        "huffman"
    }

    fn compress_stream<R, W>(&self, source: &mut R, sink: &mut W) -> Result<CompressionStats>
    where
        R: Read + Seek + ?Sized,
        W: Write + ?Sized,
    {
        encode(source, sink)
    }

    fn compress(&self, input: &[u8]) -> Result<Vec<u8>> {
        encode_slice(input)
    }

    fn max_compressed_size(&self, input_len: usize) -> usize {
        // Codes never reach MAX_CODE_LEN bits, so this is a hard ceiling
        HEADER_SIZE + input_len.saturating_mul(MAX_CODE_LEN as usize).div_ceil(8)
    }
}

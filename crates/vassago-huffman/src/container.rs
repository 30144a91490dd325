//! HUF1 container header.
//!
//! ```text
//! offset  size  field
//! 0       4     magic "HUF1"
//! 4       8     original size, u64 little-endian
//! 12      1024  frequency table, 256 x u32 little-endian, index = byte value
//! 1036    ..    payload, MSB-first code bits, zero-padded final byte
//! ```

use std::io::{ErrorKind, Read, Write};

use vassago_core::{Error, Result};

use crate::frequency::{FrequencyTable, NUM_SYMBOLS};

/// Container magic tag.
pub const MAGIC: [u8; 4] = *b"HUF1";

/// Size of the fixed header in bytes.
pub const HEADER_SIZE: usize = MAGIC.len() + 8 + NUM_SYMBOLS * 4;

/// Fixed-size container header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerHeader {
    /// Uncompressed length in bytes.
    pub original_size: u64,
    /// Symbol counts used to rebuild the code tree.
    pub frequencies: FrequencyTable,
}

impl ContainerHeader {
    /// Create a header.
    pub fn new(original_size: u64, frequencies: FrequencyTable) -> Self {
        Self {
            original_size,
            frequencies,
        }
    }

    /// Write the header to `writer`.
    pub fn write<W: Write + ?Sized>(&self, writer: &mut W) -> Result<()> {
        writer.write_all(&self.to_bytes())?;
        Ok(())
    }

    /// Serialize to the fixed byte layout.
    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut out = [0u8; HEADER_SIZE];
        out[..4].copy_from_slice(&MAGIC);
        out[4..12].copy_from_slice(&self.original_size.to_le_bytes());
        for (chunk, count) in out[12..]
            .chunks_exact_mut(4)
            .zip(self.frequencies.counts())
        {
            chunk.copy_from_slice(&count.to_le_bytes());
        }
        out
    }

    /// Read and validate a header from `reader`.
    ///
    /// Consumes exactly [`HEADER_SIZE`] bytes on success.
    pub fn read<R: Read + ?Sized>(reader: &mut R) -> Result<Self> {
        let mut magic = [0u8; 4];
        read_field(reader, &mut magic, "magic")?;
        if magic != MAGIC {
            return Err(Error::InvalidMagic { found: magic });
        }

        let mut size = [0u8; 8];
        read_field(reader, &mut size, "original size")?;
        let original_size = u64::from_le_bytes(size);

        let mut table = [0u8; NUM_SYMBOLS * 4];
        read_field(reader, &mut table, "frequency table")?;
        let mut counts = [0u32; NUM_SYMBOLS];
        for (count, chunk) in counts.iter_mut().zip(table.chunks_exact(4)) {
            *count = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }

        Ok(Self {
            original_size,
            frequencies: FrequencyTable::from_counts(counts),
        })
    }

    /// Parse a header from the start of `data`.
    pub fn from_bytes(mut data: &[u8]) -> Result<Self> {
        Self::read(&mut data)
    }
}

/// Inspect a container's header without decoding the payload.
pub fn peek_header(container: &[u8]) -> Result<ContainerHeader> {
    ContainerHeader::from_bytes(container)
}

fn read_field<R: Read + ?Sized>(reader: &mut R, buf: &mut [u8], field: &'static str) -> Result<()> {
    reader.read_exact(buf).map_err(|e| {
        if e.kind() == ErrorKind::UnexpectedEof {
            Error::truncated(field)
        } else {
            Error::Io(e)
        }
    })
}

//! Byte frequency counting.

use std::io::{ErrorKind, Read};

use vassago_core::{Error, Result};

/// Number of distinct symbols (one per byte value).
pub const NUM_SYMBOLS: usize = 256;

/// Chunk size used when counting a reader.
const COUNT_CHUNK: usize = 32 * 1024;

/// Occurrence count per byte value.
#[derive(Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: [u32; NUM_SYMBOLS],
}

impl FrequencyTable {
    /// All-zero table.
    pub fn new() -> Self {
        Self {
            counts: [0; NUM_SYMBOLS],
        }
    }

    /// Wrap raw counts, e.g. as read from a container header.
    pub fn from_counts(counts: [u32; NUM_SYMBOLS]) -> Self {
        Self { counts }
    }

    /// Count an in-memory byte slice.
    ///
    /// Returns an error if a single symbol occurs more than `u32::MAX` times.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let mut counter = FrequencyCounter::new();
        counter.update(data);
        counter.finish().map(|(table, _)| table)
    }

    /// Count of `symbol`.
    #[inline]
    pub fn get(&self, symbol: u8) -> u32 {
        self.counts[symbol as usize]
    }

    /// Raw counts, indexed by byte value.
    pub fn counts(&self) -> &[u32; NUM_SYMBOLS] {
        &self.counts
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&c| c as u64).sum()
    }

    /// Number of symbols with a nonzero count.
    pub fn distinct_symbols(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    /// True if every count is zero.
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    /// Nonzero entries in ascending symbol order.
    pub fn iter_nonzero(&self) -> impl Iterator<Item = (u8, u32)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c > 0)
            .map(|(symbol, &c)| (symbol as u8, c))
    }
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FrequencyTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.iter_nonzero()).finish()
    }
}

/// Single-pass frequency accumulator.
///
/// Counts are held at 64 bits while scanning so that an oversized input is
/// reported instead of wrapping when the table is finished.
#[derive(Debug, Clone)]
pub struct FrequencyCounter {
    counts: [u64; NUM_SYMBOLS],
    total: u64,
}

impl FrequencyCounter {
    /// Create an empty counter.
    pub fn new() -> Self {
        Self {
            counts: [0; NUM_SYMBOLS],
            total: 0,
        }
    }

    /// Accumulate a chunk of input.
    #[inline]
    pub fn update(&mut self, data: &[u8]) {
        for &byte in data {
            self.counts[byte as usize] += 1;
        }
        self.total += data.len() as u64;
    }

    /// Accumulate everything remaining in `reader`.
    pub fn update_from_reader<R: Read + ?Sized>(&mut self, reader: &mut R) -> Result<()> {
        let mut buf = vec![0u8; COUNT_CHUNK];
        loop {
            let n = match reader.read(&mut buf) {
                Ok(0) => return Ok(()),
                Ok(n) => n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            };
            self.update(&buf[..n]);
        }
    }

    /// Total bytes seen so far.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Produce the table and total length.
    pub fn finish(self) -> Result<(FrequencyTable, u64)> {
        let mut counts = [0u32; NUM_SYMBOLS];
        for (symbol, (&wide, narrow)) in self.counts.iter().zip(counts.iter_mut()).enumerate() {
            *narrow = u32::try_from(wide).map_err(|_| {
                Error::unsupported(format!(
                    "symbol 0x{symbol:02x} occurs {wide} times, more than a 32-bit count can hold"
                ))
            })?;
        }
        Ok((FrequencyTable::from_counts(counts), self.total))
    }
}

impl Default for FrequencyCounter {
    fn default() -> Self {
        Self::new()
    }
}

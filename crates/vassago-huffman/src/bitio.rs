//! MSB-first bit packing over byte streams.
//!
//! Bits fill each byte from the most significant position down. A final
//! partial byte is left-aligned and zero-padded in its low bits.

use std::io::{self, ErrorKind, Read, Write};

/// Bit writer over a byte sink.
pub struct BitWriter<W: Write> {
    inner: W,
    bit_buf: u8,
    bit_count: u8,
    bits_written: u64,
    bytes_written: u64,
}

impl<W: Write> BitWriter<W> {
    /// Create a new bit writer.
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            bit_buf: 0,
            bit_count: 0,
            bits_written: 0,
            bytes_written: 0,
        }
    }

    /// Write one bit.
    #[inline]
    pub fn write_bit(&mut self, bit: bool) -> io::Result<()> {
        self.bit_buf = (self.bit_buf << 1) | bit as u8;
        self.bit_count += 1;
        self.bits_written += 1;
        if self.bit_count == 8 {
            self.emit()?;
        }
        Ok(())
    }

    /// Write the low `n` bits of `value`, bit `n - 1` first.
    #[inline]
    pub fn write_bits(&mut self, value: u64, n: u8) -> io::Result<()> {
        debug_assert!(n <= 64);
        for i in (0..n).rev() {
            self.write_bit((value >> i) & 1 == 1)?;
        }
        Ok(())
    }

    /// Emit any pending bits as a final zero-padded byte.
    ///
    /// Does nothing when the writer is byte-aligned. Later writes start a
    /// fresh byte.
    pub fn flush(&mut self) -> io::Result<()> {
        if self.bit_count > 0 {
            self.bit_buf <<= 8 - self.bit_count;
            self.emit()?;
        }
        Ok(())
    }

    /// Bits written so far, excluding padding.
    pub fn bits_written(&self) -> u64 {
        self.bits_written
    }

    /// Bytes emitted to the sink so far.
    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    /// Bits waiting for a full byte.
    pub fn pending_bits(&self) -> u8 {
        self.bit_count
    }

    /// Get a mutable reference to the inner writer.
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.inner
    }

    /// Return the sink. Pending bits are discarded; call [`flush`](Self::flush) first.
    pub fn into_inner(self) -> W {
        self.inner
    }

    fn emit(&mut self) -> io::Result<()> {
        self.inner.write_all(&[self.bit_buf])?;
        self.bytes_written += 1;
        self.bit_buf = 0;
        self.bit_count = 0;
        Ok(())
    }
}

/// Bit reader over a byte source.
pub struct BitReader<R: Read> {
    inner: R,
    bit_buf: u8,
    bits_left: u8,
    bytes_read: u64,
}

impl<R: Read> BitReader<R> {
    /// Create a new bit reader.
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            bit_buf: 0,
            bits_left: 0,
            bytes_read: 0,
        }
    }

    /// Read one bit.
    ///
    /// Returns `Ok(None)` once the source is exhausted. That is not a zero
    /// bit; callers must stop.
    #[inline]
    pub fn read_bit(&mut self) -> io::Result<Option<bool>> {
        if self.bits_left == 0 {
            match self.refill()? {
                Some(byte) => {
                    self.bit_buf = byte;
                    self.bits_left = 8;
                }
                None => return Ok(None),
            }
        }
        let bit = self.bit_buf & 0x80 != 0;
        self.bit_buf <<= 1;
        self.bits_left -= 1;
        Ok(Some(bit))
    }

    /// Whole bytes pulled from the source so far.
    pub fn bytes_read(&self) -> u64 {
        self.bytes_read
    }

    /// Bits consumed so far.
    pub fn bits_read(&self) -> u64 {
        self.bytes_read * 8 - self.bits_left as u64
    }

    /// Return the source.
    pub fn into_inner(self) -> R {
        self.inner
    }

    fn refill(&mut self) -> io::Result<Option<u8>> {
        let mut byte = [0u8; 1];
        loop {
            match self.inner.read(&mut byte) {
                Ok(0) => return Ok(None),
                Ok(_) => {
                    self.bytes_read += 1;
                    return Ok(Some(byte[0]));
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_writer_basic() {
        let mut writer = BitWriter::new(Vec::new());
        writer.write_bits(0b1011, 4).unwrap();
        writer.write_bits(0b0100, 4).unwrap();
        writer.write_bits(0b11001010, 8).unwrap();
        writer.flush().unwrap();

        assert_eq!(writer.bits_written(), 16);
        assert_eq!(writer.into_inner(), vec![0b10110100, 0b11001010]);
    }

    #[test]
    fn test_bit_writer_padding() {
        let mut writer = BitWriter::new(Vec::new());
        writer.write_bits(0b1110001, 7).unwrap();
        assert_eq!(writer.pending_bits(), 7);
        assert_eq!(writer.bytes_written(), 0);

        writer.flush().unwrap();
        assert_eq!(writer.bytes_written(), 1);
        assert_eq!(writer.get_mut().as_slice(), &[0b11100010]);

        // aligned: flush emits nothing
        writer.flush().unwrap();
        assert_eq!(writer.bytes_written(), 1);

        // writes after flush start a fresh byte
        writer.write_bit(true).unwrap();
        writer.flush().unwrap();
        assert_eq!(writer.into_inner(), vec![0b11100010, 0b10000000]);
    }

    #[test]
    fn test_bit_writer_wide_codes() {
        let mut writer = BitWriter::new(Vec::new());
        writer.write_bits(u64::MAX, 64).unwrap();
        writer.write_bits(0, 0).unwrap();
        writer.flush().unwrap();
        assert_eq!(writer.into_inner(), vec![0xFF; 8]);
    }

    #[test]
    fn test_bit_reader_basic() {
        let data = [0b10110100u8, 0b11001010];
        let mut reader = BitReader::new(&data[..]);

        let mut bits = Vec::new();
        while let Some(bit) = reader.read_bit().unwrap() {
            bits.push(bit as u8);
        }
        assert_eq!(bits, vec![1, 0, 1, 1, 0, 1, 0, 0, 1, 1, 0, 0, 1, 0, 1, 0]);
        assert_eq!(reader.bytes_read(), 2);
        assert_eq!(reader.bits_read(), 16);
    }

    #[test]
    fn test_bit_reader_exhaustion_is_sticky() {
        let mut reader = BitReader::new(&[0u8; 0][..]);
        assert_eq!(reader.read_bit().unwrap(), None);
        assert_eq!(reader.read_bit().unwrap(), None);
        assert_eq!(reader.bytes_read(), 0);
    }

    #[test]
    fn test_bit_reader_pulls_lazily() {
        let data = [0xAAu8, 0x55];
        let mut reader = BitReader::new(&data[..]);
        assert_eq!(reader.read_bit().unwrap(), Some(true));
        assert_eq!(reader.bytes_read(), 1);
        assert_eq!(reader.bits_read(), 1);
    }

    #[test]
    fn test_writer_reader_agree() {
        let mut writer = BitWriter::new(Vec::new());
        let pattern = [true, false, false, true, true, true, false, true, false, true, true];
        for &bit in &pattern {
            writer.write_bit(bit).unwrap();
        }
        writer.flush().unwrap();
        let bytes = writer.into_inner();
        assert_eq!(bytes.len(), 2);

        let mut reader = BitReader::new(bytes.as_slice());
        for &bit in &pattern {
            assert_eq!(reader.read_bit().unwrap(), Some(bit));
        }
        // padding bits are zeros, then exhaustion
        for _ in pattern.len()..16 {
            assert_eq!(reader.read_bit().unwrap(), Some(false));
        }
        assert_eq!(reader.read_bit().unwrap(), None);
    }
}

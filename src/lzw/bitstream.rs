//! Bounded sub-byte bit packing, MSB-first within each byte.
//!
//! This plays the role the teacher crate's `LZWCoder`/`LZWDecoder` play in
//! `lzw.rs`, but over a borrowed in-memory buffer instead of a seekable
//! file: there is no chunked I/O here, the whole payload lives in memory
//! for the duration of one `compress`/`expand` call. `bit_vec::BitVec`
//! packs MSB-first by default, which is exactly the wire order this format
//! requires, so writing just accumulates into a `BitVec` and reads walk it
//! with a cursor.

use bit_vec::BitVec;
use crate::Error;
use crate::lzw::constants::END_OF_STREAM;

/// Bounded bit writer over a caller-supplied destination buffer.
pub struct BitWriter<'a> {
    dest: &'a mut [u8],
    bits: BitVec,
    capacity_bits: usize,
}

impl<'a> BitWriter<'a> {
    pub fn new(dest: &'a mut [u8]) -> Self {
        let capacity_bits = dest.len() * 8;
        Self { dest, bits: BitVec::with_capacity(capacity_bits), capacity_bits }
    }

    /// Append the low `n_bits` of `value`, most significant bit first.
    pub fn write_bits(&mut self, value: u16, n_bits: u32) -> Result<(), Error> {
        debug_assert!((1..=15).contains(&n_bits));
        if self.bits.len() + n_bits as usize > self.capacity_bits {
            return Err(Error::OutputExhausted);
        }
        for i in (0..n_bits).rev() {
            self.bits.push((value >> i) & 1 != 0);
        }
        Ok(())
    }

    /// Flush any partial byte (zero-padded at the LSB end) and return the
    /// total number of bytes written.
    pub fn close(self) -> usize {
        let bytes = self.bits.to_bytes();
        self.dest[..bytes.len()].copy_from_slice(&bytes);
        bytes.len()
    }
}

/// Bounded bit reader over a caller-supplied source buffer.
pub struct BitReader<'a> {
    bits: BitVec,
    pos: usize,
    _src: &'a [u8],
}

impl<'a> BitReader<'a> {
    pub fn new(src: &'a [u8]) -> Self {
        Self { bits: BitVec::from_bytes(src), pos: 0, _src: src }
    }

    /// Read the next `n_bits`, most significant bit first. A reader that
    /// would run off the end of its buffer behaves as if it produced
    /// `END_OF_STREAM`, matching the self-terminating wire format: a
    /// well-formed stream always emits `END_OF_STREAM` before the buffer
    /// is exhausted.
    pub fn read_bits(&mut self, n_bits: u32) -> u16 {
        debug_assert!((1..=15).contains(&n_bits));
        if self.pos + n_bits as usize > self.bits.len() {
            self.pos = self.bits.len();
            return END_OF_STREAM;
        }
        let mut value: u16 = 0;
        for _ in 0..n_bits {
            let bit = self.bits.get(self.pos).expect("bounds checked above");
            self.pos += 1;
            value = (value << 1) | bit as u16;
        }
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_msb_first() {
        let mut buf = [0u8; 4];
        {
            let mut w = BitWriter::new(&mut buf);
            w.write_bits(0x1AB, 9).unwrap();
            w.write_bits(7, 3).unwrap();
            let n = w.close();
            assert_eq!(n, 2);
        }
        let mut r = BitReader::new(&buf[..2]);
        assert_eq!(r.read_bits(9), 0x1AB);
        assert_eq!(r.read_bits(3), 7);
    }

    #[test]
    fn write_fails_when_capacity_exhausted() {
        let mut buf = [0u8; 1];
        let mut w = BitWriter::new(&mut buf);
        assert!(w.write_bits(0x1FF, 9).is_err());
    }

    #[test]
    fn exhausted_reader_yields_end_of_stream() {
        let buf = [0u8; 1];
        let mut r = BitReader::new(&buf);
        // 9 bits requested but only 8 are available
        assert_eq!(r.read_bits(9), END_OF_STREAM);
        // once exhausted, stays exhausted
        assert_eq!(r.read_bits(9), END_OF_STREAM);
    }

    #[test]
    fn msb_first_byte_layout() {
        let mut buf = [0u8; 1];
        {
            let mut w = BitWriter::new(&mut buf);
            w.write_bits(0b101, 3).unwrap();
            w.close();
        }
        // 101 followed by zero padding -> 1010_0000
        assert_eq!(buf[0], 0b1010_0000);
    }
}

//! Bit-level packing and unpacking with pad accounting.
//!
//! `BitWriter` concatenates Huffman codes MSB-first into a byte buffer and
//! reports how many zero bits were appended to reach the final byte
//! boundary. `BitReader` does the inverse: given the payload and the
//! stored pad count, it yields exactly the data bits and ignores the pad.
//!
//! # Padding Rules
//! - the writer pads with trailing zeros and reports a pad of 0-7
//! - the reader accepts any stored pad byte (0-255) but rejects one that
//!   exceeds the payload's total bit length
//!
//! # Example
//! ```
//! use huffpack_core::bitio::{BitWriter, BitReader};
//!
//! let mut writer = BitWriter::new();
//! for bit in [1, 0, 1] {
//!     writer.push_bit(bit);
//! }
//! let (bytes, pad) = writer.finish();
//! assert_eq!(bytes, vec![0b10100000]);
//! assert_eq!(pad, 5);
//!
//! let mut reader = BitReader::new(&bytes, pad).unwrap();
//! assert_eq!(reader.next_bit(), Some(1));
//! assert_eq!(reader.next_bit(), Some(0));
//! assert_eq!(reader.next_bit(), Some(1));
//! assert_eq!(reader.next_bit(), None);
//! ```

use crate::codebook::Code;
use crate::error::{MalformedContainerError, Result};

/// Writes bits MSB-first into a byte buffer, tracking the final pad.
///
/// # Invariants
/// - `bit_count` is always < 8
/// - `bit_buffer` holds `bit_count` bits, MSB-aligned
#[derive(Debug, Clone, Default)]
pub struct BitWriter {
    /// Completed bytes
    bytes: Vec<u8>,
    /// Accumulator for the current partial byte (MSB-aligned)
    bit_buffer: u8,
    /// Number of bits in bit_buffer (0-7)
    bit_count: u8,
}

impl BitWriter {
    /// Create a new BitWriter with empty output.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a single bit (any nonzero value counts as 1).
    pub fn push_bit(&mut self, bit: u8) {
        if bit != 0 {
            self.bit_buffer |= 1 << (7 - self.bit_count);
        }
        self.bit_count += 1;

        if self.bit_count == 8 {
            self.bytes.push(self.bit_buffer);
            self.bit_buffer = 0;
            self.bit_count = 0;
        }
    }

    /// Append a whole Huffman code, bit by bit.
    pub fn push_code(&mut self, code: &Code) {
        for bit in code.bits() {
            self.push_bit(bit);
        }
    }

    /// Total number of bits written so far.
    pub fn bit_len(&self) -> usize {
        self.bytes.len() * 8 + self.bit_count as usize
    }

    /// Finish writing: pad the final partial byte with zeros and return
    /// the bytes together with the number of pad bits added (0-7).
    ///
    /// This consumes the writer.
    pub fn finish(mut self) -> (Vec<u8>, u8) {
        if self.bit_count == 0 {
            return (self.bytes, 0);
        }
        let pad = 8 - self.bit_count;
        self.bytes.push(self.bit_buffer);
        (self.bytes, pad)
    }
}

/// Reads data bits MSB-first from a padded byte buffer.
///
/// The stored pad count is applied up front: the reader exposes only
/// `data.len() * 8 - pad` bits.
///
/// # Invariants
/// - `bit_position` never exceeds `bit_len`
#[derive(Debug, Clone)]
pub struct BitReader<'a> {
    /// Source payload
    data: &'a [u8],
    /// Current bit position (0 = MSB of first byte)
    bit_position: usize,
    /// Number of valid data bits (total bits minus pad)
    bit_len: usize,
}

impl<'a> BitReader<'a> {
    /// Create a reader over `data`, discarding the final `pad` bits.
    ///
    /// # Errors
    /// Returns `MalformedContainerError::PadOverrun` if `pad` exceeds the
    /// total number of bits in `data`.
    pub fn new(data: &'a [u8], pad: u8) -> Result<Self> {
        let total_bits = data.len() * 8;
        if pad as usize > total_bits {
            return Err(MalformedContainerError::PadOverrun {
                pad,
                payload_bits: total_bits,
            }
            .into());
        }

        Ok(Self {
            data,
            bit_position: 0,
            bit_len: total_bits - pad as usize,
        })
    }

    /// Read the next data bit, or None once only pad bits remain.
    pub fn next_bit(&mut self) -> Option<u8> {
        if self.bit_position >= self.bit_len {
            return None;
        }

        let byte = self.data[self.bit_position / 8];
        let bit = (byte >> (7 - self.bit_position % 8)) & 1;
        self.bit_position += 1;
        Some(bit)
    }

    /// Number of data bits not yet read.
    pub fn bits_remaining(&self) -> usize {
        self.bit_len - self.bit_position
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn write_bits(bits: &[u8]) -> (Vec<u8>, u8) {
        let mut writer = BitWriter::new();
        for &bit in bits {
            writer.push_bit(bit);
        }
        writer.finish()
    }

    #[test]
    fn test_full_byte_no_pad() {
        let (bytes, pad) = write_bits(&[1, 0, 1, 1, 0, 0, 1, 0]);
        assert_eq!(bytes, vec![0b10110010]);
        assert_eq!(pad, 0);
    }

    #[test]
    fn test_partial_byte_pads_with_zeros() {
        let (bytes, pad) = write_bits(&[1, 0, 1]);
        assert_eq!(bytes, vec![0b10100000]);
        assert_eq!(pad, 5);
    }

    #[test]
    fn test_single_bit() {
        let (bytes, pad) = write_bits(&[1]);
        assert_eq!(bytes, vec![0b10000000]);
        assert_eq!(pad, 7);
    }

    #[test]
    fn test_empty_writer() {
        let (bytes, pad) = write_bits(&[]);
        assert!(bytes.is_empty());
        assert_eq!(pad, 0);
    }

    #[test]
    fn test_multi_byte() {
        let bits: Vec<u8> = (0..12).map(|i| (i % 2) as u8).collect();
        let (bytes, pad) = write_bits(&bits);
        assert_eq!(bytes, vec![0b01010101, 0b01010000]);
        assert_eq!(pad, 4);
    }

    #[test]
    fn test_bit_len_tracks_partial() {
        let mut writer = BitWriter::new();
        for _ in 0..11 {
            writer.push_bit(1);
        }
        assert_eq!(writer.bit_len(), 11);
    }

    #[test]
    fn test_reader_round_trip() {
        let bits = [1, 1, 0, 1, 0, 0, 0, 1, 1, 0];
        let (bytes, pad) = write_bits(&bits);

        let mut reader = BitReader::new(&bytes, pad).unwrap();
        let mut read_back = Vec::new();
        while let Some(bit) = reader.next_bit() {
            read_back.push(bit);
        }
        assert_eq!(read_back, bits);
    }

    #[test]
    fn test_reader_trims_pad() {
        let (bytes, pad) = write_bits(&[1, 1, 1]);
        let mut reader = BitReader::new(&bytes, pad).unwrap();
        assert_eq!(reader.bits_remaining(), 3);
        reader.next_bit();
        reader.next_bit();
        reader.next_bit();
        assert_eq!(reader.next_bit(), None);
        assert_eq!(reader.bits_remaining(), 0);
    }

    #[test]
    fn test_reader_accepts_wide_pad_values() {
        // A non-standard encoder may legally store any pad that fits.
        let data = vec![0u8; 2];
        let mut reader = BitReader::new(&data, 12).unwrap();
        assert_eq!(reader.bits_remaining(), 4);
        let mut reader_all_pad = BitReader::new(&data, 16).unwrap();
        assert_eq!(reader_all_pad.next_bit(), None);
    }

    #[test]
    fn test_reader_rejects_pad_overrun() {
        let data = vec![0u8; 1];
        let result = BitReader::new(&data, 9);
        assert!(matches!(
            result,
            Err(Error::MalformedContainer(
                MalformedContainerError::PadOverrun {
                    pad: 9,
                    payload_bits: 8
                }
            ))
        ));
    }
}

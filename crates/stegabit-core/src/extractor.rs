//! Reads a framed bitstream back from the least significant bits of a byte buffer.

use std::slice;

use log::debug;

use crate::bit_stream::BitStream;
use crate::capacity::capacity_bits;
use crate::codec_options::NumLsbs;
use crate::framing::{Framing, FramingPolicy};
use crate::result::Result;

/// Lazily yields the bits hidden in a buffer, `num_lsbs` per byte,
/// the most significant bit of every group first.
///
/// ## Example of usage
/// ```rust
/// use stegabit_core::extractor::LsbBits;
/// use stegabit_core::NumLsbs;
///
/// let two = NumLsbs::new(2).unwrap();
/// let bits: Vec<bool> = LsbBits::new(&[0b1111_1110, 0b0000_0001], two).collect();
/// assert_eq!(bits, [true, false, false, true]);
/// ```
pub struct LsbBits<'a> {
    bytes: slice::Iter<'a, u8>,
    num_lsbs: NumLsbs,
    group: u8,
    remaining: u8,
}

impl<'a> LsbBits<'a> {
    pub fn new(buffer: &'a [u8], num_lsbs: NumLsbs) -> Self {
        Self {
            bytes: buffer.iter(),
            num_lsbs,
            group: 0,
            remaining: 0,
        }
    }
}

impl Iterator for LsbBits<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            let byte = *self.bytes.next()?;
            self.group = self.num_lsbs.reveal(byte);
            self.remaining = self.num_lsbs.get();
        }
        self.remaining -= 1;

        Some((self.group >> self.remaining) & 1 == 1)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.bytes.len() * self.num_lsbs.bits() + self.remaining as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for LsbBits<'_> {}

/// Unveils the payload hidden in `buffer`.
///
/// With a length header exactly the declared bits are read, with a delimiter the
/// buffer is scanned until the first match. The buffer is never modified.
pub fn extract(buffer: &[u8], num_lsbs: NumLsbs, framing: &Framing) -> Result<Vec<u8>> {
    let available_bits = capacity_bits(buffer.len(), num_lsbs);
    let payload = framing.unframe(&mut LsbBits::new(buffer, num_lsbs), available_bits)?;
    debug!(
        "extracted {} payload bytes from {} bytes using {num_lsbs} lsbs",
        payload.len(),
        buffer.len()
    );

    Ok(payload)
}

/// All hidden bits of `buffer`, without any framing interpretation.
pub fn extract_raw(buffer: &[u8], num_lsbs: NumLsbs) -> BitStream {
    let bits = LsbBits::new(buffer, num_lsbs);
    let mut raw = BitStream::with_capacity(bits.len());
    raw.extend(bits);

    raw
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec_options::CodecOptions;
    use crate::embedder::embed;
    use crate::error::StegabitError;
    use crate::framing::{frame, LengthHeader};

    fn lsbs(n: u8) -> NumLsbs {
        NumLsbs::new(n).unwrap()
    }

    #[test]
    fn should_read_the_low_bits_msb_first() {
        let bits: Vec<bool> = LsbBits::new(&[0b1010_0101], lsbs(3)).collect();

        assert_eq!(bits, vec![true, false, true]);
    }

    #[test]
    fn should_report_the_exact_length() {
        let mut bits = LsbBits::new(&[0; 5], lsbs(3));
        assert_eq!(bits.len(), 15);

        bits.next();
        assert_eq!(bits.len(), 14);
    }

    #[test]
    fn should_extract_the_raw_bits() {
        let raw = extract_raw(&[0b01, 0b10, 0b11, 0b00], lsbs(2));

        assert_eq!(raw.len(), 8);
        assert_eq!(raw.into_bytes(), vec![0b0110_1100]);
    }

    #[test]
    fn should_stop_reading_at_the_declared_length() {
        let options = CodecOptions::default()
            .with_num_lsbs(lsbs(3))
            .with_framing(LengthHeader);
        let bits = frame(b"abc", &options).unwrap();
        let mut cover = embed(&[0u8; 40], &bits, options.num_lsbs).unwrap();
        // garbage after the frame must not matter
        for byte in cover.iter_mut().skip(bits.len().div_ceil(3)) {
            *byte = 0xff;
        }

        assert_eq!(
            extract(&cover, options.num_lsbs, &options.framing).unwrap(),
            b"abc"
        );
    }

    #[test]
    fn should_fail_on_a_header_larger_than_the_buffer() {
        // all ones decode to a length of u32::MAX
        let buffer = [0xffu8; 64];

        match extract(&buffer, lsbs(1), &LengthHeader.into()) {
            Err(StegabitError::TruncatedStream {
                declared_bits,
                available_bits,
            }) => {
                assert_eq!(declared_bits, u32::MAX as usize * 8 + 32);
                assert_eq!(available_bits, 64);
            }
            other => panic!("expected TruncatedStream, got {other:?}"),
        }
    }

    #[test]
    fn should_report_the_scanned_bits_without_delimiter() {
        let buffer = [0u8; 10];

        assert!(matches!(
            extract(&buffer, lsbs(4), &Framing::default()),
            Err(StegabitError::DelimiterNotFound { scanned_bits: 40 })
        ));
    }
}

use std::fmt;
use std::str::FromStr;

use bitstream_io::BitWrite;
use log::trace;

use super::{FrameWriter, FramingPolicy};
use crate::bit_stream::BitStream;
use crate::error::StegabitError;
use crate::result::Result;

/// The canonical end marker
pub const DEFAULT_DELIMITER: &str = "1111111111111110";

/// Delimiter framing, the payload is followed by a fixed bit pattern of 1 to 64 bits.
///
/// The pattern is used as is for every number of LSBs. Only matches that start on a
/// byte boundary of the bitstream count. The pattern is not escaped inside the
/// payload, so a payload that contains it at a byte boundary is cut short at that point.
/// That is a known limitation of this framing, use [`super::LengthHeader`] for
/// arbitrary binary data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Delimiter {
    pattern: u64,
    len: u8,
}

impl Delimiter {
    pub const MAX_BITS: u8 = 64;

    /// `pattern` holds the delimiter in its lowest `len` bits, the first bit being the most significant one
    pub fn new(pattern: u64, len: u8) -> Result<Self> {
        if len == 0 || len > Self::MAX_BITS || pattern & !mask(len) != 0 {
            return Err(StegabitError::InvalidDelimiter(format!(
                "{pattern:#b} with {len} bits"
            )));
        }

        Ok(Self { pattern, len })
    }

    pub fn pattern(&self) -> u64 {
        self.pattern
    }

    pub fn bit_len(&self) -> usize {
        self.len as usize
    }

    pub fn bits(&self) -> impl Iterator<Item = bool> {
        let pattern = self.pattern;
        (0..self.len).rev().map(move |i| (pattern >> i) & 1 == 1)
    }

    pub fn scanner(&self) -> DelimiterScanner {
        DelimiterScanner {
            window: 0,
            mask: mask(self.len),
            pattern: self.pattern,
            len: self.bit_len(),
            seen: 0,
        }
    }
}

impl Default for Delimiter {
    fn default() -> Self {
        Self {
            pattern: 0b1111_1111_1111_1110,
            len: 16,
        }
    }
}

impl FromStr for Delimiter {
    type Err = StegabitError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || StegabitError::InvalidDelimiter(s.to_string());
        if s.is_empty() || s.len() > Self::MAX_BITS as usize {
            return Err(invalid());
        }

        let pattern = s.chars().try_fold(0u64, |pattern, c| match c {
            '0' => Ok(pattern << 1),
            '1' => Ok((pattern << 1) | 1),
            _ => Err(invalid()),
        })?;

        Self::new(pattern, s.len() as u8)
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0width$b}", self.pattern, width = self.bit_len())
    }
}

impl FramingPolicy for Delimiter {
    fn overhead_bits(&self) -> usize {
        self.bit_len()
    }

    fn write_frame(&self, payload: &[u8], writer: &mut FrameWriter) -> Result<()> {
        writer.write_bytes(payload)?;
        for bit in self.bits() {
            writer.write_bit(bit)?;
        }

        Ok(())
    }

    fn unframe(
        &self,
        bits: &mut dyn Iterator<Item = bool>,
        _available_bits: usize,
    ) -> Result<Vec<u8>> {
        let mut scanner = self.scanner();
        let mut seen = BitStream::new();

        for bit in bits {
            seen.push(bit);
            if !scanner.push(bit) {
                continue;
            }
            // a framed payload always ends on a byte boundary
            let payload_bits = seen.len() - self.bit_len();
            if payload_bits % 8 != 0 {
                trace!("skipped delimiter match at unaligned bit {payload_bits}");
                continue;
            }
            seen.truncate(payload_bits);

            return Ok(seen.into_bytes());
        }

        Err(StegabitError::DelimiterNotFound {
            scanned_bits: seen.len(),
        })
    }
}

/// Matches a [`Delimiter`] against the tail of a bit sequence, one bit at a time
#[derive(Debug, Clone)]
pub struct DelimiterScanner {
    window: u64,
    mask: u64,
    pattern: u64,
    len: usize,
    seen: usize,
}

impl DelimiterScanner {
    /// Appends `bit`, returns true if the last bits now equal the delimiter.
    pub fn push(&mut self, bit: bool) -> bool {
        self.window = ((self.window << 1) | u64::from(bit)) & self.mask;
        self.seen += 1;

        self.seen >= self.len && self.window == self.pattern
    }
}

fn mask(len: u8) -> u64 {
    if len >= 64 {
        u64::MAX
    } else {
        (1 << len) - 1
    }
}

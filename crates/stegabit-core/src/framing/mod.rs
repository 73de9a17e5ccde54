//! Framing turns a payload into the bitstream that gets hidden, and finds the
//! payload boundary again when unveiling.
//!
//! Two policies exist, selected by [`Framing`]:
//! - [`LengthHeader`] prefixes the payload with its byte count as `u32` big endian
//! - [`Delimiter`] appends a bit pattern, `1111111111111110` by default
//!
//! Both policies write payload bytes most significant bit first.

mod delimiter;
mod header;

pub use delimiter::{Delimiter, DelimiterScanner, DEFAULT_DELIMITER};
pub use header::{LengthHeader, HEADER_BITS};

use bitstream_io::{BigEndian, BitWrite, BitWriter};
use enum_dispatch::enum_dispatch;
use log::trace;

use crate::bit_stream::BitStream;
use crate::codec_options::CodecOptions;
use crate::result::Result;

pub type FrameWriter = BitWriter<Vec<u8>, BigEndian>;

/// A policy that marks where a hidden payload ends
#[enum_dispatch]
pub trait FramingPolicy {
    /// number of bits the policy adds on top of the payload bits
    fn overhead_bits(&self) -> usize;

    /// writes the framed payload
    fn write_frame(&self, payload: &[u8], writer: &mut FrameWriter) -> Result<()>;

    /// reads a framed payload back from `bits`.
    /// `available_bits` is the number of bits `bits` can yield at most.
    fn unframe(&self, bits: &mut dyn Iterator<Item = bool>, available_bits: usize)
        -> Result<Vec<u8>>;
}

/// The active framing policy of a codec
#[enum_dispatch(FramingPolicy)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Framing {
    Header(LengthHeader),
    Delimiter(Delimiter),
}

impl Default for Framing {
    fn default() -> Self {
        Framing::Delimiter(Delimiter::default())
    }
}

/// Frames `payload` according to `options`.
///
/// The codec does not check any cover capacity, see [`crate::capacity::ensure_fits`] for that.
pub fn frame(payload: &[u8], options: &CodecOptions) -> Result<BitStream> {
    let mut writer: FrameWriter = BitWriter::endian(
        Vec::with_capacity(payload.len() + options.framing.overhead_bits().div_ceil(8) + 1),
        BigEndian,
    );
    options.framing.write_frame(payload, &mut writer)?;
    let mut len = payload.len() * 8 + options.framing.overhead_bits();

    if options.pad_to_lsb_group {
        let n = options.num_lsbs.bits();
        let padding = (n - len % n) % n;
        if padding > 0 {
            writer.write(padding as u32, 0u8)?;
            len += padding;
        }
    }
    writer.byte_align()?;
    trace!("framed {} payload bytes into {len} bits", payload.len());

    Ok(BitStream::from_packed(writer.into_writer(), len))
}

/// Reads a length header framed payload from `bits`.
pub fn unframe_by_header(bits: &BitStream) -> Result<Vec<u8>> {
    LengthHeader.unframe(&mut bits.iter(), bits.len())
}

/// Reads the payload in front of the first occurrence of `delimiter`.
pub fn unframe_by_delimiter(bits: &BitStream, delimiter: &Delimiter) -> Result<Vec<u8>> {
    delimiter.unframe(&mut bits.iter(), bits.len())
}

/// Takes up to `count` bits, less if `bits` runs dry
pub(crate) fn take_bits(bits: &mut dyn Iterator<Item = bool>, count: usize) -> BitStream {
    let mut taken = BitStream::with_capacity(count);
    for _ in 0..count {
        match bits.next() {
            Some(bit) => taken.push(bit),
            None => break,
        }
    }
    taken
}

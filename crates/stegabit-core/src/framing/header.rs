use bitstream_io::BitWrite;
use byteorder::{ByteOrder, NetworkEndian};
use log::trace;

use super::{take_bits, FrameWriter, FramingPolicy};
use crate::error::StegabitError;
use crate::result::Result;

/// size of the length header in bits
pub const HEADER_BITS: usize = 32;

/// Length header framing, the payload is prefixed by its byte count as `u32` big endian.
///
/// Termination is exact, no scanning is involved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LengthHeader;

impl FramingPolicy for LengthHeader {
    fn overhead_bits(&self) -> usize {
        HEADER_BITS
    }

    fn write_frame(&self, payload: &[u8], writer: &mut FrameWriter) -> Result<()> {
        let len = u32::try_from(payload.len()).map_err(|_| StegabitError::PayloadTooLarge {
            max_capacity: u32::MAX as usize,
            requested: payload.len(),
        })?;
        let mut header = [0; 4];
        NetworkEndian::write_u32(&mut header, len);

        writer.write_bytes(&header)?;
        writer.write_bytes(payload)?;

        Ok(())
    }

    fn unframe(
        &self,
        bits: &mut dyn Iterator<Item = bool>,
        available_bits: usize,
    ) -> Result<Vec<u8>> {
        let header = take_bits(bits, HEADER_BITS);
        if header.len() < HEADER_BITS {
            return Err(StegabitError::TruncatedStream {
                declared_bits: HEADER_BITS,
                available_bits: header.len(),
            });
        }
        let len = NetworkEndian::read_u32(header.as_padded_bytes()) as usize;
        trace!("length header declares {len} bytes");

        // checked before reading, a garbage header must not trigger a huge allocation
        let declared_bits = len.saturating_mul(8).saturating_add(HEADER_BITS);
        if declared_bits > available_bits {
            return Err(StegabitError::TruncatedStream {
                declared_bits,
                available_bits,
            });
        }

        let payload = take_bits(bits, len * 8);
        if payload.len() < len * 8 {
            return Err(StegabitError::TruncatedStream {
                declared_bits,
                available_bits: HEADER_BITS + payload.len(),
            });
        }

        Ok(payload.into_bytes())
    }
}

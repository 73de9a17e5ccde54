//! Capacity planning for a cover buffer.
//!
//! A buffer of `N` bytes carries `N * num_lsbs` bits. Callers check a payload
//! against these bounds before hiding, to get a precise error instead of a
//! failure deep inside the write loop.

use crate::codec_options::{CodecOptions, NumLsbs};
use crate::error::StegabitError;
use crate::framing::{Framing, FramingPolicy};
use crate::result::Result;

/// Capacity figures of one cover buffer for one set of codec options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capacity {
    pub buffer_len: usize,
    pub capacity_bits: usize,
    pub capacity_bytes: usize,
    pub framing_overhead_bits: usize,
    pub max_payload_bytes: usize,
}

/// Total number of bits `buffer_len` cover bytes can carry.
pub fn capacity_bits(buffer_len: usize, num_lsbs: NumLsbs) -> usize {
    buffer_len.saturating_mul(num_lsbs.bits())
}

/// Total number of whole bytes `buffer_len` cover bytes can carry, framing not taken into account.
pub fn capacity_bytes(buffer_len: usize, num_lsbs: NumLsbs) -> usize {
    capacity_bits(buffer_len, num_lsbs) / 8
}

/// Largest payload in bytes that fits next to `framing_overhead_bits` of framing, never negative.
pub fn max_payload_bytes(
    buffer_len: usize,
    num_lsbs: NumLsbs,
    framing_overhead_bits: usize,
) -> usize {
    capacity_bits(buffer_len, num_lsbs).saturating_sub(framing_overhead_bits) / 8
}

/// Length in bits of the bitstream that [`crate::framing::frame`] produces for a payload of `payload_len` bytes.
pub fn framed_bits(payload_len: usize, options: &CodecOptions) -> usize {
    let bits = payload_len
        .saturating_mul(8)
        .saturating_add(options.framing.overhead_bits());
    if options.pad_to_lsb_group {
        let n = options.num_lsbs.bits();
        bits.div_ceil(n).saturating_mul(n)
    } else {
        bits
    }
}

/// Smallest cover buffer in bytes that is able to carry a payload of `payload_len` bytes.
pub fn required_buffer_len(payload_len: usize, options: &CodecOptions) -> usize {
    framed_bits(payload_len, options).div_ceil(options.num_lsbs.bits())
}

/// Computes all capacity figures of a cover buffer.
pub fn plan(buffer_len: usize, options: &CodecOptions) -> Capacity {
    let framing_overhead_bits = options.framing.overhead_bits();
    let mut max_payload = max_payload_bytes(buffer_len, options.num_lsbs, framing_overhead_bits);
    if let Framing::Header(_) = options.framing {
        max_payload = max_payload.min(u32::MAX as usize);
    }

    Capacity {
        buffer_len,
        capacity_bits: capacity_bits(buffer_len, options.num_lsbs),
        capacity_bytes: capacity_bytes(buffer_len, options.num_lsbs),
        framing_overhead_bits,
        max_payload_bytes: max_payload,
    }
}

/// Pre-flight check, fails with [`StegabitError::PayloadTooLarge`] if the payload does not fit.
pub fn ensure_fits(buffer_len: usize, payload_len: usize, options: &CodecOptions) -> Result<()> {
    let max_capacity = plan(buffer_len, options).max_payload_bytes;
    if payload_len > max_capacity {
        return Err(StegabitError::PayloadTooLarge {
            max_capacity,
            requested: payload_len,
        });
    }

    Ok(())
}

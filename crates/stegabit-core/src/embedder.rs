//! Writes a framed bitstream into the least significant bits of a byte buffer.

use log::trace;

use crate::bit_stream::BitStream;
use crate::capacity::capacity_bits;
use crate::codec_options::NumLsbs;
use crate::error::StegabitError;
use crate::result::Result;

/// Bytes per shard when embedding in parallel
#[cfg(feature = "parallel")]
pub const SHARD_LEN: usize = 64 * 1024;

/// Hides `bits` in a copy of `cover` and returns the stego buffer, `cover` stays untouched.
pub fn embed(cover: &[u8], bits: &BitStream, num_lsbs: NumLsbs) -> Result<Vec<u8>> {
    let mut stego = cover.to_vec();
    embed_in_place(&mut stego, bits, num_lsbs)?;

    Ok(stego)
}

/// Hides `bits` in `buffer` and returns the number of bytes that were touched.
///
/// Every byte takes up to `num_lsbs` bits, the last group is zero padded.
/// Bytes after the last group keep their value. If `bits` does not fit,
/// nothing is written at all.
pub fn embed_in_place(buffer: &mut [u8], bits: &BitStream, num_lsbs: NumLsbs) -> Result<usize> {
    let capacity_bits = capacity_bits(buffer.len(), num_lsbs);
    if bits.len() > capacity_bits {
        return Err(StegabitError::InsufficientCapacity {
            capacity_bits,
            requested_bits: bits.len(),
        });
    }

    let touched = bits.len().div_ceil(num_lsbs.bits());
    write_groups(&mut buffer[..touched], bits, num_lsbs);
    trace!(
        "embedded {} bits into {touched} of {} bytes using {num_lsbs} lsbs",
        bits.len(),
        buffer.len()
    );

    Ok(touched)
}

#[cfg(not(feature = "parallel"))]
fn write_groups(buffer: &mut [u8], bits: &BitStream, num_lsbs: NumLsbs) {
    for (byte, group) in buffer.iter_mut().zip(bits.groups(num_lsbs)) {
        *byte = num_lsbs.conceal(*byte, group);
    }
}

/// Each shard starts at bit offset `shard_start_byte * num_lsbs` of the bitstream
#[cfg(feature = "parallel")]
fn write_groups(buffer: &mut [u8], bits: &BitStream, num_lsbs: NumLsbs) {
    use rayon::prelude::*;

    buffer
        .par_chunks_mut(SHARD_LEN)
        .enumerate()
        .for_each(|(shard, bytes)| {
            let mut offset = shard * SHARD_LEN * num_lsbs.bits();
            for byte in bytes.iter_mut() {
                *byte = num_lsbs.conceal(*byte, bits.group(offset, num_lsbs.get()));
                offset += num_lsbs.bits();
            }
        });
}

//! # Stegabit Core API
//!
//! Hides arbitrary payloads in the least significant bits (LSBs) of a flat byte
//! buffer and unveils them again. Where the buffer comes from (pixel channels,
//! PCM frames, a video frame) does not matter, flattening media into bytes and
//! back is left to the caller.
//!
//! The main entry point is [`LsbCodec`], built from [`CodecOptions`]:
//! - [`LsbCodec::hide`] frames a payload and writes it into a copy of a cover buffer
//! - [`LsbCodec::unveil`] reads the payload back from a stego buffer
//! - [`LsbCodec::capacity`] tells how much a cover buffer can carry
//!
//! The building blocks are public too: [`framing`], [`embedder`], [`extractor`] and [`capacity`].
//!
//! # Usage Examples
//!
//! ## Hide and unveil a message
//!
//! ```rust
//! use stegabit_core::{CodecOptions, LsbCodec, NumLsbs};
//!
//! let codec = LsbCodec::with_options(
//!     CodecOptions::default().with_num_lsbs(NumLsbs::new(2).expect("valid lsbs")),
//! );
//! let cover = vec![0u8; 20];
//!
//! let stego = codec.hide(&cover, b"Hi").expect("Failed to hide message");
//! let payload = codec.unveil(&stego).expect("Failed to unveil message");
//!
//! assert_eq!(payload.to_text_lossy(), "Hi");
//! ```
//!
//! ## Use a length header instead of a delimiter
//!
//! ```rust
//! use stegabit_core::framing::LengthHeader;
//! use stegabit_core::{CodecOptions, LsbCodec};
//!
//! let codec = LsbCodec::with_options(CodecOptions::default().with_framing(LengthHeader));
//! let mut buffer = vec![0x80u8; 1024];
//!
//! codec
//!     .hide_in_place(&mut buffer, &[0xff, 0xfe, 0x00])
//!     .expect("Failed to hide data");
//! assert_eq!(codec.unveil(&buffer).unwrap().content, vec![0xff, 0xfe, 0x00]);
//! ```

#![warn(clippy::redundant_else, clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod bit_iterator;
pub use bit_iterator::BitIterator;

pub mod bit_stream;
pub use bit_stream::BitStream;

pub mod capacity;
pub mod codec_options;
pub mod embedder;
pub mod error;
pub mod extractor;
pub mod framing;
pub mod payload;
pub mod result;

use log::debug;

pub use crate::capacity::Capacity;
pub use crate::codec_options::{CodecOptions, NumLsbs};
pub use crate::error::StegabitError;
pub use crate::framing::{Delimiter, Framing, LengthHeader};
pub use crate::payload::Payload;
pub use crate::result::Result;

/// LSB codec, hides and unveils payloads with one shared set of [`CodecOptions`]
#[derive(Debug, Default, Clone)]
pub struct LsbCodec {
    options: CodecOptions,
}

impl LsbCodec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: CodecOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &CodecOptions {
        &self.options
    }

    /// Capacity figures of a cover buffer with `buffer_len` bytes
    pub fn capacity(&self, buffer_len: usize) -> Capacity {
        capacity::plan(buffer_len, &self.options)
    }

    /// Frames `payload` without hiding it
    pub fn frame(&self, payload: &[u8]) -> Result<BitStream> {
        framing::frame(payload, &self.options)
    }

    /// Hides `payload` in a copy of `cover` and returns the stego buffer.
    pub fn hide(&self, cover: &[u8], payload: &[u8]) -> Result<Vec<u8>> {
        let mut stego = cover.to_vec();
        self.hide_in_place(&mut stego, payload)?;

        Ok(stego)
    }

    /// Hides `payload` directly in `buffer`, returns the number of bytes that were touched.
    ///
    /// Fails with [`StegabitError::PayloadTooLarge`] before anything is written
    /// if the payload does not fit.
    pub fn hide_in_place(&self, buffer: &mut [u8], payload: &[u8]) -> Result<usize> {
        capacity::ensure_fits(buffer.len(), payload.len(), &self.options)?;
        let bits = self.frame(payload)?;
        let touched = embedder::embed_in_place(buffer, &bits, self.options.num_lsbs)?;
        debug!(
            "hid {} payload bytes in {touched} of {} cover bytes",
            payload.len(),
            buffer.len()
        );

        Ok(touched)
    }

    /// Unveils the payload hidden in `stego`.
    pub fn unveil(&self, stego: &[u8]) -> Result<Payload> {
        extractor::extract(stego, self.options.num_lsbs, &self.options.framing).map(Payload::new)
    }

    /// All hidden bits of `stego` packed into bytes, no framing is interpreted.
    pub fn unveil_raw(&self, stego: &[u8]) -> Vec<u8> {
        extractor::extract_raw(stego, self.options.num_lsbs).into_bytes()
    }
}

#[cfg(test)]
mod e2e_tests {
    use super::*;

    fn codec(n: u8, framing: Framing) -> LsbCodec {
        LsbCodec::with_options(
            CodecOptions::default()
                .with_num_lsbs(NumLsbs::new(n).unwrap())
                .with_framing(framing),
        )
    }

    #[test]
    fn should_hide_hi_in_sixteen_of_twenty_bytes() {
        let codec = codec(2, Framing::default());
        let mut buffer = [0u8; 20];

        let touched = codec.hide_in_place(&mut buffer, b"Hi").unwrap();

        assert_eq!(touched, 16);
        assert_eq!(buffer[16..], [0u8; 4]);
        assert_eq!(codec.unveil(&buffer).unwrap().content, b"Hi".to_vec());
    }

    #[test]
    fn should_fail_pre_flight_with_the_max_capacity() {
        let codec = codec(1, LengthHeader.into());
        let cover = [0u8; 64];

        match codec.hide(&cover, b"too long!") {
            Err(StegabitError::PayloadTooLarge {
                max_capacity,
                requested,
            }) => {
                assert_eq!(max_capacity, 4);
                assert_eq!(requested, 9);
            }
            other => panic!("expected PayloadTooLarge, got {other:?}"),
        }
    }

    #[test]
    fn should_not_unveil_a_header_frame_with_a_delimiter() {
        let hider = codec(1, LengthHeader.into());
        let stego = hider.hide(&[0u8; 128], b"abc").unwrap();

        assert!(matches!(
            codec(1, Framing::default()).unveil(&stego),
            Err(StegabitError::DelimiterNotFound { .. })
        ));
    }

    #[test]
    fn should_unveil_the_raw_bits() {
        let codec = codec(8, Framing::default());
        let stego = codec.hide(&[0u8; 6], b"ab").unwrap();

        assert_eq!(codec.unveil_raw(&stego), vec![b'a', b'b', 0xff, 0xfe, 0, 0]);
    }

    #[test]
    fn should_report_capacity_with_the_configured_framing() {
        let capacity = codec(2, Framing::default()).capacity(20);

        assert_eq!(capacity.capacity_bits, 40);
        assert_eq!(capacity.max_payload_bytes, 3);
    }
}

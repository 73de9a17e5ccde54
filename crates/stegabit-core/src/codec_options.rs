use std::fmt;

use crate::error::StegabitError;
use crate::framing::{Delimiter, Framing};
use crate::result::Result;

/// Number of least significant bits per cover byte that carry payload, always within `1..=8`.
///
/// Embedding and extraction both go through [`NumLsbs::conceal`] and [`NumLsbs::reveal`],
/// so the bit order inside a group can never drift apart between the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NumLsbs(u8);

impl NumLsbs {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 8;

    pub fn new(n: u8) -> Result<Self> {
        if (Self::MIN..=Self::MAX).contains(&n) {
            Ok(Self(n))
        } else {
            Err(StegabitError::InvalidNumLsbs(n))
        }
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    pub const fn bits(self) -> usize {
        self.0 as usize
    }

    /// the bits of a cover byte that carry payload
    pub const fn lsb_mask(self) -> u8 {
        ((1u16 << self.0) - 1) as u8
    }

    /// the bits of a cover byte that are preserved
    pub const fn keep_mask(self) -> u8 {
        !self.lsb_mask()
    }

    /// Replaces the low bits of `byte` with `group`.
    /// The first bit of the group sits at position `num_lsbs - 1`, the last one at position 0.
    pub const fn conceal(self, byte: u8, group: u8) -> u8 {
        (byte & self.keep_mask()) | (group & self.lsb_mask())
    }

    /// Inverse of [`NumLsbs::conceal`], returns the group hidden in `byte`.
    pub const fn reveal(self, byte: u8) -> u8 {
        byte & self.lsb_mask()
    }
}

impl Default for NumLsbs {
    fn default() -> Self {
        Self(1)
    }
}

impl TryFrom<u8> for NumLsbs {
    type Error = StegabitError;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value)
    }
}

impl From<NumLsbs> for u8 {
    fn from(value: NumLsbs) -> Self {
        value.0
    }
}

impl fmt::Display for NumLsbs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Codec configuration shared by framing, embedding, extraction and capacity planning.
///
/// A buffer hidden with one set of options can only be unveiled with the same
/// `num_lsbs` and the same framing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecOptions {
    /// How many low bits of every cover byte are overwritten.
    /// Higher values raise the capacity and lower the fidelity of the cover.
    pub num_lsbs: NumLsbs,

    /// How the end of the payload is marked, by a length header or a trailing delimiter.
    pub framing: Framing,

    /// If true the framed bitstream is right padded with `0` bits to a multiple of `num_lsbs`.
    /// Has no influence on what is extracted.
    pub pad_to_lsb_group: bool,
}

impl Default for CodecOptions {
    fn default() -> Self {
        Self {
            num_lsbs: NumLsbs::default(),
            framing: Framing::Delimiter(Delimiter::default()),
            pad_to_lsb_group: false,
        }
    }
}

impl CodecOptions {
    pub fn with_num_lsbs(mut self, num_lsbs: NumLsbs) -> Self {
        self.num_lsbs = num_lsbs;
        self
    }

    pub fn with_framing<F: Into<Framing>>(mut self, framing: F) -> Self {
        self.framing = framing.into();
        self
    }

    pub fn with_padding(mut self, pad_to_lsb_group: bool) -> Self {
        self.pad_to_lsb_group = pad_to_lsb_group;
        self
    }
}

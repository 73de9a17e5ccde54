use crate::bit_iterator::BitIterator;
use crate::codec_options::NumLsbs;

/// A sequence of bits, packed into bytes with the most significant bit first.
///
/// The bit length is tracked exactly, so a stream does not need to end on a byte
/// boundary. Unused bits of the last byte are always zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitStream {
    bytes: Vec<u8>,
    len: usize,
}

impl BitStream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(bits: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(bits.div_ceil(8)),
            len: 0,
        }
    }

    /// All bits of `bytes`, the stream length is a multiple of 8.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            bytes: bytes.to_vec(),
            len: bytes.len() * 8,
        }
    }

    /// Takes already packed bytes, `len` is the number of valid bits.
    /// Bits past `len` must be zero.
    pub(crate) fn from_packed(bytes: Vec<u8>, len: usize) -> Self {
        debug_assert!(len <= bytes.len() * 8, "bit length exceeds packed bytes");
        debug_assert_eq!(bytes.len(), len.div_ceil(8), "packed bytes have a trailing surplus");

        Self { bytes, len }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn push(&mut self, bit: bool) {
        let offset = self.len % 8;
        if offset == 0 {
            self.bytes.push(0);
        }
        if bit {
            let last = self.bytes.len() - 1;
            self.bytes[last] |= 0x80 >> offset;
        }
        self.len += 1;
    }

    pub fn get(&self, index: usize) -> Option<bool> {
        if index >= self.len {
            return None;
        }

        Some((self.bytes[index / 8] >> (7 - index % 8)) & 1 == 1)
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        BitIterator::new(&self.bytes[..]).take(self.len)
    }

    /// Reads `width` bits starting at bit `offset` into the low bits of a byte,
    /// the first bit ends up as the most significant one of the group.
    /// Positions past the end of the stream read as `0`.
    pub fn group(&self, offset: usize, width: u8) -> u8 {
        (0..width as usize).fold(0u8, |group, k| {
            (group << 1) | u8::from(self.get(offset + k).unwrap_or(false))
        })
    }

    /// Splits the stream into groups of `num_lsbs` bits, the last group is zero padded.
    pub fn groups(&self, num_lsbs: NumLsbs) -> Groups<'_> {
        Groups {
            stream: self,
            offset: 0,
            width: num_lsbs.get(),
        }
    }

    /// Appends `0` bits until the length is a multiple of `n`.
    pub fn pad_to_multiple_of(&mut self, n: usize) {
        if n == 0 {
            return;
        }
        while self.len % n != 0 {
            self.push(false);
        }
    }

    /// Shortens the stream to `len` bits, has no effect if it is already shorter.
    pub fn truncate(&mut self, len: usize) {
        if len >= self.len {
            return;
        }
        self.len = len;
        self.bytes.truncate(len.div_ceil(8));
        let used = len % 8;
        if used != 0 {
            if let Some(last) = self.bytes.last_mut() {
                *last &= 0xff << (8 - used);
            }
        }
    }

    /// The packed bytes, an incomplete last byte is zero padded.
    pub fn as_padded_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Only the complete bytes, an incomplete last byte is dropped.
    pub fn into_bytes(mut self) -> Vec<u8> {
        self.bytes.truncate(self.len / 8);
        self.bytes
    }
}

impl FromIterator<bool> for BitStream {
    fn from_iter<T: IntoIterator<Item = bool>>(iter: T) -> Self {
        let mut stream = BitStream::new();
        stream.extend(iter);
        stream
    }
}

impl Extend<bool> for BitStream {
    fn extend<T: IntoIterator<Item = bool>>(&mut self, iter: T) {
        for bit in iter {
            self.push(bit);
        }
    }
}

/// Iterator over the `num_lsbs` wide groups of a [`BitStream`], see [`BitStream::groups`]
pub struct Groups<'a> {
    stream: &'a BitStream,
    offset: usize,
    width: u8,
}

impl Iterator for Groups<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<Self::Item> {
        if self.offset >= self.stream.len() {
            return None;
        }
        let group = self.stream.group(self.offset, self.width);
        self.offset += self.width as usize;

        Some(group)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lsbs(n: u8) -> NumLsbs {
        NumLsbs::new(n).expect("valid number of lsbs")
    }

    #[test]
    fn should_pack_bits_msb_first() {
        let stream: BitStream = [true, false, true].into_iter().collect();

        assert_eq!(stream.len(), 3);
        assert_eq!(stream.as_padded_bytes(), &[0b1010_0000]);
    }

    #[test]
    fn should_drop_an_incomplete_trailing_byte() {
        let mut stream = BitStream::from_bytes(b"Hi");
        stream.push(true);
        stream.push(true);

        assert_eq!(stream.len(), 18);
        assert_eq!(stream.into_bytes(), b"Hi".to_vec());
    }

    #[test]
    fn should_clear_truncated_bits_so_pushing_stays_correct() {
        let mut stream = BitStream::from_bytes(&[0xff]);
        stream.truncate(3);
        stream.push(false);

        assert_eq!(stream.as_padded_bytes(), &[0b1110_0000]);
        assert_eq!(stream.get(3), Some(false));
        assert_eq!(stream.get(4), None);
    }

    #[test]
    fn should_split_into_zero_padded_groups() {
        // 0x48 = 0b0100_1000 followed by 0b1
        let mut stream = BitStream::from_bytes(&[0x48]);
        stream.push(true);

        let groups: Vec<u8> = stream.groups(lsbs(3)).collect();
        assert_eq!(groups, vec![0b010, 0b010, 0b001]);

        let groups: Vec<u8> = stream.groups(lsbs(2)).collect();
        assert_eq!(groups, vec![0b01, 0b00, 0b10, 0b00, 0b10]);
    }

    #[test]
    fn should_yield_whole_bytes_as_groups_of_eight() {
        let stream = BitStream::from_bytes(b"ok");

        assert_eq!(stream.groups(lsbs(8)).collect::<Vec<_>>(), b"ok".to_vec());
    }

    #[test]
    fn should_pad_to_a_multiple() {
        let mut stream: BitStream = [true; 5].into_iter().collect();
        stream.pad_to_multiple_of(3);

        assert_eq!(stream.len(), 6);
        assert_eq!(stream.get(5), Some(false));
    }
}

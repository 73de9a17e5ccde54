use std::io::{ErrorKind, Read};
use std::slice;

/// Iterates over the bits of a byte source, the most significant bit of every byte first.
///
/// The sequence is the same as calling `read_bit` on a `bitstream_io::BitReader`
/// in `BigEndian` mode until the source runs dry.
///
/// ## Example of usage
/// ```rust
/// use stegabit_core::BitIterator;
///
/// let bits: Vec<bool> = BitIterator::new(&[0b1000_0001][..]).collect();
/// assert_eq!(bits, [true, false, false, false, false, false, false, true]);
/// ```
pub struct BitIterator<R> {
    source: R,
    byte: u8,
    remaining: u8,
}

impl<R> BitIterator<R> {
    pub fn new(source: R) -> Self {
        BitIterator {
            source,
            byte: 0,
            remaining: 0,
        }
    }
}

impl<R> Iterator for BitIterator<R>
where
    R: Read,
{
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            let mut b = 0;
            loop {
                match self.source.read(slice::from_mut(&mut b)) {
                    Ok(0) => return None,
                    Ok(..) => break,
                    Err(ref e) if e.kind() == ErrorKind::Interrupted => continue,
                    Err(_) => return None,
                }
            }
            self.byte = b;
            self.remaining = 8;
        }
        self.remaining -= 1;

        Some((self.byte >> self.remaining) & 1 == 1)
    }
}

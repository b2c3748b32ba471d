//! Non-destructive lookahead.

use crate::BitCursor;

impl<'a> BitCursor<&'a [u8]> {
    /// Create an independent cursor that starts exactly where this one
    /// stands.
    ///
    /// The fork shares the buffer and its end, and its origin is the current
    /// byte of `self`, so its [`BitCursor::position`] counts from there. It
    /// borrows the buffer rather than `self`, so both cursors can be advanced
    /// independently afterwards.
    #[inline]
    pub fn fork(&self) -> BitCursor<&'a [u8]> {
        BitCursor {
            data: self.data,
            origin: self.cursor,
            cursor: self.cursor,
            bits_left: self.bits_left,
        }
    }
}

impl<B: AsRef<[u8]>> BitCursor<B> {
    /// Like [`BitCursor::fork`], but for any buffer type. The returned
    /// read-only cursor borrows `self`.
    #[inline]
    pub fn view(&self) -> BitCursor<&[u8]> {
        BitCursor {
            data: self.data.as_ref(),
            origin: self.cursor,
            cursor: self.cursor,
            bits_left: self.bits_left,
        }
    }

    /// Return the next `count` bits without consuming them.
    #[inline]
    pub fn next_bits(&self, count: u8) -> u32 {
        self.view().read_bits(count)
    }

    /// Return the next `count` bytes as a big-endian number without consuming
    /// them.
    ///
    /// Returns `None` if `count` is not in `1..=8` or fewer than `count` bytes
    /// are left. The bit offset within the current byte is ignored.
    #[inline]
    pub fn peek_bytes(&self, count: usize) -> Option<u64> {
        if !(1..=8).contains(&count) {
            return None;
        }

        let end = self.cursor.checked_add(count)?;
        let bytes = self.data.as_ref().get(self.cursor..end)?;

        Some(
            bytes
                .iter()
                .fold(0_u64, |acc, &byte| (acc << 8) | byte as u64),
        )
    }

    /// Like [`BitCursor::peek_bytes`], but returns 0 where that returns `None`.
    ///
    /// A legitimate zero value can't be told apart from a request that was out
    /// of range.
    #[inline]
    pub fn next_bytes(&self, count: usize) -> u64 {
        self.peek_bytes(count).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fork_is_independent() {
        let data = [0b1100_1010_u8, 0x5a, 0xff];
        let mut c = BitCursor::new(&data[..]);
        c.read_bits(10);

        let mut fork = c.fork();
        assert_eq!(fork.position(), 0);
        assert_eq!(fork.bits_left(), c.bits_left());

        c.read_bits(6);
        c.read_byte_fast();
        assert!(c.at_end());

        assert_eq!(fork.position(), 0);
        assert_eq!(fork.read_bits(6), 0b01_1010);
        assert_eq!(fork.position(), 1);
        assert_eq!(fork.read_byte_fast(), 0xff);
        assert!(fork.at_end());
    }

    #[test]
    fn view_of_writer() {
        let mut buf = [0_u8; 2];
        let mut w = BitCursor::new(&mut buf[..]);
        w.write_bits(4, 0b1001);

        let mut view = w.view();
        assert_eq!(view.position(), 0);
        assert_eq!(view.bits_left(), 4);
        assert_eq!(view.read_bits(4), 0);

        w.write_bits(4, 0b0110);
        assert_eq!(w.view().read_byte_fast(), 0);
        assert_eq!(buf[0], 0b1001_0110);
    }

    #[test]
    fn fork_keeps_limit() {
        let data = [0_u8; 2];
        let mut c = BitCursor::new(&data[..]);
        c.skip_bytes(5);

        let fork = c.fork();
        assert!(fork.overran());
        assert_eq!(fork.position(), 0);
    }

    #[test]
    fn next_bits() {
        let data = [0b1011_0000_u8];
        let mut c = BitCursor::new(&data[..]);
        c.read_bit();

        assert_eq!(c.next_bits(3), 0b011);
        assert_eq!(c.next_bits(3), 0b011);
        assert_eq!(c.bits_left(), 7);
        assert_eq!(c.read_bits(3), 0b011);
    }

    #[test]
    fn next_bytes() {
        let data = [0x00_u8, 0x00, 0x01, 0x67, 0x42];
        let mut c = BitCursor::new(&data[..]);

        assert_eq!(c.next_bytes(3), 0x000001);
        assert_eq!(c.next_bytes(5), 0x0001_6742);
        assert_eq!(c.peek_bytes(0), None);
        assert_eq!(c.peek_bytes(9), None);
        assert_eq!(c.next_bytes(9), 0);
        assert_eq!(c.peek_bytes(6), None);

        c.skip_bytes(3);
        assert_eq!(c.peek_bytes(2), Some(0x6742));
        assert_eq!(c.peek_bytes(3), None);
        assert_eq!(c.position(), 3);

        c.skip_bytes(4);
        assert_eq!(c.peek_bytes(1), None);
    }
}

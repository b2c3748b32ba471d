//! Bulk byte transfer.
//!
//! All operations here work on whole bytes starting at the current byte and
//! leave the bit offset within that byte untouched. Only the bytes that are
//! actually in the buffer are copied, but the cursor always advances by the
//! full requested length. A request that runs past the end of the buffer
//! therefore leaves the cursor in the overrun state.

use crate::BitCursor;

impl<B: AsRef<[u8]>> BitCursor<B> {
    /// Clamp a request of `len` bytes to what is left in the buffer.
    #[inline]
    fn clamp_len(&self, len: usize) -> usize {
        let available = self.bytes_left();

        if len > available {
            ldebug!(
                "requested {} bytes at offset {}, only {} available",
                len,
                self.cursor,
                available
            );
        }

        len.min(available)
    }

    #[inline]
    fn advance_bytes(&mut self, len: usize) {
        self.cursor = self.cursor.saturating_add(len);
    }

    /// Copy the next `dest.len()` bytes into `dest`.
    ///
    /// Returns the number of bytes that were actually copied. The remaining
    /// bytes of `dest` are left untouched.
    #[inline]
    pub fn read_bytes(&mut self, dest: &mut [u8]) -> usize {
        let len = self.clamp_len(dest.len());

        if len > 0 {
            let start = self.cursor;
            dest[..len].copy_from_slice(&self.data.as_ref()[start..start + len]);
        }

        self.advance_bytes(dest.len());

        len
    }

    /// Skip the next `len` bytes.
    ///
    /// Returns the number of bytes that were actually in the buffer.
    #[inline]
    pub fn skip_bytes(&mut self, len: usize) -> usize {
        let actual = self.clamp_len(len);
        self.advance_bytes(len);

        actual
    }
}

impl<'a> BitCursor<&'a [u8]> {
    /// Borrow the next `len` bytes of the buffer without copying them.
    ///
    /// The returned slice is shorter than `len` if the buffer ends first.
    #[inline]
    pub fn take_bytes(&mut self, len: usize) -> &'a [u8] {
        let data: &'a [u8] = self.data;
        let start = self.cursor.min(data.len());
        let end = start + self.clamp_len(len);

        self.advance_bytes(len);

        &data[start..end]
    }
}

impl<B: AsRef<[u8]> + AsMut<[u8]>> BitCursor<B> {
    /// Copy `src` into the buffer at the current byte.
    ///
    /// Returns the number of bytes that were actually written.
    #[inline]
    pub fn write_bytes(&mut self, src: &[u8]) -> usize {
        let len = self.clamp_len(src.len());

        if len > 0 {
            let start = self.cursor;
            self.data.as_mut()[start..start + len].copy_from_slice(&src[..len]);
        }

        self.advance_bytes(src.len());

        len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_within_bounds() {
        let data = [1_u8, 2, 3, 4, 5];
        let mut c = BitCursor::new(&data[..]);
        let mut dest = [0_u8; 3];

        assert_eq!(c.read_byte_fast(), 1);
        assert_eq!(c.read_bytes(&mut dest), 3);
        assert_eq!(dest, [2, 3, 4]);
        assert_eq!(c.position(), 4);
        assert!(!c.at_end());
    }

    #[test]
    fn read_past_end() {
        let data = [0xaa_u8, 0xbb, 0xcc];
        let mut c = BitCursor::new(&data[..]);
        let mut dest = [0_u8; 8];

        assert_eq!(c.read_bytes(&mut dest), 3);
        assert_eq!(dest, [0xaa, 0xbb, 0xcc, 0, 0, 0, 0, 0]);
        assert!(c.overran());
        assert_eq!(c.position(), 3);

        // Nothing is left to copy, but the cursor keeps moving.
        let mut dest = [0xff_u8; 2];
        assert_eq!(c.read_bytes(&mut dest), 0);
        assert_eq!(dest, [0xff, 0xff]);
        assert_eq!(c.bytes_left(), 0);
    }

    #[test]
    fn read_keeps_bit_offset() {
        let data = [0xf0_u8, 0x12, 0x34];
        let mut c = BitCursor::new(&data[..]);
        c.read_bits(4);

        let mut dest = [0_u8; 1];
        assert_eq!(c.read_bytes(&mut dest), 1);
        assert_eq!(dest, [0xf0]);
        assert_eq!(c.bits_left(), 4);
        assert_eq!(c.read_bits(4), 0x2);
    }

    #[test]
    fn write_past_end() {
        let mut buf = [0_u8; 4];
        let mut c = BitCursor::new(&mut buf[..]);
        c.write_byte_fast(0x01);

        assert_eq!(c.write_bytes(&[7, 8, 9, 10, 11]), 3);
        assert!(c.overran());
        assert_eq!(c.position(), 4);
        assert_eq!(buf, [0x01, 7, 8, 9]);
    }

    #[test]
    fn skip() {
        let data = [0_u8; 4];
        let mut c = BitCursor::new(&data[..]);

        assert_eq!(c.skip_bytes(3), 3);
        assert_eq!(c.position(), 3);
        assert_eq!(c.skip_bytes(2), 1);
        assert!(c.overran());
        assert_eq!(c.skip_bytes(usize::MAX), 0);
        assert!(c.overran());
    }

    #[test]
    fn take() {
        let data = [1_u8, 2, 3, 4];
        let mut c = BitCursor::new(&data[..]);

        assert_eq!(c.take_bytes(2), &[1, 2]);
        assert_eq!(c.take_bytes(0), &[] as &[u8]);
        assert_eq!(c.take_bytes(5), &[3, 4]);
        assert!(c.overran());
        assert_eq!(c.take_bytes(1), &[] as &[u8]);
    }
}

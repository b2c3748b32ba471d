//! The bit cursor.

use crate::error::{Error, Result};

/// Where a cursor stands relative to the end of its buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorStatus {
    /// There is still data left at the current byte.
    InBounds,
    /// The cursor sits exactly at the end of the buffer.
    AtEnd,
    /// The cursor advanced past the end of the buffer. Every read since
    /// crossing the end produced zeroes and every write was dropped.
    Overrun,
}

/// A bit-addressable view over a byte buffer.
///
/// Bits are consumed most-significant first. The cursor never fails: reading
/// past the end yields zero bits, writing past the end is a no-op on the
/// buffer, and in both cases the position keeps advancing. Whether that
/// happened can be checked afterwards with [`BitCursor::overran`],
/// [`BitCursor::status`] or [`BitCursor::finish`].
///
/// Reading requires `B: AsRef<[u8]>`, writing additionally `B: AsMut<[u8]>`,
/// so both `&[u8]` and `&mut [u8]` (or owned buffers) can be used.
#[derive(Debug)]
pub struct BitCursor<B> {
    pub(crate) data: B,
    /// Byte index of the first byte this cursor can address.
    pub(crate) origin: usize,
    /// Byte index of the current byte. May be larger than the buffer length.
    pub(crate) cursor: usize,
    /// Number of unconsumed bits in the current byte, in `1..=8`.
    pub(crate) bits_left: u8,
}

impl<B: AsRef<[u8]>> BitCursor<B> {
    /// Create a new cursor at the start of the given buffer.
    #[inline]
    pub fn new(data: B) -> Self {
        Self {
            data,
            origin: 0,
            cursor: 0,
            bits_left: 8,
        }
    }

    /// Return the whole underlying buffer.
    #[inline]
    pub fn get_data(&self) -> &[u8] {
        self.data.as_ref()
    }

    /// Consume the cursor and return the underlying buffer.
    #[inline]
    pub fn into_inner(self) -> B {
        self.data
    }

    #[inline(always)]
    pub(crate) fn limit(&self) -> usize {
        self.data.as_ref().len()
    }

    #[inline(always)]
    pub(crate) fn cur_byte(&self) -> Option<u8> {
        self.data.as_ref().get(self.cursor).copied()
    }

    /// Bookkeeping after one bit of the current byte was consumed.
    #[inline(always)]
    pub(crate) fn wrap(&mut self) {
        if self.bits_left == 0 {
            self.cursor = self.cursor.saturating_add(1);
            self.bits_left = 8;
        }
    }

    /// Whether no bits of the current byte have been consumed yet.
    #[inline]
    pub fn byte_aligned(&self) -> bool {
        self.bits_left == 8
    }

    /// Whether there is no more data at the current byte.
    #[inline]
    pub fn at_end(&self) -> bool {
        self.cursor >= self.limit()
    }

    /// Whether the cursor advanced strictly past the end of the buffer.
    #[inline]
    pub fn overran(&self) -> bool {
        self.cursor > self.limit()
    }

    /// The current byte offset from the origin.
    ///
    /// Clamped to the buffer length when the cursor overran.
    #[inline]
    pub fn position(&self) -> usize {
        self.cursor.min(self.limit()).saturating_sub(self.origin)
    }

    /// The absolute bit offset from the origin.
    ///
    /// Saturates at `usize::MAX` for cursors that were advanced that far.
    #[inline]
    pub fn bit_position(&self) -> usize {
        self.cursor
            .saturating_sub(self.origin)
            .saturating_mul(8)
            .saturating_add(8 - self.bits_left as usize)
    }

    /// The number of unconsumed bits in the current byte.
    #[inline]
    pub fn bits_left(&self) -> u8 {
        self.bits_left
    }

    /// The number of bytes from the current byte to the end of the buffer.
    #[inline]
    pub fn bytes_left(&self) -> usize {
        self.limit().saturating_sub(self.cursor)
    }

    /// Return the current status of the cursor.
    #[inline]
    pub fn status(&self) -> CursorStatus {
        let limit = self.limit();

        if self.cursor < limit {
            CursorStatus::InBounds
        } else if self.cursor == limit {
            CursorStatus::AtEnd
        } else {
            CursorStatus::Overrun
        }
    }

    /// Check the cursor at the end of a sequence of operations.
    ///
    /// Returns the byte position, or an error if any of the operations ran
    /// past the end of the buffer.
    #[inline]
    pub fn finish(&self) -> Result<usize> {
        if self.overran() {
            return Err(Error::Overrun);
        }

        Ok(self.position())
    }

    /// Read a single bit.
    ///
    /// Returns 0 at the end of the data, but the position still advances.
    #[inline(always)]
    pub fn read_bit(&mut self) -> u32 {
        self.bits_left -= 1;

        let bit = self
            .cur_byte()
            .map_or(0, |byte| ((byte >> self.bits_left) & 1) as u32);
        self.wrap();

        bit
    }

    /// Return the bit the next call to [`BitCursor::read_bit`] would return.
    #[inline]
    pub fn peek_bit(&self) -> u32 {
        self.cur_byte()
            .map_or(0, |byte| ((byte >> (self.bits_left - 1)) & 1) as u32)
    }

    /// Read `count` bits, most-significant first.
    ///
    /// `count` must not exceed 32.
    #[inline]
    pub fn read_bits(&mut self, count: u8) -> u32 {
        debug_assert!(count <= 32);

        let mut value = 0_u32;

        for _ in 0..count {
            value = (value << 1) | self.read_bit();
        }

        value
    }

    /// Skip `count` bits without looking at them.
    #[inline]
    pub fn skip_bits(&mut self, count: usize) {
        for _ in 0..count {
            self.bits_left -= 1;
            self.wrap();
        }
    }

    /// Read a whole byte.
    ///
    /// Equivalent to `read_bits(8)`, but loads the byte directly if the
    /// cursor is byte-aligned.
    #[inline]
    pub fn read_byte_fast(&mut self) -> u8 {
        if self.byte_aligned()
            && let Some(byte) = self.cur_byte()
        {
            self.cursor += 1;
            return byte;
        }

        self.read_bits(8) as u8
    }
}

impl<B: AsRef<[u8]> + AsMut<[u8]>> BitCursor<B> {
    /// Write a single bit. Only the lowest bit of `bit` is used.
    ///
    /// At the end of the data the buffer is left untouched, but the position
    /// still advances.
    #[inline(always)]
    pub fn write_bit(&mut self, bit: u32) {
        self.bits_left -= 1;

        let shift = self.bits_left;

        if let Some(byte) = self.data.as_mut().get_mut(self.cursor) {
            *byte &= !(1 << shift);
            *byte |= ((bit & 1) as u8) << shift;
        }

        self.wrap();
    }

    /// Write the lowest `count` bits of `value`, most-significant first.
    ///
    /// `count` must not exceed 32.
    #[inline]
    pub fn write_bits(&mut self, count: u8, value: u32) {
        debug_assert!(count <= 32);

        for i in (0..count as u32).rev() {
            self.write_bit(value.checked_shr(i).unwrap_or(0));
        }
    }

    /// Write a whole byte.
    ///
    /// Equivalent to `write_bits(8, value)`, but stores the byte directly if
    /// the cursor is byte-aligned.
    #[inline]
    pub fn write_byte_fast(&mut self, value: u8) {
        if self.byte_aligned()
            && let Some(byte) = self.data.as_mut().get_mut(self.cursor)
        {
            *byte = value;
            self.cursor += 1;
            return;
        }

        self.write_bits(8, value as u32);
    }
}

//! Exp-Golomb coding.
//!
//! A codeword for an unsigned value `v` consists of `M` zero bits, a one bit
//! and `M` suffix bits, where `suffix + 2^M - 1 == v`. Signed values are
//! mapped onto unsigned ones in the order 0, 1, -1, 2, -2, ...

use crate::BitCursor;

/// The maximum number of leading zero bits scanned when decoding.
const MAX_LEADING_ZEROS: u32 = 32;

impl<B: AsRef<[u8]>> BitCursor<B> {
    /// Read an unsigned Exp-Golomb code (`ue(v)`).
    ///
    /// The scan for leading zeros stops after 32 zeros or at the end of the
    /// data. Malformed or truncated input therefore produces a bogus value
    /// instead of an error; check [`BitCursor::overran`] afterwards.
    #[inline]
    pub fn read_ue(&mut self) -> u32 {
        let mut leading_zeros = 0;

        while self.read_bit() == 0 && leading_zeros < MAX_LEADING_ZEROS && !self.at_end() {
            leading_zeros += 1;
        }

        let suffix = self.read_bits(leading_zeros as u8) as u64;

        (suffix + (1_u64 << leading_zeros) - 1) as u32
    }

    /// Read a signed Exp-Golomb code (`se(v)`).
    #[inline]
    pub fn read_se(&mut self) -> i32 {
        let code = self.read_ue() as i64;

        let value = if code & 1 == 1 {
            (code + 1) / 2
        } else {
            -(code / 2)
        };

        value as i32
    }
}

impl<B: AsRef<[u8]> + AsMut<[u8]>> BitCursor<B> {
    /// Write an unsigned Exp-Golomb code (`ue(v)`).
    #[inline]
    pub fn write_ue(&mut self, value: u32) {
        if value == 0 {
            self.write_bit(1);
            return;
        }

        // `value + 1` written as a `2 * len - 1` bit field yields `len - 1`
        // leading zeros followed by the value itself.
        let code = value as u64 + 1;
        let len = u64::BITS - code.leading_zeros();

        for i in (0..2 * len - 1).rev() {
            self.write_bit((code.checked_shr(i).unwrap_or(0) & 1) as u32);
        }
    }

    /// Write a signed Exp-Golomb code (`se(v)`).
    #[inline]
    pub fn write_se(&mut self, value: i32) {
        let code = if value <= 0 {
            value.unsigned_abs().wrapping_mul(2)
        } else {
            (value as u32) * 2 - 1
        };

        self.write_ue(code);
    }
}

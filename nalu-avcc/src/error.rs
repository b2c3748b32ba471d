//! Error types for decoder configuration records.

use core::fmt;

/// An error encountered while reading or writing a decoder configuration
/// record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The record ended before all of its fields were read.
    Truncated,
    /// The output buffer is too small to hold the record.
    BufferTooSmall,
    /// The configuration version is not 1.
    UnsupportedVersion(u8),
    /// Reserved bits are not all ones.
    ReservedBits,
    /// A parameter set does not carry the expected NAL unit type.
    UnexpectedUnitType {
        /// The expected NAL unit type.
        expected: u8,
        /// The NAL unit type found in the record.
        found: Option<u8>,
    },
    /// More parameter sets than the count field can describe.
    TooManyParameterSets,
    /// A parameter set is longer than its 16-bit length field allows.
    ParameterSetTooLong,
    /// The NAL unit length size does not fit its 2-bit field.
    InvalidLengthSize,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Truncated => f.write_str("configuration record is truncated"),
            Self::BufferTooSmall => f.write_str("output buffer is too small"),
            Self::UnsupportedVersion(v) => write!(f, "unsupported configuration version {v}"),
            Self::ReservedBits => f.write_str("reserved bits must be all ones"),
            Self::UnexpectedUnitType { expected, found } => match found {
                Some(found) => write!(f, "expected NAL unit type {expected}, found {found}"),
                None => write!(f, "expected NAL unit type {expected}, found empty entry"),
            },
            Self::TooManyParameterSets => f.write_str("too many parameter sets"),
            Self::ParameterSetTooLong => f.write_str("parameter set is too long"),
            Self::InvalidLengthSize => f.write_str("NAL unit length size must be 1 to 4 bytes"),
        }
    }
}

impl core::error::Error for Error {}

/// Result type for decoder configuration records.
pub type Result<T> = core::result::Result<T, Error>;

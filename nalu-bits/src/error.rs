//! Error types for bit cursors.

use core::fmt;

/// An error reported when a cursor is checked at the end of a parse or write.
///
/// Cursor operations themselves never fail. Running past the end of the
/// buffer is recorded in the cursor state and only turned into an error
/// once the caller asks for it, see [`BitCursor::finish`](crate::BitCursor::finish).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The cursor advanced past the end of its buffer.
    Overrun,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Overrun => f.write_str("cursor advanced past the end of the buffer"),
        }
    }
}

impl core::error::Error for Error {}

/// Result type for cursor checkpoints.
pub type Result<T> = core::result::Result<T, Error>;

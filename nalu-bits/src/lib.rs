/*!
A bit-granular cursor for reading and writing H.264 style bitstreams.

`nalu-bits` provides the primitives that parsers for NAL units, parameter sets
and slice headers are built on: fixed-width fields of up to 32 bits at any bit
offset, unsigned and signed Exp-Golomb codes, bulk byte transfer, lookahead and
a scanner for start-marker delimited records.

# Error handling
None of the cursor operations fail. Reading past the end of the buffer yields
zero bits and writing past it is dropped, while the position keeps advancing.
Parse a whole record, then check the cursor once:

```rust
use nalu_bits::BitCursor;

let data = [0b1010_0110_u8, 0x80];
let mut cursor = BitCursor::new(&data[..]);

let flag = cursor.read_bit();
let id = cursor.read_ue();
let kind = cursor.read_bits(4);

assert_eq!((flag, id, kind), (1, 1, 0b0110));
assert_eq!(cursor.finish(), Ok(1));
```

# Features
- `logging`: Forward diagnostics to the `log` crate.

# Safety
This crate forbids unsafe code via a crate-level attribute.
*/

#![no_std]
#![forbid(unsafe_code)]

#[macro_use]
mod log;

mod boundary;
mod cursor;
mod error;
mod exp_golomb;
mod lookahead;
mod transfer;

pub use boundary::{RecordBounds, Records, find_record, is_record_end, is_record_start};
pub use cursor::{BitCursor, CursorStatus};
pub use error::{Error, Result};

/*!
Reading and writing AVC decoder configuration records.

The decoder configuration record (`avcC`) is how MP4 and Matroska files carry
the sequence and picture parameter sets of an H.264 stream, together with the
size of the length prefix that precedes each NAL unit in a sample.

The parameter sets are kept as raw NAL units; parsing their contents is left
to the caller.

# Example
```rust
use nalu_avcc::{DecoderConfigurationRecord, ReadSettings};

let data = [
    0x01, 0x42, 0xc0, 0x1e, 0xff, 0xe1, 0x00, 0x04, 0x67, 0x42, 0xc0, 0x1e, 0x01, 0x00,
    0x02, 0x68, 0xce,
];

let (record, _) = DecoderConfigurationRecord::read(&data, &ReadSettings::default()).unwrap();
assert_eq!(record.length_size(), 4);
assert_eq!(record.sequence_parameter_sets[0], &[0x67, 0x42, 0xc0, 0x1e]);
assert_eq!(record.to_vec().unwrap(), data);
```

# Features
- `logging`: Forward diagnostics to the `log` crate.

# Safety
This crate forbids unsafe code via a crate-level attribute.
*/

#![no_std]
#![forbid(unsafe_code)]

extern crate alloc;

#[macro_use]
mod log;

mod error;
mod record;

pub use error::{Error, Result};
pub use record::{
    CONFIGURATION_VERSION, DecoderConfigurationRecord, PICTURE_PARAMETER_SET, ParameterSets,
    SEQUENCE_PARAMETER_SET,
};

/// Settings for reading a decoder configuration record.
#[derive(Copy, Clone, Debug, Default)]
pub struct ReadSettings {
    /// Reject records that deviate from the format instead of recovering.
    ///
    /// In strict mode a version other than 1, reserved bits that are not all
    /// ones and parameter sets of the wrong NAL unit type are errors.
    /// Otherwise they are logged, and mistyped parameter sets are dropped.
    pub strict: bool,
}

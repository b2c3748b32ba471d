//! The AVC decoder configuration record.
//!
//! Layout (ISO/IEC 14496-15, 5.2.4.1):
//!
//! ```text
//! u8   configuration_version (1)
//! u8   profile_indication
//! u8   profile_compatibility
//! u8   level_indication
//! u6   reserved (all ones)
//! u2   length_size_minus_one
//! u3   reserved (all ones)
//! u5   num_sequence_parameter_sets
//!      { u16 length, [u8; length] } * num_sequence_parameter_sets
//! u8   num_picture_parameter_sets
//!      { u16 length, [u8; length] } * num_picture_parameter_sets
//! ```

use alloc::vec;
use alloc::vec::Vec;

use nalu_bits::BitCursor;
use smallvec::SmallVec;

use crate::ReadSettings;
use crate::error::{Error, Result};

/// The only configuration version that is defined.
pub const CONFIGURATION_VERSION: u8 = 1;
/// NAL unit type of a sequence parameter set.
pub const SEQUENCE_PARAMETER_SET: u8 = 7;
/// NAL unit type of a picture parameter set.
pub const PICTURE_PARAMETER_SET: u8 = 8;

const MAX_SEQUENCE_PARAMETER_SETS: usize = 0x1f;
const MAX_PICTURE_PARAMETER_SETS: usize = 0xff;
const MAX_PARAMETER_SET_LEN: usize = 0xffff;

/// Size of the fixed fields and the two count fields.
const HEADER_LEN: usize = 7;

/// A list of raw parameter sets, each a complete NAL unit including its
/// header byte.
///
/// `SmallVec` is invariant over its item type, so a record borrowing a
/// shorter-lived buffer can't be compared with or assigned from a
/// `DecoderConfigurationRecord<'static>`.
pub type ParameterSets<'a> = SmallVec<[&'a [u8]; 2]>;

/// An AVC decoder configuration record.
///
/// Parameter sets are kept as raw NAL units borrowed from the input; their
/// contents are not interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecoderConfigurationRecord<'a> {
    /// The configuration version. Always written as 1.
    pub version: u8,
    /// The profile code, as in `profile_idc` of the sequence parameter sets.
    pub profile_indication: u8,
    /// The constraint flags byte between profile and level.
    pub profile_compatibility: u8,
    /// The level code, as in `level_idc` of the sequence parameter sets.
    pub level_indication: u8,
    /// The size in bytes of the NAL unit length prefix in samples, minus one.
    pub length_size_minus_one: u8,
    /// The sequence parameter sets.
    pub sequence_parameter_sets: ParameterSets<'a>,
    /// The picture parameter sets.
    pub picture_parameter_sets: ParameterSets<'a>,
}

impl<'a> DecoderConfigurationRecord<'a> {
    /// Read a record from the start of `data`.
    ///
    /// Returns the record and the number of bytes it occupied.
    pub fn read(data: &'a [u8], settings: &ReadSettings) -> Result<(Self, usize)> {
        let mut c = BitCursor::new(data);

        let version = c.read_byte_fast();
        let profile_indication = c.read_byte_fast();
        let profile_compatibility = c.read_byte_fast();
        let level_indication = c.read_byte_fast();
        let reserved_high = c.read_bits(6);
        let length_size_minus_one = c.read_bits(2) as u8;
        let reserved_low = c.read_bits(3);

        let num_sequence_parameter_sets = c.read_bits(5) as usize;
        let mut sequence_parameter_sets =
            read_parameter_sets(&mut c, num_sequence_parameter_sets);

        let num_picture_parameter_sets = c.read_byte_fast() as usize;
        let mut picture_parameter_sets = read_parameter_sets(&mut c, num_picture_parameter_sets);

        let len = c.finish().map_err(|_| Error::Truncated)?;

        if version != CONFIGURATION_VERSION {
            if settings.strict {
                return Err(Error::UnsupportedVersion(version));
            }

            lwarn!("unexpected configuration version {}", version);
        }

        if reserved_high != 0x3f || reserved_low != 0x07 {
            if settings.strict {
                return Err(Error::ReservedBits);
            }

            lwarn!("reserved bits in configuration record are not all ones");
        }

        retain_unit_type(
            &mut sequence_parameter_sets,
            SEQUENCE_PARAMETER_SET,
            settings,
        )?;
        retain_unit_type(&mut picture_parameter_sets, PICTURE_PARAMETER_SET, settings)?;

        ldebug!(
            "read configuration record with {} sequence and {} picture parameter sets",
            sequence_parameter_sets.len(),
            picture_parameter_sets.len()
        );

        Ok((
            Self {
                version,
                profile_indication,
                profile_compatibility,
                level_indication,
                length_size_minus_one,
                sequence_parameter_sets,
                picture_parameter_sets,
            },
            len,
        ))
    }

    /// The size in bytes of the NAL unit length prefix in samples.
    pub fn length_size(&self) -> usize {
        self.length_size_minus_one as usize + 1
    }

    /// The number of bytes [`DecoderConfigurationRecord::write`] produces.
    pub fn encoded_len(&self) -> usize {
        HEADER_LEN
            + self
                .sequence_parameter_sets
                .iter()
                .chain(self.picture_parameter_sets.iter())
                .map(|set| 2 + set.len())
                .sum::<usize>()
    }

    fn validate(&self) -> Result<()> {
        if self.length_size_minus_one > 3 {
            return Err(Error::InvalidLengthSize);
        }

        if self.sequence_parameter_sets.len() > MAX_SEQUENCE_PARAMETER_SETS
            || self.picture_parameter_sets.len() > MAX_PICTURE_PARAMETER_SETS
        {
            return Err(Error::TooManyParameterSets);
        }

        if self
            .sequence_parameter_sets
            .iter()
            .chain(self.picture_parameter_sets.iter())
            .any(|set| set.len() > MAX_PARAMETER_SET_LEN)
        {
            return Err(Error::ParameterSetTooLong);
        }

        Ok(())
    }

    /// Write the record to the start of `buf`.
    ///
    /// Returns the number of bytes written.
    pub fn write(&self, buf: &mut [u8]) -> Result<usize> {
        self.validate()?;

        let mut c = BitCursor::new(buf);

        c.write_byte_fast(CONFIGURATION_VERSION);
        c.write_byte_fast(self.profile_indication);
        c.write_byte_fast(self.profile_compatibility);
        c.write_byte_fast(self.level_indication);
        c.write_bits(6, 0x3f);
        c.write_bits(2, self.length_size_minus_one as u32);
        c.write_bits(3, 0x07);

        c.write_bits(5, self.sequence_parameter_sets.len() as u32);
        write_parameter_sets(&mut c, &self.sequence_parameter_sets);

        c.write_byte_fast(self.picture_parameter_sets.len() as u8);
        write_parameter_sets(&mut c, &self.picture_parameter_sets);

        c.finish().map_err(|_| Error::BufferTooSmall)
    }

    /// Write the record into a newly allocated buffer.
    pub fn to_vec(&self) -> Result<Vec<u8>> {
        let mut buf = vec![0; self.encoded_len()];
        self.write(&mut buf)?;

        Ok(buf)
    }
}

fn read_parameter_sets<'a>(c: &mut BitCursor<&'a [u8]>, count: usize) -> ParameterSets<'a> {
    let mut sets = ParameterSets::new();

    for _ in 0..count {
        let len = c.read_bits(16) as usize;
        sets.push(c.take_bytes(len));
    }

    sets
}

fn write_parameter_sets(c: &mut BitCursor<&mut [u8]>, sets: &[&[u8]]) {
    for set in sets {
        c.write_bits(16, set.len() as u32);
        c.write_bytes(set);
    }
}

/// The NAL unit type carried in the header byte of a parameter set.
fn unit_type(set: &[u8]) -> Option<u8> {
    set.first().map(|header| header & 0x1f)
}

/// Drop all parameter sets that are not of the `expected` type, or fail in
/// strict mode.
fn retain_unit_type(
    sets: &mut ParameterSets<'_>,
    expected: u8,
    settings: &ReadSettings,
) -> Result<()> {
    if settings.strict
        && let Some(found) = sets
            .iter()
            .map(|set| unit_type(set))
            .find(|found| *found != Some(expected))
    {
        return Err(Error::UnexpectedUnitType { expected, found });
    }

    sets.retain(|set| {
        let found = unit_type(set);

        if found != Some(expected) {
            lwarn!(
                "skipping parameter set of type {:?}, expected {}",
                found,
                expected
            );
            return false;
        }

        true
    });

    Ok(())
}

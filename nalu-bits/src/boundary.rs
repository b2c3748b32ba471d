//! Locating records in a byte stream.
//!
//! Records are delimited by start markers (`00 00 01` or `00 00 00 01`). A
//! record ends right before the next `00 00 00` or `00 00 01` sequence, or at
//! the end of the data.

use core::ops::Range;

/// Whether `window` begins with a 3- or 4-byte record start marker.
///
/// Windows that are too short to hold a marker never match.
#[inline]
pub fn is_record_start(window: &[u8]) -> bool {
    matches!(window, [0, 0, 1, ..] | [0, 0, 0, 1, ..])
}

/// Whether `window` begins with a sequence that terminates the current
/// record, i.e. `00 00 00` (padding) or `00 00 01` (the next start marker).
#[inline]
pub fn is_record_end(window: &[u8]) -> bool {
    matches!(window, [0, 0, 0 | 1, ..])
}

/// The location of a single record inside a byte stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordBounds {
    /// The range of the start marker.
    pub marker: Range<usize>,
    /// The range of the record payload, following the marker.
    pub payload: Range<usize>,
}

/// Find the first record in `data`.
///
/// Returns `None` if `data` contains no start marker.
pub fn find_record(data: &[u8]) -> Option<RecordBounds> {
    let marker = (0..data.len()).find(|&i| is_record_start(&data[i..]))?;
    // `00 00 00 01` only matches where `00 00 01` doesn't.
    let start = if data[marker + 2] == 1 {
        marker + 3
    } else {
        marker + 4
    };

    let end = (start..data.len())
        .find(|&i| is_record_end(&data[i..]))
        .unwrap_or(data.len());

    ltrace!("record at {}..{}", start, end);

    Some(RecordBounds {
        marker: marker..start,
        payload: start..end,
    })
}

/// An iterator over the payloads of all records in a byte stream.
///
/// Anything in front of the first start marker is skipped, as is padding
/// between records.
#[derive(Debug, Clone)]
pub struct Records<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> Records<'a> {
    /// Create a new iterator over the records in `data`.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, offset: 0 }
    }
}

impl<'a> Iterator for Records<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        let tail = self.data.get(self.offset..)?;
        let bounds = find_record(tail)?;
        let payload = &tail[bounds.payload.clone()];

        self.offset += bounds.payload.end;

        Some(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_markers() {
        for x in 0..=255 {
            assert!(is_record_start(&[0, 0, 1, x]));
        }

        assert!(is_record_start(&[0, 0, 0, 1]));
        assert!(is_record_start(&[0, 0, 1]));
        assert!(!is_record_start(&[0, 1, 0, 1]));
        assert!(!is_record_start(&[0, 0, 0, 0]));
        assert!(!is_record_start(&[0, 0, 2, 1]));
        assert!(!is_record_start(&[0, 0, 0]));
        assert!(!is_record_start(&[]));
    }

    #[test]
    fn end_markers() {
        for y in 0..=255 {
            assert!(is_record_end(&[0, 0, 0, y]));
            assert!(is_record_end(&[0, 0, 1, y]));
        }

        assert!(!is_record_end(&[0, 0, 2, 0]));
        assert!(!is_record_end(&[1, 0, 0, 0]));
        assert!(!is_record_end(&[0, 0]));
    }

    #[test]
    fn find_three_byte_marker() {
        let data = [0xff, 0, 0, 1, 0x67, 0x42, 0, 0, 1, 0x68];
        let bounds = find_record(&data).unwrap();

        assert_eq!(bounds.marker, 1..4);
        assert_eq!(bounds.payload, 4..6);
    }

    #[test]
    fn find_four_byte_marker() {
        let data = [0, 0, 0, 1, 0x09, 0xf0, 0, 0, 0, 1];
        let bounds = find_record(&data).unwrap();

        assert_eq!(bounds.marker, 0..4);
        assert_eq!(bounds.payload, 4..6);
    }

    #[test]
    fn record_until_end_of_data() {
        let data = [0, 0, 1, 0x65, 0x88, 0x84, 0];
        let bounds = find_record(&data).unwrap();

        assert_eq!(bounds.payload, 3..7);
    }

    #[test]
    fn no_marker() {
        assert_eq!(find_record(&[]), None);
        assert_eq!(find_record(&[0, 0, 2, 0, 1]), None);
    }

    #[test]
    fn iterate_records() {
        let data = [
            0, 0, 0, 1, 0x67, 0x64, 0x00, 0x1f, // sequence parameter set
            0, 0, 0, 1, 0x68, 0xee, // picture parameter set
            0, 0, 0, 0, // padding
            0, 0, 1, 0x65, 0x88, // slice
        ];

        let records: [&[u8]; 3] = [&[0x67, 0x64, 0x00, 0x1f], &[0x68, 0xee], &[0x65, 0x88]];
        let mut iter = Records::new(&data);

        for expected in records {
            assert_eq!(iter.next(), Some(expected));
        }

        assert_eq!(iter.next(), None);
    }
}

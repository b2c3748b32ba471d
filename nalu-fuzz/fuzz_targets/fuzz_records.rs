#![no_main]

use libfuzzer_sys::fuzz_target;
use nalu_bits::{Records, find_record, is_record_end};

fuzz_target!(|data: &[u8]| {
    if let Some(bounds) = find_record(data) {
        assert_eq!(bounds.marker.end, bounds.payload.start);
        assert!(bounds.payload.end <= data.len());
    }

    for payload in Records::new(data) {
        assert!(payload.windows(3).all(|w| !is_record_end(w)));
    }
});

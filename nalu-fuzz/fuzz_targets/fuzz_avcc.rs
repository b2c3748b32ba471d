#![no_main]

use libfuzzer_sys::fuzz_target;
use nalu_avcc::{DecoderConfigurationRecord, ReadSettings};

fuzz_target!(|data: &[u8]| {
    let settings = ReadSettings::default();

    if let Ok((record, len)) = DecoderConfigurationRecord::read(data, &settings) {
        assert!(len <= data.len());

        let encoded = record.to_vec().unwrap();
        assert_eq!(encoded.len(), record.encoded_len());

        let (reread, reread_len) = DecoderConfigurationRecord::read(&encoded, &settings).unwrap();
        assert_eq!(reread_len, encoded.len());
        assert_eq!(reread.sequence_parameter_sets, record.sequence_parameter_sets);
        assert_eq!(reread.picture_parameter_sets, record.picture_parameter_sets);
    }
});

#![no_main]

use libfuzzer_sys::fuzz_target;
use nalu_bits::BitCursor;

// Layout:
// [0]     length of the op script
// [1..n]  op script, one byte per operation
// [n..]   data the cursor reads from
//
// Every decoded value is written into a second buffer and read back, which
// must reproduce it as long as neither cursor overran.

fuzz_target!(|data: &[u8]| {
    let Some((&script_len, rest)) = data.split_first() else {
        return;
    };

    let (script, input) = rest.split_at((script_len as usize).min(rest.len()));

    let mut reader = BitCursor::new(input);
    let mut out = vec![0_u8; input.len() * 2 + 16];
    let mut writer = BitCursor::new(&mut out[..]);
    let mut values = Vec::new();

    for &op in script {
        let arg = op >> 3;

        match op & 7 {
            0 => {
                let v = reader.read_bits(arg);
                writer.write_bits(arg, v);
                values.push((0, arg, v as i64));
            }
            1 => {
                let v = reader.read_ue();
                writer.write_ue(v);
                values.push((1, 0, v as i64));
            }
            2 => {
                let v = reader.read_se();

                // The widest unsigned code maps to a value outside of `i32`.
                if v == i32::MIN {
                    return;
                }

                writer.write_se(v);
                values.push((2, 0, v as i64));
            }
            3 => {
                let v = reader.read_byte_fast();
                writer.write_byte_fast(v);
                values.push((3, 0, v as i64));
            }
            4 => {
                let peeked = reader.next_bits(arg);
                let position = reader.bit_position();
                assert_eq!(reader.fork().read_bits(arg), peeked);
                assert_eq!(reader.bit_position(), position);
            }
            5 => {
                let mut buf = [0_u8; 32];
                let len = reader.read_bytes(&mut buf[..arg as usize]);
                assert!(len <= arg as usize);
            }
            6 => {
                let count = arg as usize;
                let peeked = reader.peek_bytes(count);

                assert_eq!(reader.next_bytes(count), peeked.unwrap_or(0));
                assert_eq!(peeked.is_some(), (1..=8).contains(&count) && count <= reader.bytes_left());
            }
            _ => {
                reader.skip_bits(arg as usize);
            }
        }

        assert!(reader.position() <= input.len());
    }

    if reader.overran() || writer.overran() {
        return;
    }

    // Byte transfers and skips are not mirrored, so only replay when the
    // script consisted of decoded values only.
    if script.iter().any(|op| op & 7 >= 5) {
        return;
    }

    let written = writer.bit_position();
    let mut replay = BitCursor::new(&out[..]);

    for (kind, arg, expected) in values {
        let v = match kind {
            0 => replay.read_bits(arg) as i64,
            1 => replay.read_ue() as i64,
            2 => replay.read_se() as i64,
            _ => replay.read_byte_fast() as i64,
        };

        assert_eq!(v, expected);
    }

    assert_eq!(replay.bit_position(), written);
});

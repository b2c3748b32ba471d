//! Benchmarks for the byte fast path and Exp-Golomb decoding.

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use nalu_bits::BitCursor;
use std::hint::black_box;

const LEN: usize = 64 * 1024;

fn bench_bytes(c: &mut Criterion) {
    let data: Vec<u8> = (0..LEN).map(|i| (i * 31) as u8).collect();

    let mut group = c.benchmark_group("bytes");
    group.throughput(Throughput::Bytes(LEN as u64));
    group.bench_function("read_byte_fast", |b| {
        b.iter(|| {
            let mut cursor = BitCursor::new(black_box(&data[..]));
            let mut sum = 0_u32;

            while !cursor.at_end() {
                sum = sum.wrapping_add(cursor.read_byte_fast() as u32);
            }

            black_box(sum)
        });
    });
    group.bench_function("read_bits_8", |b| {
        b.iter(|| {
            let mut cursor = BitCursor::new(black_box(&data[..]));
            let mut sum = 0_u32;

            while !cursor.at_end() {
                sum = sum.wrapping_add(cursor.read_bits(8));
            }

            black_box(sum)
        });
    });
    group.finish();
}

fn bench_exp_golomb(c: &mut Criterion) {
    let mut data = vec![0_u8; LEN];
    let mut writer = BitCursor::new(&mut data[..]);
    let mut count = 0;

    while !writer.at_end() {
        writer.write_ue(count % 1000);
        count += 1;
    }

    let mut group = c.benchmark_group("exp_golomb");
    group.throughput(Throughput::Elements(count as u64));
    group.bench_function("read_ue", |b| {
        b.iter(|| {
            let mut cursor = BitCursor::new(black_box(&data[..]));
            let mut sum = 0_u32;

            for _ in 0..count {
                sum = sum.wrapping_add(cursor.read_ue());
            }

            black_box(sum)
        });
    });
    group.finish();
}

criterion_group!(benches, bench_bytes, bench_exp_golomb);
criterion_main!(benches);

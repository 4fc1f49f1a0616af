use criterion::{Criterion, black_box, criterion_group, criterion_main};

use dp100_core::{Command, checksum, frame};

fn bench_checksum(c: &mut Criterion) {
    let data = vec![0xA5u8; 255];

    c.bench_function("checksum_255", |b| {
        b.iter(|| checksum::calculate(black_box(&data)))
    });
}

fn bench_codec(c: &mut Criterion) {
    let payload = vec![0x5Au8; 64];
    let response = frame::encode_response(251, Command::BasicInfo.code(), &payload).unwrap();

    c.bench_function("encode_64", |b| {
        b.iter(|| frame::encode(251, Command::BasicSet, black_box(&payload)))
    });

    c.bench_function("decode_64", |b| {
        b.iter(|| frame::decode(black_box(&response)))
    });
}

criterion_group!(benches, bench_checksum, bench_codec);
criterion_main!(benches);

//! Benchmarks for the text codecs.
//!
//! Each codec is measured on a few payload sizes, encode and decode
//! separately, over the same random input.

use binkit_core::{base58, base64, bech32, encoding};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rand::Rng;

fn random_bytes(len: usize) -> Vec<u8> {
    let mut rng = rand::rng();
    let mut bytes = vec![0u8; len];
    rng.fill(bytes.as_mut_slice());
    bytes
}

fn hex_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("hex");

    for size in [32, 256, 4096] {
        let data = random_bytes(size);
        let text = encoding::to_hex(&data);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::new("encode", size), &data, |b, data| {
            b.iter(|| black_box(encoding::to_hex(black_box(data))))
        });
        group.bench_with_input(BenchmarkId::new("decode", size), &text, |b, text| {
            b.iter(|| black_box(encoding::from_hex(black_box(text)).unwrap()))
        });
    }

    group.finish();
}

fn base58_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("base58");

    // Quadratic in the input length, so stay small
    for size in [20, 32, 64, 256] {
        let data = random_bytes(size);
        let text = base58::to_base58(&data);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::new("encode", size), &data, |b, data| {
            b.iter(|| black_box(base58::to_base58(black_box(data))))
        });
        group.bench_with_input(BenchmarkId::new("decode", size), &text, |b, text| {
            b.iter(|| black_box(base58::from_base58(black_box(text)).unwrap()))
        });
    }

    group.finish();
}

fn base64_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("base64");

    for size in [32, 256, 4096] {
        let data = random_bytes(size);
        let text = base64::to_base64(&data);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::new("encode", size), &data, |b, data| {
            b.iter(|| black_box(base64::to_base64(black_box(data))))
        });
        group.bench_with_input(BenchmarkId::new("encode_url_safe", size), &data, |b, data| {
            b.iter(|| black_box(base64::to_base64_url_safe(black_box(data))))
        });
        group.bench_with_input(BenchmarkId::new("decode", size), &text, |b, text| {
            b.iter(|| black_box(base64::from_base64(black_box(text)).unwrap()))
        });
    }

    group.finish();
}

fn bech32_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("bech32");

    // 20 and 32 bytes are the common witness program sizes
    for size in [20, 32] {
        let data = random_bytes(size);
        let text = bech32::encode_bytes("bc", &data).unwrap();

        group.bench_with_input(BenchmarkId::new("encode_bytes", size), &data, |b, data| {
            b.iter(|| black_box(bech32::encode_bytes("bc", black_box(data)).unwrap()))
        });
        group.bench_with_input(BenchmarkId::new("decode_bytes", size), &text, |b, text| {
            b.iter(|| black_box(bech32::decode_bytes(black_box(text)).unwrap()))
        });
    }

    let grouped = bech32::convert_to_5bit(&random_bytes(50));
    group.bench_function("convert_from_5bit", |b| {
        b.iter(|| black_box(bech32::convert_from_5bit(black_box(&grouped)).unwrap()))
    });

    group.finish();
}

criterion_group!(
    benches,
    hex_benchmarks,
    base58_benchmarks,
    base64_benchmarks,
    bech32_benchmarks
);
criterion_main!(benches);

// ============================================================================
// Arithmetic Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. BigInteger - Parsing, hex round-trip and multiplication
// 2. BigNumber - Truncating arithmetic at increasing scales
// 3. Coercion - Operand normalization cost by input kind
// ============================================================================

use bignum_values::prelude::*;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

fn digits(n: usize) -> String {
    (0..n).map(|i| char::from(b'1' + (i % 9) as u8)).collect()
}

// ============================================================================
// BigInteger Benchmarks
// ============================================================================

fn benchmark_big_integer(c: &mut Criterion) {
    let mut group = c.benchmark_group("big_integer");

    for len in [20, 100, 1000].iter() {
        let text = digits(*len);
        let value = BigInteger::new(text.as_str()).unwrap();
        let hex = value.to_base16();

        group.bench_with_input(BenchmarkId::new("parse_decimal", len), &text, |b, text| {
            b.iter(|| black_box(BigInteger::new(text.as_str()).unwrap()));
        });

        group.bench_with_input(BenchmarkId::new("hex_roundtrip", len), &hex, |b, hex| {
            b.iter(|| black_box(BigInteger::from_base16(hex).unwrap().to_base16()));
        });

        group.bench_with_input(BenchmarkId::new("mul", len), &value, |b, value| {
            b.iter(|| black_box(value * value));
        });
    }

    group.finish();
}

// ============================================================================
// BigNumber Benchmarks
// ============================================================================

fn benchmark_big_number(c: &mut Criterion) {
    let mut group = c.benchmark_group("big_number");

    for scale in [2, 18, 100].iter() {
        let x = BigNumber::with_scale("123456789.987654321", *scale).unwrap();
        let y = BigNumber::with_scale("0.000123", *scale).unwrap();

        group.bench_with_input(BenchmarkId::new("add", scale), &(&x, &y), |b, (x, y)| {
            b.iter(|| black_box(x.add(*y, None).unwrap()));
        });

        group.bench_with_input(BenchmarkId::new("mul", scale), &(&x, &y), |b, (x, y)| {
            b.iter(|| black_box(x.mul(*y, None).unwrap()));
        });

        group.bench_with_input(BenchmarkId::new("div", scale), &(&x, &y), |b, (x, y)| {
            b.iter(|| black_box(x.div(*y, None).unwrap()));
        });

        group.bench_with_input(BenchmarkId::new("cmp", scale), &(&x, &y), |b, (x, y)| {
            b.iter(|| black_box(x.cmp(*y, None).unwrap()));
        });
    }

    group.finish();
}

// ============================================================================
// Coercion Benchmarks
// ============================================================================

fn benchmark_coercion(c: &mut Criterion) {
    let mut group = c.benchmark_group("coercion");
    let x = BigNumber::new("1.5").unwrap();

    group.bench_function("string", |b| {
        b.iter(|| black_box(x.add(black_box("2.25"), None).unwrap()));
    });

    group.bench_function("native_int", |b| {
        b.iter(|| black_box(x.add(black_box(2i64), None).unwrap()));
    });

    group.bench_function("float", |b| {
        b.iter(|| black_box(x.add(black_box(1.0e-7), None).unwrap()));
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_big_integer,
    benchmark_big_number,
    benchmark_coercion
);
criterion_main!(benches);

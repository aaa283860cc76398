//! Benchmarks comparing scalar vs lane implementations of compute primitives

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lanewise_core::{Avx, NoSimd, Sse2};
use lanewise_kernels::{ComputePrimitives, LaneBackend, ScalarBackend};

/// Generate test data with specific patterns
fn generate_test_data(size: usize) -> Vec<f32> {
    (0..size).map(|i| (i as f32 * 0.1).sin() * 100.0).collect()
}

fn bench_sum(c: &mut Criterion) {
    let mut group = c.benchmark_group("sum_f32");

    for &size in &[64, 1024, 65536] {
        let data = generate_test_data(size);

        group.bench_with_input(BenchmarkId::new("scalar", size), &data, |b, data| {
            b.iter(|| black_box(ScalarBackend::new().sum(data)))
        });
        group.bench_with_input(BenchmarkId::new("no_simd", size), &data, |b, data| {
            b.iter(|| black_box(LaneBackend::<NoSimd>::new().sum(data)))
        });
        group.bench_with_input(BenchmarkId::new("sse2", size), &data, |b, data| {
            b.iter(|| black_box(LaneBackend::<Sse2>::new().sum(data)))
        });
        group.bench_with_input(BenchmarkId::new("avx", size), &data, |b, data| {
            b.iter(|| black_box(LaneBackend::<Avx>::new().sum(data)))
        });
    }

    group.finish();
}

fn bench_dot_product(c: &mut Criterion) {
    let mut group = c.benchmark_group("dot_product_f32");

    for &size in &[1024, 65536] {
        let a = generate_test_data(size);
        let b_data: Vec<f32> = a.iter().map(|x| x * 0.5).collect();

        group.bench_with_input(BenchmarkId::new("scalar", size), &size, |b, _| {
            b.iter(|| black_box(ScalarBackend::new().dot_product(&a, &b_data)))
        });
        group.bench_with_input(BenchmarkId::new("avx", size), &size, |b, _| {
            b.iter(|| black_box(LaneBackend::<Avx>::new().dot_product(&a, &b_data)))
        });
    }

    group.finish();
}

fn bench_count_less_than(c: &mut Criterion) {
    let data = generate_test_data(65536);

    c.bench_function("count_less_than_f32/scalar", |b| {
        b.iter(|| black_box(ScalarBackend::new().count_less_than(&data, 0.0)))
    });
    c.bench_function("count_less_than_f32/avx", |b| {
        b.iter(|| black_box(LaneBackend::<Avx>::new().count_less_than(&data, 0.0)))
    });
}

criterion_group!(benches, bench_sum, bench_dot_product, bench_count_less_than);
criterion_main!(benches);

//! Criterion benchmarks for products and inversion.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use densemat::{Matrix, Side};

fn test_matrix(size: usize) -> Matrix {
    // diagonally dominant, so always invertible
    Matrix::from_fn(size, size, |i, j| {
        if i == j {
            size as f64 + 1.0
        } else {
            ((i * 7 + j * 3) % 10) as f64 / 10.0
        }
    })
}

fn bench_dot(c: &mut Criterion) {
    let mut group = c.benchmark_group("dot");
    for size in [16, 64, 128] {
        let a = test_matrix(size);
        let b = test_matrix(size);
        group.bench_with_input(BenchmarkId::new("row_major", size), &size, |bench, _| {
            bench.iter(|| black_box(a.dot(&b, Side::Right)))
        });
        group.bench_with_input(BenchmarkId::new("transposed_view", size), &size, |bench, _| {
            bench.iter(|| black_box(a.t().dot(&b, Side::Right)))
        });
        group.bench_with_input(BenchmarkId::new("in_place", size), &size, |bench, _| {
            bench.iter_batched(
                || a.clone(),
                |mut m| {
                    m.dot_in_place(&b, Side::Right).ok();
                    m
                },
                criterion::BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_inverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("inverse");
    for size in [4, 16, 64] {
        let a = test_matrix(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |bench, _| {
            bench.iter(|| black_box(a.inverse()))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_dot, bench_inverse);
criterion_main!(benches);

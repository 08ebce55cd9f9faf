//! Naive i-j-k versus transposed-B multiply.

use classic_algos::{multiply, multiply_transposed, Matrix};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn square(size: usize, f: impl Fn(usize, usize) -> f64) -> Matrix<f64> {
    let data = (0..size * size).map(|idx| f(idx / size, idx % size)).collect();
    Matrix::from_vec(size, size, data).expect("size is non-zero")
}

fn bench_multiply(c: &mut Criterion) {
    let mut group = c.benchmark_group("multiply");

    for size in [16, 64, 128] {
        let a = square(size, |i, j| ((i + j) % 100) as f64);
        let b = square(size, |i, j| (i as f64) - (j as f64));

        group.bench_with_input(BenchmarkId::new("naive_ijk", size), &size, |bench, _| {
            bench.iter(|| multiply(black_box(&a), black_box(&b)))
        });
        group.bench_with_input(BenchmarkId::new("transposed", size), &size, |bench, _| {
            bench.iter(|| multiply_transposed(black_box(&a), black_box(&b)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_multiply);
criterion_main!(benches);

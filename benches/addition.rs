//! Element-wise addition benchmarks.
//!
//! Compares the scalar and SIMD implementations across vector sizes that
//! walk the cache hierarchy, with `ndarray` as an external reference.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ndarray::Array1;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use intbench::{add, add_into, scalar_add, ARRAY_LEN};

/// Sizes spanning the benchmark's own 256-element arrays up to vectors
/// that no longer fit in L2.
///
/// Note: i32 = 4 bytes, so 262_144 elements = 1 MiB.
const VECTOR_SIZES: &[usize] = &[
    ARRAY_LEN, // 1 KiB - the timing binaries' size
    4_096,     // 16 KiB - L1 cache
    65_536,    // 256 KiB - L2 cache
    262_144,   // 1 MiB - L2 cache
    1_048_576, // 4 MiB - L2→L3 transition
    4_194_304, // 16 MiB - L3 cache
];

/// Generates reproducible pseudo-random test data for benchmarking.
///
/// A fixed seed keeps the data identical across runs so timings stay
/// comparable; values span negatives to exercise signed arithmetic.
fn generate_test_data(len: usize) -> (Vec<i32>, Vec<i32>) {
    let mut rng = StdRng::seed_from_u64(42);

    let a: Vec<i32> = (0..len).map(|_| rng.random_range(-1_000..1_000)).collect();
    let b: Vec<i32> = (0..len).map(|_| rng.random_range(-1_000..1_000)).collect();

    (a, b)
}

/// Formats vector sizes into human-readable strings.
fn format_size(elements: usize) -> String {
    let bytes = elements * std::mem::size_of::<i32>();

    if bytes >= 1_048_576 {
        format!("{:.1}_MiB", bytes as f64 / 1_048_576.0)
    } else if bytes >= 1024 {
        format!("{:.1}_KiB", bytes as f64 / 1024.0)
    } else {
        format!("{bytes}_B")
    }
}

fn benchmark_addition_implementations(c: &mut Criterion) {
    for &size in VECTOR_SIZES {
        let mut group = c.benchmark_group(format!("Addition_{}", format_size(size)));

        // Both input vectors are read once per operation.
        group.throughput(Throughput::Bytes(
            (size * std::mem::size_of::<i32>() * 2) as u64,
        ));

        let (a_vec, b_vec) = generate_test_data(size);
        let a_slice = a_vec.as_slice();
        let b_slice = b_vec.as_slice();

        group.bench_with_input(
            BenchmarkId::new("simd", size),
            &(a_slice, b_slice),
            |bencher, (a, b)| bencher.iter(|| black_box(add(black_box(*a), black_box(*b)))),
        );

        group.bench_with_input(
            BenchmarkId::new("scalar", size),
            &(a_slice, b_slice),
            |bencher, (a, b)| {
                bencher.iter(|| black_box(scalar_add(black_box(*a), black_box(*b))))
            },
        );

        // The in-place path the timing binaries run: no per-call allocation.
        let mut out = vec![0i32; size];
        group.bench_with_input(
            BenchmarkId::new("simd_into", size),
            &(a_slice, b_slice),
            |bencher, (a, b)| {
                bencher.iter(|| {
                    add_into(black_box(*a), black_box(*b), &mut out);
                    black_box(out.as_slice());
                })
            },
        );

        let a_ndarray = Array1::from_vec(a_vec.clone());
        let b_ndarray = Array1::from_vec(b_vec.clone());
        group.bench_with_input(
            BenchmarkId::new("ndarray", size),
            &(&a_ndarray, &b_ndarray),
            |bencher, (a, b)| bencher.iter(|| black_box(*a + *b)),
        );

        group.finish();
    }
}

criterion_group!(benches, benchmark_addition_implementations);
criterion_main!(benches);

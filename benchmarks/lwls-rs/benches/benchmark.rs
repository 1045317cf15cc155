//! LWLS benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Scalability (1K to 50K raw pairs)
//! - Output grid resolution
//! - Bandwidth
//! - Kernels
//! - Rotated smoothing (linear and quadratic)
//! - Sequential vs. parallel execution
//! - Bilinear resampling
//!
//! Run with: `cargo bench`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use lwls_rs::prelude::*;
use rand::prelude::*;
use rand_distr::{Normal, Uniform};
use std::hint::black_box;

// ============================================================================
// Data Generation with Reproducible RNG
// ============================================================================

/// Raw covariance-like pairs: z = exp(-|x - y|) + noise at uniform locations.
fn generate_covariance_pairs(size: usize, seed: u64) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise_dist = Normal::new(0.0, 0.1).unwrap();
    let loc_dist: Uniform<f64> = Uniform::new(0.0, 1.0).unwrap();

    let mut t_pairs = Vec::with_capacity(2 * size);
    let mut values = Vec::with_capacity(size);
    for _ in 0..size {
        let x = loc_dist.sample(&mut rng);
        let y = loc_dist.sample(&mut rng);
        t_pairs.push(x);
        t_pairs.push(y);
        values.push((-(x - y).abs()).exp() + noise_dist.sample(&mut rng));
    }
    let weights = vec![1.0; size];
    (t_pairs, values, weights)
}

/// Raw pairs from curves sampled on a common design, without the diagonal.
fn generate_off_diagonal_pairs(points: usize, curves: usize, seed: u64) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise_dist = Normal::new(0.0, 0.1).unwrap();
    let design: Vec<f64> = (0..points).map(|i| i as f64 / (points - 1) as f64).collect();

    let mut t_pairs = Vec::new();
    let mut values = Vec::new();
    for _ in 0..curves {
        for (i, &s) in design.iter().enumerate() {
            for (j, &t) in design.iter().enumerate() {
                if i == j {
                    continue;
                }
                t_pairs.push(s);
                t_pairs.push(t);
                values.push((s * t).sqrt() + noise_dist.sample(&mut rng));
            }
        }
    }
    let weights = vec![1.0; values.len()];
    (t_pairs, values, weights)
}

fn grid(n: usize) -> Vec<f64> {
    (0..n).map(|i| i as f64 / (n - 1) as f64).collect()
}

fn diagonal(n: usize) -> Vec<f64> {
    grid(n).into_iter().flat_map(|s| [s, s]).collect()
}

// ============================================================================
// Benchmark Functions
// ============================================================================

fn bench_scalability(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalability");
    group.sample_size(30);

    let out = grid(51);
    for size in [1_000, 5_000, 10_000, 50_000] {
        group.throughput(Throughput::Elements(size as u64));

        let (t, z, w) = generate_covariance_pairs(size, 42);

        group.bench_with_input(BenchmarkId::new("grid", size), &size, |b, _| {
            b.iter(|| {
                Lwls::new()
                    .bandwidth(0.1, 0.1)
                    .adapter(Grid)
                    .parallel(false)
                    .build()
                    .unwrap()
                    .fit(black_box(&t), black_box(&z), black_box(&w), &out, &out)
                    .unwrap()
            })
        });
    }
    group.finish();
}

fn bench_grid_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_size");
    group.sample_size(30);

    let (t, z, w) = generate_covariance_pairs(10_000, 42);
    for n in [21, 51, 101] {
        let out = grid(n);
        group.throughput(Throughput::Elements((n * n) as u64));
        group.bench_with_input(BenchmarkId::new("grid", n), &n, |b, _| {
            b.iter(|| mullwlsk([0.1, 0.1], "epan", &t, &z, &w, black_box(&out), &out).unwrap())
        });
    }
    group.finish();
}

fn bench_bandwidth(c: &mut Criterion) {
    let mut group = c.benchmark_group("bandwidth");
    group.sample_size(30);

    let (t, z, w) = generate_covariance_pairs(10_000, 42);
    let out = grid(51);
    for bw in [0.05, 0.1, 0.2, 0.4] {
        group.bench_with_input(BenchmarkId::new("grid", bw), &bw, |b, &bw| {
            b.iter(|| mullwlsk([bw, bw], "epan", black_box(&t), &z, &w, &out, &out).unwrap())
        });
    }
    group.finish();
}

fn bench_kernels(c: &mut Criterion) {
    let mut group = c.benchmark_group("kernels");
    group.sample_size(30);

    let (t, z, w) = generate_covariance_pairs(10_000, 42);
    let out = grid(51);
    for name in ["epan", "rect", "gauss", "gausvar", "quar", "tria"] {
        group.bench_with_input(BenchmarkId::new("grid", name), &name, |b, &name| {
            b.iter(|| mullwlsk([0.1, 0.1], name, black_box(&t), &z, &w, &out, &out).unwrap())
        });
    }
    group.finish();
}

fn bench_rotated(c: &mut Criterion) {
    let mut group = c.benchmark_group("rotated");
    group.sample_size(30);

    let (t, z, w) = generate_off_diagonal_pairs(30, 20, 42);
    let queries = diagonal(101);
    for npoly in [1usize, 2] {
        group.bench_with_input(BenchmarkId::new("diagonal", npoly), &npoly, |b, &npoly| {
            b.iter(|| {
                rotatedmullwlsk([0.1, 0.1], "epan", black_box(&t), &z, &w, &queries, npoly).unwrap()
            })
        });
    }
    group.finish();
}

fn bench_parallel(c: &mut Criterion) {
    let mut group = c.benchmark_group("parallel");
    group.sample_size(30);

    let (t, z, w) = generate_covariance_pairs(20_000, 42);
    let out = grid(101);
    for parallel in [false, true] {
        let model = Lwls::new()
            .bandwidth(0.1, 0.1)
            .parallel(parallel)
            .adapter(Grid)
            .build()
            .unwrap();
        group.bench_with_input(BenchmarkId::new("grid", parallel), &parallel, |b, _| {
            b.iter(|| model.fit(black_box(&t), &z, &w, &out, &out).unwrap())
        });
    }
    group.finish();
}

fn bench_resample(c: &mut Criterion) {
    let mut group = c.benchmark_group("resample");
    group.sample_size(50);

    let (t, z, w) = generate_covariance_pairs(10_000, 42);
    let out = grid(51);
    let surface = mullwlsk([0.1, 0.1], "epan", &t, &z, &w, &out, &out).unwrap();

    let mut rng = StdRng::seed_from_u64(7);
    let loc_dist = Uniform::new(0.0, 1.0).unwrap();
    for size in [1_000, 10_000, 100_000] {
        let xou: Vec<f64> = (0..size).map(|_| loc_dist.sample(&mut rng)).collect();
        let you: Vec<f64> = (0..size).map(|_| loc_dist.sample(&mut rng)).collect();
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("interp2lin", size), &size, |b, _| {
            b.iter(|| {
                interp2lin(&surface.x_grid, &surface.y_grid, &surface.values, black_box(&xou), &you)
                    .unwrap()
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_scalability,
    bench_grid_size,
    bench_bandwidth,
    bench_kernels,
    bench_rotated,
    bench_parallel,
    bench_resample,
);

criterion_main!(benches);

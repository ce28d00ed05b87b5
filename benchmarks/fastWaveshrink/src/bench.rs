//! Wavelet shrinkage benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Scalability (1K to 64K points)
//! - Wavelet families (closed-form Haar and every built-in filter bank)
//! - Shrinkage policies and scaling methods
//! - Batch denoising across many series and matrix rows
//! - Real-world scenarios (spectroscopy, piecewise-constant signals)
//!
//! For serial batch execution, use `FASTWAVESHRINK_MODE=serial cargo bench`.
//! For parallel batch execution, use `FASTWAVESHRINK_MODE=parallel cargo bench`.

use criterion::{BatchSize, BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use fastWaveshrink::prelude::*;
use ndarray::Array2;
use rand::prelude::*;
use rand_distr::Normal;
use std::env;
use std::f64::consts::PI;
use std::hint::black_box;

// ============================================================================
// Helper Functions
// ============================================================================

fn get_config() -> (bool, &'static str) {
    match env::var("FASTWAVESHRINK_MODE").ok().as_deref() {
        Some("serial") => (false, "serial"),
        Some("parallel") | _ => (true, "parallel"),
    }
}

// ============================================================================
// Data Generation with Reproducible RNG
// ============================================================================

/// Generate a smooth sinusoid with Gaussian noise.
fn generate_sine_data(size: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise_dist = Normal::new(0.0, 0.2).unwrap();

    (0..size)
        .map(|i| (i as f64 * 10.0 / size as f64).sin() + noise_dist.sample(&mut rng))
        .collect()
}

/// Generate a piecewise-constant signal (Donoho-Johnstone "blocks").
fn generate_blocks_data(size: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise_dist = Normal::new(0.0, 0.5).unwrap();
    let jumps = [0.1, 0.13, 0.15, 0.23, 0.25, 0.40, 0.44, 0.65, 0.76, 0.78, 0.81];
    let heights = [4.0, -5.0, 3.0, -4.0, 5.0, -4.2, 2.1, 4.3, -3.1, 2.1, -4.2];

    (0..size)
        .map(|i| {
            let t = i as f64 / size as f64;
            let signal: f64 = jumps
                .iter()
                .zip(heights.iter())
                .filter(|&(&j, _)| t >= j)
                .map(|(_, &h)| h)
                .sum();
            signal + noise_dist.sample(&mut rng)
        })
        .collect()
}

/// Generate scientific measurement data (exponential decay with oscillations).
fn generate_scientific_data(size: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise_dist = Normal::new(0.0, 0.05).unwrap();

    (0..size)
        .map(|i| {
            let t = i as f64 * 0.01;
            let signal = (-t * 0.3).exp() * (t * 2.0 * PI).cos();
            signal + noise_dist.sample(&mut rng)
        })
        .collect()
}

/// Generate `count` independent noisy sinusoids.
fn generate_batch(count: usize, size: usize, seed: u64) -> Vec<Vec<f64>> {
    (0..count)
        .map(|k| generate_sine_data(size, seed + k as u64))
        .collect()
}

// ============================================================================
// Benchmark Functions
// ============================================================================

fn bench_scalability(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalability");
    group.sample_size(50);

    for size in [1_024, 4_096, 16_384, 65_536] {
        group.throughput(Throughput::Elements(size as u64));
        let y = generate_sine_data(size, 42);
        let model = WaveShrink::<f64>::new().build().unwrap();

        group.bench_with_input(BenchmarkId::new("daubechies4", size), &size, |b, _| {
            b.iter_batched(
                || y.clone(),
                |mut data| model.denoise(black_box(&mut data)).unwrap(),
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn bench_families(c: &mut Criterion) {
    let mut group = c.benchmark_group("families");
    group.sample_size(100);

    let size = 8_192;
    let y = generate_sine_data(size, 42);

    group.bench_function(BenchmarkId::new("closed_form", "haar"), |b| {
        let model = WaveShrink::<f64>::new().wavelet(Haar).build().unwrap();
        b.iter_batched(
            || y.clone(),
            |mut data| model.denoise(black_box(&mut data)).unwrap(),
            BatchSize::SmallInput,
        )
    });

    for family in WaveletFamily::ALL {
        let model = WaveShrink::<f64>::new().family(family).build().unwrap();
        group.bench_with_input(
            BenchmarkId::new("filter_bank", family.name()),
            &family,
            |b, _| {
                b.iter_batched(
                    || y.clone(),
                    |mut data| model.denoise(black_box(&mut data)).unwrap(),
                    BatchSize::SmallInput,
                )
            },
        );
    }

    group.finish();
}

fn bench_policies(c: &mut Criterion) {
    let mut group = c.benchmark_group("policies");
    group.sample_size(100);

    let size = 8_192;
    let y = generate_blocks_data(size, 42);

    for (name, policy, method) in [
        ("hard_mad", Hard, MAD),
        ("soft_mad", Soft, MAD),
        ("hard_mar", Hard, MAR),
        ("soft_mar", Soft, MAR),
    ] {
        let model = WaveShrink::<f64>::new()
            .wavelet(Haar)
            .policy(policy)
            .scaling_method(method)
            .build()
            .unwrap();

        group.bench_function(name, |b| {
            b.iter_batched(
                || y.clone(),
                |mut data| model.denoise(black_box(&mut data)).unwrap(),
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("batch_{}", mode_name));
    group.sample_size(30);

    let size = 2_048;
    for count in [8, 64, 256] {
        group.throughput(Throughput::Elements((count * size) as u64));
        let series = generate_batch(count, size, 42);
        let model = WaveShrink::<f64>::new()
            .family(WaveletFamily::Daubechies8)
            .parallel(use_parallel)
            .build()
            .unwrap();

        group.bench_with_input(BenchmarkId::new("series", count), &count, |b, _| {
            b.iter_batched(
                || series.clone(),
                |mut data| model.denoise_all(black_box(&mut data)),
                BatchSize::LargeInput,
            )
        });
    }

    group.finish();
}

fn bench_rows(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("rows_{}", mode_name));
    group.sample_size(30);

    let rows = 128;
    let cols = 1_024;
    let flat: Vec<f64> = generate_batch(rows, cols, 7).into_iter().flatten().collect();
    let matrix = Array2::from_shape_vec((rows, cols), flat).unwrap();
    let model = WaveShrink::<f64>::new().parallel(use_parallel).build().unwrap();

    group.throughput(Throughput::Elements((rows * cols) as u64));
    group.bench_function("matrix", |b| {
        b.iter_batched(
            || matrix.clone(),
            |mut m| model.denoise_rows(black_box(&mut m)).unwrap(),
            BatchSize::LargeInput,
        )
    });

    group.finish();
}

fn bench_scientific(c: &mut Criterion) {
    let mut group = c.benchmark_group("scientific");
    group.sample_size(100);

    for size in [512, 1_024, 4_096] {
        let y = generate_scientific_data(size, 42);
        let model = WaveShrink::<f64>::new()
            .family(WaveletFamily::Symlet8)
            .policy(Soft)
            .build()
            .unwrap();

        group.bench_with_input(BenchmarkId::new("spectroscopy", size), &size, |b, _| {
            b.iter_batched(
                || y.clone(),
                |mut data| model.denoise(black_box(&mut data)).unwrap(),
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn bench_padded(c: &mut Criterion) {
    let mut group = c.benchmark_group("padded");
    group.sample_size(100);

    let size = 5_000;
    let y = generate_sine_data(size, 42);
    let model = WaveShrink::<f64>::new().build().unwrap();

    for (name, padding) in [("zero", Zero), ("reflect", Reflect), ("extend", Extend)] {
        group.bench_function(name, |b| {
            b.iter(|| {
                model
                    .processor()
                    .denoise_padded(black_box(&y), padding)
                    .unwrap()
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_scalability,
    bench_families,
    bench_policies,
    bench_batch,
    bench_rows,
    bench_scientific,
    bench_padded,
);

criterion_main!(benches);

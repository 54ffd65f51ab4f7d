use std::hint::black_box;
use std::time::Duration;

use criterion::measurement::Measurement;
use criterion::{
    BenchmarkGroup, BenchmarkId, Criterion, SamplingMode, criterion_group, criterion_main,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const BENCH_SIZES: [usize; 4] = [4096, 16384, 65536, 262144];
const BENCH_SAMPLE_SIZE: usize = 10;
const BENCH_WARMUP_MS: u64 = 80;
const BENCH_MEASURE_MS_SMALL: u64 = 120;
const BENCH_MEASURE_MS_LARGE: u64 = 300;
const BENCH_MEASURE_MS_XL: u64 = 500;
const PAR_WIDTH: usize = 8;

#[derive(Clone, Copy)]
enum Distribution {
    RandomUniform,
    FewDistinct8,
    NearlySorted1pctSwaps,
    Sawtooth1k,
}

impl Distribution {
    fn label(self) -> &'static str {
        match self {
            Self::RandomUniform => "random_uniform",
            Self::FewDistinct8 => "few_distinct_8",
            Self::NearlySorted1pctSwaps => "nearly_sorted_1pct_swaps",
            Self::Sawtooth1k => "sawtooth_1k",
        }
    }
}

const DISTRIBUTIONS: [Distribution; 4] = [
    Distribution::RandomUniform,
    Distribution::FewDistinct8,
    Distribution::NearlySorted1pctSwaps,
    Distribution::Sawtooth1k,
];

fn bench_sort(c: &mut Criterion) {
    for &dist in &DISTRIBUTIONS {
        let mut group = c.benchmark_group(format!("dpsort/{}", dist.label()));

        for &size in &BENCH_SIZES {
            apply_runtime(&mut group, size);
            let base = generate_dataset(dist, size, seed_for(dist, size, 0xBA5E_0001));

            group.bench_function(BenchmarkId::new("sequential", size), |bencher| {
                bencher.iter_custom(|iters| {
                    let mut total = Duration::ZERO;
                    for _ in 0..iters {
                        let mut data = base.clone();
                        let start = std::time::Instant::now();
                        dpsort::sort(&mut data, 1);
                        total += start.elapsed();
                        black_box(&data);
                    }
                    total
                });
            });

            group.bench_function(BenchmarkId::new("parallel", size), |bencher| {
                bencher.iter_custom(|iters| {
                    let mut total = Duration::ZERO;
                    for _ in 0..iters {
                        let mut data = base.clone();
                        let start = std::time::Instant::now();
                        dpsort::sort(&mut data, PAR_WIDTH);
                        total += start.elapsed();
                        black_box(&data);
                    }
                    total
                });
            });

            group.bench_function(BenchmarkId::new("std_unstable", size), |bencher| {
                bencher.iter_custom(|iters| {
                    let mut total = Duration::ZERO;
                    for _ in 0..iters {
                        let mut data = base.clone();
                        let start = std::time::Instant::now();
                        data.sort_unstable();
                        total += start.elapsed();
                        black_box(&data);
                    }
                    total
                });
            });
        }

        group.finish();
    }
}

fn apply_runtime<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, size: usize) {
    group.sample_size(BENCH_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(BENCH_WARMUP_MS));
    if size <= 16384 {
        group.sampling_mode(SamplingMode::Auto);
        group.measurement_time(Duration::from_millis(BENCH_MEASURE_MS_SMALL));
    } else if size <= 65536 {
        group.sampling_mode(SamplingMode::Flat);
        group.measurement_time(Duration::from_millis(BENCH_MEASURE_MS_LARGE));
    } else {
        group.sampling_mode(SamplingMode::Flat);
        group.measurement_time(Duration::from_millis(BENCH_MEASURE_MS_XL));
    }
}

fn generate_dataset(dist: Distribution, size: usize, seed: u64) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut data = Vec::with_capacity(size);

    match dist {
        Distribution::RandomUniform => {
            for _ in 0..size {
                data.push(rng.random::<u64>());
            }
        }
        Distribution::FewDistinct8 => {
            for _ in 0..size {
                data.push(rng.random_range(0..8));
            }
        }
        Distribution::NearlySorted1pctSwaps => {
            for i in 0..size {
                data.push(i as u64);
            }
            let swaps = (size / 100).max(1);
            for _ in 0..swaps {
                let a = rng.random_range(0..size);
                let b = rng.random_range(0..size);
                data.swap(a, b);
            }
        }
        Distribution::Sawtooth1k => {
            for i in 0..size {
                data.push((i % 1024) as u64);
            }
        }
    }

    data
}

#[inline]
fn seed_for(dist: Distribution, size: usize, salt: u64) -> u64 {
    let d = match dist {
        Distribution::RandomUniform => 11_u64,
        Distribution::FewDistinct8 => 12_u64,
        Distribution::NearlySorted1pctSwaps => 13_u64,
        Distribution::Sawtooth1k => 14_u64,
    };

    mix_seed(0x5EED_2026 ^ (d << 48) ^ (size as u64) ^ salt)
}

#[inline]
fn mix_seed(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

criterion_group!(benches, bench_sort);
criterion_main!(benches);

use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::measurement::Measurement;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SMALL_RUNTIME_SAMPLE_SIZE: usize = 15;
const SMALL_RUNTIME_WARM_UP_MS: u64 = 100;
const SMALL_RUNTIME_MEASURE_MS: u64 = 200;
const MEDIUM_RUNTIME_SAMPLE_SIZE: usize = 15;
const MEDIUM_RUNTIME_WARM_UP_MS: u64 = 500;
const MEDIUM_RUNTIME_MEASURE_MS: u64 = 1000;
const LARGE_RUNTIME_SAMPLE_SIZE: usize = 10;
const LARGE_RUNTIME_WARM_UP_MS: u64 = 800;
const LARGE_RUNTIME_MEASURE_MS: u64 = 1500;

/// Inclusive bounds of the uniform random case.
pub const RANDOM_MIN: i32 = -1_000_000;
pub const RANDOM_MAX: i32 = 1_000_000;

pub fn apply_small_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(SMALL_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(SMALL_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(SMALL_RUNTIME_MEASURE_MS));
}

pub fn apply_medium_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(MEDIUM_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(MEDIUM_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(MEDIUM_RUNTIME_MEASURE_MS));
}

pub fn apply_large_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(LARGE_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(LARGE_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(LARGE_RUNTIME_MEASURE_MS));
}

/// Input distribution fed to a sort.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum InputCase {
    Sorted,
    Reverse,
    Random,
}

pub const ALL_CASES: [InputCase; 3] = [InputCase::Sorted, InputCase::Reverse, InputCase::Random];

impl InputCase {
    /// Report label. The random case is reported as an average over runs.
    pub fn label(self) -> &'static str {
        match self {
            Self::Sorted => "sorted",
            Self::Reverse => "reverse",
            Self::Random => "average",
        }
    }
}

/// Overwrites `data` with `size` elements of `case`. `seed` is only read by
/// the random case.
pub fn fill_case(case: InputCase, data: &mut Vec<i32>, size: usize, seed: u64) {
    data.clear();
    data.reserve(size);
    match case {
        InputCase::Sorted => data.extend((0..size).map(|i| i as i32)),
        InputCase::Reverse => data.extend((0..size).map(|i| (size - i) as i32)),
        InputCase::Random => {
            let mut rng = StdRng::seed_from_u64(seed);
            data.extend((0..size).map(|_| random_value(&mut rng)));
        }
    }
}

pub fn generate_case(case: InputCase, size: usize, seed: u64) -> Vec<i32> {
    let mut data = Vec::with_capacity(size);
    fill_case(case, &mut data, size, seed);
    data
}

pub fn random_value<R: Rng + ?Sized>(rng: &mut R) -> i32 {
    rng.random_range(RANDOM_MIN..=RANDOM_MAX)
}

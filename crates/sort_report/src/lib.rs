//! Sweeps sizes, algorithms and input cases over the counted sorts and emits
//! one row of operation counts per combination.

use std::convert::Infallible;
use std::io::{self, Write};

use bench::{ALL_CASES, InputCase, fill_case};
use counted_sort::{SortAlgorithm, Stats, sort_i32};
use serde::Serialize;

pub const DEFAULT_SIZES: [usize; 13] = [
    1_000, 2_000, 3_000, 4_000, 5_000, 6_000, 7_000, 8_000, 9_000, 10_000, 25_000, 50_000,
    100_000,
];
pub const DEFAULT_ALGORITHMS: [&str; 3] = ["insertion", "comb", "quick"];
pub const DEFAULT_RUNS: u64 = 100;
pub const DEFAULT_SEED: u64 = 42;

pub const CSV_HEADER: &str = "size,sort_type,case,comparisons,copies";

#[derive(Clone, Debug)]
pub struct ReportConfig {
    pub sizes: Vec<usize>,
    /// Name tokens as given; each is resolved with [`SortAlgorithm::from_name`].
    pub algorithms: Vec<String>,
    /// Random inputs averaged per size. Run `r` is seeded with `seed + r`,
    /// wrapping at `u64::MAX`.
    pub runs: u64,
    pub seed: u64,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            sizes: DEFAULT_SIZES.to_vec(),
            algorithms: DEFAULT_ALGORITHMS.iter().map(|s| s.to_string()).collect(),
            runs: DEFAULT_RUNS,
            seed: DEFAULT_SEED,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Row {
    pub size: usize,
    pub sort_type: String,
    pub case: &'static str,
    pub comparisons: u64,
    pub copies: u64,
}

impl Row {
    fn new(size: usize, sort_type: &str, case: InputCase, stats: Stats) -> Self {
        Self {
            size,
            sort_type: sort_type.to_string(),
            case: case.label(),
            comparisons: stats.comparisons,
            copies: stats.moves,
        }
    }
}

/// Runs every (size, algorithm, case) combination in that nesting order and
/// hands each row to `emit` as soon as it is measured. `progress` is called
/// before each (size, algorithm) block. The first error from `emit` stops the
/// sweep.
pub fn run_report<Err, E, P>(config: &ReportConfig, mut emit: E, mut progress: P) -> Result<(), Err>
where
    E: FnMut(&Row) -> Result<(), Err>,
    P: FnMut(usize, &str),
{
    let mut data = Vec::new();
    for &size in &config.sizes {
        for name in &config.algorithms {
            progress(size, name);
            let algo = SortAlgorithm::from_name(name);
            for &case in &ALL_CASES {
                let stats = measure_case(algo, case, size, config, &mut data);
                emit(&Row::new(size, name, case, stats))?;
            }
        }
    }
    Ok(())
}

/// Runs the whole sweep into memory, calling `progress` like [`run_report`].
pub fn collect_report<P>(config: &ReportConfig, progress: P) -> Vec<Row>
where
    P: FnMut(usize, &str),
{
    let mut rows = Vec::new();
    let Ok(()) = run_report::<Infallible, _, _>(
        config,
        |row| {
            rows.push(row.clone());
            Ok(())
        },
        progress,
    );
    rows
}

/// Counts for one case. The random case sums `config.runs` seeded runs and
/// returns the truncated per-run average.
pub fn measure_case(
    algo: SortAlgorithm,
    case: InputCase,
    size: usize,
    config: &ReportConfig,
    data: &mut Vec<i32>,
) -> Stats {
    match case {
        InputCase::Sorted | InputCase::Reverse => {
            fill_case(case, data, size, config.seed);
            sort_checked(algo, data)
        }
        InputCase::Random => {
            let mut total = Stats::default();
            for run in 0..config.runs {
                fill_case(case, data, size, config.seed.wrapping_add(run));
                total += sort_checked(algo, data);
            }
            total.averaged(config.runs)
        }
    }
}

fn sort_checked(algo: SortAlgorithm, data: &mut Vec<i32>) -> Stats {
    let stats = sort_i32(algo, data);
    debug_assert!(data.windows(2).all(|w| w[0] <= w[1]));
    stats
}

pub fn write_csv_header<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{CSV_HEADER}")
}

pub fn write_csv_row<W: Write>(out: &mut W, row: &Row) -> io::Result<()> {
    writeln!(
        out,
        "{},{},{},{},{}",
        row.size, row.sort_type, row.case, row.comparisons, row.copies
    )
}

pub fn write_json<W: Write>(out: &mut W, rows: &[Row]) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, rows)?;
    writeln!(out)
}

//! Report comparison and move counts of the counted sorts.
//!
//! Run with: cargo run --release --bin sort_report
//!
//! Usage:
//!   sort_report                          Full sweep, CSV on stdout
//!   sort_report --sizes 1000,5000        Selected sizes only
//!   sort_report --algorithms comb,quick  Selected algorithms only
//!   sort_report --runs 10 --format json  Fewer random runs, JSON output

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use sort_report::{
    DEFAULT_ALGORITHMS, DEFAULT_RUNS, DEFAULT_SEED, DEFAULT_SIZES, ReportConfig, collect_report,
    run_report, write_csv_header, write_csv_row, write_json,
};

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
enum Format {
    Csv,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "sort_report")]
#[command(about = "Count comparisons and moves of insertion, comb and quick sort")]
struct Args {
    /// Input sizes, comma separated
    #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_SIZES)]
    sizes: Vec<usize>,

    /// Algorithm names; unknown names run quicksort
    #[arg(long, value_delimiter = ',', default_values = DEFAULT_ALGORITHMS)]
    algorithms: Vec<String>,

    /// Random inputs averaged per size
    #[arg(long, default_value_t = DEFAULT_RUNS, value_parser = clap::value_parser!(u64).range(1..))]
    runs: u64,

    /// Seed of the first random run; run r uses seed + r (wrapping)
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    #[arg(long, value_enum, default_value_t = Format::Csv)]
    format: Format,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print a progress line per size and algorithm to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    let config = ReportConfig {
        sizes: args.sizes,
        algorithms: args.algorithms,
        runs: args.runs,
        seed: args.seed,
    };

    let mut out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    let verbose = args.verbose;
    let progress = move |size: usize, name: &str| {
        if verbose {
            eprintln!("size={size} sort_type={name}");
        }
    };

    match args.format {
        Format::Csv => {
            write_csv_header(&mut out)?;
            run_report(&config, |row| write_csv_row(&mut out, row), progress)?;
        }
        Format::Json => {
            let rows = collect_report(&config, progress);
            write_json(&mut out, &rows)?;
        }
    }

    out.flush()
}

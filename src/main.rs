//! # Main — CLI Entry Point
//!
//! Parses the command line and routes subcommands to the run functions in
//! `cli.rs`. Handles the shared concerns: structured logging setup, the
//! Rayon thread pool, and the run seed that makes witness selection
//! reproducible.
//!
//! ## Subcommands
//!
//! Each tester has a sweep subcommand (`trial-division`, `fermat`,
//! `miller-rabin`) taking a range start and width. `compare` runs the
//! built-in ten-batch Fermat vs Miller–Rabin suite, and `check` classifies
//! a single candidate with all three algorithms.
//!
//! ## Global Options
//!
//! - `--seed` / `PRIMEBENCH_SEED`: run seed for witness selection.
//! - `--threads`: Rayon thread pool size (defaults to all logical cores).
//! - `--json`: machine-readable reports on stdout.

mod cli;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use primebench::DEFAULT_ITERATIONS;

#[derive(Parser)]
#[command(
    name = "primebench",
    about = "Benchmark trial division, Fermat, and Miller-Rabin primality tests"
)]
struct Cli {
    /// Run seed for witness selection; equal seeds reproduce identical reports
    #[arg(long, env = "PRIMEBENCH_SEED", default_value_t = 0)]
    seed: u64,

    /// Number of rayon worker threads (defaults to all logical cores)
    #[arg(long)]
    threads: Option<usize>,

    /// Emit reports as JSON on stdout instead of human-readable text
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sweep a range with the deterministic trial-division oracle
    TrialDivision {
        /// First candidate of the range
        #[arg(long)]
        start: u64,
        /// Range width (the sweep is inclusive: len+1 candidates)
        #[arg(long, default_value_t = 1_000)]
        len: u64,
    },
    /// Sweep a range with the Fermat probable-prime test
    Fermat {
        /// First candidate of the range
        #[arg(long)]
        start: u64,
        /// Range width (the sweep is inclusive: len+1 candidates)
        #[arg(long, default_value_t = 1_000)]
        len: u64,
        /// Witness rounds per candidate
        #[arg(long, default_value_t = DEFAULT_ITERATIONS)]
        iterations: u32,
    },
    /// Sweep a range with the Miller-Rabin strong probable-prime test
    MillerRabin {
        /// First candidate of the range
        #[arg(long)]
        start: u64,
        /// Range width (the sweep is inclusive: len+1 candidates)
        #[arg(long, default_value_t = 1_000)]
        len: u64,
        /// Witness rounds per candidate
        #[arg(long, default_value_t = DEFAULT_ITERATIONS)]
        iterations: u32,
    },
    /// Run the built-in comparison suite: Fermat vs Miller-Rabin over ten
    /// fixed 60-63 bit base ranges
    Compare {
        /// Override the per-batch range width
        #[arg(long)]
        len: Option<u64>,
        /// Witness rounds per candidate
        #[arg(long, default_value_t = DEFAULT_ITERATIONS)]
        iterations: u32,
    },
    /// Classify a single candidate with all three algorithms
    Check {
        /// The candidate to classify
        n: u64,
        /// Witness rounds per probabilistic test
        #[arg(long, default_value_t = DEFAULT_ITERATIONS)]
        iterations: u32,
    },
}

fn main() -> Result<()> {
    // Structured logging: LOG_FORMAT=json for machine ingestion, human-readable otherwise
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_default();
    if log_format == "json" {
        tracing_subscriber::fmt()
            .json()
            .with_target(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .init();
    }

    let cli = Cli::parse();
    cli::configure_rayon(cli.threads)?;

    match &cli.command {
        Commands::TrialDivision { .. } | Commands::Fermat { .. } | Commands::MillerRabin { .. } => {
            cli::run_sweep(&cli)
        }
        Commands::Compare { len, iterations } => cli::run_compare(&cli, *len, *iterations),
        Commands::Check { n, iterations } => cli::run_check(&cli, *n, *iterations),
    }
}

//! # CLI Execution Functions
//!
//! Extracted from `main.rs` to keep the entry point slim. Contains the
//! execution logic for each subcommand: range sweeps, the comparison suite,
//! single-candidate classification, and Rayon pool configuration.

use anyhow::Result;
use primebench::batch::{self, Algorithm, RangeReport};
use primebench::{
    is_prime_trial_division, is_probably_prime_fermat, is_probably_prime_miller_rabin,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use std::time::Instant;
use tracing::{info, warn};

use super::{Cli, Commands};

/// Trial division above this bound would spin through more than ~10^6
/// divisors per candidate; `check` skips the oracle there.
const TRIAL_DIVISION_MAX: u64 = 1_000_000_000_000;

/// Configure the global Rayon pool. `None` keeps the default (all cores).
pub fn configure_rayon(threads: Option<usize>) -> Result<()> {
    if let Some(num_threads) = threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build_global()?;
    }
    info!(threads = rayon::current_num_threads(), "rayon pool ready");
    Ok(())
}

// ── Range Sweeps ────────────────────────────────────────────────

/// Run a single-algorithm sweep subcommand.
pub fn run_sweep(cli: &Cli) -> Result<()> {
    let (algorithm, start, len, iterations) = match cli.command {
        Commands::TrialDivision { start, len } => (Algorithm::TrialDivision, start, len, 0),
        Commands::Fermat {
            start,
            len,
            iterations,
        } => (Algorithm::Fermat, start, len, iterations),
        Commands::MillerRabin {
            start,
            len,
            iterations,
        } => (Algorithm::MillerRabin, start, len, iterations),
        _ => unreachable!("run_sweep called with a non-sweep subcommand"),
    };

    start.checked_add(len).ok_or_else(|| {
        anyhow::anyhow!("range end overflows u64: start={} len={}", start, len)
    })?;

    let report = batch::run_range(algorithm, start, len, iterations, cli.seed);
    emit_reports(cli, std::slice::from_ref(&report))
}

/// Run the built-in comparison suite.
pub fn run_compare(cli: &Cli, len: Option<u64>, iterations: u32) -> Result<()> {
    let reports = batch::run_suite(iterations, cli.seed, len);
    emit_reports(cli, &reports)
}

fn emit_reports(cli: &Cli, reports: &[RangeReport]) -> Result<()> {
    if cli.json {
        println!("{}", serde_json::to_string_pretty(reports)?);
        return Ok(());
    }
    for report in reports {
        println!(
            "{} over [{}, {}]: {} primes in {:.3} ms",
            report.algorithm.name(),
            report.start,
            report.start + report.len,
            report.primes_found,
            report.elapsed_ms
        );
        if !report.prime_offsets.is_empty() {
            let offsets: Vec<String> =
                report.prime_offsets.iter().map(u64::to_string).collect();
            println!("  prime offsets: {}", offsets.join(" "));
        }
    }
    Ok(())
}

// ── Single-Candidate Classification ─────────────────────────────

#[derive(Serialize)]
struct CheckVerdict {
    algorithm: &'static str,
    /// None when the algorithm was skipped (trial division on huge n).
    verdict: Option<bool>,
    elapsed_ms: f64,
}

#[derive(Serialize)]
struct CheckReport {
    n: u64,
    iterations: u32,
    seed: u64,
    verdicts: Vec<CheckVerdict>,
}

/// Classify one candidate with all three algorithms, timing each.
pub fn run_check(cli: &Cli, n: u64, iterations: u32) -> Result<()> {
    let mut verdicts = Vec::with_capacity(3);

    if n <= TRIAL_DIVISION_MAX {
        let t = Instant::now();
        let verdict = is_prime_trial_division(n);
        verdicts.push(CheckVerdict {
            algorithm: Algorithm::TrialDivision.name(),
            verdict: Some(verdict),
            elapsed_ms: t.elapsed().as_secs_f64() * 1e3,
        });
    } else {
        warn!(n, "candidate too large for the trial-division oracle, skipping");
        verdicts.push(CheckVerdict {
            algorithm: Algorithm::TrialDivision.name(),
            verdict: None,
            elapsed_ms: 0.0,
        });
    }

    let mut rng = ChaCha8Rng::seed_from_u64(cli.seed);
    let t = Instant::now();
    let fermat = is_probably_prime_fermat(n, iterations, &mut rng);
    verdicts.push(CheckVerdict {
        algorithm: Algorithm::Fermat.name(),
        verdict: Some(fermat),
        elapsed_ms: t.elapsed().as_secs_f64() * 1e3,
    });

    let mut rng = ChaCha8Rng::seed_from_u64(cli.seed);
    let t = Instant::now();
    let miller = is_probably_prime_miller_rabin(n, iterations, &mut rng);
    verdicts.push(CheckVerdict {
        algorithm: Algorithm::MillerRabin.name(),
        verdict: Some(miller),
        elapsed_ms: t.elapsed().as_secs_f64() * 1e3,
    });

    let report = CheckReport {
        n,
        iterations,
        seed: cli.seed,
        verdicts,
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }
    println!("n = {}", report.n);
    for v in &report.verdicts {
        // Trial division is exact; the probabilistic testers only ever
        // report "probably prime".
        let deterministic = v.algorithm == Algorithm::TrialDivision.name();
        match v.verdict {
            Some(true) if deterministic => {
                println!("  {}: prime ({:.3} ms)", v.algorithm, v.elapsed_ms)
            }
            Some(true) => println!("  {}: probably prime ({:.3} ms)", v.algorithm, v.elapsed_ms),
            Some(false) => println!("  {}: composite ({:.3} ms)", v.algorithm, v.elapsed_ms),
            None => println!("  {}: skipped (n too large)", v.algorithm),
        }
    }
    Ok(())
}

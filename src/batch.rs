//! # Batch — Range Sweeps and the Comparison Suite
//!
//! Drives the three testers over contiguous candidate ranges and measures
//! wall-clock time, so the relative cost of trial division, Fermat, and
//! Miller–Rabin can be compared on the same inputs. Candidates are spread
//! across the Rayon pool; each candidate derives its own ChaCha8 witness
//! stream from the run seed, so results are reproducible regardless of how
//! the pool schedules the work.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use serde::Serialize;
use std::time::Instant;
use tracing::info;

use crate::{is_prime_trial_division, is_probably_prime_fermat, is_probably_prime_miller_rabin};

/// Base values for the comparison suite: ten fixed 60–63 bit candidates,
/// swept in ascending order. The first is a known prime.
pub const SUITE_BASES: [u64; 10] = [
    1027498106806225441,
    1383602730909524507,
    2407823242081768633,
    2912970412537579783,
    6155568815813781257,
    7050810642549651091,
    7116242705310218687,
    8042869108487301239,
    8348960580061273493,
    9015127525509429017,
];

/// Range width for suite batches; the final batch sweeps a longer range to
/// show how the gap between the testers scales.
pub const SUITE_RANGE: u64 = 1_000;
pub const SUITE_RANGE_LAST: u64 = 10_000;

/// Which tester a sweep runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    TrialDivision,
    Fermat,
    MillerRabin,
}

impl Algorithm {
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::TrialDivision => "trial-division",
            Algorithm::Fermat => "fermat",
            Algorithm::MillerRabin => "miller-rabin",
        }
    }
}

/// Result of sweeping one algorithm over one candidate range.
#[derive(Clone, Debug, Serialize)]
pub struct RangeReport {
    pub algorithm: Algorithm,
    pub start: u64,
    pub len: u64,
    pub iterations: u32,
    pub seed: u64,
    /// Offsets from `start` whose candidate tested prime, ascending.
    pub prime_offsets: Vec<u64>,
    pub primes_found: u64,
    pub elapsed_ms: f64,
}

/// Witness stream for one candidate: seeded from the run seed and the
/// candidate itself, so a sweep's verdicts do not depend on Rayon's
/// scheduling and a single candidate can be replayed in isolation.
fn candidate_rng(seed: u64, n: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed ^ n.rotate_left(17))
}

fn test_one(algorithm: Algorithm, n: u64, iterations: u32, seed: u64) -> bool {
    match algorithm {
        Algorithm::TrialDivision => is_prime_trial_division(n),
        Algorithm::Fermat => is_probably_prime_fermat(n, iterations, &mut candidate_rng(seed, n)),
        Algorithm::MillerRabin => {
            is_probably_prime_miller_rabin(n, iterations, &mut candidate_rng(seed, n))
        }
    }
}

/// Sweep `algorithm` over [start, start+len] and time it.
///
/// The range is inclusive at both ends, matching the suite's original
/// batch shape (a 1000-wide batch tests 1001 candidates).
pub fn run_range(
    algorithm: Algorithm,
    start: u64,
    len: u64,
    iterations: u32,
    seed: u64,
) -> RangeReport {
    let t_start = Instant::now();

    let mut prime_offsets: Vec<u64> = (0..=len)
        .into_par_iter()
        .filter(|&offset| test_one(algorithm, start + offset, iterations, seed))
        .collect();
    prime_offsets.sort_unstable();

    let elapsed_ms = t_start.elapsed().as_secs_f64() * 1e3;
    let primes_found = prime_offsets.len() as u64;
    let rate = (len + 1) as f64 / (elapsed_ms / 1e3).max(1e-9);

    info!(
        algorithm = algorithm.name(),
        start,
        len,
        primes_found,
        elapsed_ms = format_args!("{:.3}", elapsed_ms),
        rate = format_args!("{:.0}/s", rate),
        "range sweep complete"
    );

    RangeReport {
        algorithm,
        start,
        len,
        iterations,
        seed,
        prime_offsets,
        primes_found,
        elapsed_ms,
    }
}

/// Run the built-in comparison suite: Fermat then Miller–Rabin over each of
/// the ten base ranges. `len` overrides the per-batch range width when set.
pub fn run_suite(iterations: u32, seed: u64, len: Option<u64>) -> Vec<RangeReport> {
    let mut reports = Vec::with_capacity(SUITE_BASES.len() * 2);
    for (i, &base) in SUITE_BASES.iter().enumerate() {
        let range = len.unwrap_or(if i == SUITE_BASES.len() - 1 {
            SUITE_RANGE_LAST
        } else {
            SUITE_RANGE
        });
        info!(batch = i, base, range, "suite batch starting");
        reports.push(run_range(Algorithm::Fermat, base, range, iterations, seed));
        reports.push(run_range(Algorithm::MillerRabin, base, range, iterations, seed));
    }
    reports
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── run_range verdicts ──────────────────────────────────────────

    /// Trial division over [2, 102] must find exactly the 26 primes
    /// in that window, at the right offsets.
    #[test]
    fn trial_range_finds_exact_primes() {
        let report = run_range(Algorithm::TrialDivision, 2, 100, 0, 0);
        assert_eq!(report.primes_found, 26); // 25 primes below 100, plus 101
        assert_eq!(report.prime_offsets[0], 0); // 2
        assert_eq!(report.prime_offsets[1], 1); // 3
        assert_eq!(*report.prime_offsets.last().unwrap(), 99); // 101
    }

    /// All three algorithms agree on a small range at high iteration count.
    #[test]
    fn algorithms_agree_on_small_range() {
        let trial = run_range(Algorithm::TrialDivision, 2, 500, 0, 42);
        let miller = run_range(Algorithm::MillerRabin, 2, 500, 20, 42);
        assert_eq!(trial.prime_offsets, miller.prime_offsets);
    }

    /// Same seed, same report; determinism survives the Rayon pool.
    #[test]
    fn equal_seeds_reproduce() {
        let a = run_range(Algorithm::MillerRabin, 1_000_000, 200, 5, 7);
        let b = run_range(Algorithm::MillerRabin, 1_000_000, 200, 5, 7);
        assert_eq!(a.prime_offsets, b.prime_offsets);
        assert_eq!(a.primes_found, b.primes_found);
    }

    /// The range is inclusive: len = 0 still tests one candidate.
    #[test]
    fn zero_len_tests_single_candidate() {
        let report = run_range(Algorithm::TrialDivision, 13, 0, 0, 0);
        assert_eq!(report.primes_found, 1);
        assert_eq!(report.prime_offsets, vec![0]);
    }

    /// First suite base is a known prime; Miller–Rabin must find it at
    /// offset 0 of its batch.
    #[test]
    fn first_suite_base_is_prime() {
        let report = run_range(Algorithm::MillerRabin, SUITE_BASES[0], 0, 5, 99);
        assert_eq!(report.prime_offsets, vec![0]);
    }

    #[test]
    fn suite_bases_are_sorted() {
        let mut sorted = SUITE_BASES;
        sorted.sort_unstable();
        assert_eq!(sorted, SUITE_BASES);
    }

    // ── Serialization ───────────────────────────────────────────────

    #[test]
    fn report_serializes_to_json() {
        let report = run_range(Algorithm::Fermat, 2, 10, 5, 0);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["algorithm"], "fermat");
        assert_eq!(json["start"], 2);
        assert!(json["elapsed_ms"].is_number());
    }
}

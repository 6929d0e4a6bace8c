//! # Fermat — Fermat Probable-Prime Test
//!
//! Fermat's little theorem: for prime n and any a not divisible by n,
//! a^(n−1) ≡ 1 (mod n). Each round picks a random witness and checks the
//! congruence; any violation proves n composite, so a `false` verdict is
//! conclusive. A `true` verdict is only probabilistic evidence, and
//! Carmichael numbers (561, 1105, 1729, ...) satisfy the congruence for
//! every coprime base, so they can pass all rounds despite being composite.
//! That is an inherent limitation of the test, not a bug; Miller–Rabin
//! exists because of it.

use rand::Rng;

use crate::arith::pow_mod;

/// Fermat probable-prime test with `iterations` independent rounds.
///
/// n < 4 is decided directly (2 and 3 are the only primes below 4), which
/// also keeps the witness range [2, n−2] non-empty on the general path.
/// The witness source is caller-owned so tests can fix the sequence.
pub fn is_probably_prime_fermat<R: Rng + ?Sized>(n: u64, iterations: u32, rng: &mut R) -> bool {
    if n < 4 {
        return n == 2 || n == 3;
    }
    for _ in 0..iterations {
        let a = rng.gen_range(2..=n - 2);
        if pow_mod(a, n - 1, n) != 1 {
            return false; // Fermat's little theorem violated: definitely composite
        }
    }
    true
}

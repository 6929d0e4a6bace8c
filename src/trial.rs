//! # Trial — Deterministic Trial-Division Oracle
//!
//! O(√n) exhaustive divisor check. Far too slow for the 60-bit base values
//! themselves, but exact, which makes it the ground truth the probabilistic
//! testers are benchmarked and validated against on ranges where √n is
//! tractable (the comparison suite sweeps at most 10^4 candidates per range).

/// Deterministic primality check by trial division.
///
/// Checks every divisor d with d·d ≤ n. Returns false for n < 2. The loop
/// bound is compared in u128 so d·d cannot wrap when d crosses 2^32.
pub fn is_prime_trial_division(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    let mut d: u64 = 2;
    while (d as u128) * (d as u128) <= n as u128 {
        if n % d == 0 {
            return false;
        }
        d += 1;
    }
    true
}

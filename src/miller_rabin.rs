//! # Miller–Rabin — Strong Probable-Prime Test
//!
//! Strengthens Fermat by checking the square-root chain, not just the final
//! power. Writing n−1 = d·2^s with d odd, a prime modulus forces the
//! sequence a^d, a^(2d), ..., a^(n−1) to either start at 1 or hit n−1
//! before reaching 1; a composite n usually breaks that structure for a
//! random witness. Unlike Fermat there is no Carmichael-style blind spot:
//! for odd composite n at least 3/4 of witnesses prove compositeness, so
//! the error probability after k rounds is at most 4^−k.

use rand::Rng;

use crate::arith::{mul_mod, pow_mod};

/// Split n−1 into d · 2^s with d odd.
///
/// Computed once per candidate and reused across all witness rounds.
pub(crate) fn decompose(n: u64) -> (u64, u32) {
    debug_assert!(n >= 2, "decompose: n must be at least 2");
    let s = (n - 1).trailing_zeros();
    ((n - 1) >> s, s)
}

/// Returns true when witness `a` proves n composite.
///
/// `d` and `s` must be the decomposition of n−1. The witness fails to prove
/// compositeness when a^d ≡ ±1 (mod n), or when one of the s−1 squarings of
/// a^d reaches n−1; reaching 1 any other way means a nontrivial square root
/// of unity exists and n is composite.
pub fn check_composite(n: u64, a: u64, d: u64, s: u32) -> bool {
    let mut x = pow_mod(a, d, n);
    if x == 1 || x == n - 1 {
        return false;
    }
    for _ in 1..s {
        x = mul_mod(x, x, n);
        if x == n - 1 {
            return false;
        }
    }
    true
}

/// Miller–Rabin probable-prime test with `iterations` independent rounds.
///
/// Same small-n edge policy as the Fermat test: n < 4 is decided directly,
/// everything else runs the witness loop. A `false` verdict is conclusive;
/// a `true` verdict is wrong with probability at most 4^−iterations.
pub fn is_probably_prime_miller_rabin<R: Rng + ?Sized>(
    n: u64,
    iterations: u32,
    rng: &mut R,
) -> bool {
    if n < 4 {
        return n == 2 || n == 3;
    }
    let (d, s) = decompose(n);
    for _ in 0..iterations {
        let a = rng.gen_range(2..=n - 2);
        if check_composite(n, a, d, s) {
            return false;
        }
    }
    true
}

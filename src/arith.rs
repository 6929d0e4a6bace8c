//! # Arith — Modular Arithmetic Primitives
//!
//! The numeric foundation shared by the Fermat and Miller–Rabin testers.
//! Everything here operates on u64 values with u128 intermediates: a u64×u64
//! product needs up to 128 bits before the modulo reduction, and losing that
//! headroom is the classic way to turn a primality tester into a random
//! number generator. The u64/u128 pairing is the widest for which the
//! language provides an exact double-width product natively, which fixes the
//! supported candidate width for the whole engine.

/// Widening modular multiplication: (a · b) mod modulus.
///
/// The product is formed in u128 so it is exact for any pair of u64
/// operands; the reduction brings it back below the modulus.
#[inline]
pub fn mul_mod(a: u64, b: u64, modulus: u64) -> u64 {
    debug_assert!(modulus != 0, "mul_mod: modulus must be nonzero");
    (a as u128 * b as u128 % modulus as u128) as u64
}

/// Modular exponentiation: base^exp mod modulus.
///
/// Binary square-and-multiply: walk the exponent bit by bit from the least
/// significant end, multiplying the accumulator in on set bits and squaring
/// the base every step. O(log exp) multiplications, each overflow-safe via
/// `mul_mod`.
///
/// modulus = 1 returns 0 (everything is 0 mod 1). modulus = 0 is a
/// caller-contract violation and panics rather than producing garbage.
pub fn pow_mod(mut base: u64, mut exp: u64, modulus: u64) -> u64 {
    assert!(modulus != 0, "pow_mod: modulus must be nonzero");
    if modulus == 1 {
        return 0;
    }
    let mut result: u64 = 1;
    base %= modulus;
    while exp > 0 {
        if exp & 1 == 1 {
            result = mul_mod(result, base, modulus);
        }
        base = mul_mod(base, base, modulus);
        exp >>= 1;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── pow_mod known values ────────────────────────────────────────

    #[test]
    fn pow_mod_small_known_values() {
        assert_eq!(pow_mod(2, 10, 1000), 24); // 1024 mod 1000
        assert_eq!(pow_mod(3, 4, 100), 81);
        assert_eq!(pow_mod(7, 3, 5), 3); // 343 mod 5
        assert_eq!(pow_mod(10, 9, 6), 4); // 10^9 mod 6
    }

    /// Anything to the 0th power is 1 mod m, for any m > 1.
    #[test]
    fn pow_mod_zero_exponent_is_one() {
        for a in [0u64, 1, 2, 17, u64::MAX] {
            for m in [2u64, 3, 1000, u64::MAX] {
                assert_eq!(pow_mod(a, 0, m), 1, "pow_mod({}, 0, {})", a, m);
            }
        }
    }

    /// Everything is 0 mod 1.
    #[test]
    fn pow_mod_modulus_one_is_zero() {
        for a in [0u64, 1, 5, u64::MAX] {
            for e in [0u64, 1, 100, u64::MAX] {
                assert_eq!(pow_mod(a, e, 1), 0, "pow_mod({}, {}, 1)", a, e);
            }
        }
    }

    #[test]
    #[should_panic(expected = "modulus must be nonzero")]
    fn pow_mod_zero_modulus_panics() {
        pow_mod(2, 10, 0);
    }

    // ── Overflow safety ─────────────────────────────────────────────

    /// Operands near u64::MAX must not wrap during the intermediate
    /// multiplication. 2^64 - 59 is prime, so by Fermat's little theorem
    /// a^(p-1) ≡ 1 (mod p) for a not divisible by p.
    #[test]
    fn pow_mod_no_overflow_near_u64_max() {
        let p = u64::MAX - 58; // 2^64 - 59, prime
        assert_eq!(pow_mod(2, p - 1, p), 1);
        assert_eq!(pow_mod(p - 1, 2, p), 1); // (-1)^2 = 1
        assert_eq!(pow_mod(p - 1, 3, p), p - 1); // (-1)^3 = -1
    }

    #[test]
    fn mul_mod_matches_u128_reference() {
        let cases = [
            (u64::MAX, u64::MAX, u64::MAX - 58),
            (1 << 63, 3, (1 << 61) + 1),
            (12345678901234567, 98765432109876543, 1000000007),
        ];
        for (a, b, m) in cases {
            let expected = (a as u128 * b as u128 % m as u128) as u64;
            assert_eq!(mul_mod(a, b, m), expected, "mul_mod({}, {}, {})", a, b, m);
        }
    }

    /// Cross-check against naive repeated multiplication for small inputs.
    #[test]
    fn pow_mod_matches_naive_reference() {
        for base in 0u64..20 {
            for exp in 0u64..12 {
                for modulus in 1u64..30 {
                    let mut naive: u128 = 1 % modulus as u128;
                    for _ in 0..exp {
                        naive = naive * base as u128 % modulus as u128;
                    }
                    assert_eq!(
                        pow_mod(base, exp, modulus),
                        naive as u64,
                        "pow_mod({}, {}, {})",
                        base,
                        exp,
                        modulus
                    );
                }
            }
        }
    }
}

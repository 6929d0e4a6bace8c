pub mod arith;
pub mod batch;
pub mod fermat;
pub mod miller_rabin;
pub mod trial;

pub use arith::pow_mod;
pub use fermat::is_probably_prime_fermat;
pub use miller_rabin::is_probably_prime_miller_rabin;
pub use trial::is_prime_trial_division;

/// Default witness rounds for the probabilistic testers. Five rounds bound
/// the Miller–Rabin error below 0.1%, which is plenty for benchmarking;
/// the validation tests crank this up to 20.
pub const DEFAULT_ITERATIONS: u32 = 5;

//! Linear-congruential sequence used to feed the tree workload.

pub const DEFAULT_SEED: i64 = 12_345;
pub const MULTIPLIER: i64 = 1_664_525;
pub const INCREMENT: i64 = 1_013_904_223;
pub const MODULUS: i64 = 2_147_483_647;

/// Reproducible pseudo-random stream: `seed = (seed * A + C) mod M`.
///
/// The state is an explicit value; callers thread it through by `&mut`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lcg {
    seed: i64,
}

impl Default for Lcg {
    fn default() -> Self {
        Self::new()
    }
}

impl Lcg {
    pub const fn new() -> Self {
        Self { seed: DEFAULT_SEED }
    }

    pub const fn with_seed(seed: i64) -> Self {
        Self { seed }
    }

    pub fn seed(&self) -> i64 {
        self.seed
    }

    /// Advance the recurrence and return the new state.
    ///
    /// The product is formed in `i128` so any starting seed stays exact. A
    /// negative remainder (only reachable from a negative seed) is negated,
    /// which keeps the stored state non-negative.
    pub fn next_value(&mut self) -> i64 {
        let wide = (self.seed as i128 * MULTIPLIER as i128 + INCREMENT as i128) % MODULUS as i128;
        // |wide| < MODULUS, so the narrowing cannot truncate.
        let mut next = wide as i64;
        if next < 0 {
            next = -next;
        }
        self.seed = next;
        next
    }
}

impl Iterator for Lcg {
    type Item = i64;

    #[inline]
    fn next(&mut self) -> Option<i64> {
        Some(self.next_value())
    }
}

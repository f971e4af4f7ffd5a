//! Sieve of Eratosthenes over a flat boolean table.

use anyhow::{Context, Result, anyhow};
use tracing::{debug, trace};

#[derive(Debug, Clone)]
pub struct SieveTable {
    limit: usize,
    is_prime: Vec<bool>,
}

impl SieveTable {
    /// Allocate `limit + 1` flags and run the marking pass.
    pub fn new(limit: usize) -> Result<Self> {
        let len = limit
            .checked_add(1)
            .ok_or_else(|| anyhow!("sieve limit {} overflows the table length", limit))?;
        let mut is_prime = Vec::new();
        is_prime
            .try_reserve_exact(len)
            .with_context(|| format!("allocate sieve table of {} entries", len))?;
        is_prime.resize(len, true);
        is_prime[0] = false;
        if limit >= 1 {
            is_prime[1] = false;
        }

        let mut marked_primes = 0usize;
        let mut p = 2usize;
        // p <= limit / p is p * p <= limit without the overflow.
        while p <= limit / p {
            if is_prime[p] {
                marked_primes += 1;
                let mut j = p * p;
                while j <= limit {
                    is_prime[j] = false;
                    j += p;
                }
            }
            p += 1;
        }
        trace!(limit, marked_primes, "sieve marking pass complete");

        Ok(Self { limit, is_prime })
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn is_prime(&self, n: usize) -> bool {
        self.is_prime.get(n).copied().unwrap_or(false)
    }

    pub fn count(&self) -> usize {
        self.is_prime.iter().filter(|&&flag| flag).count()
    }

    pub fn primes(&self) -> impl Iterator<Item = usize> + '_ {
        self.is_prime
            .iter()
            .enumerate()
            .filter_map(|(n, &flag)| flag.then_some(n))
    }
}

/// Count primes `<= limit`.
pub fn run(limit: usize) -> Result<usize> {
    let table = SieveTable::new(limit)?;
    let count = table.count();
    debug!(limit, count, "primes counted");
    Ok(count)
}

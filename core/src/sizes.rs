use crate::{fib, matrix};
use anyhow::{Result, ensure};

/// Fixed inputs for every workload.
///
/// The executables only ever use [`WorkloadSizes::STANDARD`]; smaller tables
/// exist for tests and benches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkloadSizes {
    /// Number of generated values inserted into the tree.
    pub tree_count: usize,
    /// Argument to the recursive Fibonacci.
    pub fib_n: i64,
    /// Dimension of both square matrices.
    pub matrix_size: usize,
    /// Inclusive upper bound of the sieve.
    pub sieve_limit: usize,
    /// Increments performed by the counting loop.
    pub loop_iterations: u64,
}

impl WorkloadSizes {
    pub const STANDARD: WorkloadSizes = WorkloadSizes {
        tree_count: 100_000,
        fib_n: 40,
        matrix_size: 300,
        sieve_limit: 10_000_000,
        loop_iterations: 100_000_000,
    };

    /// Reject inputs no workload can compute exactly.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.fib_n <= fib::MAX_EXACT_INPUT,
            "fib input {} overflows i64 (max {})",
            self.fib_n,
            fib::MAX_EXACT_INPUT
        );
        ensure!(
            self.matrix_size <= matrix::MAX_EXACT_SIZE,
            "matrix size {} exceeds the exact i64 range (max {})",
            self.matrix_size,
            matrix::MAX_EXACT_SIZE
        );
        ensure!(
            self.sieve_limit < usize::MAX,
            "sieve limit {} leaves no room for the zero slot",
            self.sieve_limit
        );
        Ok(())
    }
}

impl Default for WorkloadSizes {
    fn default() -> Self {
        Self::STANDARD
    }
}

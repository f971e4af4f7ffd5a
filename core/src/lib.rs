pub mod counting;
pub mod fib;
pub mod lcg;
pub mod matrix;
pub mod sieve;
pub mod sizes;
pub mod tree;

// Keyed workload table shared by binaries and benches
pub mod perf;

#[cfg(test)]
mod tree_test;

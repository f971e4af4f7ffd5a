//! Shared workload table used by the executables and the Criterion benches.
//!
//! Centralizing the workloads here keeps benches and the one-line reporters
//! in sync so we do not accidentally compare different scenarios across tools.

pub mod scenarios;

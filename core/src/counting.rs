//! Tight counting loop that measures raw loop and increment overhead.

use std::hint::black_box;

/// Increment an accumulator `iterations` times, one step at a time.
///
/// `black_box` on the accumulator keeps the optimiser from collapsing the
/// loop into a single assignment.
pub fn run(iterations: u64) -> u64 {
    let mut sum = 0u64;
    for _ in 0..iterations {
        sum = black_box(sum) + 1;
    }
    sum
}

/// Largest `n` whose Fibonacci number fits in an `i64`.
pub const MAX_EXACT_INPUT: i64 = 92;

/// Naive double recursion. The exponential call count is the point of the
/// workload, so there is no memoisation.
pub fn fib(n: i64) -> i64 {
    if n < 2 { n } else { fib(n - 1) + fib(n - 2) }
}

/// Linear-time value used to check `fib` for arbitrary inputs.
pub fn fib_reference(n: i64) -> i64 {
    if n < 2 {
        return n;
    }
    let (mut prev, mut cur) = (0i64, 1i64);
    for _ in 1..n {
        let next = prev + cur;
        prev = cur;
        cur = next;
    }
    cur
}

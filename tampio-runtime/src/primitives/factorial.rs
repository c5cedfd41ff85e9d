// Factorial primitive

use num_bigint::BigUint;
use num_traits::One;

// From 171 up the product no longer fits in f64
const OVERFLOW_BOUND: f64 = 171.0;

// RUST CONCEPT: Recurrence f(n) = n * f(n-1), with f(n) = 1 for every n <= 1
// Zero and negative inputs are flattened to 1; that is the defined result, not
// an error path. Non-integers walk down by one as well (f(2.5) = 2.5 * 1.5).
//
// The recursion is unrolled into a loop. Factors are multiplied innermost
// first, so rounding matches the recursive definition once the product
// exceeds 2^53. For 1 < n <= 171, `n - i` is exact and equals the recursion's
// repeated `n - 1`.
// ( n -- n! )
pub fn factorial(n: f64) -> f64 {
    if n.is_nan() {
        return f64::NAN;
    }
    if n > OVERFLOW_BOUND {
        return f64::INFINITY;
    }

    // Number of factors greater than one: n, n-1, ... down to the last one above 1
    let count = if n > 1.0 { (n - 1.0).ceil() as u32 } else { 0 };

    (0..count)
        .rev()
        .fold(1.0, |acc, i| (n - f64::from(i)) * acc)
}

/// Exact factorial with arbitrary precision.
pub fn factorial_exact(n: u64) -> BigUint {
    (2..=n).fold(BigUint::one(), |acc, k| acc * k)
}

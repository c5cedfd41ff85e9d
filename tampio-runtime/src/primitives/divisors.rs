// Divisor and prime factor enumeration
//
// RUST CONCEPT: Generic over num_traits::PrimInt
// Works for every primitive integer width; results come back in ascending
// discovery order without duplicates.

use num_traits::PrimInt;

/// Every `i` in `[1, n]` dividing `n`, ascending. Empty for `n < 1`.
pub fn divisors<T: PrimInt>(n: T) -> Vec<T> {
    let mut result = Vec::new();
    let mut i = T::one();
    while i <= n {
        if n % i == T::zero() {
            result.push(i);
        }
        if i == T::max_value() {
            break;
        }
        i = i + T::one();
    }
    result
}

/// Prime factors of `n` that are strictly less than `n`.
///
/// Candidates run from 2 up to but excluding `n`; a divisor is accepted when
/// no already accepted factor divides it. Since candidates ascend, every
/// composite divisor is filtered by a smaller prime divisor found earlier.
///
/// Because `n` itself is never tested, a prime `n` yields an empty list, as
/// does `n = 1`.
pub fn prime_factors<T: PrimInt>(n: T) -> Vec<T> {
    let mut result: Vec<T> = Vec::new();
    let two = T::one() + T::one();
    let mut i = two;
    while i < n {
        if n % i == T::zero() && result.iter().all(|&p| i % p != T::zero()) {
            result.push(i);
        }
        i = i + T::one();
    }
    result
}

// Rounding primitives

use num_traits::Float;

// RUST CONCEPT: Round half toward positive infinity
// Float::round rounds halves away from zero (-2.5 -> -3); the host rounds
// them up (-2.5 -> -2). x - floor(x) is exact, so comparing it against 0.5
// avoids the x + 0.5 overflow into the next integer for 0.49999999999999994.
// ( n -- round(n) )
pub fn round<T: Float>(n: T) -> T {
    if !n.is_finite() {
        return n;
    }
    let lower = n.floor();
    let half = T::one() / (T::one() + T::one());
    if n - lower >= half { lower + T::one() } else { lower }
}

/// Rounds to `digits` decimal places: scale by 10^digits, round, unscale.
///
/// Negative `digits` round to tens, hundreds and so on.
pub fn round_to(n: f64, digits: i32) -> f64 {
    // Divide by 10^-digits instead of multiplying by a fraction, which would be inexact
    if digits >= 0 {
        let scale = 10f64.powi(digits);
        round(n * scale) / scale
    } else {
        let scale = 10f64.powi(-digits);
        round(n / scale) * scale
    }
}

pub fn floor<T: Float>(n: T) -> T {
    n.floor()
}

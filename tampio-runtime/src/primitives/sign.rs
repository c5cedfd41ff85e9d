// Sign-related and unit-step primitives

use num_traits::Float;

// RUST CONCEPT: Host sign semantics differ from Float::signum
// signum(0.0) is 1.0, but the host keeps zeros (and their sign) as they are.
pub fn sign<T: Float>(n: T) -> T {
    if n.is_nan() || n == T::zero() {
        n
    } else if n.is_sign_negative() {
        -T::one()
    } else {
        T::one()
    }
}

pub fn abs<T: Float>(n: T) -> T {
    n.abs()
}

pub fn negate<T: Float>(n: T) -> T {
    -n
}

/// `1/n`; zero gives a signed infinity.
pub fn reciprocal<T: Float>(n: T) -> T {
    n.recip()
}

pub fn successor<T: Float>(n: T) -> T {
    n + T::one()
}

pub fn predecessor<T: Float>(n: T) -> T {
    n - T::one()
}

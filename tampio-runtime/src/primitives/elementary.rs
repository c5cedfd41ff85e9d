// Elementary functions: powers, roots, trigonometry, logarithms
//
// RUST CONCEPT: Generic over num_traits::Float
// Generated code works on f64, but nothing here depends on the width, so the
// same vocabulary serves f32 buffers too. Invalid inputs follow IEEE rules and
// come back as NaN rather than an error.

use num_traits::Float;

// ( n -- n*n )
pub fn square<T: Float>(n: T) -> T {
    n * n
}

// ( n -- n*n*n )
pub fn cube<T: Float>(n: T) -> T {
    n * n * n
}

/// Square root. Negative input gives NaN.
pub fn sqrt<T: Float>(n: T) -> T {
    n.sqrt()
}

/// Cube root, defined for negative input as well.
pub fn cbrt<T: Float>(n: T) -> T {
    n.cbrt()
}

pub fn sin<T: Float>(n: T) -> T {
    n.sin()
}

pub fn cos<T: Float>(n: T) -> T {
    n.cos()
}

pub fn tan<T: Float>(n: T) -> T {
    n.tan()
}

/// Natural logarithm. `ln(0)` is negative infinity, negative input is NaN.
pub fn ln<T: Float>(n: T) -> T {
    n.ln()
}

pub fn exp<T: Float>(n: T) -> T {
    n.exp()
}

// Primitives module - the numeric vocabulary, organized into separate files for maintainability

// Elementary functions
pub mod elementary;
pub mod sign;
pub mod round;

// Text conversion both ways
pub mod parse;
pub mod to_string;

// Number theory
pub mod factorial;
pub mod divisors;

// Power protocol
pub mod pow;

pub use divisors::{divisors, prime_factors};
pub use elementary::{cbrt, cos, cube, exp, ln, sin, sqrt, square, tan};
pub use factorial::{factorial, factorial_exact};
pub use parse::parse_int;
pub use pow::{PowerHandle, pow, power};
pub use round::{floor, round, round_to};
pub use sign::{abs, negate, predecessor, reciprocal, sign, successor};
pub use to_string::to_text;

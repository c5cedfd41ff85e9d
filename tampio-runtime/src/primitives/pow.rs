// Power primitive and the power protocol
//
// Generated code can only express argument-less member access, so the source
// language's "n:s potenssi" carries its exponent in a name: `power(base)`
// builds a one-shot handle and the name handed to `call` is the exponent,
// counted from zero ("0" is the first power).

use super::parse::parse_int;

// RUST CONCEPT: Exponentiation with NaN propagation
// IEEE pow(1, NaN) and pow(x, 0) hide a NaN exponent; the host does not.
// ( base exponent -- base^exponent )
pub fn pow(base: f64, exponent: f64) -> f64 {
    if exponent.is_nan() {
        return f64::NAN;
    }
    base.powf(exponent)
}

/// Builds a handle bound to `base`. Nothing is computed until `call`.
pub fn power(base: f64) -> PowerHandle {
    PowerHandle { base }
}

/// One-shot power call bound to a base.
///
/// `call` takes the handle by value, so it can only ever be used once.
#[derive(Debug)]
#[must_use = "a power handle does nothing until it is called"]
pub struct PowerHandle {
    base: f64,
}

impl PowerHandle {
    pub fn base(&self) -> f64 {
        self.base
    }

    /// Evaluates `base ^ (name + 1)`. An unparsable name gives NaN.
    pub fn call(self, name: &str) -> f64 {
        let exponent = parse_int(name) + 1.0;
        tracing::trace!(base = self.base, attribute = name, exponent, "power call");
        pow(self.base, exponent)
    }
}

// Number to text conversion

// RUST CONCEPT: Display for f64 is close to the host format but not identical
// Rust prints "inf", "-0" and never switches to exponent notation; the host
// prints "Infinity", "0" and uses exponents below 1e-6 and from 1e21 up,
// always with an explicit exponent sign.
pub fn to_text(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }

    let magnitude = n.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        let formatted = format!("{:e}", n);
        // "1.5e-7" stays as is, "1e21" becomes "1e+21"
        match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            }
            _ => formatted,
        }
    } else {
        format!("{}", n)
    }
}

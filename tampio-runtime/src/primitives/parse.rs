// Integer parsing shared by the power protocol and prompt reads
//
// Follows the host's parseInt: leading whitespace is skipped, an optional sign
// and an optional 0x prefix are accepted, then the longest run of digits is
// read. Anything after the digits is ignored. No digits at all is NaN, never
// an error.

// ( text -- n )
pub fn parse_int(text: &str) -> f64 {
    let trimmed = text.trim_start();

    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let (radix, digits) = match rest.get(..2) {
        Some("0x") | Some("0X") => (16, &rest[2..]),
        _ => (10, rest),
    };

    // RUST CONCEPT: Accumulate in f64 so huge inputs overflow to infinity, not panic
    let mut value = 0.0f64;
    let mut seen_digit = false;
    for c in digits.chars() {
        match c.to_digit(radix) {
            Some(d) => {
                value = value * radix as f64 + d as f64;
                seen_digit = true;
            }
            None => break,
        }
    }

    if !seen_digit {
        return f64::NAN;
    }
    if negative { -value } else { value }
}

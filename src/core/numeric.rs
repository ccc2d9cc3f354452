//! Numeric coercion of raw form text
//!
//! Both the validator and the pricing calculator read numbers out of raw
//! strings. Neither ever trims whitespace.

/// Parse the leading integer of `raw`: an optional sign followed by a run of
/// ASCII digits. Trailing text after the digits is ignored (`"3 holes"` is 3).
///
/// Returns `None` when no digit follows the optional sign, or the digit run
/// overflows `i64`.
pub fn parse_int_prefix(raw: &str) -> Option<i64> {
    let bytes = raw.as_bytes();
    let sign_len = match bytes.first() {
        Some(b'+') | Some(b'-') => 1,
        _ => 0,
    };
    let digits = bytes[sign_len..]
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if digits == 0 {
        return None;
    }
    raw[..sign_len + digits].parse::<i64>().ok()
}

/// Parse the whole of `raw` as a decimal number.
///
/// The empty string and `NaN` are not numbers. Infinities are returned as-is
/// so that a `finite` rule can report them.
pub fn parse_number(raw: &str) -> Option<f64> {
    match raw.parse::<f64>() {
        Ok(value) if !value.is_nan() => Some(value),
        _ => None,
    }
}

/// Round to two decimal places
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_int_prefix_plain() {
        assert_eq!(parse_int_prefix("42"), Some(42));
        assert_eq!(parse_int_prefix("-7"), Some(-7));
        assert_eq!(parse_int_prefix("+3"), Some(3));
    }

    #[test]
    fn test_parse_int_prefix_ignores_trailing_text() {
        assert_eq!(parse_int_prefix("3 holes"), Some(3));
        assert_eq!(parse_int_prefix("2.9"), Some(2));
    }

    #[test]
    fn test_parse_int_prefix_rejects_non_numeric() {
        assert_eq!(parse_int_prefix(""), None);
        assert_eq!(parse_int_prefix("abc"), None);
        assert_eq!(parse_int_prefix("-"), None);
        assert_eq!(parse_int_prefix(" 3"), None);
    }

    #[test]
    fn test_parse_int_prefix_overflow() {
        assert_eq!(parse_int_prefix("99999999999999999999999"), None);
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("12.5"), Some(12.5));
        assert_eq!(parse_number("1e2"), Some(100.0));
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("12 "), None);
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("inf"), Some(f64::INFINITY));
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(12.0), 12.0);
        assert_eq!(round2(1.005 * 1000.0), 1005.0);
        assert_eq!(round2(2.345678), 2.35);
    }
}

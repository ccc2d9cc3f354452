//! Reusable field validators
//!
//! Each validator receives the field name and the already-coerced value.
//! Validators only judge values of the type they understand and let other
//! types pass, so a rule list can mix string and numeric checks.

use crate::core::field::{FieldFormat, FieldValue};
use validator::ValidateLength;

/// Validator: string length (in characters) must be within `min..=max`
pub fn string_length(
    min: usize,
    max: usize,
) -> impl Fn(&str, &FieldValue) -> Result<(), String> + Send + Sync + Clone {
    move |_: &str, value: &FieldValue| {
        if let Some(s) = value.as_string() {
            if s.validate_length(Some(min as u64), Some(max as u64), None) {
                return Ok(());
            }
            let len = s.chars().count();
            if len < min {
                Err(format!(
                    "String must contain at least {} character(s) (currently {})",
                    min, len
                ))
            } else {
                Err(format!(
                    "String must contain at most {} character(s) (currently {})",
                    max, len
                ))
            }
        } else {
            Ok(())
        }
    }
}

/// Validator: string must match a format
pub fn pattern(
    format: FieldFormat,
    message: &'static str,
) -> impl Fn(&str, &FieldValue) -> Result<(), String> + Send + Sync + Clone {
    move |_: &str, value: &FieldValue| {
        if value.as_string().is_none() || format.validate(value) {
            Ok(())
        } else {
            Err(message.to_string())
        }
    }
}

/// Validator: value must be in allowed list
pub fn in_list(
    allowed: Vec<String>,
) -> impl Fn(&str, &FieldValue) -> Result<(), String> + Send + Sync + Clone {
    move |_: &str, value: &FieldValue| {
        if let Some(s) = value.as_string() {
            if allowed.iter().any(|a| a == s) {
                Ok(())
            } else {
                Err(format!(
                    "Invalid enum value. Expected {}, received '{}'",
                    allowed
                        .iter()
                        .map(|a| format!("'{}'", a))
                        .collect::<Vec<_>>()
                        .join(" | "),
                    s
                ))
            }
        } else {
            Ok(())
        }
    }
}

/// Validator: number must be strictly positive
pub fn positive() -> impl Fn(&str, &FieldValue) -> Result<(), String> + Send + Sync + Clone {
    |_: &str, value: &FieldValue| match value.as_float() {
        Some(num) if num <= 0.0 => Err("Number must be greater than 0".to_string()),
        _ => Ok(()),
    }
}

/// Validator: number must be zero or more
pub fn non_negative() -> impl Fn(&str, &FieldValue) -> Result<(), String> + Send + Sync + Clone
{
    |_: &str, value: &FieldValue| match value.as_float() {
        Some(num) if num < 0.0 => {
            Err("Number must be greater than or equal to 0".to_string())
        }
        _ => Ok(()),
    }
}

/// Validator: number must be finite
pub fn finite() -> impl Fn(&str, &FieldValue) -> Result<(), String> + Send + Sync + Clone {
    |_: &str, value: &FieldValue| match value.as_float() {
        Some(num) if !num.is_finite() => Err("Number must be finite".to_string()),
        _ => Ok(()),
    }
}

/// Largest integer a double represents exactly (2^53 - 1)
pub const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Validator: number must lie within the exactly-representable integer range
pub fn safe() -> impl Fn(&str, &FieldValue) -> Result<(), String> + Send + Sync + Clone {
    |_: &str, value: &FieldValue| match value.as_float() {
        Some(num) if num.abs() > MAX_SAFE_INTEGER => {
            Err("Number must be a safe number".to_string())
        }
        _ => Ok(()),
    }
}

/// Validator: number must not exceed maximum
pub fn max_value(max: f64) -> impl Fn(&str, &FieldValue) -> Result<(), String> + Send + Sync + Clone {
    move |_: &str, value: &FieldValue| match value.as_float() {
        Some(num) if num > max => Err(format!(
            "Number must be less than or equal to {}",
            max
        )),
        _ => Ok(()),
    }
}

/// Validator: arbitrary predicate over the value with a custom message
pub fn refine<P>(
    predicate: P,
    message: &'static str,
) -> impl Fn(&str, &FieldValue) -> Result<(), String> + Send + Sync + Clone
where
    P: Fn(&FieldValue) -> bool + Send + Sync + Clone,
{
    move |_: &str, value: &FieldValue| {
        if predicate(value) {
            Ok(())
        } else {
            Err(message.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(v: &str) -> FieldValue {
        FieldValue::from(v)
    }

    // === string_length() ===

    #[test]
    fn test_string_length_too_short_returns_error() {
        let v = string_length(2, 50);
        let result = v("firstName", &s("A"));
        assert!(result.unwrap_err().contains("at least 2"));
    }

    #[test]
    fn test_string_length_too_long_returns_error() {
        let v = string_length(1, 5);
        let result = v("name", &s("abcdef"));
        assert!(result.unwrap_err().contains("at most 5"));
    }

    #[test]
    fn test_string_length_bounds_inclusive() {
        let v = string_length(3, 5);
        assert!(v("name", &s("abc")).is_ok());
        assert!(v("name", &s("abcde")).is_ok());
    }

    #[test]
    fn test_string_length_counts_characters() {
        let v = string_length(2, 3);
        assert!(v("name", &s("Иван")).is_err());
        assert!(v("name", &s("Ян")).is_ok());
    }

    #[test]
    fn test_string_length_does_not_trim() {
        let v = string_length(2, 50);
        assert!(v("name", &s(" A")).is_ok());
    }

    #[test]
    fn test_string_length_non_string_passthrough() {
        let v = string_length(5, 10);
        assert!(v("age", &FieldValue::Integer(42)).is_ok());
    }

    // === pattern() ===

    #[test]
    fn test_pattern_phone() {
        let v = pattern(FieldFormat::Phone, "Invalid Number!");
        assert!(v("phoneNumber", &s("+359123123123")).is_ok());
        assert_eq!(
            v("phoneNumber", &s("abc")).unwrap_err(),
            "Invalid Number!"
        );
    }

    // === in_list() ===

    #[test]
    fn test_in_list_value_in_list_returns_ok() {
        let v = in_list(vec!["m".into(), "m2".into(), "m3".into()]);
        assert!(v("unit", &s("m2")).is_ok());
    }

    #[test]
    fn test_in_list_value_not_in_list_returns_error() {
        let v = in_list(vec!["m".into(), "m2".into()]);
        let err = v("unit", &s("km")).unwrap_err();
        assert!(err.contains("'m' | 'm2'"));
        assert!(err.contains("'km'"));
    }

    #[test]
    fn test_in_list_is_case_sensitive() {
        let v = in_list(vec!["true".into(), "false".into()]);
        assert!(v("express", &s("True")).is_err());
    }

    // === numeric bounds ===

    #[test]
    fn test_positive() {
        let v = positive();
        assert!(v("price", &FieldValue::Float(0.5)).is_ok());
        assert!(v("price", &FieldValue::Float(0.0)).is_err());
        assert!(v("quantity", &FieldValue::Integer(-1)).is_err());
        assert!(v("name", &s("x")).is_ok());
    }

    #[test]
    fn test_non_negative() {
        let v = non_negative();
        assert!(v("hinges", &FieldValue::Integer(0)).is_ok());
        assert!(v("hinges", &FieldValue::Integer(-2)).is_err());
    }

    #[test]
    fn test_finite() {
        let v = finite();
        assert!(v("price", &FieldValue::Float(f64::INFINITY)).is_err());
        assert!(v("price", &FieldValue::Float(1.0)).is_ok());
    }

    #[test]
    fn test_safe() {
        let v = safe();
        assert!(v("price", &FieldValue::Float(MAX_SAFE_INTEGER)).is_ok());
        assert!(v("price", &FieldValue::Float(MAX_SAFE_INTEGER * 2.0)).is_err());
    }

    #[test]
    fn test_max_value() {
        let v = max_value(10000.0);
        assert!(v("quantity", &FieldValue::Integer(10000)).is_ok());
        let err = v("quantity", &FieldValue::Integer(10001)).unwrap_err();
        assert!(err.contains("10000"));
    }

    // === refine() ===

    #[test]
    fn test_refine_uses_custom_message() {
        let v = refine(|value| value.as_string() != Some("none"), "Pick a material");
        assert!(v("item", &s("oak")).is_ok());
        assert_eq!(v("item", &s("none")).unwrap_err(), "Pick a material");
    }
}

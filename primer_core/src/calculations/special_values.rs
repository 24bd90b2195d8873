//! # IEEE-754 Special Values
//!
//! Dividing a float by zero does not fault: a positive dividend gives
//! positive infinity, a negative one gives negative infinity, and zero
//! itself gives NaN. This module produces those three values and a few
//! facts about each of them.

use serde::Serialize;
use tracing::debug;

/// Dividends used for the demonstration
pub const POSITIVE_DIVIDEND: f64 = 5.0;
pub const NEGATIVE_DIVIDEND: f64 = -5.0;

/// One division by zero and what it produced.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SpecialValue {
    /// Short name: "positive_infinity", "negative_infinity" or "nan"
    pub label: &'static str,

    pub dividend: f64,

    /// Quotient, serialized as the string "inf", "-inf" or "nan"
    #[serde(with = "crate::format::real")]
    pub value: f64,

    pub is_infinite: bool,
    pub is_nan: bool,

    /// Whether `value == value`; false only for NaN
    pub equals_itself: bool,
}

impl SpecialValue {
    fn divide_by_zero(label: &'static str, dividend: f64) -> Self {
        let zero = 0.0_f64;
        let value = dividend / zero;
        #[allow(clippy::eq_op)]
        let equals_itself = value == value;
        SpecialValue {
            label,
            dividend,
            value,
            is_infinite: value.is_infinite(),
            is_nan: value.is_nan(),
            equals_itself,
        }
    }
}

/// The three results of the demonstration.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SpecialValuesResult {
    pub positive_infinity: SpecialValue,
    pub negative_infinity: SpecialValue,
    pub nan: SpecialValue,
}

impl SpecialValuesResult {
    /// Values in print order.
    pub fn values(&self) -> [SpecialValue; 3] {
        [self.positive_infinity, self.negative_infinity, self.nan]
    }
}

/// Divide a positive number, a negative number and zero by zero.
///
/// # Example
///
/// ```rust
/// use primer_core::calculations::special_values::calculate;
///
/// let result = calculate();
/// assert_eq!(result.positive_infinity.value, f64::INFINITY);
/// assert_eq!(result.negative_infinity.value, f64::NEG_INFINITY);
/// assert!(result.nan.value.is_nan());
/// ```
pub fn calculate() -> SpecialValuesResult {
    let result = SpecialValuesResult {
        positive_infinity: SpecialValue::divide_by_zero("positive_infinity", POSITIVE_DIVIDEND),
        negative_infinity: SpecialValue::divide_by_zero("negative_infinity", NEGATIVE_DIVIDEND),
        nan: SpecialValue::divide_by_zero("nan", 0.0),
    };
    debug!(?result, "divided by zero");
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_over_zero() {
        let v = calculate().positive_infinity;
        assert_eq!(v.value, f64::INFINITY);
        assert!(v.is_infinite && !v.is_nan && v.equals_itself);
    }

    #[test]
    fn test_negative_over_zero() {
        let v = calculate().negative_infinity;
        assert_eq!(v.value, f64::NEG_INFINITY);
        assert!(v.value.is_sign_negative());
        assert!(v.equals_itself);
    }

    #[test]
    fn test_zero_over_zero() {
        let v = calculate().nan;
        assert!(v.value.is_nan());
        assert!(v.is_nan && !v.is_infinite);
        assert!(!v.equals_itself);
        assert_ne!(v.value, v.value);
    }

    #[test]
    fn test_print_order() {
        let labels: Vec<&str> = calculate().values().iter().map(|v| v.label).collect();
        assert_eq!(labels, ["positive_infinity", "negative_infinity", "nan"]);
    }

    #[test]
    fn test_json_uses_strings_for_specials() {
        let json = serde_json::to_value(calculate()).unwrap();
        assert_eq!(json["positive_infinity"]["value"], "inf");
        assert_eq!(json["negative_infinity"]["value"], "-inf");
        assert_eq!(json["nan"]["value"], "nan");
        assert_eq!(json["nan"]["equals_itself"], false);
    }
}

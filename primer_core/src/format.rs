//! Number formatting for console output.
//!
//! Reals are printed the way a default C++ output stream prints a `double`:
//! a fixed number of significant digits, trailing zeros dropped, switching
//! to scientific notation for very large or very small magnitudes.

/// Render `value` with `precision` significant digits in `%g` style.
///
/// # Example
///
/// ```rust
/// use primer_core::format::general;
///
/// assert_eq!(general(20.0 - 4.905, 6), "15.095");
/// assert_eq!(general(1.0 / 3.0, 6), "0.333333");
/// assert_eq!(general(12_345_678.0, 6), "1.23457e+07");
/// assert_eq!(general(f64::NEG_INFINITY, 6), "-inf");
/// ```
pub fn general(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    let precision = precision.max(1);
    let scientific = format!("{:.*e}", precision - 1, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    if exponent < -4 || exponent >= precision as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_zeros(mantissa), sign, exponent.abs())
    } else {
        let decimals = (precision as i32 - 1 - exponent).max(0) as usize;
        trim_zeros(&format!("{:.*}", decimals, value)).to_string()
    }
}

/// Serde adapter for reals that may be non-finite.
///
/// JSON has no infinity or NaN, so those are written as the strings
/// `"inf"`, `"-inf"` and `"nan"`; finite values stay numbers. Use with
/// `#[serde(with = "crate::format::real")]`.
pub mod real {
    use serde::{de, Deserialize, Deserializer, Serializer};

    use super::general;
    use crate::settings::DEFAULT_PRECISION;

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() {
            serializer.serialize_f64(*value)
        } else {
            serializer.serialize_str(&general(*value, DEFAULT_PRECISION))
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Number(f64),
            Text(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Number(value) => Ok(value),
            Repr::Text(text) => match text.as_str() {
                "inf" => Ok(f64::INFINITY),
                "-inf" => Ok(f64::NEG_INFINITY),
                "nan" => Ok(f64::NAN),
                other => Err(de::Error::custom(format!(
                    "expected a number, \"inf\", \"-inf\" or \"nan\", found \"{}\"",
                    other
                ))),
            },
        }
    }
}

fn trim_zeros(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}

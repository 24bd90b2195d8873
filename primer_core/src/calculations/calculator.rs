//! # Four-Operation Calculator
//!
//! Applies one of `+ - * /` to two real operands. The operation is chosen by
//! a numeric selector (1 through 4); any other selector is rejected with
//! `InvalidOperation` instead of producing a value.
//!
//! Division by zero follows [`DivisionPolicy`]: by default it fails with
//! `DivisionByZero`, with `ieee` it returns ±inf or NaN.
//!
//! ## Example
//!
//! ```rust
//! use primer_core::calculations::calculator::calculate_result;
//! use primer_core::settings::Settings;
//!
//! let settings = Settings::default();
//! assert_eq!(calculate_result(1, 3.0, 4.0, &settings).unwrap(), 7.0);
//! assert_eq!(calculate_result(4, 10.0, 2.0, &settings).unwrap(), 5.0);
//! assert!(calculate_result(5, 1.0, 1.0, &settings).is_err());
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::errors::{PrimerError, PrimerResult};
use crate::settings::{DivisionPolicy, Settings};

/// Arithmetic operation selected by code 1-4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    /// 1 - addition
    Add,
    /// 2 - subtraction
    Subtract,
    /// 3 - multiplication
    Multiply,
    /// 4 - division
    Divide,
}

impl Operation {
    /// All operations in selector order
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    /// Look up an operation by its selector.
    ///
    /// # Example
    /// ```
    /// use primer_core::calculations::calculator::Operation;
    /// assert_eq!(Operation::from_code(2).unwrap(), Operation::Subtract);
    /// assert!(Operation::from_code(0).is_err());
    /// ```
    pub fn from_code(code: i64) -> PrimerResult<Self> {
        match code {
            1 => Ok(Operation::Add),
            2 => Ok(Operation::Subtract),
            3 => Ok(Operation::Multiply),
            4 => Ok(Operation::Divide),
            _ => Err(PrimerError::InvalidOperation { code }),
        }
    }

    /// Selector of this operation (1-4)
    pub fn code(&self) -> i64 {
        match self {
            Operation::Add => 1,
            Operation::Subtract => 2,
            Operation::Multiply => 3,
            Operation::Divide => 4,
        }
    }

    /// Infix symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "*",
            Operation::Divide => "/",
        }
    }

    /// Apply the operation under the given division policy.
    pub fn apply(&self, x: f64, y: f64, division: DivisionPolicy) -> PrimerResult<f64> {
        match self {
            Operation::Add => Ok(x + y),
            Operation::Subtract => Ok(x - y),
            Operation::Multiply => Ok(x * y),
            Operation::Divide if y == 0.0 => match division {
                DivisionPolicy::Error => Err(PrimerError::DivisionByZero { dividend: x }),
                DivisionPolicy::Ieee => {
                    let quotient = x / y;
                    warn!(dividend = x, %quotient, "division by zero propagated as IEEE special value");
                    Ok(quotient)
                }
            },
            Operation::Divide => Ok(x / y),
        }
    }
}

/// Input parameters for one calculator run.
///
/// ## JSON Example
///
/// ```json
/// { "x": 10.0, "operation": "Divide", "y": 2.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculatorInput {
    /// First operand
    pub x: f64,

    /// Selected operation
    pub operation: Operation,

    /// Second operand
    pub y: f64,
}

impl CalculatorInput {
    /// Validate input parameters.
    pub fn validate(&self) -> PrimerResult<()> {
        for (field, value) in [("x", self.x), ("y", self.y)] {
            if !value.is_finite() {
                return Err(PrimerError::invalid_input(
                    field,
                    value.to_string(),
                    "Operand must be a finite number",
                ));
            }
        }
        Ok(())
    }
}

/// Result of one calculator run.
///
/// Under the `ieee` division policy `value` may be infinite or NaN; in JSON
/// it is then the string `"inf"`, `"-inf"` or `"nan"`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculatorResult {
    pub x: f64,
    pub operation: Operation,
    pub y: f64,

    #[serde(with = "crate::format::real")]
    pub value: f64,
}

/// Run the calculator on a fully parsed input.
pub fn calculate(input: &CalculatorInput, settings: &Settings) -> PrimerResult<CalculatorResult> {
    input.validate()?;
    debug!(x = input.x, op = input.operation.symbol(), y = input.y, "calculating");

    let value = input.operation.apply(input.x, input.y, settings.division)?;

    Ok(CalculatorResult {
        x: input.x,
        operation: input.operation,
        y: input.y,
        value,
    })
}

/// Apply the operation named by selector `op` to `x` and `y`.
///
/// Returns `InvalidOperation` for any selector outside 1-4.
pub fn calculate_result(op: i64, x: f64, y: f64, settings: &Settings) -> PrimerResult<f64> {
    let operation = Operation::from_code(op)?;
    calculate(&CalculatorInput { x, operation, y }, settings).map(|result| result.value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ieee() -> Settings {
        Settings {
            division: DivisionPolicy::Ieee,
            ..Settings::default()
        }
    }

    #[test]
    fn test_scenarios() {
        let settings = Settings::default();
        assert_eq!(calculate_result(1, 3.0, 4.0, &settings).unwrap(), 7.0);
        assert_eq!(calculate_result(4, 10.0, 2.0, &settings).unwrap(), 5.0);
        assert_eq!(calculate_result(2, 3.0, 4.0, &settings).unwrap(), -1.0);
        assert_eq!(calculate_result(3, 3.0, 4.0, &settings).unwrap(), 12.0);
    }

    #[test]
    fn test_exact_for_finite_operands() {
        let settings = Settings::default();
        let pairs = [(0.1, 0.2), (-1.5e10, 3.25), (1e-300, 7.0), (123.456, -0.001)];
        for (x, y) in pairs {
            assert_eq!(calculate_result(1, x, y, &settings).unwrap(), x + y);
            assert_eq!(calculate_result(2, x, y, &settings).unwrap(), x - y);
            assert_eq!(calculate_result(3, x, y, &settings).unwrap(), x * y);

            let quotient = calculate_result(4, x, y, &settings).unwrap();
            let expected = x / y;
            assert!((quotient - expected).abs() <= expected.abs() * f64::EPSILON);
        }
    }

    #[test]
    fn test_invalid_operation() {
        let settings = Settings::default();
        for code in [0, 5, -1, 42, i64::MAX] {
            assert_eq!(
                calculate_result(code, 1.0, 2.0, &settings).unwrap_err(),
                PrimerError::InvalidOperation { code }
            );
        }
    }

    #[test]
    fn test_division_by_zero_fails_by_default() {
        let settings = Settings::default();
        assert_eq!(
            calculate_result(4, 5.0, 0.0, &settings).unwrap_err(),
            PrimerError::DivisionByZero { dividend: 5.0 }
        );
        assert!(calculate_result(4, 0.0, -0.0, &settings).is_err());
    }

    #[test]
    fn test_division_by_zero_ieee_policy() {
        let settings = ieee();
        assert_eq!(calculate_result(4, 5.0, 0.0, &settings).unwrap(), f64::INFINITY);
        assert_eq!(calculate_result(4, -5.0, 0.0, &settings).unwrap(), f64::NEG_INFINITY);
        assert!(calculate_result(4, 0.0, 0.0, &settings).unwrap().is_nan());
    }

    #[test]
    fn test_non_finite_operands_rejected() {
        let settings = ieee();
        for (x, y) in [(f64::INFINITY, 2.0), (1.0, f64::NAN), (f64::NEG_INFINITY, f64::INFINITY)] {
            let err = calculate_result(1, x, y, &settings).unwrap_err();
            assert_eq!(err.error_code(), "INVALID_INPUT");
        }
    }

    #[test]
    fn test_special_result_serializes_as_string() {
        let input = CalculatorInput {
            x: 5.0,
            operation: Operation::Divide,
            y: 0.0,
        };
        let result = calculate(&input, &ieee()).unwrap();
        let json = serde_json::to_value(result).unwrap();
        assert_eq!(json["value"], "inf");
        assert_eq!(json["x"], 5.0);

        let roundtrip: CalculatorResult = serde_json::from_value(json).unwrap();
        assert_eq!(roundtrip.value, f64::INFINITY);
    }

    #[test]
    fn test_operation_codes_roundtrip() {
        for op in Operation::ALL {
            assert_eq!(Operation::from_code(op.code()).unwrap(), op);
        }
        assert_eq!(Operation::Divide.symbol(), "/");
    }

    #[test]
    fn test_calculate_result_struct() {
        let input = CalculatorInput {
            x: 6.0,
            operation: Operation::Multiply,
            y: 7.0,
        };
        let result = calculate(&input, &Settings::default()).unwrap();
        assert_eq!(result.value, 42.0);
        assert_eq!(result.operation, Operation::Multiply);
    }

    #[test]
    fn test_serialization() {
        let input = CalculatorInput {
            x: 10.0,
            operation: Operation::Divide,
            y: 2.0,
        };
        let json = serde_json::to_string(&input).unwrap();
        assert!(json.contains("\"Divide\""));
        let roundtrip: CalculatorInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input, roundtrip);
    }
}

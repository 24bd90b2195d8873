//! # Calculations
//!
//! One module per program. Each follows the same pattern:
//!
//! - `*Input` - parsed input (JSON-serializable)
//! - `*Result` - results (JSON-serializable)
//! - `calculate(input, settings) -> PrimerResult<*Result>` - pure function
//!
//! The special-values demonstration takes no input and cannot fail, so its
//! `calculate()` takes no arguments.
//!
//! ## Available Calculations
//!
//! - [`calculator`] - four-operation calculator
//! - [`gravity`] - height of a dropped ball over time
//! - [`special_values`] - IEEE-754 infinity and NaN from division by zero
//! - [`sum`] - two-integer sum

pub mod calculator;
pub mod gravity;
pub mod special_values;
pub mod sum;

pub use calculator::{CalculatorInput, CalculatorResult, Operation};
pub use gravity::{BallState, GravityInput, GravityResult, HeightSample};
pub use special_values::{SpecialValue, SpecialValuesResult};
pub use sum::{SumInput, SumResult};

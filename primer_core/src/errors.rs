//! # Error Types
//!
//! Structured error types for primer_core. Every failure a program can hit
//! (bad console input, an unknown operation code, a division or sum that the
//! active policy refuses) maps to one variant here, and every variant maps to
//! a stable process exit code.
//!
//! ## Example
//!
//! ```rust
//! use primer_core::errors::{PrimerError, PrimerResult};
//!
//! fn validate_height(height_m: f64) -> PrimerResult<()> {
//!     if height_m < 0.0 {
//!         return Err(PrimerError::invalid_input(
//!             "initial_height_m",
//!             height_m.to_string(),
//!             "Height cannot be negative",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_height(-1.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::exit_codes;

/// Result type alias for primer_core operations
pub type PrimerResult<T> = Result<T, PrimerError>;

/// Structured error type for the console programs.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum PrimerError {
    /// An input value is malformed or out of its domain
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Operation selector outside the supported set
    #[error("Invalid operation: {code} is not one of 1 (+), 2 (-), 3 (*), 4 (/)")]
    InvalidOperation { code: i64 },

    /// Division with a zero divisor while the division policy is `error`
    #[error("Division by zero: {dividend} / 0")]
    DivisionByZero { dividend: f64 },

    /// Integer sum out of range while the overflow policy is `error`
    #[error("Overflow: {lhs} + {rhs} does not fit in a 32-bit integer")]
    Overflow { lhs: i64, rhs: i64 },

    /// Standard input ended before a value was entered
    #[error("Input closed before a value for '{field}' was entered")]
    InputClosed { field: String },

    /// Console or file I/O failure
    #[error("I/O error: {operation} - {reason}")]
    Io { operation: String, reason: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl PrimerError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        PrimerError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an InputClosed error
    pub fn input_closed(field: impl Into<String>) -> Self {
        PrimerError::InputClosed { field: field.into() }
    }

    /// Create an Io error
    pub fn io(operation: impl Into<String>, reason: impl Into<String>) -> Self {
        PrimerError::Io {
            operation: operation.into(),
            reason: reason.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        PrimerError::SerializationError { reason: reason.into() }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            PrimerError::InvalidInput { .. } => "INVALID_INPUT",
            PrimerError::InvalidOperation { .. } => "INVALID_OPERATION",
            PrimerError::DivisionByZero { .. } => "DIVISION_BY_ZERO",
            PrimerError::Overflow { .. } => "OVERFLOW",
            PrimerError::InputClosed { .. } => "INPUT_CLOSED",
            PrimerError::Io { .. } => "IO_ERROR",
            PrimerError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }

    /// Process exit code for a program terminated by this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            PrimerError::InvalidInput { .. } => exit_codes::INVALID_INPUT,
            PrimerError::InvalidOperation { .. } => exit_codes::INVALID_OPERATION,
            PrimerError::DivisionByZero { .. } => exit_codes::DIVISION_BY_ZERO,
            PrimerError::Overflow { .. } => exit_codes::OVERFLOW,
            PrimerError::InputClosed { .. }
            | PrimerError::Io { .. }
            | PrimerError::SerializationError { .. } => exit_codes::FAILURE,
        }
    }
}

impl From<std::io::Error> for PrimerError {
    fn from(err: std::io::Error) -> Self {
        PrimerError::io("console", err.to_string())
    }
}

impl From<serde_json::Error> for PrimerError {
    fn from(err: serde_json::Error) -> Self {
        PrimerError::serialization(err.to_string())
    }
}

//! # primer_core - Calculation Engine for the Primer Programs
//!
//! `primer_core` holds everything the four Primer console programs compute:
//! a four-operation calculator, a falling-ball height simulation, a
//! demonstration of IEEE-754 infinity and NaN, and an integer sum. The
//! binaries in `primer_cli` only read input, call into this crate and print.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and settings and return results
//! - **Total**: Every undefined case (unknown operation, division by zero,
//!   overflow, bad input) is an explicit error or a documented policy
//! - **JSON-First**: Inputs, results and errors implement Serialize
//!
//! ## Quick Start
//!
//! ```rust
//! use primer_core::calculations::calculator::calculate_result;
//! use primer_core::Settings;
//!
//! let settings = Settings::default();
//! let value = calculate_result(3, 6.0, 7.0, &settings).unwrap();
//! assert_eq!(value, 42.0);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - The four programs' calculations
//! - [`console`] - Line-oriented prompts over any reader/writer
//! - [`settings`] - Gravity, time samples, policies, print precision
//! - [`format`] - `%g`-style number rendering
//! - [`units`] - SI newtypes
//! - [`errors`] - Structured error types
//! - [`exit_codes`] - Process exit codes per error kind

pub mod calculations;
pub mod console;
pub mod errors;
pub mod exit_codes;
pub mod format;
pub mod settings;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use console::Console;
pub use errors::{PrimerError, PrimerResult};
pub use settings::{DivisionPolicy, OverflowPolicy, Settings};

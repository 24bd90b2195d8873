//! Stable exit codes for the Primer programs.

/// Program ran to completion.
pub const OK: i32 = 0;
/// I/O, serialization, or closed standard input.
pub const FAILURE: i32 = 1;
/// Malformed or out-of-domain input value.
pub const INVALID_INPUT: i32 = 2;
/// Calculator operation selector outside 1..=4.
pub const INVALID_OPERATION: i32 = 3;
/// Division by zero refused by the division policy.
pub const DIVISION_BY_ZERO: i32 = 4;
/// Integer sum refused by the overflow policy.
pub const OVERFLOW: i32 = 5;

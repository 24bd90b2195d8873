//! # Integer Sum
//!
//! Adds two 32-bit integers. A sum outside the `i32` range is handled by
//! [`OverflowPolicy`]: fail with `Overflow` (default), clamp, or wrap.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::errors::{PrimerError, PrimerResult};
use crate::settings::{OverflowPolicy, Settings};

/// Input parameters for the sum utility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SumInput {
    pub x: i32,
    pub y: i32,
}

/// Result of the sum utility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SumResult {
    pub x: i32,
    pub y: i32,
    pub sum: i32,

    /// True when the policy clamped or wrapped the result
    pub overflowed: bool,
}

/// Add `x` and `y` under `policy`.
///
/// # Example
///
/// ```rust
/// use primer_core::calculations::sum::sum;
/// use primer_core::settings::OverflowPolicy;
///
/// assert_eq!(sum(2, 2, OverflowPolicy::Error).unwrap(), 4);
/// assert!(sum(i32::MAX, 1, OverflowPolicy::Error).is_err());
/// assert_eq!(sum(i32::MAX, 1, OverflowPolicy::Saturate).unwrap(), i32::MAX);
/// assert_eq!(sum(i32::MAX, 1, OverflowPolicy::Wrap).unwrap(), i32::MIN);
/// ```
pub fn sum(x: i32, y: i32, policy: OverflowPolicy) -> PrimerResult<i32> {
    match x.checked_add(y) {
        Some(total) => Ok(total),
        None => match policy {
            OverflowPolicy::Error => Err(PrimerError::Overflow {
                lhs: i64::from(x),
                rhs: i64::from(y),
            }),
            OverflowPolicy::Saturate => {
                let total = x.saturating_add(y);
                warn!(x, y, total, "sum saturated");
                Ok(total)
            }
            OverflowPolicy::Wrap => {
                let total = x.wrapping_add(y);
                warn!(x, y, total, "sum wrapped");
                Ok(total)
            }
        },
    }
}

/// Run the sum utility.
pub fn calculate(input: &SumInput, settings: &Settings) -> PrimerResult<SumResult> {
    let total = sum(input.x, input.y, settings.overflow)?;
    let overflowed = input.x.checked_add(input.y).is_none();
    debug!(x = input.x, y = input.y, total, overflowed, "summed");

    Ok(SumResult {
        x: input.x,
        y: input.y,
        sum: total,
        overflowed,
    })
}

//! # Unit Types
//!
//! Lightweight SI newtypes used by the gravity simulation. They keep time,
//! length and acceleration from being mixed up while serializing as plain
//! numbers.
//!
//! ## Example
//!
//! ```rust
//! use primer_core::units::{Meters, Seconds, MetersPerSecondSquared};
//!
//! let g = MetersPerSecondSquared(9.81);
//! let fallen = g.distance_fallen(Seconds(1.0));
//! assert!((fallen.0 - 4.905).abs() < 1e-12);
//!
//! let remaining = Meters(20.0) - fallen;
//! assert!((remaining.0 - 15.095).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

/// Time in seconds
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Seconds(pub f64);

/// Acceleration in meters per second squared
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetersPerSecondSquared(pub f64);

impl MetersPerSecondSquared {
    /// Distance covered from rest under this constant acceleration: ½·a·t²
    pub fn distance_fallen(self, time: Seconds) -> Meters {
        Meters(0.5 * self.0 * time.0 * time.0)
    }
}

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Meters);
impl_arithmetic!(Seconds);
impl_arithmetic!(MetersPerSecondSquared);

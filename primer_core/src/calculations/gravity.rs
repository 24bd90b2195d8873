//! # Gravity Simulation
//!
//! Height of a ball dropped from rest at an initial height, under constant
//! gravitational acceleration and no drag:
//!
//! ```text
//! h(t) = h0 - ½·g·t²
//! ```
//!
//! Heights are sampled at the configured times (0 through 5 s by default).
//! A sample whose height is not above zero reports that the ball is on the
//! ground instead of a number.
//!
//! ## Example
//!
//! ```rust
//! use primer_core::calculations::gravity::{calculate, BallState, GravityInput};
//! use primer_core::settings::Settings;
//!
//! let result = calculate(&GravityInput { initial_height_m: 20.0 }, &Settings::default()).unwrap();
//! assert_eq!(result.samples.len(), 6);
//! assert_eq!(result.samples[0].state, BallState::Airborne { height_m: 20.0 });
//! assert_eq!(result.samples[5].state, BallState::OnGround);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{PrimerError, PrimerResult};
use crate::settings::Settings;
use crate::units::{Meters, MetersPerSecondSquared, Seconds};

/// Input parameters for the gravity simulation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GravityInput {
    /// Height the ball is released from (m)
    pub initial_height_m: f64,
}

impl GravityInput {
    /// Validate input parameters.
    pub fn validate(&self) -> PrimerResult<()> {
        if !self.initial_height_m.is_finite() {
            return Err(PrimerError::invalid_input(
                "initial_height_m",
                self.initial_height_m.to_string(),
                "Height must be a finite number",
            ));
        }
        if self.initial_height_m < 0.0 {
            return Err(PrimerError::invalid_input(
                "initial_height_m",
                self.initial_height_m.to_string(),
                "Height cannot be negative",
            ));
        }
        Ok(())
    }
}

/// Where the ball is at one sample time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum BallState {
    /// Still falling, at this height above the ground (m)
    Airborne { height_m: f64 },
    /// Height has reached zero or below
    OnGround,
}

impl BallState {
    /// Classify a computed height.
    pub fn from_height(height: Meters) -> Self {
        if height.0 > 0.0 {
            BallState::Airborne { height_m: height.0 }
        } else {
            BallState::OnGround
        }
    }

    pub fn is_on_ground(&self) -> bool {
        matches!(self, BallState::OnGround)
    }
}

/// Height at one sample time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeightSample {
    /// Elapsed time since release (s)
    pub time_s: f64,

    pub state: BallState,
}

/// Results of the gravity simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GravityResult {
    /// Release height (m)
    pub initial_height_m: f64,

    /// Acceleration used (m/s²)
    pub gravity_mps2: f64,

    /// One entry per configured sample time, in order
    pub samples: Vec<HeightSample>,
}

impl GravityResult {
    /// First sample at which the ball is on the ground, if any.
    pub fn first_ground_contact(&self) -> Option<&HeightSample> {
        self.samples.iter().find(|s| s.state.is_on_ground())
    }
}

/// Raw kinematic height `h0 - ½·g·t²`; may be negative.
///
/// # Example
///
/// ```rust
/// use primer_core::calculations::gravity::height;
/// use primer_core::units::{Meters, MetersPerSecondSquared, Seconds};
///
/// let h = height(Seconds(1.0), Meters(20.0), MetersPerSecondSquared(9.81));
/// assert!((h.0 - 15.095).abs() < 1e-9);
/// ```
pub fn height(time: Seconds, initial_height: Meters, gravity: MetersPerSecondSquared) -> Meters {
    initial_height - gravity.distance_fallen(time)
}

/// Ball state at `time` after release from `initial_height_m`.
pub fn sample(time_s: f64, initial_height_m: f64, gravity_mps2: f64) -> HeightSample {
    let h = height(
        Seconds(time_s),
        Meters(initial_height_m),
        MetersPerSecondSquared(gravity_mps2),
    );
    HeightSample {
        time_s,
        state: BallState::from_height(h),
    }
}

/// Run the simulation over `settings.sample_times_s`.
///
/// The initial height and the settings are validated before anything is
/// computed.
pub fn calculate(input: &GravityInput, settings: &Settings) -> PrimerResult<GravityResult> {
    input.validate()?;
    settings.validate()?;

    let samples: Vec<HeightSample> = settings
        .sample_times_s
        .iter()
        .map(|&t| sample(t, input.initial_height_m, settings.gravity_mps2))
        .collect();

    debug!(
        initial_height_m = input.initial_height_m,
        gravity_mps2 = settings.gravity_mps2,
        samples = samples.len(),
        "simulated fall"
    );

    Ok(GravityResult {
        initial_height_m: input.initial_height_m,
        gravity_mps2: settings.gravity_mps2,
        samples,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const G: MetersPerSecondSquared = MetersPerSecondSquared(9.81);

    #[test]
    fn test_identity_at_release() {
        for h0 in [0.0, 1.0, 20.0, 1234.5] {
            assert_eq!(height(Seconds(0.0), Meters(h0), G).0, h0);
        }
    }

    #[test]
    fn test_height_after_one_second() {
        // 20 - 0.5 * 9.81 * 1 = 15.095
        let h = height(Seconds(1.0), Meters(20.0), G);
        assert!((h.0 - 15.095).abs() < 1e-9);
    }

    #[test]
    fn test_monotonically_non_increasing() {
        let h0 = Meters(100.0);
        let mut previous = height(Seconds(0.0), h0, G);
        for step in 1..=100 {
            let current = height(Seconds(step as f64 * 0.1), h0, G);
            assert!(current.0 <= previous.0);
            previous = current;
        }
    }

    #[test]
    fn test_ground_contact() {
        assert!(sample(10.0, 5.0, 9.81).state.is_on_ground());
        // Exactly zero counts as on the ground
        assert!(sample(0.0, 0.0, 9.81).state.is_on_ground());
        assert!(matches!(sample(1.0, 20.0, 9.81).state, BallState::Airborne { .. }));
    }

    #[test]
    fn test_default_samples() {
        let result = calculate(&GravityInput { initial_height_m: 100.0 }, &Settings::default()).unwrap();
        let times: Vec<f64> = result.samples.iter().map(|s| s.time_s).collect();
        assert_eq!(times, vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);

        // 100 - 4.905 * 16 = 21.52 still airborne; 100 - 4.905 * 25 < 0
        assert!(!result.samples[4].state.is_on_ground());
        assert_eq!(result.first_ground_contact().map(|s| s.time_s), Some(5.0));
    }

    #[test]
    fn test_custom_gravity() {
        let settings = Settings {
            gravity_mps2: 9.8,
            sample_times_s: vec![2.0],
            ..Settings::default()
        };
        let result = calculate(&GravityInput { initial_height_m: 20.0 }, &settings).unwrap();
        match result.samples[0].state {
            BallState::Airborne { height_m } => assert!((height_m - 0.4).abs() < 1e-9),
            BallState::OnGround => panic!("expected airborne"),
        }
    }

    #[test]
    fn test_negative_height_rejected() {
        let err = calculate(&GravityInput { initial_height_m: -1.0 }, &Settings::default()).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let settings = Settings {
            gravity_mps2: -9.81,
            ..Settings::default()
        };
        let err = calculate(&GravityInput { initial_height_m: 20.0 }, &settings).unwrap_err();
        assert_eq!(
            err,
            PrimerError::invalid_input("gravity_mps2", "-9.81", "Gravity must be a positive finite number")
        );

        let settings = Settings {
            sample_times_s: vec![1.0, -2.0],
            ..Settings::default()
        };
        assert!(calculate(&GravityInput { initial_height_m: 20.0 }, &settings).is_err());
    }

    #[test]
    fn test_non_finite_height_rejected() {
        assert!(GravityInput { initial_height_m: f64::NAN }.validate().is_err());
        assert!(GravityInput { initial_height_m: f64::INFINITY }.validate().is_err());
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_value(BallState::Airborne { height_m: 1.5 }).unwrap();
        assert_eq!(json["state"], "airborne");
        assert_eq!(json["height_m"], 1.5);

        let json = serde_json::to_value(BallState::OnGround).unwrap();
        assert_eq!(json["state"], "on_ground");
    }
}

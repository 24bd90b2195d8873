//! # Settings
//!
//! Named configuration values shared by the programs: gravitational
//! acceleration, the time samples of the gravity simulation, the policies
//! for division by zero and integer overflow, and the number of significant
//! digits used when printing reals.
//!
//! Settings are passed explicitly to every `calculate` function. A program
//! may also install one process-wide table at startup with [`init`]; after
//! that it cannot be changed, only read through [`global`].
//!
//! ## JSON Example
//!
//! Every field is optional; missing fields take their default.
//!
//! ```json
//! {
//!   "gravity_mps2": 9.81,
//!   "sample_times_s": [0, 1, 2, 3, 4, 5],
//!   "division": "error",
//!   "overflow": "saturate",
//!   "precision": 6
//! }
//! ```

use std::fs;
use std::path::Path;

use once_cell::sync::{Lazy, OnceCell};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{PrimerError, PrimerResult};

/// Standard gravitational acceleration used when none is configured (m/s²)
pub const DEFAULT_GRAVITY_MPS2: f64 = 9.81;

/// Time samples of the gravity simulation (s)
pub const DEFAULT_SAMPLE_TIMES_S: [f64; 6] = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0];

/// Significant digits for printed reals, same as a default C++ output stream
pub const DEFAULT_PRECISION: usize = 6;

/// Largest precision that still changes the printed value of an f64
pub const MAX_PRECISION: usize = 17;

static SETTINGS: OnceCell<Settings> = OnceCell::new();
static DEFAULT_SETTINGS: Lazy<Settings> = Lazy::new(Settings::default);

/// What the calculator does when asked to divide by zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DivisionPolicy {
    /// Fail with `DivisionByZero`
    #[default]
    Error,
    /// Return the IEEE-754 result (±inf, or NaN for 0/0)
    Ieee,
}

/// What the sum utility does when the result does not fit in an `i32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverflowPolicy {
    /// Fail with `Overflow`
    #[default]
    Error,
    /// Clamp to `i32::MIN` / `i32::MAX`
    Saturate,
    /// Two's complement wrap-around
    Wrap,
}

/// Configuration shared by all programs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Gravitational acceleration g (m/s²)
    pub gravity_mps2: f64,

    /// Times at which the gravity simulation reports a height (s)
    pub sample_times_s: Vec<f64>,

    /// Division-by-zero policy for the calculator
    pub division: DivisionPolicy,

    /// Overflow policy for the sum utility
    pub overflow: OverflowPolicy,

    /// Significant digits when printing reals
    pub precision: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            gravity_mps2: DEFAULT_GRAVITY_MPS2,
            sample_times_s: DEFAULT_SAMPLE_TIMES_S.to_vec(),
            division: DivisionPolicy::default(),
            overflow: OverflowPolicy::default(),
            precision: DEFAULT_PRECISION,
        }
    }
}

impl Settings {
    /// Validate every field.
    pub fn validate(&self) -> PrimerResult<()> {
        if !self.gravity_mps2.is_finite() || self.gravity_mps2 <= 0.0 {
            return Err(PrimerError::invalid_input(
                "gravity_mps2",
                self.gravity_mps2.to_string(),
                "Gravity must be a positive finite number",
            ));
        }
        if self.sample_times_s.is_empty() {
            return Err(PrimerError::invalid_input(
                "sample_times_s",
                "[]",
                "At least one time sample is required",
            ));
        }
        if let Some(bad) = self
            .sample_times_s
            .iter()
            .find(|t| !t.is_finite() || **t < 0.0)
        {
            return Err(PrimerError::invalid_input(
                "sample_times_s",
                bad.to_string(),
                "Time samples must be finite and non-negative",
            ));
        }
        if self.precision == 0 || self.precision > MAX_PRECISION {
            return Err(PrimerError::invalid_input(
                "precision",
                self.precision.to_string(),
                format!("Precision must be between 1 and {}", MAX_PRECISION),
            ));
        }
        Ok(())
    }

    /// Parse and validate settings from a JSON document.
    ///
    /// # Example
    ///
    /// ```rust
    /// use primer_core::settings::{OverflowPolicy, Settings};
    ///
    /// let settings = Settings::from_json_str(r#"{ "overflow": "wrap" }"#).unwrap();
    /// assert_eq!(settings.overflow, OverflowPolicy::Wrap);
    /// assert_eq!(settings.gravity_mps2, 9.81);
    /// ```
    pub fn from_json_str(json: &str) -> PrimerResult<Self> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load and validate settings from a JSON file.
    pub fn load(path: &Path) -> PrimerResult<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            PrimerError::io(format!("read {}", path.display()), e.to_string())
        })?;

        let settings: Settings =
            serde_json::from_str(&contents).map_err(|e| {
                PrimerError::serialization(format!("Invalid JSON in {}: {}", path.display(), e))
            })?;
        settings.validate()?;

        debug!(path = %path.display(), ?settings, "loaded settings");
        Ok(settings)
    }
}

/// Install the process-wide settings table.
///
/// The first call wins. Calling again with identical settings returns the
/// installed table; calling with different settings is an error.
pub fn init(settings: Settings) -> PrimerResult<&'static Settings> {
    settings.validate()?;

    let installed = SETTINGS.get_or_init(|| settings.clone());
    if *installed != settings {
        return Err(PrimerError::invalid_input(
            "settings",
            format!("{:?}", settings),
            "Settings were already initialized with different values",
        ));
    }
    Ok(installed)
}

/// The process-wide settings, or the defaults when [`init`] was never called.
pub fn global() -> &'static Settings {
    SETTINGS.get().unwrap_or(&DEFAULT_SETTINGS)
}

//! Tolerances for approximate floating point comparison.

use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, FfError};

/// Absolute and relative epsilons used by almost-equals checks.
///
/// `b` is almost equal to `a` when it lies in
/// `[a - (relative * |a| + absolute), a + (relative * |a| + absolute)]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FloatTolerance {
    /// Absolute epsilon.
    #[serde(default = "default_absolute")]
    pub absolute: f64,
    /// Relative epsilon, scaled by the magnitude of the first operand.
    #[serde(default = "default_relative")]
    pub relative: f64,
}

fn default_absolute() -> f64 {
    0.00001
}

fn default_relative() -> f64 {
    0.000001
}

impl Default for FloatTolerance {
    fn default() -> Self {
        Self {
            absolute: default_absolute(),
            relative: default_relative(),
        }
    }
}

impl FloatTolerance {
    /// Creates a tolerance; negative epsilons are stored as their magnitude.
    pub fn new(absolute: f64, relative: f64) -> Self {
        Self {
            absolute: absolute.abs(),
            relative: relative.abs(),
        }
    }

    /// Rejects non-finite or negative epsilons.
    pub fn validate(&self) -> Result<(), FfError> {
        for (name, value) in [("absolute", self.absolute), ("relative", self.relative)] {
            if !value.is_finite() || value < 0.0 {
                return Err(FfError::Config(
                    ErrorInfo::new("tolerance.invalid", "epsilon must be finite and non-negative")
                        .with_context("epsilon", name)
                        .with_context("value", value),
                ));
            }
        }
        Ok(())
    }

    /// Inclusive range around `a` accepted as almost equal.
    ///
    /// Epsilons count by magnitude, so the range is never inverted.
    pub fn bounds(&self, a: f64) -> (f64, f64) {
        let spread = self.relative.abs() * a.abs() + self.absolute.abs();
        (a - spread, a + spread)
    }

    /// Returns true when `b` is equal or almost equal to `a`.
    pub fn accepts(&self, a: f64, b: f64) -> bool {
        if a == b {
            return true;
        }
        let (low, high) = self.bounds(a);
        low <= b && b <= high
    }
}

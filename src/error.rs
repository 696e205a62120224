//! Simulation-specific error types.
//!
//! Geometry and collision code is total and never fails; errors only arise
//! while validating configuration or registering caller-built bodies.
//!
//! ## Usage
//!
//! ```rust
//! use asteroid_bounce::config::SimConfig;
//! use asteroid_bounce::error::SimResult;
//!
//! fn checked() -> SimResult<()> {
//!     SimConfig::default().validate()?;
//!     Ok(())
//! }
//! # checked().unwrap();
//! ```

use std::fmt;

/// Top-level error enum for the asteroid simulation.
#[derive(Debug, Clone, PartialEq)]
pub enum SimError {
    /// A polygon (or a vertex-count range) would have too few vertices to
    /// form a closed, collidable outline.
    InsufficientVertices {
        /// Actual vertex count provided.
        got: usize,
        /// Minimum required.
        required: usize,
    },

    /// A numeric range has `min > max` or a negative bound where only
    /// non-negative values make sense.
    InvalidRange {
        /// Name of the range (for logging).
        name: &'static str,
        min: f32,
        max: f32,
    },

    /// A constant is outside its safe operating range.
    UnsafeConstant {
        /// Name of the constant (for logging).
        name: &'static str,
        /// The value that was rejected.
        value: f32,
        /// Human-readable description of the safe range.
        safe_range: &'static str,
    },

    /// The configuration file exists but could not be decoded.
    ConfigParse { path: String, message: String },

    /// The configuration path exists but could not be read.
    ConfigRead { path: String, message: String },

    /// A [`BodyHandle`](crate::world::BodyHandle) did not belong to this world.
    UnknownBody { index: usize },
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::InsufficientVertices { got, required } => write!(
                f,
                "polygon vertex count too low: got {}, need at least {}",
                got, required
            ),
            SimError::InvalidRange { name, min, max } => {
                write!(f, "range '{}' is invalid: [{}, {}]", name, min, max)
            }
            SimError::UnsafeConstant {
                name,
                value,
                safe_range,
            } => write!(
                f,
                "constant '{}' = {} is outside safe range {}",
                name, value, safe_range
            ),
            SimError::ConfigParse { path, message } => {
                write!(f, "failed to parse '{}': {}", path, message)
            }
            SimError::ConfigRead { path, message } => {
                write!(f, "failed to read '{}': {}", path, message)
            }
            SimError::UnknownBody { index } => {
                write!(f, "no body with index {} in this world", index)
            }
        }
    }
}

impl std::error::Error for SimError {}

/// Convenience alias: a `Result` using `SimError` as the error type.
pub type SimResult<T> = Result<T, SimError>;

// ── Validation helpers ────────────────────────────────────────────────────────

/// Returns an error unless `value` is strictly positive and finite.
pub fn validate_positive(name: &'static str, value: f32) -> SimResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SimError::UnsafeConstant {
            name,
            value,
            safe_range: "(0.0, ∞)",
        })
    }
}

/// Returns an error unless `value` is finite and not negative.
pub fn validate_non_negative(name: &'static str, value: f32) -> SimResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(SimError::UnsafeConstant {
            name,
            value,
            safe_range: "[0.0, ∞)",
        })
    }
}

/// Returns an error unless `value` lies in the closed unit interval.
pub fn validate_unit_interval(name: &'static str, value: f32) -> SimResult<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(SimError::UnsafeConstant {
            name,
            value,
            safe_range: "[0.0, 1.0]",
        })
    }
}

//! Error types for scenario configuration.
//!
//! The step pipeline itself has no recoverable failures; only a rejected
//! [`SimulationConfig`](crate::config::SimulationConfig) surfaces here.

use std::fmt;

/// Reasons a configuration cannot produce a usable simulation.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Step size must be finite and strictly positive.
    InvalidStepSize(f64),
    /// Fewer than four requested bodies leaves the placement grid empty.
    TooFewBodies(usize),
    /// System mass must be finite and non-negative.
    InvalidSystemMass(f64),
    /// Grid spacing must be finite and strictly positive.
    InvalidDistribution(f64),
    /// Initial speed must be finite and non-negative.
    InvalidSpeed(f64),
    /// A variance fraction is negative or not finite.
    InvalidVariance { field: &'static str, value: f64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InvalidStepSize(value) => write!(f, "Invalid step size: {value}"),
            Self::TooFewBodies(count) => {
                write!(f, "Too few bodies: {count} (at least 4 required)")
            }
            Self::InvalidSystemMass(value) => write!(f, "Invalid system mass: {value}"),
            Self::InvalidDistribution(value) => write!(f, "Invalid distribution: {value}"),
            Self::InvalidSpeed(value) => write!(f, "Invalid speed: {value}"),
            Self::InvalidVariance { field, value } => {
                write!(f, "Invalid variance for {field}: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Convenient Result type alias for configuration checks.
pub type Result<T> = std::result::Result<T, ConfigError>;

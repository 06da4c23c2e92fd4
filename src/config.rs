//! Physical constants, defaults, and the scenario configuration.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Newtonian gravitational constant in N·m²/kg².
pub const GRAVITATIONAL_CONSTANT: f64 = 6.674e-11;

/// Density of a homogeneous planetesimal in kg/m³ (2 g/cm³).
pub const PLANETESIMAL_DENSITY: f64 = 2000.0;

/// Default integration timestep (in seconds): half an hour.
pub const DEFAULT_STEP_SIZE: f64 = 60.0 * 30.0;

pub const DEFAULT_RANDOM_SEED: u64 = 42;

pub const DEFAULT_NUMBER_OF_BODIES: usize = 128;

/// Default total mass of the generated system (in kg).
pub const DEFAULT_SYSTEM_MASS: f64 = 4.0e8;

pub const DEFAULT_MASS_VARIANCE: f64 = 1.0;

/// Default grid spacing between bodies (in meters).
pub const DEFAULT_DISTRIBUTION: f64 = 1500.0;

pub const DEFAULT_DISTRIBUTION_VARIANCE: f64 = 1.8;

/// Default initial speed (in m/s); directions are random.
pub const DEFAULT_SPEED: f64 = 0.003;

pub const DEFAULT_SPEED_VARIANCE: f64 = 1.8;

/// Initial conditions for a simulation.
///
/// Variances are fractions of their base value: `0.1` perturbs the base by up
/// to ±5%, `2.5` by up to ±125%.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Time advanced per integration step (in seconds).
    pub step_size: f64,
    pub random_seed: u64,
    /// Requested body count. The grid layout rounds this down to `4·k²`.
    pub number_of_bodies: usize,
    /// Total mass shared between the bodies (in kg).
    pub system_mass: f64,
    pub mass_variance: f64,
    /// Minimum spacing between neighbouring bodies (in meters).
    pub distribution: f64,
    pub distribution_variance: f64,
    /// Initial speed magnitude (in m/s).
    pub speed: f64,
    pub speed_variance: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            step_size: DEFAULT_STEP_SIZE,
            random_seed: DEFAULT_RANDOM_SEED,
            number_of_bodies: DEFAULT_NUMBER_OF_BODIES,
            system_mass: DEFAULT_SYSTEM_MASS,
            mass_variance: DEFAULT_MASS_VARIANCE,
            distribution: DEFAULT_DISTRIBUTION,
            distribution_variance: DEFAULT_DISTRIBUTION_VARIANCE,
            speed: DEFAULT_SPEED,
            speed_variance: DEFAULT_SPEED_VARIANCE,
        }
    }
}

impl SimulationConfig {
    /// Number of bodies the grid layout will actually place.
    pub fn effective_body_count(&self) -> usize {
        let side = self.quadrant_side();
        4 * side * side
    }

    /// Cells per side of one quadrant of the placement grid.
    pub fn quadrant_side(&self) -> usize {
        (self.number_of_bodies as f64 / 4.0).sqrt().floor() as usize
    }

    /// Mean mass per requested body (in kg).
    pub fn average_mass(&self) -> f64 {
        self.system_mass / self.number_of_bodies as f64
    }

    /// Checks that the configuration describes a usable scenario.
    pub fn validate(&self) -> Result<()> {
        if !(self.step_size.is_finite() && self.step_size > 0.0) {
            return Err(ConfigError::InvalidStepSize(self.step_size));
        }
        if self.number_of_bodies < 4 {
            return Err(ConfigError::TooFewBodies(self.number_of_bodies));
        }
        if !(self.system_mass.is_finite() && self.system_mass >= 0.0) {
            return Err(ConfigError::InvalidSystemMass(self.system_mass));
        }
        if !(self.distribution.is_finite() && self.distribution > 0.0) {
            return Err(ConfigError::InvalidDistribution(self.distribution));
        }
        if !(self.speed.is_finite() && self.speed >= 0.0) {
            return Err(ConfigError::InvalidSpeed(self.speed));
        }

        let variances = [
            ("mass_variance", self.mass_variance),
            ("distribution_variance", self.distribution_variance),
            ("speed_variance", self.speed_variance),
        ];
        for (field, value) in variances {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::InvalidVariance { field, value });
            }
        }

        Ok(())
    }
}

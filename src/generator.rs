//! Seeded initial conditions: a mirrored grid of jittered planetesimals.
//!
//! All sampling happens in f64 and is narrowed to the engine precision at the
//! end, so single- and double-precision runs start from the same scenario.

use glam::DVec3;
use log::{info, warn};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::SimulationConfig;
use crate::core::{
    body::Body,
    precision::{Real, Vector3},
    store::BodyStore,
};

/// Quadrant signs in placement order: +x+y, +x−y, −x−y, −x+y.
const QUADRANTS: [(f64, f64); 4] = [(1.0, 1.0), (1.0, -1.0), (-1.0, -1.0), (-1.0, 1.0)];

/// Builds starting bodies from a [`SimulationConfig`].
///
/// The generator owns its random stream. It is seeded once, so two generators
/// built from the same seed produce identical bodies for identical configs.
#[derive(Debug, Clone)]
pub struct InitialConditionGenerator {
    rng: ChaCha8Rng,
}

impl InitialConditionGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Places `4·side²` bodies, `side = floor(sqrt(number_of_bodies / 4))`.
    ///
    /// Fewer bodies than requested is expected whenever `number_of_bodies` is
    /// not of the form `4·k²`.
    ///
    /// Initial speeds are jittered around `config.speed`, not around zero.
    pub fn generate<T: Real>(&mut self, config: &SimulationConfig) -> BodyStore<T> {
        let side = config.quadrant_side();
        let half_spacing = config.distribution / 2.0;
        let average_mass = config.average_mass();
        let mut store = BodyStore::with_capacity(config.effective_body_count());

        for i in 0..side {
            for j in 0..side {
                let x_base = half_spacing + i as f64 * config.distribution;
                let y_base = half_spacing + j as f64 * config.distribution;

                for (x_sign, y_sign) in QUADRANTS {
                    let x = x_base + self.variance(config.distribution, config.distribution_variance);
                    let y = y_base + self.variance(config.distribution, config.distribution_variance);
                    let position = DVec3::new(x_sign * x, y_sign * y, 0.0);

                    let mass = average_mass + self.variance(average_mass, config.mass_variance);

                    let speed = config.speed + self.variance(config.speed, config.speed_variance);
                    let step = self.random_direction() * (speed * config.step_size);
                    let previous_position = position - step;

                    store.insert(Body::new(
                        T::Vector::from_dvec3(position),
                        T::Vector::from_dvec3(previous_position),
                        T::from_f64(mass),
                    ));
                }
            }
        }

        if store.len() < config.number_of_bodies {
            warn!(
                "grid layout placed {} of {} requested bodies",
                store.len(),
                config.number_of_bodies
            );
        }
        info!(
            "generated {} bodies (seed {}, total mass {:.6e} kg)",
            store.len(),
            config.random_seed,
            store.total_mass()
        );

        store
    }

    /// Uniform perturbation in `[-base·size/2, base·size/2)`.
    pub fn variance(&mut self, base: f64, size: f64) -> f64 {
        base * size * (self.rng.gen::<f64>() - 0.5)
    }

    /// Random unit direction sampled from the centred unit cube, redrawn
    /// while the sample is the zero vector.
    pub fn random_direction(&mut self) -> DVec3 {
        loop {
            let candidate = DVec3::new(
                self.rng.gen::<f64>() - 0.5,
                self.rng.gen::<f64>() - 0.5,
                self.rng.gen::<f64>() - 0.5,
            );
            if candidate != DVec3::ZERO {
                return Vector3::normalize(candidate);
            }
        }
    }
}

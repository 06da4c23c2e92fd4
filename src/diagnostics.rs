//! Accuracy and performance probes for comparing engine precisions.

use glam::DVec3;
use log::info;
use std::time::{Duration, Instant};

use crate::{config::SimulationConfig, core::precision::Real, simulation::Simulation};

/// Outcome of running one scenario for a fixed number of steps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DriftReport {
    pub steps: usize,
    /// Wall-clock time spent inside `simulate`.
    pub wall_time: Duration,
    /// Simulated time covered (in seconds).
    pub simulated_seconds: f64,
    pub initial_body_count: usize,
    pub final_body_count: usize,
    pub initial_velocity: DVec3,
    pub final_velocity: DVec3,
}

impl DriftReport {
    /// Builds a simulation at precision `T` from `config` and runs `steps`
    /// steps in a single call.
    pub fn measure<T: Real>(config: SimulationConfig, steps: usize) -> Self {
        let mut simulation = Simulation::<T>::new(config);
        Self::measure_on(&mut simulation, steps)
    }

    /// Runs `steps` steps on an existing simulation and reports the drift of
    /// its system velocity.
    pub fn measure_on<T: Real>(simulation: &mut Simulation<T>, steps: usize) -> Self {
        let initial_body_count = simulation.body_count();
        let initial_velocity = simulation.system_velocity();
        let initial_time = simulation.elapsed_time();

        let start = Instant::now();
        simulation.simulate(steps);
        let wall_time = start.elapsed();

        let report = Self {
            steps,
            wall_time,
            simulated_seconds: simulation.elapsed_time() - initial_time,
            initial_body_count,
            final_body_count: simulation.body_count(),
            initial_velocity,
            final_velocity: simulation.system_velocity(),
        };
        info!(
            "{} steps ({}) in {:.3} s, {} -> {} bodies, velocity deviation {:.3e} m/s",
            steps,
            format_elapsed(report.simulated_seconds as u64),
            wall_time.as_secs_f64(),
            initial_body_count,
            report.final_body_count,
            report.velocity_deviation()
        );
        report
    }

    /// `|Δvx| + |Δvy| + |Δvz|` between the initial and final system velocity.
    pub fn velocity_deviation(&self) -> f64 {
        let delta = self.final_velocity - self.initial_velocity;
        delta.x.abs() + delta.y.abs() + delta.z.abs()
    }
}

/// Formats simulated seconds as whole years, days and hours, with 365-day
/// years.
pub fn format_elapsed(seconds: u64) -> String {
    let total_hours = seconds / (60 * 60);
    let total_days = total_hours / 24;
    let years = total_days / 365;
    let days = total_days % 365;
    let hours = total_hours % 24;
    format!("{years} years {days} days {hours} hours")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_time_breaks_into_calendar_units() {
        assert_eq!(format_elapsed(0), "0 years 0 days 0 hours");
        assert_eq!(format_elapsed(3 * 3600 + 59), "0 years 0 days 3 hours");
        let seconds = ((365 + 2) * 24 + 5) * 3600;
        assert_eq!(format_elapsed(seconds), "1 years 2 days 5 hours");
    }

    #[test]
    fn deviation_sums_absolute_components() {
        let report = DriftReport {
            steps: 0,
            wall_time: Duration::ZERO,
            simulated_seconds: 0.0,
            initial_body_count: 0,
            final_body_count: 0,
            initial_velocity: DVec3::new(1.0, 1.0, 1.0),
            final_velocity: DVec3::new(0.5, 2.0, 1.0),
        };
        assert_eq!(report.velocity_deviation(), 1.5);
    }
}

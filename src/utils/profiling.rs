use log::info;
use std::time::{Duration, Instant};

/// Accumulated timing data for the step pipeline.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct StepProfiler {
    pub gravity_time: Duration,
    pub integrator_time: Duration,
    pub collision_time: Duration,
    pub purge_time: Duration,
    pub total_time: Duration,

    pub steps: u64,
    pub body_count: usize,
    pub merge_count: usize,
    /// `simulate` calls that overran the frame budget.
    pub budget_overruns: usize,
}

impl StepProfiler {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn report(&self) {
        let total_us = self.total_time.as_micros() as f32;
        if total_us < 1.0 {
            return;
        }

        info!(
            "--- Simulation Profile --- steps: {}, bodies: {}, merges: {}, overruns: {}, total: {:.2} ms",
            self.steps,
            self.body_count,
            self.merge_count,
            self.budget_overruns,
            self.total_time.as_secs_f32() * 1000.0
        );

        let phases = [
            ("Gravity", self.gravity_time),
            ("Integrator", self.integrator_time),
            ("Collisions", self.collision_time),
            ("Purge", self.purge_time),
        ];
        for (label, time) in phases {
            info!(
                "  {:<11} {:.2} ms ({:.1}%)",
                label,
                time.as_secs_f32() * 1000.0,
                (time.as_micros() as f32 / total_us) * 100.0
            );
        }
    }
}

/// Pipeline phase a duration is booked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepPhase {
    Gravity,
    Integration,
    Collision,
    Purge,
}

impl StepProfiler {
    /// Runs `work` and books its wall time against `phase`.
    pub fn time<R>(&mut self, phase: StepPhase, work: impl FnOnce() -> R) -> R {
        let start = Instant::now();
        let result = work();
        *self.phase_time_mut(phase) += start.elapsed();
        result
    }

    fn phase_time_mut(&mut self, phase: StepPhase) -> &mut Duration {
        match phase {
            StepPhase::Gravity => &mut self.gravity_time,
            StepPhase::Integration => &mut self.integrator_time,
            StepPhase::Collision => &mut self.collision_time,
            StepPhase::Purge => &mut self.purge_time,
        }
    }
}

use log::{log_enabled, trace, warn, Level};
use std::time::{Duration, Instant};

/// Traces the wall time of one `simulate` call covering `steps` steps,
/// starting after step `first_step`.
pub struct StepSpanTimer {
    first_step: u64,
    steps: usize,
    bodies: usize,
    start: Instant,
}

impl StepSpanTimer {
    pub fn new(first_step: u64, steps: usize, bodies: usize) -> Self {
        if log_enabled!(Level::Trace) {
            trace!(
                "steps {}..{}: starting with {} bodies",
                first_step,
                first_step + steps as u64,
                bodies
            );
        }
        Self {
            first_step,
            steps,
            bodies,
            start: Instant::now(),
        }
    }
}

impl Drop for StepSpanTimer {
    fn drop(&mut self) {
        if log_enabled!(Level::Trace) {
            let elapsed = self.start.elapsed();
            let per_step = elapsed.as_micros() / self.steps.max(1) as u128;
            trace!(
                "steps {}..{}: {} µs ({} µs/step, started with {} bodies)",
                self.first_step,
                self.first_step + self.steps as u64,
                elapsed.as_micros(),
                per_step,
                self.bodies
            );
        }
    }
}

/// Warns when a `simulate` call overran its frame budget. Returns whether it
/// did.
pub fn warn_if_frame_budget_exceeded(duration: Duration, budget_ms: f32) -> bool {
    let elapsed_ms = duration.as_secs_f32() * 1000.0;
    if elapsed_ms > budget_ms {
        warn!(
            "simulate overran its frame budget: {:.2} ms > {:.2} ms",
            elapsed_ms, budget_ms
        );
        return true;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn budget_overrun_is_reported() {
        assert!(warn_if_frame_budget_exceeded(Duration::from_millis(20), 16.0));
    }

    #[test]
    fn run_within_budget_is_quiet() {
        assert!(!warn_if_frame_budget_exceeded(Duration::from_millis(10), 16.0));
        assert!(!warn_if_frame_budget_exceeded(Duration::from_millis(16), 16.0));
    }
}

use glam::DVec3;
use log::{debug, info};
use std::time::Instant;

use crate::{
    collision::merge::CollisionMerger,
    config::SimulationConfig,
    core::{
        body::Body,
        precision::{Real, Vector3},
        store::BodyStore,
    },
    dynamics::{gravity::GravitySolver, integrator::Integrator},
    error::Result,
    generator::InitialConditionGenerator,
    utils::{
        logging::{warn_if_frame_budget_exceeded, StepSpanTimer},
        profiling::{StepPhase, StepProfiler},
    },
};

/// Double-precision engine.
pub type Simulation64 = Simulation<f64>;
/// Single-precision engine.
pub type Simulation32 = Simulation<f32>;

/// Owns the bodies and runs the step pipeline:
/// gravity, integration, collision merging, purge.
///
/// Everything runs synchronously on the caller's thread. `simulate` borrows
/// the simulation mutably, so nothing can observe the bodies mid-step; a
/// caller that wants to interrupt long runs calls `simulate(1)` in a loop.
#[derive(Debug)]
pub struct Simulation<T: Real> {
    bodies: BodyStore<T>,
    gravity: GravitySolver<T>,
    integrator: Integrator<T>,
    merger: CollisionMerger,
    step_size: T,
    steps_taken: u64,
    frame_budget_ms: Option<f32>,
    profiler: StepProfiler,
}

impl<T: Real> Simulation<T> {
    /// Generates the initial bodies from `config`.
    ///
    /// No validation happens here: the grid may place fewer bodies than
    /// requested, or none at all. Use [`Simulation::try_new`] to reject
    /// unusable configurations up front.
    pub fn new(config: SimulationConfig) -> Self {
        let bodies = InitialConditionGenerator::new(config.random_seed).generate(&config);
        info!(
            "simulation ready: {} bodies ({} requested), step {} s",
            bodies.len(),
            config.number_of_bodies,
            config.step_size
        );
        Self::from_store(T::from_f64(config.step_size), bodies)
    }

    pub fn try_new(config: SimulationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Builds a simulation around hand-placed bodies.
    pub fn from_bodies(step_size: T, bodies: Vec<Body<T>>) -> Self {
        Self::from_store(step_size, BodyStore::from(bodies))
    }

    fn from_store(step_size: T, bodies: BodyStore<T>) -> Self {
        Self {
            bodies,
            gravity: GravitySolver::new(),
            integrator: Integrator::new(step_size),
            merger: CollisionMerger::new(),
            step_size,
            steps_taken: 0,
            frame_budget_ms: None,
            profiler: StepProfiler::default(),
        }
    }

    /// Time advanced per step (in seconds). Fixed for the lifetime of the
    /// simulation.
    pub fn step_size(&self) -> T {
        self.step_size
    }

    /// Warn through `log` when a single `simulate` call takes longer than
    /// `budget_ms`. Overruns are counted in [`StepProfiler::budget_overruns`].
    pub fn set_frame_budget(&mut self, budget_ms: Option<f32>) {
        self.frame_budget_ms = budget_ms;
    }

    /// Runs `steps` full steps.
    ///
    /// # Panics
    ///
    /// Panics if two bodies ever share an exact position.
    pub fn simulate(&mut self, steps: usize) {
        if steps == 0 {
            return;
        }

        let start = Instant::now();
        {
            let _timer = StepSpanTimer::new(self.steps_taken, steps, self.bodies.len());
            for _ in 0..steps {
                self.step();
            }
        }

        let elapsed = start.elapsed();
        self.profiler.total_time += elapsed;
        if let Some(budget_ms) = self.frame_budget_ms {
            if warn_if_frame_budget_exceeded(elapsed, budget_ms) {
                self.profiler.budget_overruns += 1;
            }
        }
    }

    fn step(&mut self) {
        let bodies = &mut self.bodies;
        let profiler = &mut self.profiler;
        let (gravity, integrator, merger) = (&self.gravity, &self.integrator, &mut self.merger);

        profiler.time(StepPhase::Gravity, || gravity.apply(bodies.as_mut_slice()));
        profiler.time(StepPhase::Integration, || integrator.step(bodies.as_mut_slice()));
        let outcome = profiler.time(StepPhase::Collision, || merger.merge(bodies));
        let purged = profiler.time(StepPhase::Purge, || bodies.purge_removed());

        self.steps_taken += 1;
        self.profiler.steps += 1;
        self.profiler.merge_count += outcome.groups;
        self.profiler.body_count = self.bodies.len();

        if outcome.groups > 0 {
            debug!(
                "step {}: {} merges absorbed {} bodies, {} remain",
                self.steps_taken,
                outcome.groups,
                purged,
                self.bodies.len()
            );
        }
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn bodies(&self) -> &[Body<T>] {
        self.bodies.as_slice()
    }

    pub fn total_mass(&self) -> f64 {
        self.bodies.total_mass()
    }

    /// Mass-weighted mean velocity of all bodies (in m/s), accumulated in f64
    /// regardless of the engine precision. Zero when the system has no mass.
    pub fn system_velocity(&self) -> DVec3 {
        let inverse_step = 1.0 / self.step_size.to_f64();
        let mut momentum = DVec3::ZERO;
        let mut system_mass = 0.0;

        for body in &self.bodies {
            let mass = body.mass().to_f64();
            let velocity =
                (body.position.to_dvec3() - body.previous_position.to_dvec3()) * inverse_step;
            momentum += velocity * mass;
            system_mass += mass;
        }

        if system_mass > 0.0 {
            momentum / system_mass
        } else {
            DVec3::ZERO
        }
    }

    /// `(position, radius)` of every live body, valid until the next
    /// [`Simulation::simulate`].
    pub fn render_bodies(&self) -> impl ExactSizeIterator<Item = (T::Vector, T)> + '_ {
        self.bodies.iter().map(|body| (body.position, body.radius()))
    }

    pub fn steps_taken(&self) -> u64 {
        self.steps_taken
    }

    /// Simulated time since construction (in seconds).
    pub fn elapsed_time(&self) -> f64 {
        self.steps_taken as f64 * self.step_size.to_f64()
    }

    pub fn profiler(&self) -> &StepProfiler {
        &self.profiler
    }

    /// Returns the accumulated profile and starts a fresh one.
    pub fn take_profile(&mut self) -> StepProfiler {
        let profile = self.profiler;
        self.profiler.reset();
        self.profiler.body_count = self.bodies.len();
        profile
    }
}

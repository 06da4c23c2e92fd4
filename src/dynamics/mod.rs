//! Simulation dynamics modules: gravity and integration.

pub mod gravity;
pub mod integrator;

pub use gravity::GravitySolver;
pub use integrator::Integrator;

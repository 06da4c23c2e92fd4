//! Planetesimal – N-body gravity with collision merging for Rust.
//!
//! A brute-force O(n²) engine: every step accumulates pairwise Newtonian
//! gravity, advances bodies with Störmer–Verlet, merges every cluster of
//! overlapping bodies into one, and purges the absorbed originals. The engine
//! is generic over its floating-point precision.

pub mod collision;
pub mod config;
pub mod core;
pub mod diagnostics;
pub mod dynamics;
pub mod error;
pub mod generator;
pub mod render;
pub mod simulation;
pub mod utils;

pub use glam::{DVec3, Vec3};

pub use collision::{CollisionMerger, DisjointSet, MergeOutcome};
pub use config::{SimulationConfig, GRAVITATIONAL_CONSTANT, PLANETESIMAL_DENSITY};
pub use crate::core::{radius_from_mass, Body, BodyStore, Real, Vector3};
pub use diagnostics::{format_elapsed, DriftReport};
pub use dynamics::{GravitySolver, Integrator};
pub use error::{ConfigError, Result};
pub use generator::InitialConditionGenerator;
pub use render::{RenderBody, RenderSnapshot};
pub use simulation::{Simulation, Simulation32, Simulation64};
pub use utils::{StepPhase, StepProfiler};

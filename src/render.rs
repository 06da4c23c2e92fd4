//! Owned, single-precision body snapshots for rendering collaborators.

use glam::Vec3;

use crate::{
    core::precision::{Real, Vector3},
    simulation::Simulation,
};

/// GPU-friendly sphere: centre and radius in meters.
#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct RenderBody {
    pub position: Vec3,
    pub radius: f32,
}

/// Snapshot of simulation bodies converted into a flat f32 buffer.
#[derive(Debug, Default, Clone)]
pub struct RenderSnapshot {
    pub bodies: Vec<RenderBody>,
}

impl RenderSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn capture<T: Real>(simulation: &Simulation<T>) -> Self {
        let mut snapshot = Self::new();
        snapshot.sync(simulation);
        snapshot
    }

    /// Replaces the buffer contents with the simulation's live bodies.
    pub fn sync<T: Real>(&mut self, simulation: &Simulation<T>) {
        self.bodies.clear();
        self.bodies
            .extend(simulation.render_bodies().map(|(position, radius)| RenderBody {
                position: position.to_dvec3().as_vec3(),
                radius: radius.to_f64() as f32,
            }));
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RenderBody> {
        self.bodies.iter()
    }
}

use crate::core::{
    body::Body,
    precision::{Real, Vector3},
};

/// Störmer–Verlet integrator stepping bodies forward by a fixed timestep.
///
/// Velocity is never stored: the scheme advances from the current and
/// previous positions plus the acceleration implied by the accumulated force.
#[derive(Debug, Clone, Copy)]
pub struct Integrator<T: Real> {
    pub dt: T,
}

impl<T: Real> Integrator<T> {
    pub fn new(dt: T) -> Self {
        Self { dt }
    }

    /// `x(t+dt) = 2x(t) - x(t-dt) + a·dt²`, then clears the force accumulator.
    pub fn integrate_body(&self, body: &mut Body<T>) {
        let acceleration = body.incoming_force.scale(body.inverse_mass());
        let current = body.position;
        body.position =
            current + (current - body.previous_position) + acceleration.scale(self.dt * self.dt);
        body.previous_position = current;
        body.incoming_force = T::Vector::ZERO;
    }

    pub fn step(&self, bodies: &mut [Body<T>]) {
        for body in bodies.iter_mut() {
            self.integrate_body(body);
        }
    }
}

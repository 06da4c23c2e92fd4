use crate::config::GRAVITATIONAL_CONSTANT;
use crate::core::{
    body::Body,
    precision::{Real, Vector3},
};

/// Direct all-pairs Newtonian gravity.
///
/// Each unordered pair is visited once; the force on the first body is
/// mirrored onto the second. Forces are accumulated into
/// [`Body::incoming_force`] from the positions as they stand when the pass
/// starts, so it must run before any body moves.
#[derive(Debug, Clone, Copy)]
pub struct GravitySolver<T: Real> {
    pub gravitational_constant: T,
}

impl<T: Real> Default for GravitySolver<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Real> GravitySolver<T> {
    pub fn new() -> Self {
        Self::with_constant(T::from_f64(GRAVITATIONAL_CONSTANT))
    }

    pub fn with_constant(gravitational_constant: T) -> Self {
        Self {
            gravitational_constant,
        }
    }

    /// Force exerted on `a` by `b`.
    ///
    /// # Panics
    ///
    /// Panics if both bodies occupy the same position.
    pub fn pair_force(&self, a: &Body<T>, b: &Body<T>) -> T::Vector {
        let direction = b.position - a.position;
        let distance_squared = direction.length_squared();
        let magnitude = self.gravitational_constant * a.mass() * b.mass() / distance_squared;
        direction.normalize().scale(magnitude)
    }

    pub fn apply(&self, bodies: &mut [Body<T>]) {
        for i in 0..bodies.len() {
            let (head, tail) = bodies.split_at_mut(i + 1);
            let body_i = &mut head[i];
            for body_j in tail.iter_mut() {
                let force = self.pair_force(body_i, body_j);
                body_i.incoming_force += force;
                body_j.incoming_force -= force;
            }
        }
    }
}

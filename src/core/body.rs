use super::precision::{Real, Vector3};
use crate::config::PLANETESIMAL_DENSITY;

/// Radius of a homogeneous planetesimal of the given mass.
///
/// Uses `sqrt(3m / (4πρ))` with ρ = [`PLANETESIMAL_DENSITY`]. Non-positive
/// masses get a zero radius.
pub fn radius_from_mass<T: Real>(mass: T) -> T {
    let mass = mass.to_f64();
    if mass <= 0.0 {
        return T::ZERO;
    }
    T::from_f64(((3.0 * mass) / (4.0 * std::f64::consts::PI * PLANETESIMAL_DENSITY)).sqrt())
}

/// Point mass whose velocity is implied by two consecutive positions.
#[derive(Debug, Clone, PartialEq)]
pub struct Body<T: Real> {
    /// Position in meters.
    pub position: T::Vector,
    /// Position one step earlier, in meters.
    pub previous_position: T::Vector,
    /// Force accumulated for the current step, in newtons.
    pub incoming_force: T::Vector,
    mass: T,
    inverse_mass: T,
    radius: T,
    pending_removal: bool,
}

impl<T: Real> Body<T> {
    pub fn new(position: T::Vector, previous_position: T::Vector, mass: T) -> Self {
        let mut body = Self {
            position,
            previous_position,
            incoming_force: T::Vector::ZERO,
            mass,
            inverse_mass: T::ZERO,
            radius: T::ZERO,
            pending_removal: false,
        };
        body.recompute_derived();
        body
    }

    /// Body with the given velocity, expressed as the position one step back.
    pub fn with_velocity(position: T::Vector, velocity: T::Vector, mass: T, step_size: T) -> Self {
        Self::new(position, position - velocity.scale(step_size), mass)
    }

    pub fn mass(&self) -> T {
        self.mass
    }

    pub fn inverse_mass(&self) -> T {
        self.inverse_mass
    }

    pub fn radius(&self) -> T {
        self.radius
    }

    pub fn set_mass(&mut self, mass: T) {
        self.mass = mass;
        self.recompute_derived();
    }

    pub fn apply_force(&mut self, force: T::Vector) {
        self.incoming_force += force;
    }

    /// Velocity implied by the last step.
    pub fn velocity(&self, step_size: T) -> T::Vector {
        (self.position - self.previous_position).scale(T::ONE / step_size)
    }

    pub fn is_pending_removal(&self) -> bool {
        self.pending_removal
    }

    pub(crate) fn mark_for_removal(&mut self) {
        self.pending_removal = true;
    }

    fn recompute_derived(&mut self) {
        self.inverse_mass = if self.mass > T::ZERO {
            T::ONE / self.mass
        } else {
            T::ZERO
        };
        self.radius = radius_from_mass(self.mass);
    }
}

use log::debug;

use super::disjoint_set::DisjointSet;
use crate::core::{
    body::Body,
    precision::{Real, Vector3},
    store::BodyStore,
};

/// Summary of one collision pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeOutcome {
    /// Merged bodies appended to the store.
    pub groups: usize,
    /// Original bodies flagged for removal.
    pub absorbed: usize,
}

/// Detects overlapping bodies and replaces each connected cluster with a
/// single body.
///
/// Two bodies touch when the distance between their centres is at most the
/// sum of their radii. Touching is transitive within a pass: a chain
/// `a–b`, `b–c` merges all three even if `a` and `c` are apart.
#[derive(Debug, Default)]
pub struct CollisionMerger {
    sets: DisjointSet,
}

impl CollisionMerger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn touching<T: Real>(a: &Body<T>, b: &Body<T>) -> bool {
        (b.position - a.position).length() <= a.radius() + b.radius()
    }

    /// Index groups of at least two transitively touching bodies, ordered by
    /// lowest member index.
    pub fn find_groups<T: Real>(&mut self, bodies: &[Body<T>]) -> Vec<Vec<usize>> {
        self.sets.reset(bodies.len());
        for (i, body_i) in bodies.iter().enumerate() {
            for (offset, body_j) in bodies[i + 1..].iter().enumerate() {
                if Self::touching(body_i, body_j) {
                    self.sets.union(i, i + 1 + offset);
                }
            }
        }
        self.sets.groups(2)
    }

    /// Flags every colliding body for removal and appends one merged body per
    /// group. The store still holds the flagged originals afterwards; purging
    /// them is left to the caller.
    pub fn merge<T: Real>(&mut self, store: &mut BodyStore<T>) -> MergeOutcome {
        let groups = self.find_groups(store.as_slice());
        let mut outcome = MergeOutcome::default();

        for group in &groups {
            let merged = merge_group(store.as_mut_slice(), group);
            debug!(
                "merging {} bodies into one of mass {:.6e} kg",
                group.len(),
                merged.mass().to_f64()
            );
            store.insert(merged);
            outcome.groups += 1;
            outcome.absorbed += group.len();
        }

        outcome
    }
}

/// Combines the bodies at `members` into one, conserving mass. Position and
/// previous position are mass-weighted averages, which keeps the implied
/// momentum of the group.
fn merge_group<T: Real>(bodies: &mut [Body<T>], members: &[usize]) -> Body<T> {
    let mut mass = T::ZERO;
    for &index in members {
        mass += bodies[index].mass();
    }

    let mut position = T::Vector::ZERO;
    let mut previous_position = T::Vector::ZERO;
    for &index in members {
        let body = &mut bodies[index];
        let weight = if mass != T::ZERO {
            body.mass() / mass
        } else {
            T::ONE / T::from_f64(members.len() as f64)
        };
        position += body.position.scale(weight);
        previous_position += body.previous_position.scale(weight);
        body.mark_for_removal();
    }

    Body::new(position, previous_position, mass)
}

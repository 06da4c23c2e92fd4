use super::body::Body;
use super::precision::Real;

/// Ordered collection of live bodies, addressed by index within a step.
///
/// Indices stay stable while a step runs: bodies are only appended until
/// [`BodyStore::purge_removed`] compacts the store at the end of the step.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyStore<T: Real> {
    bodies: Vec<Body<T>>,
}

impl<T: Real> Default for BodyStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Real> BodyStore<T> {
    pub fn new() -> Self {
        Self { bodies: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bodies: Vec::with_capacity(capacity),
        }
    }

    /// Appends a body and returns its index.
    pub fn insert(&mut self, body: Body<T>) -> usize {
        self.bodies.push(body);
        self.bodies.len() - 1
    }

    pub fn get(&self, index: usize) -> Option<&Body<T>> {
        self.bodies.get(index)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Body<T>> {
        self.bodies.iter()
    }

    pub fn as_slice(&self) -> &[Body<T>] {
        &self.bodies
    }

    pub fn as_mut_slice(&mut self) -> &mut [Body<T>] {
        &mut self.bodies
    }

    /// Drops every body flagged for removal and returns how many were dropped.
    pub fn purge_removed(&mut self) -> usize {
        let before = self.bodies.len();
        self.bodies.retain(|body| !body.is_pending_removal());
        before - self.bodies.len()
    }

    /// Total mass accumulated in f64 (in kg).
    pub fn total_mass(&self) -> f64 {
        self.bodies.iter().map(|body| body.mass().to_f64()).sum()
    }
}

impl<T: Real> From<Vec<Body<T>>> for BodyStore<T> {
    fn from(bodies: Vec<Body<T>>) -> Self {
        Self { bodies }
    }
}

impl<'a, T: Real> IntoIterator for &'a BodyStore<T> {
    type Item = &'a Body<T>;
    type IntoIter = std::slice::Iter<'a, Body<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.bodies.iter()
    }
}

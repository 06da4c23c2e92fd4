//! Core types describing bodies, their storage, and the precision they run at.

pub mod body;
pub mod precision;
pub mod store;

pub use body::{radius_from_mass, Body};
pub use precision::{Real, Vector3};
pub use store::BodyStore;

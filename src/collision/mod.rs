//! Collision handling: overlap detection, merge grouping, and body merging.

pub mod disjoint_set;
pub mod merge;

pub use disjoint_set::DisjointSet;
pub use merge::{CollisionMerger, MergeOutcome};

//! Utility helpers for logging and profiling.

pub mod logging;
pub mod profiling;

pub use profiling::{StepPhase, StepProfiler};

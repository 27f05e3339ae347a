//! Batch statistics harness.
//!
//! Repeats independent NPSO runs, each from a fresh swarm and its own seed,
//! and reports the arithmetic mean of iterations used, best fitness and
//! wall-clock time.

mod config;
mod runner;

pub use config::BatchConfig;
pub use runner::{BatchRunner, BatchSummary, RunRecord};

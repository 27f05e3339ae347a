//! New Particle Swarm Optimization (NPSO) on the Schaffer benchmark.
//!
//! The Schaffer function has its global maximum `1` at the origin,
//! surrounded by a ring of local maxima at ≈0.990284. This crate runs a
//! velocity-free PSO variant against it and measures how reliably the
//! swarm escapes the ring:
//!
//! - [`schaffer`]: the fitness function.
//! - [`npso`]: swarm state, the jump-then-mutate update rule and the
//!   single-run loop with its convergence policy.
//! - [`harness`]: repeated independent runs with averaged statistics.
//! - [`report`]: the plain-text lines printed by the `npso` binary.
//!
//! All randomness goes through [`random::UniformSource`], so runs are
//! reproducible from a seed and can be replayed from a fixed draw sequence.

pub mod error;
pub mod harness;
pub mod npso;
pub mod random;
pub mod report;
pub mod schaffer;

pub use error::ConfigError;

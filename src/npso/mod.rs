//! New Particle Swarm Optimization (NPSO).
//!
//! A velocity-free PSO variant. Each iteration every particle either jumps
//! to the swarm's global best, jumps back to its own personal best, or stays
//! where it is, and is then mutated by a bounded uniform perturbation.
//! Fitness is maximized.
//!
//! # Example
//!
//! ```
//! use u_npso::npso::{NpsoConfig, NpsoRunner};
//!
//! let result = NpsoRunner::run(&NpsoConfig::default().with_seed(42)).unwrap();
//! println!("{} after {} iterations", result.best_fitness, result.iterations);
//! ```

mod config;
mod runner;
mod swarm;
mod types;

pub use config::{ControlDraw, NpsoConfig};
pub use runner::{IterationSnapshot, NpsoResult, NpsoRunner};
pub use swarm::{mutate, BranchCounts, Swarm};
pub use types::{Particle, Position, SENTINEL_FITNESS};

//! NPSO execution loop.

use super::config::NpsoConfig;
use super::swarm::Swarm;
use super::types::Position;
use crate::error::Result;
use crate::random::{rng_from_seed, UniformSource};
use log::{debug, info, warn};
use std::time::{Duration, Instant};

/// State of the global best after one iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IterationSnapshot {
    /// 1-based iteration number.
    pub iteration: usize,

    /// Global-best fitness after this iteration.
    pub best_fitness: f64,

    /// Global-best position after this iteration.
    pub best_position: Position,
}

/// Result of an NPSO run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NpsoResult {
    /// Best position found.
    pub best_position: Position,

    /// Fitness of the best position.
    pub best_fitness: f64,

    /// Iterations executed: the one that converged, or the cap.
    pub iterations: usize,

    /// Whether `best_fitness` exceeded the convergence threshold.
    pub converged: bool,

    /// Global-best fitness after the initial evaluation, then after each
    /// iteration. Non-decreasing.
    pub fitness_history: Vec<f64>,

    /// Wall-clock time of the run, initialization included.
    pub elapsed: Duration,
}

/// Executes the NPSO algorithm.
///
/// # Usage
///
/// ```
/// use u_npso::npso::{NpsoConfig, NpsoRunner};
///
/// let config = NpsoConfig::default().with_seed(42);
/// let result = NpsoRunner::run(&config).unwrap();
/// assert!(result.iterations <= config.max_iterations);
/// ```
pub struct NpsoRunner;

impl NpsoRunner {
    /// Runs NPSO, seeding from `config.seed`.
    pub fn run(config: &NpsoConfig) -> Result<NpsoResult> {
        Self::run_with_observer(config, |_| {})
    }

    /// Runs NPSO, calling `observer` after every iteration.
    pub fn run_with_observer<F>(config: &NpsoConfig, observer: F) -> Result<NpsoResult>
    where
        F: FnMut(&IterationSnapshot),
    {
        let mut rng = rng_from_seed(config.seed);
        Self::run_with_rng(config, &mut rng, observer)
    }

    /// Runs NPSO drawing from an explicit random source.
    ///
    /// `config.seed` is ignored. Stops after the first iteration whose
    /// global best exceeds `convergence_threshold`, or at `max_iterations`;
    /// hitting the cap is not an error.
    pub fn run_with_rng<R, F>(
        config: &NpsoConfig,
        rng: &mut R,
        mut observer: F,
    ) -> Result<NpsoResult>
    where
        R: UniformSource + ?Sized,
        F: FnMut(&IterationSnapshot),
    {
        let start = Instant::now();

        let mut swarm = Swarm::initialize(config, rng)?;
        swarm.evaluate_and_update_bests();

        let mut fitness_history = Vec::with_capacity(config.max_iterations + 1);
        fitness_history.push(swarm.global_best_fitness());

        let mut iterations = 0usize;
        for iteration in 1..=config.max_iterations {
            let counts = swarm.step(rng);
            swarm.evaluate_and_update_bests();
            iterations = iteration;

            let snapshot = IterationSnapshot {
                iteration,
                best_fitness: swarm.global_best_fitness(),
                best_position: swarm.global_best_position(),
            };
            debug!(
                "iteration {}: best {:.6} at ({:.6}, {:.6}), branches {:?}",
                iteration,
                snapshot.best_fitness,
                snapshot.best_position.x1,
                snapshot.best_position.x2,
                counts
            );
            observer(&snapshot);
            fitness_history.push(snapshot.best_fitness);

            if snapshot.best_fitness > config.convergence_threshold {
                break;
            }
        }

        let best_fitness = swarm.global_best_fitness();
        let converged = best_fitness > config.convergence_threshold;
        let elapsed = start.elapsed();

        if converged {
            info!(
                "converged after {} iterations: best {:.6} in {:.3?}",
                iterations, best_fitness, elapsed
            );
        } else {
            warn!(
                "no convergence within {} iterations: best {:.6} (threshold {})",
                iterations, best_fitness, config.convergence_threshold
            );
        }

        Ok(NpsoResult {
            best_position: swarm.global_best_position(),
            best_fitness,
            iterations,
            converged,
            fitness_history,
            elapsed,
        })
    }
}

//! Batch execution and aggregation.

use super::config::BatchConfig;
use crate::error::Result;
use crate::npso::{NpsoConfig, NpsoRunner, Position};
use crate::random::{create_rng, rng_from_seed};
use log::{info, warn};
use rand::Rng;
use std::time::Duration;

/// Outcome of one repetition.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunRecord {
    /// 1-based repetition number.
    pub repetition: usize,

    /// Iteration at which the run converged, or the cap.
    pub iterations: usize,

    /// Best fitness reached.
    pub best_fitness: f64,

    /// Where `best_fitness` was reached.
    pub best_position: Position,

    /// Whether the convergence threshold was exceeded.
    pub converged: bool,

    /// Wall-clock duration of the repetition.
    pub elapsed: Duration,
}

/// Aggregate statistics over a batch.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BatchSummary {
    /// Per-repetition records in repetition order.
    pub records: Vec<RunRecord>,

    /// Arithmetic mean of `iterations`.
    pub mean_iterations: f64,

    /// Arithmetic mean of `best_fitness`.
    pub mean_best_fitness: f64,

    /// Arithmetic mean of `elapsed`, in seconds.
    pub mean_elapsed_secs: f64,

    /// Number of repetitions that converged.
    pub converged_runs: usize,

    /// Lowest `best_fitness`; `+inf` when there are no records.
    pub min_best_fitness: f64,

    /// Highest `best_fitness`; `-inf` when there are no records.
    pub max_best_fitness: f64,
}

impl BatchSummary {
    /// Aggregates `records` with arithmetic means.
    ///
    /// An empty slice yields zero means and infinite min/max.
    pub fn from_records(records: Vec<RunRecord>) -> Self {
        let n = records.len().max(1) as f64;

        let mut iterations = 0.0;
        let mut fitness = 0.0;
        let mut elapsed = 0.0;
        let mut converged_runs = 0;
        let mut min_best_fitness = f64::INFINITY;
        let mut max_best_fitness = f64::NEG_INFINITY;
        for r in &records {
            iterations += r.iterations as f64;
            fitness += r.best_fitness;
            elapsed += r.elapsed.as_secs_f64();
            if r.converged {
                converged_runs += 1;
            }
            min_best_fitness = min_best_fitness.min(r.best_fitness);
            max_best_fitness = max_best_fitness.max(r.best_fitness);
        }

        Self {
            mean_iterations: iterations / n,
            mean_best_fitness: fitness / n,
            mean_elapsed_secs: elapsed / n,
            converged_runs,
            min_best_fitness,
            max_best_fitness,
            records,
        }
    }

    /// Fraction of repetitions that converged.
    pub fn convergence_rate(&self) -> f64 {
        if self.records.is_empty() {
            0.0
        } else {
            self.converged_runs as f64 / self.records.len() as f64
        }
    }
}

/// Repeats NPSO runs and aggregates their outcomes.
pub struct BatchRunner;

impl BatchRunner {
    /// Executes `config.repetitions` independent runs.
    ///
    /// Each repetition gets its own seed drawn up front from the batch
    /// master RNG, so serial and parallel execution yield the same records.
    pub fn run(config: &BatchConfig) -> Result<BatchSummary> {
        config.validate()?;
        if config.parallel && !config.runs_parallel() {
            warn!("parallel repetitions requested without the `parallel` feature; running serially");
        }

        let mut master = rng_from_seed(config.seed);
        let seeds: Vec<u64> = (0..config.repetitions).map(|_| master.random()).collect();

        let records = run_all(config, &seeds)?;
        let summary = BatchSummary::from_records(records);

        info!(
            "batch of {}: {}/{} converged, mean iterations {:.1}, mean best {:.6}, mean time {:.6}s",
            summary.records.len(),
            summary.converged_runs,
            summary.records.len(),
            summary.mean_iterations,
            summary.mean_best_fitness,
            summary.mean_elapsed_secs
        );
        Ok(summary)
    }
}

#[cfg(feature = "parallel")]
fn run_all(config: &BatchConfig, seeds: &[u64]) -> Result<Vec<RunRecord>> {
    use rayon::prelude::*;

    if config.runs_parallel() {
        seeds
            .par_iter()
            .enumerate()
            .map(|(i, &seed)| run_one(&config.run, i + 1, seed))
            .collect()
    } else {
        run_serial(config, seeds)
    }
}

#[cfg(not(feature = "parallel"))]
fn run_all(config: &BatchConfig, seeds: &[u64]) -> Result<Vec<RunRecord>> {
    run_serial(config, seeds)
}

fn run_serial(config: &BatchConfig, seeds: &[u64]) -> Result<Vec<RunRecord>> {
    seeds
        .iter()
        .enumerate()
        .map(|(i, &seed)| run_one(&config.run, i + 1, seed))
        .collect()
}

/// Runs one freshly seeded repetition.
fn run_one(run: &NpsoConfig, repetition: usize, seed: u64) -> Result<RunRecord> {
    let mut rng = create_rng(seed);
    let result = NpsoRunner::run_with_rng(run, &mut rng, |_| {})?;

    info!(
        "repetition {}: {} iterations, best {:.6}, {:.6}s",
        repetition,
        result.iterations,
        result.best_fitness,
        result.elapsed.as_secs_f64()
    );

    Ok(RunRecord {
        repetition,
        iterations: result.iterations,
        best_fitness: result.best_fitness,
        best_position: result.best_position,
        converged: result.converged,
        elapsed: result.elapsed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;

    fn record(iterations: usize, best_fitness: f64, millis: u64) -> RunRecord {
        RunRecord {
            repetition: 0,
            iterations,
            best_fitness,
            best_position: Position::default(),
            converged: best_fitness > 0.9999,
            elapsed: Duration::from_millis(millis),
        }
    }

    #[test]
    fn test_summary_means() {
        let summary = BatchSummary::from_records(vec![
            record(10, 0.99995, 100),
            record(30, 0.99992, 300),
            record(1000, 0.990284, 2000),
        ]);

        let sum = 0.99995 + 0.99992 + 0.990284;
        assert!((summary.mean_best_fitness - sum / 3.0).abs() < 1e-12);
        assert!((summary.mean_iterations - 1040.0 / 3.0).abs() < 1e-12);
        assert!((summary.mean_elapsed_secs - 0.8).abs() < 1e-12);
        assert_eq!(summary.converged_runs, 2);
        assert!((summary.convergence_rate() - 2.0 / 3.0).abs() < 1e-12);
        assert_eq!(summary.min_best_fitness, 0.990284);
        assert_eq!(summary.max_best_fitness, 0.99995);
    }

    #[test]
    fn test_summary_empty() {
        let summary = BatchSummary::from_records(Vec::new());
        assert_eq!(summary.mean_iterations, 0.0);
        assert_eq!(summary.min_best_fitness, f64::INFINITY);
        assert_eq!(summary.max_best_fitness, f64::NEG_INFINITY);
        assert_eq!(summary.convergence_rate(), 0.0);
    }

    #[test]
    fn test_batch_run_default_scenario() {
        let config = BatchConfig::default().with_seed(42);
        let summary = BatchRunner::run(&config).unwrap();

        assert_eq!(summary.records.len(), 10);
        for (i, r) in summary.records.iter().enumerate() {
            assert_eq!(r.repetition, i + 1);
            assert!(r.iterations >= 1 && r.iterations <= 1000);
        }
        assert!(summary.converged_runs >= 8, "{} converged", summary.converged_runs);
        assert!(summary.mean_best_fitness >= summary.min_best_fitness);
        assert!(summary.mean_best_fitness <= summary.max_best_fitness);

        let sum: f64 = summary.records.iter().map(|r| r.best_fitness).sum();
        assert!((summary.mean_best_fitness - sum / 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_batch_repetitions_are_independent() {
        let config = BatchConfig::default()
            .with_repetitions(4)
            .with_run(NpsoConfig::default().with_max_iterations(5))
            .with_seed(9);
        let summary = BatchRunner::run(&config).unwrap();

        let firsts: Vec<u64> = summary
            .records
            .iter()
            .map(|r| r.best_position.x1.to_bits())
            .collect();
        for i in 0..firsts.len() {
            for j in i + 1..firsts.len() {
                assert_ne!(firsts[i], firsts[j], "repetitions {i} and {j} share a trajectory");
            }
        }
    }

    #[test]
    fn test_batch_seed_reproducible() {
        let config = BatchConfig::default()
            .with_repetitions(3)
            .with_run(NpsoConfig::default().with_max_iterations(100))
            .with_seed(5);
        let a = BatchRunner::run(&config).unwrap();
        let b = BatchRunner::run(&config).unwrap();
        let key = |s: &BatchSummary| {
            s.records
                .iter()
                .map(|r| (r.iterations, r.best_fitness.to_bits()))
                .collect::<Vec<_>>()
        };
        assert_eq!(key(&a), key(&b));
    }

    #[test]
    fn test_batch_parallel_matches_serial() {
        let base = BatchConfig::default()
            .with_repetitions(4)
            .with_run(NpsoConfig::default().with_max_iterations(100))
            .with_seed(17);
        let serial = BatchRunner::run(&base).unwrap();
        let parallel = BatchRunner::run(&base.clone().with_parallel(true)).unwrap();

        for (s, p) in serial.records.iter().zip(&parallel.records) {
            assert_eq!(s.repetition, p.repetition);
            assert_eq!(s.iterations, p.iterations);
            assert_eq!(s.best_fitness.to_bits(), p.best_fitness.to_bits());
        }
    }

    #[test]
    fn test_batch_invalid_config() {
        let config = BatchConfig::default().with_repetitions(0);
        assert!(matches!(BatchRunner::run(&config), Err(ConfigError::NoRepetitions)));
    }
}

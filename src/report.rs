//! Plain-text report lines.
//!
//! Single run: `<iteration>: <bestFitness> (<x1>, <x2>)` per iteration.
//! Batch: `<rep> <iterations> <bestFitness> <elapsedSeconds>` per
//! repetition, then `average <iterations> <bestFitness> <elapsedSeconds>`.
//! Reals are printed with six decimals.

use crate::harness::{BatchSummary, RunRecord};
use crate::npso::IterationSnapshot;
use std::fmt;

impl fmt::Display for IterationSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {:.6} ({:.6}, {:.6})",
            self.iteration, self.best_fitness, self.best_position.x1, self.best_position.x2
        )
    }
}

impl fmt::Display for RunRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {:.6} {:.6}",
            self.repetition,
            self.iterations,
            self.best_fitness,
            self.elapsed.as_secs_f64()
        )
    }
}

/// The closing `average ...` line of a batch report.
pub struct AverageLine<'a>(&'a BatchSummary);

impl fmt::Display for AverageLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "average {:.6} {:.6} {:.6}",
            self.0.mean_iterations, self.0.mean_best_fitness, self.0.mean_elapsed_secs
        )
    }
}

impl BatchSummary {
    pub fn average_line(&self) -> AverageLine<'_> {
        AverageLine(self)
    }
}

/// Full batch report: every repetition line and the average line.
impl fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for record in &self.records {
            writeln!(f, "{record}")?;
        }
        write!(f, "{}", self.average_line())
    }
}

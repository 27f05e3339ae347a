//! Batch harness configuration.

use crate::error::{ConfigError, Result};
use crate::npso::NpsoConfig;

/// Configuration for a batch of independent NPSO runs.
///
/// # Examples
///
/// ```
/// use u_npso::harness::BatchConfig;
/// use u_npso::npso::NpsoConfig;
///
/// let config = BatchConfig::default()
///     .with_repetitions(5)
///     .with_run(NpsoConfig::default().with_particle_count(100))
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BatchConfig {
    /// Number of independent runs.
    pub repetitions: usize,

    /// Settings shared by every run. Its `seed` is ignored; runs are
    /// seeded from the batch seed.
    pub run: NpsoConfig,

    /// Whether to execute repetitions on the rayon pool.
    ///
    /// Only honoured with the `parallel` feature; records come back in
    /// repetition order either way.
    pub parallel: bool,

    /// Seed for the batch master RNG. `None` uses OS entropy.
    pub seed: Option<u64>,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            repetitions: 10,
            run: NpsoConfig::default(),
            parallel: false,
            seed: None,
        }
    }
}

impl BatchConfig {
    pub fn with_repetitions(mut self, n: usize) -> Self {
        self.repetitions = n;
        self
    }

    pub fn with_run(mut self, run: NpsoConfig) -> Self {
        self.run = run;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Whether repetitions will actually run on the rayon pool.
    ///
    /// False whenever the crate is built without the `parallel` feature.
    pub fn runs_parallel(&self) -> bool {
        self.parallel && cfg!(feature = "parallel")
    }

    /// Validates the batch settings and the per-run configuration.
    pub fn validate(&self) -> Result<()> {
        if self.repetitions == 0 {
            return Err(ConfigError::NoRepetitions);
        }
        self.run.validate()
    }
}

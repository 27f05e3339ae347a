//! NPSO configuration.
//!
//! [`NpsoConfig`] holds every tunable of a single swarm run. Defaults are
//! the reference setup: 200 particles on `[-10, 10]²`, `c1 = 0.3`,
//! `c2 = 0.6`, stop above `0.9999` or after 1000 iterations.

use crate::error::{ConfigError, Result};

/// How the per-particle control value of the update rule is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ControlDraw {
    /// `r ~ U[0, 1)` compared directly against `c1` / `c2`.
    ///
    /// Yields the 30 / 30 / 40 split between global best, personal best
    /// and free exploration at the default thresholds.
    #[default]
    Uniform,

    /// The draw is truncated to an integer before the comparison.
    ///
    /// Since the draw is below 1 it always truncates to 0, so every
    /// particle adopts the global best each step. Kept to reproduce the
    /// legacy behaviour of the reference program.
    Truncated,
}

/// Configuration for the NPSO algorithm.
///
/// # Examples
///
/// ```
/// use u_npso::npso::NpsoConfig;
///
/// let config = NpsoConfig::default()
///     .with_particle_count(50)
///     .with_max_iterations(200)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NpsoConfig {
    /// Number of particles in the swarm.
    pub particle_count: usize,

    /// Per-coordinate clamp magnitude; positions stay in `[-b, b]²`.
    pub domain_bound: f64,

    /// Iteration cap per run.
    pub max_iterations: usize,

    /// Control values below `c1` adopt the global best.
    pub c1: f64,

    /// Control values in `[c1, c2)` adopt the particle's own personal best.
    /// The rest keep their current position.
    pub c2: f64,

    /// A run stops once the global-best fitness strictly exceeds this.
    pub convergence_threshold: f64,

    /// Upper bound of the mutation radius `l = U(0, 1) · max`.
    pub max_mutation_radius: f64,

    /// Control-value derivation for the three-way branch.
    pub control_draw: ControlDraw,

    /// Random seed for reproducibility. `None` uses OS entropy.
    pub seed: Option<u64>,
}

impl Default for NpsoConfig {
    fn default() -> Self {
        Self {
            particle_count: 200,
            domain_bound: 10.0,
            max_iterations: 1000,
            c1: 0.3,
            c2: 0.6,
            convergence_threshold: 0.9999,
            max_mutation_radius: 5.0,
            control_draw: ControlDraw::Uniform,
            seed: None,
        }
    }
}

impl NpsoConfig {
    pub fn with_particle_count(mut self, n: usize) -> Self {
        self.particle_count = n;
        self
    }

    pub fn with_domain_bound(mut self, bound: f64) -> Self {
        self.domain_bound = bound;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets both branch thresholds.
    pub fn with_thresholds(mut self, c1: f64, c2: f64) -> Self {
        self.c1 = c1;
        self.c2 = c2;
        self
    }

    pub fn with_convergence_threshold(mut self, threshold: f64) -> Self {
        self.convergence_threshold = threshold;
        self
    }

    pub fn with_max_mutation_radius(mut self, radius: f64) -> Self {
        self.max_mutation_radius = radius;
        self
    }

    pub fn with_control_draw(mut self, draw: ControlDraw) -> Self {
        self.control_draw = draw;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.particle_count == 0 {
            return Err(ConfigError::EmptySwarm);
        }
        if !self.domain_bound.is_finite() || self.domain_bound <= 0.0 {
            return Err(ConfigError::InvalidDomainBound(self.domain_bound));
        }
        for (name, value) in [("c1", self.c1), ("c2", self.c2)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::ThresholdOutOfRange { name, value });
            }
        }
        if self.c1 > self.c2 {
            return Err(ConfigError::ThresholdOrder {
                c1: self.c1,
                c2: self.c2,
            });
        }
        if !self.max_mutation_radius.is_finite() || self.max_mutation_radius < 0.0 {
            return Err(ConfigError::InvalidMutationRadius(self.max_mutation_radius));
        }
        if !self.convergence_threshold.is_finite() {
            return Err(ConfigError::InvalidConvergenceThreshold(
                self.convergence_threshold,
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = NpsoConfig::default();
        assert_eq!(config.particle_count, 200);
        assert_eq!(config.max_iterations, 1000);
        assert!((config.domain_bound - 10.0).abs() < 1e-12);
        assert!((config.c1 - 0.3).abs() < 1e-12);
        assert!((config.c2 - 0.6).abs() < 1e-12);
        assert!((config.convergence_threshold - 0.9999).abs() < 1e-12);
        assert_eq!(config.control_draw, ControlDraw::Uniform);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_validate_ok() {
        assert!(NpsoConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_empty_swarm() {
        let config = NpsoConfig::default().with_particle_count(0);
        assert_eq!(config.validate(), Err(ConfigError::EmptySwarm));
    }

    #[test]
    fn test_validate_bad_bound() {
        assert!(NpsoConfig::default().with_domain_bound(0.0).validate().is_err());
        assert!(NpsoConfig::default()
            .with_domain_bound(f64::INFINITY)
            .validate()
            .is_err());
    }

    #[test]
    fn test_validate_thresholds() {
        let config = NpsoConfig::default().with_thresholds(-0.1, 0.6);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ThresholdOutOfRange { name: "c1", .. })
        ));

        let config = NpsoConfig::default().with_thresholds(0.7, 0.6);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ThresholdOrder { .. })
        ));

        // Degenerate but legal: everyone always adopts the global best.
        assert!(NpsoConfig::default().with_thresholds(1.0, 1.0).validate().is_ok());
    }

    #[test]
    fn test_validate_bad_radius() {
        let config = NpsoConfig::default().with_max_mutation_radius(-1.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_nan_threshold() {
        let config = NpsoConfig::default().with_convergence_threshold(f64::NAN);
        assert!(config.validate().is_err());
    }
}

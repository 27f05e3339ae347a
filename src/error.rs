//! Configuration errors.

/// A configuration rule violated by [`NpsoConfig`](crate::npso::NpsoConfig)
/// or [`BatchConfig`](crate::harness::BatchConfig).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("particle_count must be at least 1")]
    EmptySwarm,

    #[error("domain_bound must be finite and positive, got {0}")]
    InvalidDomainBound(f64),

    #[error("{name} must be in [0, 1], got {value}")]
    ThresholdOutOfRange { name: &'static str, value: f64 },

    #[error("c1 ({c1}) must not exceed c2 ({c2})")]
    ThresholdOrder { c1: f64, c2: f64 },

    #[error("max_mutation_radius must be finite and non-negative, got {0}")]
    InvalidMutationRadius(f64),

    #[error("convergence_threshold must be finite, got {0}")]
    InvalidConvergenceThreshold(f64),

    #[error("repetitions must be at least 1")]
    NoRepetitions,
}

pub type Result<T> = std::result::Result<T, ConfigError>;

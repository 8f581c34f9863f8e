//! Configuration error type.
//!
//! `ConfigError` is the only failure the simulation core knows about.  Every
//! variant is detected eagerly, before the first tick runs; once a run has
//! started all transitions are total and nothing can fail.

use thiserror::Error;

/// An invalid run or policy configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} must be a probability in [0, 1], got {value}")]
    ProbabilityOutOfRange { field: &'static str, value: f64 },

    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },

    #[error("{field} is malformed: {reason}")]
    MalformedDistribution { field: &'static str, reason: String },

    #[error("a team needs at least one agent")]
    NoAgents,

    #[error("total_ticks must be at least 1")]
    NoTicks,

    #[error("configuration error: {0}")]
    Other(String),
}

/// Shorthand result type for configuration checks in all `sre-*` crates.
pub type ConfigResult<T> = Result<T, ConfigError>;

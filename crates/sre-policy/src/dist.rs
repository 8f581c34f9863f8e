//! Arrival-count and duration distributions.
//!
//! Both enums are plain data (serde-tagged by `type`) so they can be written
//! in a JSON config file:
//!
//! ```json
//! { "arrivals": { "type": "poisson", "rate": 1.5 },
//!   "project_duration": { "type": "geometric", "mean": 6.0 } }
//! ```
//!
//! Call `validate` before sampling; samplers assume a valid distribution and
//! fall back to the smallest legal value rather than panicking if handed an
//! invalid one.

use rand::Rng;
use rand_distr::{Distribution, Geometric, Poisson};
use serde::{Deserialize, Serialize};

use sre_core::{ConfigError, ConfigResult};

// ── DurationDist ──────────────────────────────────────────────────────────────

/// Distribution of a work item's size in ticks.  Every sample is ≥ 1.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DurationDist {
    /// Always `ticks`.
    Fixed { ticks: u32 },

    /// Uniform over `min..=max`.
    Uniform { min: u32, max: u32 },

    /// `1 + Geometric(1 / mean)` failures, i.e. a memoryless duration whose
    /// expectation is `mean` ticks.  `mean` must be ≥ 1.
    Geometric { mean: f64 },
}

impl DurationDist {
    pub fn validate(&self, field: &'static str) -> ConfigResult<()> {
        match *self {
            DurationDist::Fixed { ticks } => {
                if ticks == 0 {
                    return Err(ConfigError::NonPositive { field, value: 0.0 });
                }
            }
            DurationDist::Uniform { min, max } => {
                if min == 0 {
                    return Err(ConfigError::NonPositive { field, value: 0.0 });
                }
                if min > max {
                    return Err(ConfigError::MalformedDistribution {
                        field,
                        reason: format!("min {min} exceeds max {max}"),
                    });
                }
            }
            DurationDist::Geometric { mean } => {
                if !mean.is_finite() {
                    return Err(ConfigError::MalformedDistribution {
                        field,
                        reason: format!("mean must be finite, got {mean}"),
                    });
                }
                if mean <= 0.0 {
                    return Err(ConfigError::NonPositive { field, value: mean });
                }
                if mean < 1.0 {
                    return Err(ConfigError::MalformedDistribution {
                        field,
                        reason: format!("mean {mean} is shorter than one tick"),
                    });
                }
            }
        }
        Ok(())
    }

    /// Draw one duration (≥ 1 tick).
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        match *self {
            DurationDist::Fixed { ticks } => ticks.max(1),
            DurationDist::Uniform { min, max } => rng.gen_range(min.max(1)..=max.max(min).max(1)),
            DurationDist::Geometric { mean } => {
                let Ok(geo) = Geometric::new(1.0 / mean.max(1.0)) else {
                    return 1;
                };
                let failures: u64 = geo.sample(rng);
                u32::try_from(failures.saturating_add(1)).unwrap_or(u32::MAX)
            }
        }
    }

    /// Expected duration in ticks.
    pub fn mean(&self) -> f64 {
        match *self {
            DurationDist::Fixed { ticks } => ticks as f64,
            DurationDist::Uniform { min, max } => (min as f64 + max as f64) / 2.0,
            DurationDist::Geometric { mean } => mean,
        }
    }
}

// ── ArrivalDist ───────────────────────────────────────────────────────────────

/// Distribution of the number of operational items arriving in one tick.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ArrivalDist {
    /// Poisson with mean `rate` items per tick.  `rate = 0` means no arrivals.
    Poisson { rate: f64 },

    /// At most one item per tick, with probability `p`.
    Bernoulli { p: f64 },

    /// Exactly `per_tick` items every tick.
    Fixed { per_tick: u32 },
}

impl ArrivalDist {
    pub fn validate(&self, field: &'static str) -> ConfigResult<()> {
        match *self {
            ArrivalDist::Poisson { rate } => {
                if !rate.is_finite() || rate < 0.0 {
                    return Err(ConfigError::MalformedDistribution {
                        field,
                        reason: format!("rate must be finite and non-negative, got {rate}"),
                    });
                }
            }
            ArrivalDist::Bernoulli { p } => {
                if !(0.0..=1.0).contains(&p) {
                    return Err(ConfigError::ProbabilityOutOfRange { field, value: p });
                }
            }
            ArrivalDist::Fixed { .. } => {}
        }
        Ok(())
    }

    /// Draw the number of arrivals for one tick.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        match *self {
            ArrivalDist::Poisson { rate } => poisson(rng, rate),
            ArrivalDist::Bernoulli { p } => rng.gen_bool(p.clamp(0.0, 1.0)) as u32,
            ArrivalDist::Fixed { per_tick } => per_tick,
        }
    }

    /// Expected arrivals per tick.
    pub fn mean(&self) -> f64 {
        match *self {
            ArrivalDist::Poisson { rate } => rate,
            ArrivalDist::Bernoulli { p } => p,
            ArrivalDist::Fixed { per_tick } => per_tick as f64,
        }
    }
}

/// Poisson draw that treats a zero (or invalid) rate as "no arrivals" instead
/// of an error.
pub fn poisson<R: Rng + ?Sized>(rng: &mut R, rate: f64) -> u32 {
    if !rate.is_finite() || rate <= 0.0 {
        return 0;
    }
    match Poisson::new(rate) {
        Ok(dist) => {
            let draw: f64 = dist.sample(rng);
            draw.min(u32::MAX as f64) as u32
        }
        Err(_) => 0,
    }
}

//! `PolicyConfig` — the knobs a work policy and the team's arrival process
//! read.  Immutable for the duration of one run.

use serde::{Deserialize, Serialize};

use sre_core::{ConfigError, ConfigResult};

use crate::{ArrivalDist, DurationDist, PolicyVariant};

/// Every tunable parameter of one simulation run.
///
/// Missing fields fall back to [`PolicyConfig::default`] when deserialized,
/// so a config file only needs to name what it changes:
///
/// ```json
/// { "cross_team_fraction": 0.3, "arrivals": { "type": "poisson", "rate": 2.0 } }
/// ```
///
/// The defaults follow the calibration of the exploratory study this model
/// came from, where it had one: 20 % onboarding chance, 10 % cross-team
/// chance, an onboarding worth two units of work, at most ten onboardings
/// and only one at a time, a cross-team project clearing two operational
/// items, and an even chance that it runs over into another unit.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    // ── Operational work ──────────────────────────────────────────────────
    /// Number of operational items arriving per tick.
    pub arrivals: ArrivalDist,

    /// Size in ticks of each arriving operational item.
    pub operational_size: DurationDist,

    /// Backlog work pre-empts everything else only while the backlog holds
    /// more than this many items.  0 = any pending item pre-empts.
    pub urgency_threshold: usize,

    /// Hard cap on an agent's cumulative operational share.  An agent at or
    /// above the cap leaves backlog work to others.  `None` = no cap.
    pub operational_cap: Option<f64>,

    /// Extra arrival intensity (items per tick, Poisson) added for every
    /// completed onboarding: each system brought under support adds load.
    pub arrival_growth_per_onboarding: f64,

    // ── Onboarding ────────────────────────────────────────────────────────
    /// Probability that an idle agent with no urgent backlog starts an
    /// onboarding.
    pub onboarding_rate: f64,

    /// Cost of one onboarding in ticks.  The fixed-cost policy always uses
    /// this; the variable-cost policy draws uniformly from `1..=cost`.
    pub onboarding_cost: u32,

    /// Onboardings the team will start in total.  `None` = unlimited.
    pub max_onboardings: Option<u32>,

    /// Onboardings that may run at the same time.  `None` = unlimited.
    pub max_concurrent_onboardings: Option<u32>,

    /// Operational items enqueued when an onboarding completes.
    pub onboarding_operational_load: u32,

    // ── Project work ──────────────────────────────────────────────────────
    /// Probability that non-operational, non-onboarding work is cross-team.
    pub cross_team_fraction: f64,

    /// Duration of one project unit (in-team or cross-team).
    pub project_duration: DurationDist,

    /// Oldest backlog items cancelled when a cross-team unit completes.
    pub cross_team_relief: u32,

    /// Probability that a completed cross-team unit runs over: the same agent
    /// carries straight on with another cross-team unit.
    pub cross_team_overrun: f64,

    // ── Policy selection ──────────────────────────────────────────────────
    /// Which policy variant runs with this config.
    pub policy: PolicyVariant,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            arrivals:                      ArrivalDist::Poisson { rate: 1.0 },
            operational_size:              DurationDist::Geometric { mean: 2.0 },
            urgency_threshold:             0,
            operational_cap:               None,
            arrival_growth_per_onboarding: 0.0,
            onboarding_rate:               0.2,
            onboarding_cost:               2,
            max_onboardings:               Some(10),
            max_concurrent_onboardings:    Some(1),
            onboarding_operational_load:   1,
            cross_team_fraction:           0.1,
            project_duration:              DurationDist::Geometric { mean: 5.0 },
            cross_team_relief:             2,
            cross_team_overrun:            0.5,
            policy:                        PolicyVariant::FixedCostOnboarding,
        }
    }
}

impl PolicyConfig {
    /// A config with no operational arrivals, no onboarding and no
    /// cross-team work: every agent does in-team project work forever.
    pub fn quiet() -> Self {
        Self {
            arrivals:            ArrivalDist::Poisson { rate: 0.0 },
            onboarding_rate:     0.0,
            cross_team_fraction: 0.0,
            ..Self::default()
        }
    }

    /// Check every probability and distribution.
    ///
    /// Called by `SimBuilder::build` before the first tick; a config that
    /// passes can never make a run fail.
    pub fn validate(&self) -> ConfigResult<()> {
        probability("onboarding_rate", self.onboarding_rate)?;
        probability("cross_team_fraction", self.cross_team_fraction)?;
        probability("cross_team_overrun", self.cross_team_overrun)?;
        if let Some(cap) = self.operational_cap {
            probability("operational_cap", cap)?;
        }

        if self.onboarding_cost == 0 {
            return Err(ConfigError::NonPositive { field: "onboarding_cost", value: 0.0 });
        }
        if self.max_concurrent_onboardings == Some(0) {
            return Err(ConfigError::NonPositive { field: "max_concurrent_onboardings", value: 0.0 });
        }

        let growth = self.arrival_growth_per_onboarding;
        if !growth.is_finite() || growth < 0.0 {
            return Err(ConfigError::MalformedDistribution {
                field:  "arrival_growth_per_onboarding",
                reason: format!("must be finite and non-negative, got {growth}"),
            });
        }

        self.arrivals.validate("arrivals")?;
        self.operational_size.validate("operational_size")?;
        self.project_duration.validate("project_duration")?;
        Ok(())
    }

    /// Extra Poisson arrival intensity once `completed` onboardings are done.
    #[inline]
    pub fn arrival_growth(&self, completed: u32) -> f64 {
        self.arrival_growth_per_onboarding * completed as f64
    }
}

fn probability(field: &'static str, value: f64) -> ConfigResult<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::ProbabilityOutOfRange { field, value })
    }
}

//! Config-selected policy.

use serde::{Deserialize, Serialize};

use sre_core::AgentRng;

use crate::{Choice, FixedCostOnboarding, PolicyContext, VariableCostOnboarding, WorkPolicy};

/// The built-in policies, selectable from a config file
/// (`"policy": "variable_cost_onboarding"`).
///
/// `PolicyVariant` is itself a [`WorkPolicy`], so it plugs straight into
/// `SimBuilder` without boxing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyVariant {
    #[default]
    FixedCostOnboarding,
    VariableCostOnboarding,
}

impl WorkPolicy for PolicyVariant {
    fn choose(&self, ctx: &PolicyContext<'_>, rng: &mut AgentRng) -> Choice {
        match self {
            PolicyVariant::FixedCostOnboarding    => FixedCostOnboarding.choose(ctx, rng),
            PolicyVariant::VariableCostOnboarding => VariableCostOnboarding.choose(ctx, rng),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            PolicyVariant::FixedCostOnboarding    => FixedCostOnboarding.name(),
            PolicyVariant::VariableCostOnboarding => VariableCostOnboarding.name(),
        }
    }
}

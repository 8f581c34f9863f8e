//! Onboardings cost a random number of ticks up to `onboarding_cost`.

use sre_core::AgentRng;

use crate::ladder::choose_with;
use crate::{Choice, PolicyContext, WorkPolicy};

/// Every onboarding costs a uniform draw from `1..=config.onboarding_cost`
/// ticks, so with the default cost of 2 an onboarding is worth one or two
/// units of operational-equivalent work.
#[derive(Debug, Clone, Copy, Default)]
pub struct VariableCostOnboarding;

impl WorkPolicy for VariableCostOnboarding {
    fn choose(&self, ctx: &PolicyContext<'_>, rng: &mut AgentRng) -> Choice {
        choose_with(ctx, rng, |cfg, rng| rng.gen_range(1..=cfg.onboarding_cost.max(1)))
    }

    fn name(&self) -> &'static str {
        "variable_cost_onboarding"
    }
}

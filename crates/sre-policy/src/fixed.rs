//! Onboardings always cost `onboarding_cost` ticks.

use sre_core::AgentRng;

use crate::ladder::choose_with;
use crate::{Choice, PolicyContext, WorkPolicy};

/// The default policy: every onboarding costs exactly
/// `config.onboarding_cost` ticks.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedCostOnboarding;

impl WorkPolicy for FixedCostOnboarding {
    fn choose(&self, ctx: &PolicyContext<'_>, rng: &mut AgentRng) -> Choice {
        choose_with(ctx, rng, |cfg, _rng| cfg.onboarding_cost)
    }

    fn name(&self) -> &'static str {
        "fixed_cost_onboarding"
    }
}

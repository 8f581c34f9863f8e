//! A policy that never picks up work.

use sre_core::AgentRng;

use crate::{Choice, PolicyContext, WorkPolicy};

/// A [`WorkPolicy`] that always rests.
///
/// Useful in tests, or as a baseline showing how fast the backlog grows when
/// nobody answers it.
pub struct IdlePolicy;

impl WorkPolicy for IdlePolicy {
    fn choose(&self, _ctx: &PolicyContext<'_>, _rng: &mut AgentRng) -> Choice {
        Choice::Rest
    }

    fn name(&self) -> &'static str {
        "idle"
    }
}

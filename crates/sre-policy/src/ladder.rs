//! The decision ladder shared by the built-in policies.
//!
//! ```text
//! urgent backlog (and agent under the operational cap) → ServeBacklog
//! else with p = onboarding_rate (if an onboarding may start) → Onboarding
//! else with p = cross_team_fraction                       → CrossTeamProject
//! else                                                    → InTeamProject
//! ```
//!
//! The built-in variants differ only in how long an onboarding takes, so
//! they pass that rule in as a closure.

use sre_core::{AgentRng, WorkKind};

use crate::{Choice, PolicyConfig, PolicyContext};

/// Walk the ladder for the agent in `ctx`.
///
/// `onboarding_ticks` is only called when an onboarding is chosen.
pub fn choose_with<F>(ctx: &PolicyContext<'_>, rng: &mut AgentRng, onboarding_ticks: F) -> Choice
where
    F: FnOnce(&PolicyConfig, &mut AgentRng) -> u32,
{
    let cfg = ctx.config;

    if ctx.backlog_is_urgent() && !ctx.over_operational_cap() {
        return Choice::ServeBacklog;
    }

    if ctx.onboarding_allowed() && rng.gen_bool(cfg.onboarding_rate) {
        return Choice::Work {
            kind:     WorkKind::Onboarding,
            duration: onboarding_ticks(cfg, rng),
        };
    }

    let kind = if rng.gen_bool(cfg.cross_team_fraction) {
        WorkKind::CrossTeamProject
    } else {
        WorkKind::InTeamProject
    };
    Choice::Work {
        kind,
        duration: cfg.project_duration.sample(rng.inner()),
    }
}

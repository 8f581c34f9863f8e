//! The `WorkPolicy` trait — the main extension point for experiments.

use sre_core::AgentRng;

use crate::{Choice, PolicyContext};

/// Pluggable work-selection policy.
///
/// Called once per tick for every idle agent.  The policy sees a read-only
/// [`PolicyContext`] and the agent's own [`AgentRng`], so a run is fully
/// reproducible from its seed no matter which policy is plugged in.
///
/// # Statelessness
///
/// Implementations must not keep per-agent state: one instance is shared by
/// reference across all agents (and, in sweeps, across threads), hence the
/// `Send + Sync` bound.  Anything that varies per agent arrives through the
/// context.
///
/// # Example
///
/// ```rust,ignore
/// struct AlwaysOnCall;
///
/// impl WorkPolicy for AlwaysOnCall {
///     fn choose(&self, ctx: &PolicyContext<'_>, _rng: &mut AgentRng) -> Choice {
///         if ctx.backlog.is_empty() { Choice::Rest } else { Choice::ServeBacklog }
///     }
/// }
/// ```
pub trait WorkPolicy: Send + Sync + 'static {
    /// Decide what the idle agent in `ctx` does next.
    fn choose(&self, ctx: &PolicyContext<'_>, rng: &mut AgentRng) -> Choice;

    /// Short label for logs and reports.
    fn name(&self) -> &'static str {
        "custom"
    }
}

impl<P: WorkPolicy + ?Sized> WorkPolicy for Box<P> {
    fn choose(&self, ctx: &PolicyContext<'_>, rng: &mut AgentRng) -> Choice {
        (**self).choose(ctx, rng)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

//! Read-only state passed to every policy decision.

use sre_core::{AgentId, KindCounts, Tick, WorkKind};

use crate::PolicyConfig;

/// What a policy may know about the team backlog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BacklogState {
    /// Pending operational items.
    pub len: usize,
    /// Arrival tick of the oldest pending item.
    pub oldest_arrival: Option<Tick>,
}

impl BacklogState {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// A read-only view of one idle agent and its team, built by the team right
/// before the agent's decision.
///
/// All borrows live only for the duration of one `choose` call.
pub struct PolicyContext<'a> {
    /// Current simulation tick.
    pub tick: Tick,

    /// The deciding agent.
    pub agent: AgentId,

    /// Ticks the agent has spent in each kind so far this run.
    pub time_by_kind: &'a KindCounts,

    /// Backlog length as seen by this agent (agents earlier in the stepping
    /// order may already have drained items this tick).
    pub backlog: BacklogState,

    /// Onboardings the team has started so far.
    pub onboardings_started: u32,

    /// Onboardings started and not yet completed.
    pub onboardings_in_flight: u32,

    /// The run's policy configuration.
    pub config: &'a PolicyConfig,
}

impl<'a> PolicyContext<'a> {
    #[inline]
    pub fn new(
        tick:                  Tick,
        agent:                 AgentId,
        time_by_kind:          &'a KindCounts,
        backlog:               BacklogState,
        onboardings_started:   u32,
        onboardings_in_flight: u32,
        config:                &'a PolicyConfig,
    ) -> Self {
        Self { tick, agent, time_by_kind, backlog, onboardings_started, onboardings_in_flight, config }
    }

    /// `true` when the backlog is long enough for operational work to
    /// pre-empt everything else.
    pub fn backlog_is_urgent(&self) -> bool {
        !self.backlog.is_empty() && self.backlog.len > self.config.urgency_threshold
    }

    /// `true` once the agent's cumulative operational share has reached
    /// `config.operational_cap`.  Always `false` before the agent's first tick.
    pub fn over_operational_cap(&self) -> bool {
        match self.config.operational_cap {
            None => false,
            Some(cap) => {
                self.time_by_kind.total() > 0
                    && self.time_by_kind.fraction(WorkKind::Operational) >= cap
            }
        }
    }

    /// `true` while the team may start another onboarding: the total limit
    /// is not reached and fewer than `max_concurrent_onboardings` are running.
    pub fn onboarding_allowed(&self) -> bool {
        let cfg = self.config;
        cfg.max_onboardings.is_none_or(|max| self.onboardings_started < max)
            && cfg.max_concurrent_onboardings.is_none_or(|max| self.onboardings_in_flight < max)
    }
}

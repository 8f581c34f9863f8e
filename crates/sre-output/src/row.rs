//! Plain data row types written by output backends.

use sre_core::{Tick, WorkKind};
use sre_sim::WorkMixSummary;
use sre_team::{Team, TickReport};

/// What one agent did during one snapshot tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgentActivityRow {
    pub tick:      u64,
    pub agent_id:  u32,
    pub kind:      WorkKind,
    /// Ticks left on the agent's current item after this tick; 0 when the
    /// item finished this tick or the agent was idle.
    pub remaining: u32,
}

impl AgentActivityRow {
    /// One row per agent of `team` as it stands after `tick`.
    pub fn from_team(tick: Tick, team: &Team) -> Vec<Self> {
        team.agents()
            .iter()
            .map(|agent| Self {
                tick:      tick.0,
                agent_id:  agent.id().0,
                kind:      agent.activity(),
                remaining: agent.remaining(),
            })
            .collect()
    }
}

/// Team-level counters for one simulation tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSummaryRow {
    pub tick:        u64,
    pub arrivals:    u32,
    pub followups:   u32,
    pub served:      u32,
    pub relieved:    u32,
    /// Work units of any kind finished this tick.
    pub completed:   u64,
    pub backlog_len: u64,
}

impl From<&TickReport> for TickSummaryRow {
    fn from(report: &TickReport) -> Self {
        Self {
            tick:        report.tick.0,
            arrivals:    report.arrivals,
            followups:   report.followups,
            served:      report.served.len() as u32,
            relieved:    report.relieved,
            completed:   report.completed.total(),
            backlog_len: report.backlog_len as u64,
        }
    }
}

/// One cell of a work-mix table: ticks and share of one kind for one agent,
/// or for the whole team when `agent_id` is `None`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkMixRow {
    pub agent_id: Option<u32>,
    pub kind:     WorkKind,
    pub ticks:    u64,
    pub fraction: f64,
}

impl WorkMixRow {
    /// Flatten `summary`: every agent's kinds in `WorkKind::ALL` order, then
    /// the team rows.
    pub fn from_summary(summary: &WorkMixSummary) -> Vec<Self> {
        let agents = summary
            .per_agent
            .iter()
            .enumerate()
            .map(|(i, mix)| (Some(i as u32), mix));
        agents
            .chain(std::iter::once((None, &summary.team)))
            .flat_map(|(agent_id, mix)| {
                WorkKind::ALL.into_iter().map(move |kind| Self {
                    agent_id,
                    kind,
                    ticks:    mix.counts.get(kind),
                    fraction: mix.fraction(kind),
                })
            })
            .collect()
    }
}

//! Work-mix aggregation over a snapshot sequence.

use sre_core::{KindCounts, WorkKind};

use crate::Snapshot;

/// Ticks spent per kind by one agent (or a whole team) and the derived
/// fractions.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorkMix {
    pub counts: KindCounts,
}

impl WorkMix {
    /// Share of recorded ticks spent on `kind`; 0.0 when nothing was recorded.
    #[inline]
    pub fn fraction(&self, kind: WorkKind) -> f64 {
        self.counts.fraction(kind)
    }

    /// All fractions in `WorkKind::ALL` order.
    pub fn fractions(&self) -> [f64; WorkKind::COUNT] {
        WorkKind::ALL.map(|k| self.fraction(k))
    }

    /// Sum of all fractions: 1.0 for any non-empty mix.
    pub fn total_fraction(&self) -> f64 {
        self.fractions().iter().sum()
    }
}

/// The result of one run.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorkMixSummary {
    /// Ticks covered by the summarized snapshots.
    pub total_ticks: u64,
    /// One entry per agent, indexed by `AgentId`.
    pub per_agent:   Vec<WorkMix>,
    /// All agents pooled.  Every agent records every tick, so these fractions
    /// are also the mean of the per-agent fractions.
    pub team:        WorkMix,
}

impl WorkMixSummary {
    pub fn agent_count(&self) -> usize {
        self.per_agent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total_ticks == 0
    }
}

/// Count each agent's ticks per kind and turn them into fractions.
///
/// An empty slice yields an empty summary with zero ticks.
pub fn summarize(snapshots: &[Snapshot]) -> WorkMixSummary {
    let Some(first) = snapshots.first() else {
        return WorkMixSummary::default();
    };

    let mut per_agent = vec![WorkMix::default(); first.activities.len()];
    let mut team = WorkMix::default();
    for snap in snapshots {
        for (mix, &kind) in per_agent.iter_mut().zip(&snap.activities) {
            mix.counts.add(kind, 1);
            team.counts.add(kind, 1);
        }
    }

    WorkMixSummary {
        total_ticks: snapshots.len() as u64,
        per_agent,
        team,
    }
}

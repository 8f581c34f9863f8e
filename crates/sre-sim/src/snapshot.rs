//! Per-tick record of the team.

use sre_core::{Tick, WorkKind};
use sre_team::Team;

/// What every agent did during one tick, plus the backlog length at the end
/// of that tick.
///
/// `activities[i]` belongs to `AgentId(i)`; every snapshot of a run has the
/// same number of entries.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    pub tick:        Tick,
    pub activities:  Vec<WorkKind>,
    pub backlog_len: usize,
}

impl Snapshot {
    /// Capture `team` right after it stepped through `tick`.
    pub fn capture(tick: Tick, team: &Team) -> Self {
        Self {
            tick,
            activities:  team.activities().collect(),
            backlog_len: team.backlog().len(),
        }
    }

    /// Number of agents doing `kind` in this tick.
    pub fn count(&self, kind: WorkKind) -> usize {
        self.activities.iter().filter(|&&k| k == kind).count()
    }
}

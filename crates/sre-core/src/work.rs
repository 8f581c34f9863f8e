//! The closed set of work kinds and a per-kind tick counter.
//!
//! Every match on [`WorkKind`] in the workspace is exhaustive; adding a kind
//! is a deliberate breaking change that the compiler walks you through.

use std::fmt;
use std::ops::{Index, IndexMut};

/// What an agent spends a tick on.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum WorkKind {
    /// Unscheduled, interrupt-driven work arriving from outside the team.
    Operational,
    /// Planned work that only benefits this team.
    InTeamProject,
    /// Planned work whose benefit reduces other teams' operational load.
    CrossTeamProject,
    /// Bringing a new system or service under the team's support.
    Onboarding,
    /// Nothing to do this tick.
    #[default]
    Idle,
}

impl WorkKind {
    /// Number of variants.
    pub const COUNT: usize = 5;

    /// Every kind in canonical (column) order.
    pub const ALL: [WorkKind; WorkKind::COUNT] = [
        WorkKind::Operational,
        WorkKind::InTeamProject,
        WorkKind::CrossTeamProject,
        WorkKind::Onboarding,
        WorkKind::Idle,
    ];

    /// Position of this kind in [`WorkKind::ALL`].
    #[inline]
    pub fn index(self) -> usize {
        match self {
            WorkKind::Operational      => 0,
            WorkKind::InTeamProject    => 1,
            WorkKind::CrossTeamProject => 2,
            WorkKind::Onboarding       => 3,
            WorkKind::Idle             => 4,
        }
    }

    /// `true` for every kind except `Idle`.
    #[inline]
    pub fn is_work(self) -> bool {
        !matches!(self, WorkKind::Idle)
    }

    /// Stable label used for output columns.
    pub fn as_str(self) -> &'static str {
        match self {
            WorkKind::Operational      => "operational",
            WorkKind::InTeamProject    => "in_team_project",
            WorkKind::CrossTeamProject => "cross_team_project",
            WorkKind::Onboarding       => "onboarding",
            WorkKind::Idle             => "idle",
        }
    }
}

impl fmt::Display for WorkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── KindCounts ────────────────────────────────────────────────────────────────

/// Tick counts for every [`WorkKind`], all present and starting at zero.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KindCounts([u64; WorkKind::COUNT]);

impl KindCounts {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn get(&self, kind: WorkKind) -> u64 {
        self.0[kind.index()]
    }

    #[inline]
    pub fn add(&mut self, kind: WorkKind, ticks: u64) {
        self.0[kind.index()] += ticks;
    }

    /// Sum over all kinds, `Idle` included.
    pub fn total(&self) -> u64 {
        self.0.iter().sum()
    }

    /// Share of `kind` in the total, or 0.0 when nothing has been counted.
    pub fn fraction(&self, kind: WorkKind) -> f64 {
        let total = self.total();
        if total == 0 {
            0.0
        } else {
            self.get(kind) as f64 / total as f64
        }
    }

    /// `(kind, count)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (WorkKind, u64)> + '_ {
        WorkKind::ALL.iter().map(move |&k| (k, self.get(k)))
    }
}

impl Index<WorkKind> for KindCounts {
    type Output = u64;
    fn index(&self, kind: WorkKind) -> &u64 {
        &self.0[kind.index()]
    }
}

impl IndexMut<WorkKind> for KindCounts {
    fn index_mut(&mut self, kind: WorkKind) -> &mut u64 {
        &mut self.0[kind.index()]
    }
}

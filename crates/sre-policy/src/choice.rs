//! `Choice` — what an idle agent decides to do next.

use sre_core::WorkKind;

/// The outcome of [`WorkPolicy::choose`][crate::WorkPolicy::choose].
///
/// Choices are produced by the policy and applied by the team.  The split
/// keeps policies free of side effects: dequeuing a backlog item is the
/// team's job, not the policy's.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    /// Take the oldest item from the team backlog and work on it
    /// (`Operational`, for the item's size).
    ServeBacklog,

    /// Start `duration` ticks of `kind`.
    ///
    /// A zero duration or `WorkKind::Idle` leaves the agent idle this tick.
    Work { kind: WorkKind, duration: u32 },

    /// Stay idle this tick.
    Rest,
}

impl Choice {
    /// The kind of work this choice leads to.
    pub fn kind(self) -> WorkKind {
        match self {
            Choice::ServeBacklog        => WorkKind::Operational,
            Choice::Work { kind, .. }   => kind,
            Choice::Rest                => WorkKind::Idle,
        }
    }
}

//! The per-agent state machine.
//!
//! ```text
//!            choose() → duration ≥ 1
//!   ┌──────┐ ─────────────────────────▶ ┌─────────────────────────┐
//!   │ Idle │                            │ Working(kind, remaining)│
//!   └──────┘ ◀───────────────────────── └─────────────────────────┘
//!              remaining hits 0 (agent is idle from the next tick)
//! ```
//!
//! Within one tick the team first lets an idle agent choose, then calls
//! [`Agent::work_tick`].  An agent that finishes at tick `t` is idle between
//! ticks and chooses again at `t + 1`, never twice in the same tick.  The one
//! exception is a cross-team overrun: the team restarts the agent on another
//! cross-team unit right after the completion, with no choice involved.

use sre_core::{AgentId, KindCounts, WorkKind};

/// Between-tick state of an agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AgentState {
    #[default]
    Idle,
    /// `remaining` is always ≥ 1 while in this state.
    Working {
        kind:      WorkKind,
        remaining: u32,
        duration:  u32,
    },
}

/// A finished unit of work, reported to the team for bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completion {
    pub agent:    AgentId,
    pub kind:     WorkKind,
    pub duration: u32,
}

/// One simulated team member.
#[derive(Debug, Clone)]
pub struct Agent {
    id:           AgentId,
    state:        AgentState,
    /// Kind spent on during the most recent tick (`Idle` before the first).
    activity:     WorkKind,
    time_by_kind: KindCounts,
}

impl Agent {
    pub fn new(id: AgentId) -> Self {
        Self {
            id,
            state:        AgentState::Idle,
            activity:     WorkKind::Idle,
            time_by_kind: KindCounts::new(),
        }
    }

    #[inline]
    pub fn id(&self) -> AgentId {
        self.id
    }

    #[inline]
    pub fn state(&self) -> AgentState {
        self.state
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        matches!(self.state, AgentState::Idle)
    }

    /// What the agent did during the most recent tick.
    #[inline]
    pub fn activity(&self) -> WorkKind {
        self.activity
    }

    /// Ticks left on the current item (0 when idle).
    pub fn remaining(&self) -> u32 {
        match self.state {
            AgentState::Idle => 0,
            AgentState::Working { remaining, .. } => remaining,
        }
    }

    /// Cumulative ticks per kind, `Idle` included.
    #[inline]
    pub fn time_by_kind(&self) -> &KindCounts {
        &self.time_by_kind
    }

    /// Begin `duration` ticks of `kind`.
    ///
    /// Returns `false` (and leaves the agent idle) if the agent is already
    /// working, `kind` is `Idle`, or `duration` is zero.
    pub fn start(&mut self, kind: WorkKind, duration: u32) -> bool {
        if !self.is_idle() || !kind.is_work() || duration == 0 {
            return false;
        }
        self.state = AgentState::Working { kind, remaining: duration, duration };
        true
    }

    /// Spend one tick: one unit of the current item, or one idle tick.
    ///
    /// Returns the completed unit when this tick finished it.
    pub fn work_tick(&mut self) -> Option<Completion> {
        match &mut self.state {
            AgentState::Idle => {
                self.activity = WorkKind::Idle;
                self.time_by_kind.add(WorkKind::Idle, 1);
                None
            }
            AgentState::Working { kind, remaining, duration } => {
                let kind = *kind;
                let duration = *duration;
                *remaining -= 1;
                let finished = *remaining == 0;

                self.activity = kind;
                self.time_by_kind.add(kind, 1);

                if finished {
                    self.state = AgentState::Idle;
                    Some(Completion { agent: self.id, kind, duration })
                } else {
                    None
                }
            }
        }
    }
}

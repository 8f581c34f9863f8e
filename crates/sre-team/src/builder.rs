//! Fluent builder for a [`Team`].
//!
//! # Usage
//!
//! ```rust
//! use sre_core::TeamId;
//! use sre_team::TeamBuilder;
//!
//! let team = TeamBuilder::new(4)
//!     .id(TeamId(1))
//!     .preload(4, 1)
//!     .build();
//!
//! assert_eq!(team.len(), 4);
//! assert_eq!(team.backlog().len(), 4);
//! ```

use sre_core::{AgentId, TeamId, Tick};

use crate::{Agent, Backlog, Team};

/// Fluent builder for [`Team`].
///
/// All agents start idle with zeroed time counters.  Agent count is not
/// validated here; `SimBuilder::build` rejects an empty team.
pub struct TeamBuilder {
    size:    usize,
    id:      TeamId,
    preload: Vec<u32>,
}

impl TeamBuilder {
    /// A builder for a team of `size` agents with id `TeamId(0)`.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            id:      TeamId(0),
            preload: Vec::new(),
        }
    }

    pub fn id(mut self, id: TeamId) -> Self {
        self.id = id;
        self
    }

    /// Start the run with `count` operational items of `size` ticks already
    /// waiting (arrival tick 0), e.g. the inherited queue of a team taking
    /// over an existing service.
    pub fn preload(mut self, count: usize, size: u32) -> Self {
        self.preload.extend(std::iter::repeat_n(size, count));
        self
    }

    pub fn build(self) -> Team {
        let agents = (0..self.size as u32).map(|i| Agent::new(AgentId(i))).collect();

        let mut backlog = Backlog::new();
        for &size in &self.preload {
            backlog.push(Tick::ZERO, size);
        }

        Team {
            id:                    self.id,
            agents,
            backlog,
            cross_team_output:     0,
            onboardings_started:   0,
            onboardings_completed: 0,
            onboardings_in_flight: 0,
            overruns:              0,
            arrived:               self.preload.len() as u64,
            served:                0,
            relieved:              0,
        }
    }
}

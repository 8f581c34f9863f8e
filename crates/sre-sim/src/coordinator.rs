//! Several teams run side by side, exchanging cross-team output.
//!
//! ```text
//! loop until every team reached its end tick:
//!   ① Advance  — each team runs `interval` ticks on its own
//!                (parallel with the `parallel` feature).
//!   ② Exchange — in team order, drain each team's cross-team output and
//!                split it evenly over the other teams; each share is
//!                applied as `Team::relieve` of that many backlog items.
//! ```
//!
//! Teams never see each other during ①, so the result is the same whether
//! they run sequentially or on Rayon's pool.

use tracing::{debug, info};

use sre_core::{ConfigError, ConfigResult, Tick};
use sre_policy::WorkPolicy;

use crate::{NoopObserver, Sim, WorkMixSummary};

/// What happened during one [`Coordinator::round`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundReport {
    /// 1-based round number.
    pub round:    u64,
    /// Latest tick reached by any team at the end of the round.
    pub tick:     Tick,
    /// Cross-team output drained from each team, in team order.
    pub output:   Vec<u64>,
    /// Backlog items each team had cancelled by the others' output.
    pub received: Vec<u64>,
}

/// Drives a set of single-team [`Sim`]s in lock-step rounds.
pub struct Coordinator<P: WorkPolicy> {
    sims:     Vec<Sim<P>>,
    interval: u64,
    rounds:   u64,
}

impl<P: WorkPolicy> Coordinator<P> {
    /// Coordinate `sims` (team order = vector order), exchanging output every
    /// `interval` ticks.
    pub fn new(sims: Vec<Sim<P>>, interval: u64) -> ConfigResult<Self> {
        if sims.is_empty() {
            return Err(ConfigError::Other("a coordinator needs at least one team".into()));
        }
        if interval == 0 {
            return Err(ConfigError::NonPositive { field: "interval", value: 0.0 });
        }
        Ok(Self { sims, interval, rounds: 0 })
    }

    /// Run rounds until every team has processed all of its ticks.
    pub fn run(&mut self) {
        info!(teams = self.sims.len(), interval = self.interval, "coordinated run started");
        while !self.is_finished() {
            self.round();
        }
        info!(rounds = self.rounds, "coordinated run finished");
    }

    /// Advance every team by up to `interval` ticks, then exchange output.
    pub fn round(&mut self) -> RoundReport {
        advance(&mut self.sims, self.interval);
        self.rounds += 1;

        let n = self.sims.len();
        let mut output = vec![0; n];
        let mut received = vec![0; n];

        for i in 0..n {
            let produced = self.sims[i].team.take_cross_team_output();
            output[i] = produced;
            // A lone team has nobody to help; its output is discarded.
            if n == 1 || produced == 0 {
                continue;
            }

            let others = (n - 1) as u64;
            let (base, remainder) = (produced / others, produced % others);
            for (rank, j) in (0..n).filter(|&j| j != i).enumerate() {
                let share = base + u64::from((rank as u64) < remainder);
                if share == 0 {
                    continue;
                }
                let share = u32::try_from(share).unwrap_or(u32::MAX);
                received[j] += self.sims[j].team.relieve(share) as u64;
            }
        }

        let tick = self.sims.iter().map(Sim::now).max().unwrap_or(Tick::ZERO);
        debug!(round = self.rounds, %tick, ?output, ?received, "coordinator round");
        RoundReport { round: self.rounds, tick, output, received }
    }

    pub fn is_finished(&self) -> bool {
        self.sims.iter().all(Sim::is_finished)
    }

    pub fn rounds(&self) -> u64 {
        self.rounds
    }

    /// The coordinated sims, in team order.
    pub fn sims(&self) -> &[Sim<P>] {
        &self.sims
    }

    pub fn into_sims(self) -> Vec<Sim<P>> {
        self.sims
    }

    /// One work-mix summary per team, in team order.
    pub fn summaries(&self) -> Vec<WorkMixSummary> {
        self.sims.iter().map(Sim::summary).collect()
    }
}

/// Step every unfinished sim by `interval` ticks, stopping each at its own
/// end tick.
fn advance<P: WorkPolicy>(sims: &mut [Sim<P>], interval: u64) {
    let step = |sim: &mut Sim<P>| {
        let left = sim.run_config.end_tick().0.saturating_sub(sim.now.0);
        sim.run_ticks(interval.min(left), &mut NoopObserver);
    };

    #[cfg(not(feature = "parallel"))]
    {
        sims.iter_mut().for_each(step);
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        sims.par_iter_mut().for_each(step);
    }
}

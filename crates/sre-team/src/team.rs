//! `Team` — agents, their shared backlog, and the per-tick step.

use rand::Rng;
use tracing::trace;

use sre_core::{AgentId, AgentRng, AgentRngs, ItemId, KindCounts, SimRng, TeamId, Tick, WorkKind};
use sre_policy::dist::poisson;
use sre_policy::{Choice, PolicyConfig, PolicyContext, WorkPolicy};

use crate::agent::{Agent, Completion};
use crate::backlog::Backlog;

/// An operational item handed to an agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServedItem {
    pub item:    ItemId,
    pub arrival: Tick,
    pub agent:   AgentId,
}

/// What happened during one [`Team::step`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickReport {
    pub tick:        Tick,
    /// Items from the external arrival process.
    pub arrivals:    u32,
    /// Items enqueued by completed onboardings.
    pub followups:   u32,
    /// Items taken off the backlog by agents, in service order.
    pub served:      Vec<ServedItem>,
    /// Items cancelled by cross-team relief.
    pub relieved:    u32,
    /// Work units finished this tick, per kind.
    pub completed:   KindCounts,
    /// Backlog length after every agent has stepped.
    pub backlog_len: usize,
}

/// A team: an ordered, fixed-size set of agents and one backlog.
///
/// Build with [`TeamBuilder`][crate::TeamBuilder].
#[derive(Debug)]
pub struct Team {
    pub(crate) id:                    TeamId,
    pub(crate) agents:                Vec<Agent>,
    pub(crate) backlog:               Backlog,
    /// Cross-team project ticks completed and not yet collected.
    pub(crate) cross_team_output:     u64,
    pub(crate) onboardings_started:   u32,
    pub(crate) onboardings_completed: u32,
    pub(crate) onboardings_in_flight: u32,
    pub(crate) overruns:              u32,
    pub(crate) arrived:               u64,
    pub(crate) served:                u64,
    pub(crate) relieved:              u64,
}

impl Team {
    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> TeamId {
        self.id
    }

    /// Number of agents (fixed for the lifetime of the team).
    #[inline]
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Agents in stepping order (ascending `AgentId`).
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn agent(&self, id: AgentId) -> Option<&Agent> {
        self.agents.get(id.index())
    }

    /// The kind each agent spent the most recent tick on, in agent order.
    pub fn activities(&self) -> impl Iterator<Item = WorkKind> + '_ {
        self.agents.iter().map(Agent::activity)
    }

    pub fn backlog(&self) -> &Backlog {
        &self.backlog
    }

    /// Cross-team project ticks completed since the last
    /// [`take_cross_team_output`][Self::take_cross_team_output].
    pub fn cross_team_output(&self) -> u64 {
        self.cross_team_output
    }

    /// Collect and reset the cross-team output counter.
    pub fn take_cross_team_output(&mut self) -> u64 {
        std::mem::take(&mut self.cross_team_output)
    }

    pub fn onboardings_started(&self) -> u32 {
        self.onboardings_started
    }

    pub fn onboardings_completed(&self) -> u32 {
        self.onboardings_completed
    }

    /// Onboardings currently being worked on.
    pub fn onboardings_in_flight(&self) -> u32 {
        self.onboardings_in_flight
    }

    /// Cross-team units that ran over into another unit.
    pub fn cross_team_overruns(&self) -> u32 {
        self.overruns
    }

    /// Operational items ever enqueued (arrivals plus onboarding follow-ups).
    pub fn total_arrived(&self) -> u64 {
        self.arrived
    }

    /// Operational items ever handed to an agent.
    pub fn total_served(&self) -> u64 {
        self.served
    }

    /// Operational items ever cancelled through [`relieve`][Self::relieve],
    /// by this team's own cross-team work or by a coordinator.
    pub fn total_relieved(&self) -> u64 {
        self.relieved
    }

    /// Cancel up to `count` of the oldest backlog items and count them.
    pub fn relieve(&mut self, count: u32) -> u32 {
        let removed = self.backlog.relieve(count);
        self.relieved += removed as u64;
        removed
    }

    // ── Tick ──────────────────────────────────────────────────────────────

    /// Advance the whole team by one tick.
    ///
    /// 1. Sample operational arrivals and append them to the backlog.
    /// 2. Step every agent in ascending `AgentId` order: an idle agent asks
    ///    `policy` for a [`Choice`], which is applied immediately (so later
    ///    agents see the drained backlog); then the agent spends the tick.
    ///
    /// `arrival_rng` only feeds the external arrival process.  Everything a
    /// completion draws (follow-up item sizes, overruns) comes from the
    /// finishing agent's RNG, so the arrival sequence does not depend on the
    /// policy unless `arrival_growth_per_onboarding` is set.
    ///
    /// `rngs` must hold one RNG per agent.  The step is a total function of
    /// valid state: it cannot fail.
    pub fn step<P: WorkPolicy + ?Sized>(
        &mut self,
        tick:        Tick,
        policy:      &P,
        config:      &PolicyConfig,
        rngs:        &mut AgentRngs,
        arrival_rng: &mut SimRng,
    ) -> TickReport {
        let mut report = TickReport { tick, ..TickReport::default() };

        // ── Arrivals ──────────────────────────────────────────────────────
        let extra = config.arrival_growth(self.onboardings_completed);
        let count = config.arrivals.sample(arrival_rng.inner()) + poisson(arrival_rng.inner(), extra);
        self.enqueue(tick, count, config, arrival_rng.inner());
        report.arrivals = count;
        if count > 0 {
            trace!(team = self.id.0, %tick, count, backlog = self.backlog.len(), "operational arrivals");
        }

        // ── Agents, ascending index ───────────────────────────────────────
        for i in 0..self.agents.len() {
            if self.agents[i].is_idle() {
                let id = self.agents[i].id();
                let choice = {
                    let ctx = PolicyContext::new(
                        tick,
                        id,
                        self.agents[i].time_by_kind(),
                        self.backlog.state(),
                        self.onboardings_started,
                        self.onboardings_in_flight,
                        config,
                    );
                    policy.choose(&ctx, rngs.get_mut(id))
                };
                self.apply_choice(i, choice, &mut report);
            }

            if let Some(done) = self.agents[i].work_tick() {
                self.on_completion(i, done, tick, config, rngs.get_mut(done.agent), &mut report);
            }
        }

        report.backlog_len = self.backlog.len();
        report
    }

    fn apply_choice(&mut self, index: usize, choice: Choice, report: &mut TickReport) {
        match choice {
            Choice::ServeBacklog => {
                if let Some(item) = self.backlog.pop() {
                    let agent = &mut self.agents[index];
                    agent.start(WorkKind::Operational, item.size);
                    self.served += 1;
                    report.served.push(ServedItem {
                        item:    item.id,
                        arrival: item.arrival,
                        agent:   agent.id(),
                    });
                }
            }
            Choice::Work { kind, duration } => {
                if self.agents[index].start(kind, duration) && kind == WorkKind::Onboarding {
                    self.onboardings_started += 1;
                    self.onboardings_in_flight += 1;
                }
            }
            Choice::Rest => {}
        }
    }

    fn on_completion(
        &mut self,
        index:  usize,
        done:   Completion,
        tick:   Tick,
        config: &PolicyConfig,
        rng:    &mut AgentRng,
        report: &mut TickReport,
    ) {
        report.completed.add(done.kind, 1);
        match done.kind {
            WorkKind::CrossTeamProject => {
                self.cross_team_output += done.duration as u64;
                let relieved = self.relieve(config.cross_team_relief);
                report.relieved += relieved;
                if relieved > 0 {
                    trace!(team = self.id.0, %tick, agent = done.agent.0, relieved, "cross-team relief");
                }
                if rng.gen_bool(config.cross_team_overrun) {
                    let duration = config.project_duration.sample(rng.inner());
                    if self.agents[index].start(WorkKind::CrossTeamProject, duration) {
                        self.overruns += 1;
                        trace!(team = self.id.0, %tick, agent = done.agent.0, duration, "cross-team overrun");
                    }
                }
            }
            WorkKind::Onboarding => {
                self.onboardings_completed += 1;
                self.onboardings_in_flight = self.onboardings_in_flight.saturating_sub(1);
                let load = config.onboarding_operational_load;
                self.enqueue(tick, load, config, rng.inner());
                report.followups += load;
            }
            WorkKind::Operational | WorkKind::InTeamProject | WorkKind::Idle => {}
        }
    }

    fn enqueue<R: Rng + ?Sized>(&mut self, tick: Tick, count: u32, config: &PolicyConfig, rng: &mut R) {
        for _ in 0..count {
            let size = config.operational_size.sample(rng);
            self.backlog.push(tick, size);
        }
        self.arrived += count as u64;
    }
}

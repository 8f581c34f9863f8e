//! The `Sim` struct and its tick loop.

use tracing::info;

use sre_core::{AgentRngs, RunConfig, SimRng, Tick};
use sre_policy::{PolicyConfig, WorkPolicy};
use sre_team::Team;

use crate::{SimObserver, Snapshot, WorkMixSummary, summarize};

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The main simulation runner for one team.
///
/// Each tick:
///
/// 1. **Arrivals**: the team samples operational arrivals from its arrival
///    stream and appends them to the backlog.
/// 2. **Agents** (ascending `AgentId`): an idle agent asks the policy for a
///    choice, which the team applies at once; then the agent works the tick.
/// 3. **Snapshot**: every agent's activity and the backlog length are
///    appended to the run's snapshot sequence.
///
/// A run is strictly sequential and does no I/O.  Everything that could be
/// invalid was checked by [`SimBuilder::build`][crate::SimBuilder::build], so
/// stepping cannot fail.
pub struct Sim<P: WorkPolicy> {
    pub(crate) run_config:  RunConfig,
    pub(crate) config:      PolicyConfig,
    pub(crate) team:        Team,
    pub(crate) policy:      P,
    /// Per-agent deterministic RNGs, held apart from the team for the
    /// split-borrow pattern.
    pub(crate) rngs:        AgentRngs,
    pub(crate) arrival_rng: SimRng,
    pub(crate) seed:        u64,
    /// Next tick to process.
    pub(crate) now:         Tick,
    pub(crate) snapshots:   Vec<Snapshot>,
}

impl<P: WorkPolicy> Sim<P> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run the simulation from the current tick to `run_config.end_tick()`
    /// and return every snapshot recorded so far.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> &[Snapshot] {
        let end = self.run_config.end_tick();
        info!(
            seed   = self.seed,
            agents = self.team.len(),
            ticks  = self.run_config.total_ticks,
            policy = self.policy.name(),
            "simulation started"
        );

        while self.now < end {
            self.process_tick(observer);
        }
        observer.on_sim_end(self.now);

        info!(
            ticks   = self.snapshots.len(),
            backlog = self.team.backlog().len(),
            served  = self.team.total_served(),
            "simulation finished"
        );
        &self.snapshots
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            self.process_tick(observer);
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// The seed actually used: the configured one, or the one drawn from OS
    /// entropy when none was configured.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// The next tick to be processed.
    pub fn now(&self) -> Tick {
        self.now
    }

    /// `true` once `run_config.total_ticks` ticks have been processed.
    pub fn is_finished(&self) -> bool {
        self.now >= self.run_config.end_tick()
    }

    pub fn run_config(&self) -> &RunConfig {
        &self.run_config
    }

    pub fn config(&self) -> &PolicyConfig {
        &self.config
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    pub fn team(&self) -> &Team {
        &self.team
    }

    /// Snapshots recorded so far, one per processed tick.
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    pub fn into_snapshots(self) -> Vec<Snapshot> {
        self.snapshots
    }

    /// Work-mix of the ticks processed so far.
    pub fn summary(&self) -> WorkMixSummary {
        summarize(&self.snapshots)
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn process_tick<O: SimObserver>(&mut self, observer: &mut O) {
        let now = self.now;
        observer.on_tick_start(now);

        let report = self.team.step(
            now,
            &self.policy,
            &self.config,
            &mut self.rngs,
            &mut self.arrival_rng,
        );
        observer.on_tick_end(&report);

        let snapshot = Snapshot::capture(now, &self.team);
        let interval = self.run_config.snapshot_interval_ticks;
        if interval > 0 && now.0.is_multiple_of(interval) {
            observer.on_snapshot(&snapshot, &self.team);
        }
        self.snapshots.push(snapshot);

        self.now = now + 1;
    }
}

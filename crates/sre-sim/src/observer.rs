//! Simulation observer trait for progress reporting and data collection.

use sre_core::Tick;
use sre_team::{Team, TickReport};

use crate::Snapshot;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — backlog watcher
///
/// ```rust,ignore
/// struct BacklogWatcher { peak: usize }
///
/// impl SimObserver for BacklogWatcher {
///     fn on_tick_end(&mut self, report: &TickReport) {
///         self.peak = self.peak.max(report.backlog_len);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before arrivals are sampled.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after every agent has stepped, with the team's account of the
    /// tick (arrivals, items served, completions, relief).
    fn on_tick_end(&mut self, _report: &TickReport) {}

    /// Called at snapshot intervals (every `run_config.snapshot_interval_ticks`
    /// ticks) with the tick's snapshot and read-only access to the team, so
    /// output writers can record state without the sim knowing any format.
    fn on_snapshot(&mut self, _snapshot: &Snapshot, _team: &Team) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

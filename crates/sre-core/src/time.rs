//! Simulation time model.
//!
//! Time is a monotonically increasing `Tick` counter.  A tick is the smallest
//! unit of team time: one agent performs at most one unit of one work item
//! per tick.  There is no wall-clock mapping; the model measures
//! everything in abstract "clock ticks".

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Ticks elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0 - earlier.0
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── RunConfig ─────────────────────────────────────────────────────────────────

/// Run-level configuration: how long to simulate and how to seed it.
///
/// Policy knobs (arrival rates, onboarding cost, …) live in
/// `sre_policy::PolicyConfig`; this struct only controls the tick loop.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunConfig {
    /// Total ticks to simulate.  Must be at least 1.
    pub total_ticks: u64,

    /// Master RNG seed.  The same seed always produces identical snapshots.
    /// `None` draws a fresh seed from OS entropy when the sim is built.
    pub seed: Option<u64>,

    /// Call `SimObserver::on_snapshot` every N ticks.  1 = every tick;
    /// 0 disables the callback.  The in-memory snapshot sequence is always
    /// recorded every tick regardless of this value.
    pub snapshot_interval_ticks: u64,
}

impl RunConfig {
    /// A config that runs `total_ticks` with the given seed and reports every
    /// snapshot.
    pub fn new(total_ticks: u64, seed: Option<u64>) -> Self {
        Self {
            total_ticks,
            seed,
            snapshot_interval_ticks: 1,
        }
    }

    /// The tick at which the simulation ends (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }
}

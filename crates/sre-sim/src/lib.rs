//! `sre-sim` — tick loop orchestrator for the simsre team simulator.
//!
//! # Tick loop
//!
//! ```text
//! for tick in 0..run_config.total_ticks:
//!   ① Arrivals — sample the arrival count from the team arrival stream and
//!                append that many operational items to the backlog.
//!   ② Agents   — for each agent in ascending AgentId order:
//!                  idle?   → WorkPolicy::choose → team applies the Choice
//!                  always  → work one tick (or count one idle tick)
//!   ③ Snapshot — record every agent's activity and the backlog length.
//! after the last tick: summarize(snapshots) → WorkMixSummary
//! ```
//!
//! # Crate layout
//!
//! | Module          | Contents                                            |
//! |-----------------|-----------------------------------------------------|
//! | [`builder`]     | `SimBuilder` — validation and seeding               |
//! | [`sim`]         | `Sim` — the single-team tick loop                   |
//! | [`observer`]    | `SimObserver`, `NoopObserver`                       |
//! | [`snapshot`]    | `Snapshot`                                          |
//! | [`summary`]     | `summarize`, `WorkMix`, `WorkMixSummary`            |
//! | [`sweep`]       | `run_sweep`, `SweepPoint` — independent runs        |
//! | [`coordinator`] | `Coordinator` — several teams sharing relief        |
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                  |
//! |------------|---------------------------------------------------------|
//! | `parallel` | Sweep points and coordinator teams run on Rayon.        |
//! | `serde`    | Serde derives on `Snapshot` and the summary types.      |
//!
//! # Quick-start
//!
//! ```rust
//! use sre_core::WorkKind;
//! use sre_policy::PolicyConfig;
//!
//! let snapshots = sre_sim::run(3, &PolicyConfig::default(), 500, Some(42)).unwrap();
//! let summary = sre_sim::summarize(&snapshots);
//! println!("operational share: {:.2}", summary.team.fraction(WorkKind::Operational));
//! ```

pub mod builder;
pub mod coordinator;
pub mod observer;
pub mod sim;
pub mod snapshot;
pub mod summary;
pub mod sweep;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use coordinator::{Coordinator, RoundReport};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
pub use snapshot::Snapshot;
pub use summary::{WorkMix, WorkMixSummary, summarize};
pub use sweep::{SweepPoint, run_sweep};

use sre_core::{ConfigResult, RunConfig};
use sre_policy::PolicyConfig;
use sre_team::TeamBuilder;

/// Run a fresh team of `team_size` agents for `total_ticks` ticks under
/// `config` (using `config.policy`) and return one snapshot per tick.
///
/// `seed: None` draws a seed from OS entropy.  Fails with the config error
/// before any tick runs.
pub fn run(
    team_size:   usize,
    config:      &PolicyConfig,
    total_ticks: u64,
    seed:        Option<u64>,
) -> ConfigResult<Vec<Snapshot>> {
    let team = TeamBuilder::new(team_size).build();
    let mut sim = SimBuilder::new(
        RunConfig::new(total_ticks, seed),
        team,
        config.clone(),
        config.policy,
    )
    .build()?;
    sim.run(&mut NoopObserver);
    Ok(sim.into_snapshots())
}

//! Independent runs over a list of parameter points.

use tracing::debug;

use sre_core::{ConfigResult, WorkKind};
use sre_policy::PolicyConfig;

use crate::{WorkMixSummary, summarize};

/// One run of a sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepPoint {
    pub config:      PolicyConfig,
    pub team_size:   usize,
    pub total_ticks: u64,
    pub seed:        u64,
}

impl SweepPoint {
    pub fn new(config: PolicyConfig, team_size: usize, total_ticks: u64, seed: u64) -> Self {
        Self { config, team_size, total_ticks, seed }
    }

    /// Run this point to completion and summarize it.
    pub fn run(&self) -> ConfigResult<WorkMixSummary> {
        let snapshots = crate::run(self.team_size, &self.config, self.total_ticks, Some(self.seed))?;
        let summary = summarize(&snapshots);
        debug!(
            seed        = self.seed,
            agents      = self.team_size,
            ticks       = self.total_ticks,
            operational = summary.team.fraction(WorkKind::Operational),
            "sweep point finished"
        );
        Ok(summary)
    }
}

/// Run every point independently and return the results in input order.
///
/// An invalid point yields its own `Err` without affecting the others.  With
/// the `parallel` feature points run on Rayon's thread pool; each point owns
/// all of its state, so the results are identical either way.
pub fn run_sweep(points: &[SweepPoint]) -> Vec<ConfigResult<WorkMixSummary>> {
    #[cfg(not(feature = "parallel"))]
    {
        points.iter().map(SweepPoint::run).collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        points.par_iter().map(SweepPoint::run).collect()
    }
}

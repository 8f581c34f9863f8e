//! Deterministic per-agent and team-level RNG wrappers.
//!
//! # Determinism strategy
//!
//! Each agent gets its own independent `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (agent_id * MIXING_CONSTANT)
//!
//! External arrivals are drawn from a separate team-level [`SimRng`] derived
//! from the same global seed, and nothing else draws from it.  Keeping the
//! streams apart means:
//!
//! - The arrival sequence of a run depends only on the seed and the arrival
//!   config, so two runs that differ only in a policy knob see exactly the
//!   same incoming operational work.  The exception is
//!   `arrival_growth_per_onboarding`, which ties the arrival rate to how
//!   many onboardings the policy has completed.
//! - An agent's draws never shift another agent's draws.
//! - Adding agents at the end of the team does not disturb existing seeds.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::AgentId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Offset mixed into the global seed for the team arrival stream, so it never
/// coincides with agent 0's stream (`seed ^ 0`).
const ARRIVAL_STREAM: u64 = 0xa076_1d64_78bd_642f;

// ── AgentRng ──────────────────────────────────────────────────────────────────

/// Per-agent deterministic RNG, handed to the work policy whenever the agent
/// is idle.
pub struct AgentRng(SmallRng);

impl AgentRng {
    /// Seed deterministically from the run's global seed and an agent ID.
    pub fn new(global_seed: u64, agent: AgentId) -> Self {
        let seed = global_seed ^ (agent.0 as u64).wrapping_mul(MIXING_CONSTANT);
        AgentRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` / `rand_distr`
    /// distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}

// ── AgentRngs ─────────────────────────────────────────────────────────────────

/// One [`AgentRng`] per team member, indexed by `AgentId`.
///
/// Held next to (not inside) the team so the tick loop can borrow an agent
/// mutably and its RNG mutably at the same time.
pub struct AgentRngs {
    pub inner: Vec<AgentRng>,
}

impl AgentRngs {
    /// Allocate and seed `count` per-agent RNGs from `global_seed`.
    pub fn new(count: usize, global_seed: u64) -> Self {
        let inner = (0..count as u32)
            .map(|i| AgentRng::new(global_seed, AgentId(i)))
            .collect();
        Self { inner }
    }

    /// Mutable reference to one agent's RNG.
    #[inline]
    pub fn get_mut(&mut self, agent: AgentId) -> &mut AgentRng {
        &mut self.inner[agent.index()]
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Team-level RNG for exogenous events (operational arrivals and their
/// sizes).  Only used from the single-threaded tick loop; distributions
/// sample from [`inner`][Self::inner].
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// The arrival stream for a run seeded with `global_seed`.
    pub fn arrivals(global_seed: u64) -> Self {
        SimRng::new(global_seed ^ ARRIVAL_STREAM)
    }

    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }
}

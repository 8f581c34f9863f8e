//! `sre-policy` — the work-selection policy and its configuration.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                      |
//! |--------------|---------------------------------------------------------------|
//! | [`config`]   | `PolicyConfig` — every tunable knob, validated eagerly        |
//! | [`dist`]     | `ArrivalDist`, `DurationDist` and their samplers              |
//! | [`choice`]   | `Choice` — what an idle agent decides to do                   |
//! | [`context`]  | `PolicyContext<'a>`, `BacklogState` — read-only decision input |
//! | [`model`]    | `WorkPolicy` trait                                            |
//! | [`ladder`]   | the shared pre-emption → onboarding → project decision ladder  |
//! | [`fixed`]    | `FixedCostOnboarding`                                         |
//! | [`variable`] | `VariableCostOnboarding`                                      |
//! | [`variant`]  | `PolicyVariant` — config-selected policy                      |
//! | [`idle`]     | `IdlePolicy` — placeholder that never picks up work           |
//!
//! # Design notes
//!
//! Policies are pure: a [`WorkPolicy`] reads a [`PolicyContext`] and draws
//! from the agent's own RNG, then returns a [`Choice`].  The team applies
//! the choice (dequeuing backlog items, starting work), so a policy never
//! mutates simulation state and one instance can be shared by reference
//! across every agent of every team.

pub mod choice;
pub mod config;
pub mod context;
pub mod dist;
pub mod fixed;
pub mod idle;
pub mod ladder;
pub mod model;
pub mod variable;
pub mod variant;


pub use choice::Choice;
pub use config::PolicyConfig;
pub use context::{BacklogState, PolicyContext};
pub use dist::{ArrivalDist, DurationDist};
pub use fixed::FixedCostOnboarding;
pub use idle::IdlePolicy;
pub use model::WorkPolicy;
pub use variable::VariableCostOnboarding;
pub use variant::PolicyVariant;

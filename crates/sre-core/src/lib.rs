//! `sre-core` — foundational types for the `simsre` team simulator.
//!
//! This crate is a dependency of every other `sre-*` crate.  It has no
//! `sre-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                                |
//! |------------|---------------------------------------------------------|
//! | [`ids`]    | `AgentId`, `TeamId`, `ItemId`                           |
//! | [`time`]   | `Tick`, `RunConfig`                                     |
//! | [`work`]   | `WorkKind`, `KindCounts`                                |
//! | [`rng`]    | `AgentRng` (per-agent), `AgentRngs`, `SimRng` (team)    |
//! | [`error`]  | `ConfigError`, `ConfigResult`                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public record types. |

pub mod error;
pub mod ids;
pub mod rng;
pub mod time;
pub mod work;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{ConfigError, ConfigResult};
pub use ids::{AgentId, ItemId, TeamId};
pub use rng::{AgentRng, AgentRngs, SimRng};
pub use time::{RunConfig, Tick};
pub use work::{KindCounts, WorkKind};

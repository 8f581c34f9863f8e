//! `sre-team` — agents, the operational backlog, and team stepping.
//!
//! # Crate layout
//!
//! | Module        | Contents                                               |
//! |---------------|--------------------------------------------------------|
//! | [`agent`]     | `Agent`, `AgentState`, `Completion` — the state machine |
//! | [`backlog`]   | `Backlog`, `OperationalItem` — FIFO operational queue   |
//! | [`team`]      | `Team`, `TickReport`, `ServedItem` — one tick of a team |
//! | [`builder`]   | `TeamBuilder` (fluent construction)                    |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on record types.         |

pub mod agent;
pub mod backlog;
pub mod builder;
pub mod team;


pub use agent::{Agent, AgentState, Completion};
pub use backlog::{Backlog, OperationalItem};
pub use builder::TeamBuilder;
pub use team::{ServedItem, Team, TickReport};

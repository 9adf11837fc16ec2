//! `swarm-core`: foundational types for the swarm arena simulator.
//!
//! This crate is a dependency of every other `swarm-*` crate.  It has no
//! `swarm-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                                   |
//! |-----------------|------------------------------------------------------------|
//! | [`ids`]         | `AgentId`                                                  |
//! | [`geo`]         | `Vec2`, `Aabb`, `CircleCollider`, `Segment`                |
//! | [`time`]        | `Tick`, `SimClock`                                         |
//! | [`config`]      | `WorldConfig`                                              |
//! | [`rng`]         | `SimRng` (the single seeded stream of a world)             |
//! | [`error`]       | `SwarmError`, `SwarmResult`                                |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types.  |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::WorldConfig;
pub use error::{SwarmError, SwarmResult};
pub use geo::{Aabb, CircleCollider, Segment, Vec2};
pub use ids::AgentId;
pub use rng::SimRng;
pub use time::{SimClock, Tick};

//! `swarm-agent`: agents and the population arena.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`state`]       | `AgentState`: pose, radius, collision bookkeeping         |
//! | [`agent`]       | `Agent` trait, `AgentEnvironment` lent during a step      |
//! | [`diff_drive`]  | `DiffDriveAgent`, `DiffDriveConfig`, `Controller`         |
//! | [`population`]  | `Population`: stable-id arena with tombstones             |
//! | [`builder`]     | `PopulationBuilder`, `place_uniform`                      |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                     |
//! |------------|------------------------------------------------------------|
//! | `serde`    | Derives `Serialize`/`Deserialize` on value types.          |

pub mod agent;
pub mod builder;
pub mod diff_drive;
pub mod population;
pub mod state;


pub use agent::{Agent, AgentEnvironment};
pub use builder::{PopulationBuilder, place_uniform};
pub use diff_drive::{ConstantControl, Controller, DiffDriveAgent, DiffDriveConfig};
pub use population::Population;
pub use state::{AgentState, CONTAGIOUS_DETECTION_ID};

//! `swarm-behavior`: observers that measure emergent swarm properties.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                        |
//! |----------------|-----------------------------------------------------------------|
//! | [`context`]    | `WorldContext<'a>`: read-only post-step snapshot                |
//! | [`model`]      | `Behavior` trait                                                |
//! | [`history`]    | `History`: sliding window behind every `out_average`            |
//! | [`kinematics`] | Speed, angular momentum, radial variance, scatter, rotation      |
//! | [`collisions`] | `TotalCollisions`                                               |
//! | [`goals`]      | `AgentsAtGoal`, `PercentageAtGoal`, `DistanceToGoal`            |
//!
//! # Lifecycle
//!
//! A world calls [`Behavior::reset`] and [`Behavior::attach`] once when it is
//! built, then [`Behavior::calculate`] once per tick after every agent has
//! stepped.  `calculate` only ever sees final positions for the tick.  The
//! world's behavior vector is the `out_average` of each observer in
//! attachment order.

pub mod collisions;
pub mod context;
pub mod goals;
pub mod history;
pub mod kinematics;
pub mod model;


pub use collisions::TotalCollisions;
pub use context::WorldContext;
pub use goals::{AgentsAtGoal, DistanceToGoal, PercentageAtGoal};
pub use history::History;
pub use kinematics::{AngularMomentum, AverageSpeed, GroupRotation, RadialVariance, Scatter};
pub use model::Behavior;

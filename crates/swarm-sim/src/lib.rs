//! `swarm-sim`: world step loop and collision resolution for the swarm
//! arena simulator.
//!
//! # One tick
//!
//! ```text
//! World::step():
//!   ① Clock     advance to the next tick.
//!   ② Agents    for each live agent in ascending id order:
//!                 detach it from the population
//!                 agent.step(StepContext)   own kinematics, then the
//!                                           resolvers it chooses to call:
//!                   within_world_boundaries  clamp into the padded arena,
//!                                            then push off wall segments
//!                   prevent_agent_collisions bounded separation rounds
//!                 handle_goal_collisions     push out of solid goals
//!                 re-attach it
//!   ③ Behaviors recalculate every observer on the final positions
//!               (parallel with the `parallel` feature).
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                   |
//! |------------|----------------------------------------------------------|
//! | `parallel` | Recalculates behavior observers on Rayon's thread pool.  |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use swarm_agent::{DiffDriveAgent, PopulationBuilder};
//! use swarm_core::{Vec2, WorldConfig};
//! use swarm_sim::{NoopObserver, WorldBuilder};
//!
//! let population = PopulationBuilder::new()
//!     .spawn(20, |i| DiffDriveAgent::stationary(Vec2::new(20.0 + 10.0 * i as f64, 50.0), 5.0))
//!     .build();
//! let mut world = WorldBuilder::new(WorldConfig::default()).agents(population).build()?;
//! world.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod env;
pub mod error;
pub mod observer;
pub mod resolve;
pub mod world;

#[cfg(test)]
mod tests;

pub use builder::WorldBuilder;
pub use env::StepContext;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use resolve::{
    collision_forward, handle_goal_collisions, handle_wall_collisions, prevent_agent_collisions,
    within_world_boundaries,
};
pub use world::World;

//! Fluent construction of a [`Population`] and uniform initial placement.
//!
//! # Usage
//!
//! ```rust
//! use swarm_agent::{DiffDriveAgent, PopulationBuilder};
//! use swarm_core::Vec2;
//!
//! let population = PopulationBuilder::new()
//!     .spawn(10, |i| DiffDriveAgent::stationary(Vec2::new(10.0 * i as f64, 0.0), 2.0))
//!     .build();
//!
//! assert_eq!(population.len(), 10);
//! ```

use std::f64::consts::TAU;

use swarm_core::{Aabb, SimRng, Vec2};

use crate::{Agent, Population};

/// Fluent builder for [`Population`].
///
/// Agents receive ids in the order they are added, so a builder fed the same
/// sequence always yields the same id assignment.
#[derive(Default)]
pub struct PopulationBuilder {
    agents: Vec<Box<dyn Agent>>,
}

impl PopulationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one agent.
    pub fn agent(mut self, agent: impl Agent) -> Self {
        self.agents.push(Box::new(agent));
        self
    }

    /// Add an already boxed agent (heterogeneous swarms).
    pub fn boxed(mut self, agent: Box<dyn Agent>) -> Self {
        self.agents.push(agent);
        self
    }

    /// Add `count` agents produced by `factory(i)`.
    pub fn spawn<A: Agent>(mut self, count: usize, mut factory: impl FnMut(usize) -> A) -> Self {
        self.agents.reserve(count);
        for i in 0..count {
            self.agents.push(Box::new(factory(i)));
        }
        self
    }

    pub fn build(self) -> Population {
        let mut population = Population::new();
        for agent in self.agents {
            population.push(agent);
        }
        population
    }
}

/// Scatter every agent uniformly inside `bounds`, shrunk by each agent's
/// radius, with a uniform random heading.
///
/// Draws x, y, then heading per agent in id order.  Overlaps are not
/// prevented here; the first world steps resolve them.
pub fn place_uniform(population: &mut Population, bounds: Aabb, rng: &mut SimRng) {
    for state in population.states_mut() {
        let r = state.radius;
        let lo = bounds.min + Vec2::new(r, r);
        let hi = bounds.max - Vec2::new(r, r);
        let x = if hi.x > lo.x { rng.gen_range(lo.x..hi.x) } else { bounds.center().x };
        let y = if hi.y > lo.y { rng.gen_range(lo.y..hi.y) } else { bounds.center().y };
        state.position = Vec2::new(x, y);
        state.heading = rng.random::<f64>() * TAU;
    }
}

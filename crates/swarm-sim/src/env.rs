//! The environment an agent sees while it steps.

use swarm_agent::{AgentEnvironment, AgentState, Population};
use swarm_core::{AgentId, SimClock, SimRng, Tick, Vec2, WorldConfig};
use swarm_spatial::{Wall, neighbors_within};

use crate::resolve;

/// World resources lent to one agent for the duration of its step.
///
/// The stepping agent has been detached from `population`, so every query
/// here already excludes it and the resolvers may mutate any neighbor.
pub struct StepContext<'w> {
    pub(crate) clock:      &'w SimClock,
    pub(crate) config:     &'w WorldConfig,
    pub(crate) walls:      &'w [Wall],
    pub(crate) population: &'w mut Population,
    pub(crate) rng:        &'w mut SimRng,
}

impl AgentEnvironment for StepContext<'_> {
    fn tick(&self) -> Tick {
        self.clock.current_tick
    }

    fn tick_duration_secs(&self) -> f64 {
        self.clock.tick_duration_secs
    }

    fn within_world_boundaries(&mut self, agent: &mut AgentState) -> bool {
        resolve::within_world_boundaries(self.config, self.walls, agent)
    }

    fn prevent_agent_collisions(&mut self, agent: &mut AgentState, forward_freeze: bool) {
        resolve::prevent_agent_collisions(agent, self.population, self.rng, forward_freeze);
    }

    fn neighbors_within(&self, center: Vec2, radius: f64) -> Vec<AgentId> {
        neighbors_within(self.population, center, radius, None)
    }

    fn agent(&self, id: AgentId) -> Option<&AgentState> {
        self.population.state(id)
    }

    fn rng(&mut self) -> &mut SimRng {
        &mut *self.rng
    }
}

//! Read-only world state passed to every behavior observer.

use std::sync::OnceLock;

use swarm_agent::Population;
use swarm_core::{AgentId, Tick, Vec2, WorldConfig};
use swarm_spatial::{AgentIndex, Goal};

/// A read-only snapshot of the world after a step.
///
/// Built once per tick by `swarm-sim` and shared by all observers.  The world
/// never mutates agents while a `WorldContext` is live, which is what makes
/// the lazily built [`AgentIndex`] safe to reuse across observers.
pub struct WorldContext<'a> {
    /// The tick that just completed.
    pub tick: Tick,

    pub config: &'a WorldConfig,

    pub population: &'a Population,

    pub goals: &'a [Goal],

    index: OnceLock<AgentIndex>,
}

impl<'a> WorldContext<'a> {
    pub fn new(
        tick:       Tick,
        config:     &'a WorldConfig,
        population: &'a Population,
        goals:      &'a [Goal],
    ) -> Self {
        Self { tick, config, population, goals, index: OnceLock::new() }
    }

    /// R-tree over current agent centers, built on first use.
    pub fn index(&self) -> &AgentIndex {
        self.index.get_or_init(|| AgentIndex::build(self.population))
    }

    /// Agents strictly within `radius` of `center`.
    pub fn neighbors_within(&self, center: Vec2, radius: f64, exclude: Option<AgentId>) -> Vec<AgentId> {
        self.index().within(center, radius, exclude)
    }

    /// Mean agent center, or `None` for an empty population.
    pub fn centroid(&self) -> Option<Vec2> {
        let (sum, n) = self
            .population
            .states()
            .fold((Vec2::ZERO, 0usize), |(sum, n), s| (sum + s.position, n + 1));
        (n > 0).then(|| sum * (1.0 / n as f64))
    }

    /// Mean body radius, or `None` for an empty population.
    pub fn mean_radius(&self) -> Option<f64> {
        let (sum, n) = self
            .population
            .states()
            .fold((0.0, 0usize), |(sum, n), s| (sum + s.radius, n + 1));
        (n > 0).then(|| sum / n as f64)
    }
}

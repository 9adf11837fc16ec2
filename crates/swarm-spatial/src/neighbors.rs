//! Brute-force radius query over a live population.

use swarm_agent::Population;
use swarm_core::{AgentId, Vec2};

/// Ids of agents whose center lies strictly within `radius` of `center`,
/// in ascending id order, skipping `exclude`.
///
/// A full linear scan: O(N) per call, O(N²) when every agent resolves its
/// own overlaps in a step.  Agents detached from the population (the one
/// currently stepping) are never returned.
pub fn neighbors_within(
    population: &Population,
    center:     Vec2,
    radius:     f64,
    exclude:    Option<AgentId>,
) -> Vec<AgentId> {
    population
        .states()
        .filter(|s| Some(s.id) != exclude)
        .filter(|s| center.distance(s.position) < radius)
        .map(|s| s.id)
        .collect()
}

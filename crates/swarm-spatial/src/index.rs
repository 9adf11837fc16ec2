//! R-tree snapshot of agent positions.
//!
//! Only valid while positions do not change: build it after a step, query
//! it, throw it away.  The collision resolvers never use it.

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use swarm_agent::Population;
use swarm_core::{AgentId, Vec2};

// ── R-tree entry ──────────────────────────────────────────────────────────────

#[derive(Clone)]
struct AgentEntry {
    point: [f64; 2],
    id:    AgentId,
}

impl RTreeObject for AgentEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for AgentEntry {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

// ── AgentIndex ────────────────────────────────────────────────────────────────

/// Bulk-loaded R-tree over the centers of every attached agent.
pub struct AgentIndex {
    tree: RTree<AgentEntry>,
}

impl AgentIndex {
    pub fn build(population: &Population) -> Self {
        let entries: Vec<AgentEntry> = population
            .states()
            .map(|s| AgentEntry { point: [s.position.x, s.position.y], id: s.id })
            .collect();
        Self { tree: RTree::bulk_load(entries) }
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }

    /// Same contract as [`neighbors_within`][crate::neighbors_within]:
    /// strictly inside `radius`, ascending id order.
    pub fn within(&self, center: Vec2, radius: f64, exclude: Option<AgentId>) -> Vec<AgentId> {
        let c = [center.x, center.y];
        let r2 = radius * radius;
        // locate_within_distance is inclusive; the strict bound is re-applied.
        let mut ids: Vec<AgentId> = self
            .tree
            .locate_within_distance(c, r2)
            .filter(|e| center.distance(Vec2::new(e.point[0], e.point[1])) < radius)
            .map(|e| e.id)
            .filter(|&id| Some(id) != exclude)
            .collect();
        ids.sort_unstable();
        ids
    }

    /// Nearest agent to `point` other than `exclude`, with its distance.
    pub fn nearest(&self, point: Vec2, exclude: Option<AgentId>) -> Option<(AgentId, f64)> {
        let c = [point.x, point.y];
        self.tree
            .nearest_neighbor_iter(&c)
            .find(|e| Some(e.id) != exclude)
            .map(|e| (e.id, e.distance_2(&c).sqrt()))
    }
}

//! Collision counting.

use crate::{Behavior, History, WorldContext};

/// Number of agents whose collision flag is set after each tick.
///
/// The per-tick count goes into the history; [`total`](Self::total) keeps
/// the running sum since the last reset.
pub struct TotalCollisions {
    history: History,
    total:   u64,
}

impl TotalCollisions {
    pub fn new(window: usize) -> Self {
        Self { history: History::new(window), total: 0 }
    }

    /// Flagged agent-ticks since the world was built.
    pub fn total(&self) -> u64 {
        self.total
    }
}

impl Default for TotalCollisions {
    fn default() -> Self {
        Self::new(crate::kinematics::DEFAULT_WINDOW)
    }
}

impl Behavior for TotalCollisions {
    fn name(&self) -> &str {
        "total_collisions"
    }

    fn reset(&mut self) {
        self.history.clear();
        self.total = 0;
    }

    fn calculate(&mut self, ctx: &WorldContext<'_>) {
        let flagged = ctx.population.states().filter(|s| s.collision_flag).count();
        self.total += flagged as u64;
        self.history.push(flagged as f64);
    }

    fn history(&self) -> &History {
        &self.history
    }
}

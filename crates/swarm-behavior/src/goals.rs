//! Goal arrival metrics.
//!
//! An agent counts as "at" a goal when [`Goal::reached_by`] holds for its
//! body with the observer's tolerance.  An agent touching two goals counts
//! once.  [`DistanceToGoal`] measures how far the swarm still has to go.

use swarm_agent::AgentState;
use swarm_spatial::Goal;

use crate::{Behavior, History, WorldContext};

/// Default contact slack, in world units, for goal arrival.
pub const DEFAULT_TOLERANCE: f64 = 1.0;

fn at_any_goal(goals: &[Goal], state: &AgentState, tolerance: f64) -> bool {
    goals.iter().any(|g| g.reached_by(state.position, state.radius, tolerance))
}

fn count_at_goal(ctx: &WorldContext<'_>, tolerance: f64) -> usize {
    ctx.population
        .states()
        .filter(|s| at_any_goal(ctx.goals, s, tolerance))
        .count()
}

// ── AgentsAtGoal ──────────────────────────────────────────────────────────────

/// How many agents are at a goal.
pub struct AgentsAtGoal {
    history:   History,
    tolerance: f64,
}

impl AgentsAtGoal {
    pub fn new(window: usize, tolerance: f64) -> Self {
        Self { history: History::new(window), tolerance }
    }
}

impl Default for AgentsAtGoal {
    fn default() -> Self {
        Self::new(crate::kinematics::DEFAULT_WINDOW, DEFAULT_TOLERANCE)
    }
}

impl Behavior for AgentsAtGoal {
    fn name(&self) -> &str {
        "agents_at_goal"
    }

    fn reset(&mut self) {
        self.history.clear();
    }

    fn calculate(&mut self, ctx: &WorldContext<'_>) {
        self.history.push(count_at_goal(ctx, self.tolerance) as f64);
    }

    fn history(&self) -> &History {
        &self.history
    }
}

// ── PercentageAtGoal ──────────────────────────────────────────────────────────

/// Fraction of the population at a goal, in `[0, 1]`.  An empty population
/// records 0.
pub struct PercentageAtGoal {
    history:   History,
    tolerance: f64,
}

impl PercentageAtGoal {
    pub fn new(window: usize, tolerance: f64) -> Self {
        Self { history: History::new(window), tolerance }
    }
}

impl Default for PercentageAtGoal {
    fn default() -> Self {
        Self::new(crate::kinematics::DEFAULT_WINDOW, DEFAULT_TOLERANCE)
    }
}

impl Behavior for PercentageAtGoal {
    fn name(&self) -> &str {
        "percentage_at_goal"
    }

    fn reset(&mut self) {
        self.history.clear();
    }

    fn calculate(&mut self, ctx: &WorldContext<'_>) {
        let n = ctx.population.len();
        let value = if n == 0 { 0.0 } else { count_at_goal(ctx, self.tolerance) as f64 / n as f64 };
        self.history.push(value);
    }

    fn history(&self) -> &History {
        &self.history
    }
}

// ── DistanceToGoal ────────────────────────────────────────────────────────────

/// Mean distance from each agent's center to the nearest goal center, in
/// mean body radii.  Records 0 with no goals or no agents.
pub struct DistanceToGoal {
    history: History,
}

impl DistanceToGoal {
    pub fn new(window: usize) -> Self {
        Self { history: History::new(window) }
    }
}

impl Default for DistanceToGoal {
    fn default() -> Self {
        Self::new(crate::kinematics::DEFAULT_WINDOW)
    }
}

fn mean_distance_to_goal(ctx: &WorldContext<'_>) -> Option<f64> {
    let r = ctx.mean_radius()?;
    let (sum, n) = ctx
        .population
        .states()
        .filter_map(|s| {
            ctx.goals
                .iter()
                .map(|g| g.center().distance(s.position))
                .min_by(f64::total_cmp)
        })
        .fold((0.0, 0usize), |(sum, n), d| (sum + d, n + 1));
    (n > 0).then(|| sum / (n as f64 * r))
}

impl Behavior for DistanceToGoal {
    fn name(&self) -> &str {
        "distance_to_goal"
    }

    fn reset(&mut self) {
        self.history.clear();
    }

    fn calculate(&mut self, ctx: &WorldContext<'_>) {
        self.history.push(mean_distance_to_goal(ctx).unwrap_or(0.0));
    }

    fn history(&self) -> &History {
        &self.history
    }
}

//! The `Agent` trait: the capability set every population entry satisfies.

use swarm_core::{AgentId, SimRng, Tick, Vec2};

use crate::AgentState;

/// What a world lends an agent for the duration of its own step.
///
/// The world does not decide *when* inside the step the checks run; it only
/// makes them available.  A typical agent moves, then calls
/// [`within_world_boundaries`](Self::within_world_boundaries), then
/// [`prevent_agent_collisions`](Self::prevent_agent_collisions).
///
/// While an agent is stepping it is detached from the population, so
/// [`neighbors_within`](Self::neighbors_within) and [`agent`](Self::agent)
/// never return the stepping agent itself.
pub trait AgentEnvironment {
    /// The tick being stepped.
    fn tick(&self) -> Tick;

    /// Simulated seconds covered by one tick.
    fn tick_duration_secs(&self) -> f64;

    /// Clamp `agent` inside the arena and push it out of walls.
    ///
    /// Returns `true` if the clamp moved the agent.  A no-op returning
    /// `false` when the world does not enforce walls.
    fn within_world_boundaries(&mut self, agent: &mut AgentState) -> bool;

    /// Separate `agent` from every overlapping neighbor.
    ///
    /// With `forward_freeze`, overlaps the agent drove into head-on are left
    /// unresolved and the agent is halted instead.
    fn prevent_agent_collisions(&mut self, agent: &mut AgentState, forward_freeze: bool);

    /// Agents whose centers lie strictly within `radius` of `center`.
    fn neighbors_within(&self, center: Vec2, radius: f64) -> Vec<AgentId>;

    /// Read access to another agent's state.
    fn agent(&self, id: AgentId) -> Option<&AgentState>;

    /// The world's seeded random stream.
    fn rng(&mut self) -> &mut SimRng;
}

/// A simulated robot.
///
/// Only [`step`](Self::step) carries behavior; everything the collision code
/// needs is reachable through [`state`](Self::state).  Implementations must be
/// `Send + Sync` so behavior observers can read the population in parallel.
///
/// # Example
///
/// ```rust
/// use swarm_agent::{Agent, AgentEnvironment, AgentState};
///
/// struct Statue(AgentState);
///
/// impl Agent for Statue {
///     fn state(&self) -> &AgentState { &self.0 }
///     fn state_mut(&mut self) -> &mut AgentState { &mut self.0 }
///     fn step(&mut self, env: &mut dyn AgentEnvironment) {
///         env.within_world_boundaries(&mut self.0);
///         env.prevent_agent_collisions(&mut self.0, false);
///     }
/// }
/// ```
pub trait Agent: Send + Sync + 'static {
    fn state(&self) -> &AgentState;

    fn state_mut(&mut self) -> &mut AgentState;

    /// Advance this agent by one tick.
    fn step(&mut self, env: &mut dyn AgentEnvironment);

    /// Short label for logs and output files.
    fn kind(&self) -> &'static str {
        "agent"
    }
}

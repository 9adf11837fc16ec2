//! The `World` struct and its step loop.

use swarm_agent::{Agent, AgentState, Population};
use swarm_behavior::{Behavior, WorldContext};
use swarm_core::{Aabb, AgentId, SimClock, SimRng, Tick, WorldConfig};
use swarm_spatial::{Goal, Wall};
use tracing::debug;

use crate::{SimError, SimObserver, SimResult, StepContext, resolve};

// ── World ─────────────────────────────────────────────────────────────────────

/// A rectangular arena, its agents, and the observers measuring them.
///
/// One call to [`step`](Self::step) is one tick:
///
/// 1. **Clock**: advance to the next tick.
/// 2. **Agents**: in ascending id order, detach the agent, let it step
///    against a [`StepContext`] (its own kinematics plus the boundary and
///    agent-agent resolvers), push it out of goals, and re-attach it.
/// 3. **Behaviors**: recalculate every observer on the final positions
///    (in parallel with the `parallel` feature).
///
/// All randomness is drawn from the world's single [`SimRng`] in that order,
/// so equal seeds replay equal trajectories.
///
/// Create via [`WorldBuilder`][crate::WorldBuilder].
pub struct World {
    /// Arena dimensions and run parameters.
    pub config: WorldConfig,

    /// Tracks the current tick.
    pub clock: SimClock,

    pub(crate) population: Population,
    pub(crate) walls:      Vec<Wall>,
    pub(crate) goals:      Vec<Goal>,
    pub(crate) behaviors:  Vec<Box<dyn Behavior>>,
    pub(crate) rng:        SimRng,
}

impl World {
    // ── Run loop ──────────────────────────────────────────────────────────

    /// Step until the clock reaches `config.end_tick()`.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        while self.clock.current_tick < self.config.end_tick() {
            self.observed_step(observer)?;
        }
        observer.on_sim_end(self.clock.current_tick);
        Ok(())
    }

    /// Step exactly `n` ticks from the current position (ignores `end_tick`).
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.observed_step(observer)?;
        }
        Ok(())
    }

    fn observed_step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let next = self.clock.current_tick + 1;
        observer.on_tick_start(next);
        self.step()?;
        observer.on_tick_end(next, self.population.len());
        let interval = self.config.output_interval_ticks;
        if interval > 0 && next.0 % interval == 0 {
            observer.on_snapshot(next, &self.population, &self.behaviors);
        }
        Ok(())
    }

    // ── Step ──────────────────────────────────────────────────────────────

    /// Advance the world by one tick.
    ///
    /// Fails only on a broken agent contract, which leaves the world in an
    /// unknown state.
    pub fn step(&mut self) -> SimResult<()> {
        self.clock.advance();
        let now = self.clock.current_tick;

        for id in self.population.ids() {
            let mut agent = self.population.take(id).ok_or_else(|| {
                SimError::ContractViolation(format!("{id} was already detached when its turn came"))
            })?;

            let mut env = StepContext {
                clock:      &self.clock,
                config:     &self.config,
                walls:      &self.walls,
                population: &mut self.population,
                rng:        &mut self.rng,
            };
            agent.step(&mut env);
            resolve::handle_goal_collisions(&self.goals, agent.state_mut());

            if !agent.state().position.is_finite() {
                return Err(SimError::ContractViolation(format!(
                    "{id} ({}) left its step at non-finite position {}",
                    agent.kind(),
                    agent.state().position
                )));
            }
            self.population.restore(id, agent)?;
        }

        self.recalculate_behaviors(now);

        debug!(
            tick       = %now,
            agents     = self.population.len(),
            collisions = self.population.states().filter(|s| s.collision_flag).count(),
            "world stepped"
        );
        Ok(())
    }

    fn recalculate_behaviors(&mut self, now: Tick) {
        let ctx = WorldContext::new(now, &self.config, &self.population, &self.goals);

        #[cfg(not(feature = "parallel"))]
        for behavior in &mut self.behaviors {
            behavior.calculate(&ctx);
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            self.behaviors.par_iter_mut().for_each(|behavior| behavior.calculate(&ctx));
        }
    }

    // ── Behaviors ─────────────────────────────────────────────────────────

    /// The windowed average of every observer, in attachment order.
    pub fn behavior_vector(&self) -> Vec<f64> {
        self.behaviors.iter().map(|b| b.out_average().1).collect()
    }

    pub fn behaviors(&self) -> &[Box<dyn Behavior>] {
        &self.behaviors
    }

    // ── Population ────────────────────────────────────────────────────────

    pub fn population(&self) -> &Population {
        &self.population
    }

    /// Mutable access between steps, for controllers that retarget agents or
    /// tests that stage a scene.
    pub fn population_mut(&mut self) -> &mut Population {
        &mut self.population
    }

    pub fn agent(&self, id: AgentId) -> Option<&AgentState> {
        self.population.state(id)
    }

    /// Evict an agent.  It is marked deleted and returned; its id is not
    /// reused.
    pub fn remove_agent(&mut self, id: AgentId) -> SimResult<Box<dyn Agent>> {
        let agent = self.population.remove(id)?;
        debug!(agent = %id, kind = agent.kind(), "agent removed");
        Ok(agent)
    }

    /// Put `agent` in the slot of `id`, keeping the old agent's pose.
    /// Returns the agent that was replaced.
    pub fn replace_agent(&mut self, id: AgentId, agent: impl Agent) -> SimResult<Box<dyn Agent>> {
        if !agent.state().is_well_formed() {
            return Err(SimError::ContractViolation(format!(
                "replacement for {id} has radius {}",
                agent.state().radius
            )));
        }
        let old = self.population.replace(id, Box::new(agent))?;
        debug!(agent = %id, from = old.kind(), "agent replaced");
        Ok(old)
    }

    /// Agents whose bounding boxes overlap `bounds` vertically, wherever
    /// they are horizontally.
    pub fn agents_matching_y_range(&self, bounds: &Aabb) -> Vec<AgentId> {
        self.population
            .states()
            .filter(|s| s.aabb().in_y_range(bounds))
            .map(|s| s.id)
            .collect()
    }

    // ── Geometry ──────────────────────────────────────────────────────────

    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }

    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    /// The world's random stream, for draws made between steps (spawning,
    /// re-placement).
    pub fn rng(&mut self) -> &mut SimRng {
        &mut self.rng
    }
}
